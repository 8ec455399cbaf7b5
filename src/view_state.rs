#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    pub visible: bool,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
        }
    }
}

/// UI flags the controllers own. The page is a projection of this.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Mirrors the sidebar's toggle class; the stylesheet decides what it shows.
    pub sidebar_toggled: bool,
    pub items: Vec<ListItem>,
}

impl ViewState {
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_toggled = !self.sidebar_toggled;
        self.sidebar_toggled
    }

    /// Replaces the item snapshot. Visibility is recomputed by the next filter.
    pub fn load_items<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = texts.into_iter().map(ListItem::new).collect();
    }

    /// Returns the number of visible items.
    pub fn apply_filter(&mut self, query: &str) -> usize {
        let needle = query.to_uppercase();
        let mut visible = 0;
        for item in &mut self.items {
            item.visible = item.text.to_uppercase().contains(&needle);
            if item.visible {
                visible += 1;
            }
        }
        visible
    }

    #[cfg(test)]
    pub fn visible_texts(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.visible)
            .map(|item| item.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewState {
        let mut state = ViewState::default();
        state.load_items(["Report.md", "notes.txt", "ReadMe"]);
        state
    }

    #[test]
    fn toggle_negates_flag() {
        let mut state = ViewState::default();
        assert!(state.toggle_sidebar());
        assert!(!state.toggle_sidebar());
        assert!(!state.sidebar_toggled);
    }

    #[test]
    fn filters_case_insensitively() {
        let mut state = sample();
        assert_eq!(state.apply_filter("re"), 2);
        assert_eq!(state.visible_texts(), vec!["Report.md", "ReadMe"]);
        assert!(!state.items[1].visible);
    }

    #[test]
    fn empty_query_shows_everything() {
        let mut state = sample();
        state.apply_filter("zzz");
        assert_eq!(state.apply_filter(""), 3);
    }

    #[test]
    fn unmatched_query_hides_everything() {
        let mut state = sample();
        assert_eq!(state.apply_filter("#"), 0);
        assert!(state.visible_texts().is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut state = sample();
        state.apply_filter("md");
        let once = state.clone();
        state.apply_filter("md");
        assert_eq!(state, once);
    }

    #[test]
    fn uppercasing_handles_non_ascii() {
        let mut state = ViewState::default();
        state.load_items(["Straße.md", "Übersicht"]);
        assert_eq!(state.apply_filter("über"), 1);
        assert_eq!(state.visible_texts(), vec!["Übersicht"]);
    }
}
