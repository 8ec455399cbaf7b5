use crate::config::ElementIds;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    KeyUp,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::KeyUp => "keyup",
        }
    }

    /// Clicks land on links and buttons whose own action must not run.
    pub fn prevents_default(self) -> bool {
        matches!(self, EventKind::Click)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleSidebar,
    CreateFile,
    DeleteFile,
    FilterList,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub target: String,
    pub event: EventKind,
    pub action: Action,
}

impl Binding {
    fn new(target: &str, event: EventKind, action: Action) -> Self {
        Self {
            target: target.to_string(),
            event,
            action,
        }
    }
}

/// Every handler the page installs.
pub fn registration_table(ids: &ElementIds) -> Vec<Binding> {
    vec![
        Binding::new(&ids.menu, EventKind::Click, Action::ToggleSidebar),
        Binding::new(&ids.new_file, EventKind::Click, Action::CreateFile),
        Binding::new(&ids.delete_file, EventKind::Click, Action::DeleteFile),
        Binding::new(&ids.search, EventKind::KeyUp, Action::FilterList),
    ]
}
