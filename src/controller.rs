use std::cell::RefCell;

use leptos::logging::log;

use crate::bindings::Action;
use crate::config::UiConfig;
use crate::dialogs::{Navigator, UserInput};
use crate::error::UiError;
use crate::routes::Route;
use crate::view_state::{ListItem, ViewState};

/// What the controllers read from and project onto.
pub trait PageSurface {
    /// Input value of a field, or its text for non-input elements.
    fn read_value(&self, id: &str) -> Result<String, UiError>;
    fn list_texts(&self) -> Result<Vec<String>, UiError>;
    fn sidebar_marked(&self) -> Result<bool, UiError>;
    fn mark_sidebar(&self, toggled: bool) -> Result<(), UiError>;
    /// `items` are in the order `list_texts` returned them.
    fn show_items(&self, items: &[ListItem]) -> Result<(), UiError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    SidebarToggled { toggled: bool },
    Navigated { url: String },
    Cancelled,
    Filtered { visible: usize, total: usize },
}

pub struct Dispatcher<S, I, N> {
    config: UiConfig,
    surface: S,
    input: I,
    navigator: N,
    state: RefCell<ViewState>,
}

impl<S, I, N> Dispatcher<S, I, N>
where
    S: PageSurface,
    I: UserInput,
    N: Navigator,
{
    pub fn new(config: UiConfig, surface: S, input: I, navigator: N) -> Self {
        Self {
            config,
            surface,
            input,
            navigator,
            state: RefCell::new(ViewState::default()),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn dispatch(&self, action: Action) -> Result<Outcome, UiError> {
        let outcome = match action {
            Action::ToggleSidebar => self.toggle_sidebar(),
            Action::CreateFile => self.create_file(),
            Action::DeleteFile => self.delete_file(),
            Action::FilterList => self.filter_list(),
        }?;
        log!("{action:?} -> {outcome:?}");
        Ok(outcome)
    }

    fn toggle_sidebar(&self) -> Result<Outcome, UiError> {
        let marked = self.surface.sidebar_marked()?;
        let toggled = {
            let mut state = self.state.borrow_mut();
            state.sidebar_toggled = marked;
            state.toggle_sidebar()
        };
        self.surface.mark_sidebar(toggled)?;
        Ok(Outcome::SidebarToggled { toggled })
    }

    fn create_file(&self) -> Result<Outcome, UiError> {
        let dialogs = &self.config.dialogs;
        let Some(name) = self
            .input
            .request_text(&dialogs.new_file_message, &dialogs.new_file_placeholder)
        else {
            return Ok(Outcome::Cancelled);
        };
        self.go(Route::Edit(name))
    }

    fn delete_file(&self) -> Result<Outcome, UiError> {
        let name = self.surface.read_value(&self.config.elements.file_name)?;
        let message = self.config.dialogs.delete_message(&name);
        if !self.input.request_confirmation(&message) {
            return Ok(Outcome::Cancelled);
        }
        self.go(Route::Delete(name))
    }

    fn filter_list(&self) -> Result<Outcome, UiError> {
        let query = self.surface.read_value(&self.config.elements.search)?;
        let texts = self.surface.list_texts()?;
        let mut state = self.state.borrow_mut();
        state.load_items(texts);
        let visible = state.apply_filter(&query);
        self.surface.show_items(&state.items)?;
        Ok(Outcome::Filtered {
            visible,
            total: state.items.len(),
        })
    }

    fn go(&self, route: Route) -> Result<Outcome, UiError> {
        let url = route.to_url(&self.config.routes);
        self.navigator.navigate(&url)?;
        Ok(Outcome::Navigated { url })
    }
}
