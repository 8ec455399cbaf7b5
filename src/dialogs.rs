use leptos::logging::warn;
use leptos::prelude::window;

use crate::error::UiError;

/// Blocking questions put to the user.
pub trait UserInput {
    /// `None` when the user cancels.
    fn request_text(&self, message: &str, default: &str) -> Option<String>;
    fn request_confirmation(&self, message: &str) -> bool;
}

pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<(), UiError>;
}

/// `window.prompt` / `window.confirm`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl UserInput for BrowserDialogs {
    fn request_text(&self, message: &str, default: &str) -> Option<String> {
        match window().prompt_with_message_and_default(message, default) {
            Ok(answer) => answer,
            Err(err) => {
                warn!("prompt failed: {}", UiError::js(err));
                None
            }
        }
    }

    fn request_confirmation(&self, message: &str) -> bool {
        match window().confirm_with_message(message) {
            Ok(confirmed) => confirmed,
            Err(err) => {
                warn!("confirm failed: {}", UiError::js(err));
                false
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), UiError> {
        window().location().set_href(url).map_err(UiError::js)
    }
}
