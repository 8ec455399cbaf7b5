use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::config::UiConfig;
use crate::error::UiError;
use crate::host::{BrowserHost, DomHost};

thread_local! {
    static INSTANCE: RefCell<Option<JsValue>> = const { RefCell::new(None) };
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    spell_checker: bool,
}

impl EditorOptions {
    pub const PAGE: EditorOptions = EditorOptions {
        spell_checker: false,
    };
}

pub fn bootstrap<H: DomHost>(host: &H, config: &UiConfig) -> Result<H::Widget, UiError> {
    let target_id = &config.elements.textarea;
    let target = host
        .element(target_id)
        .ok_or_else(|| UiError::missing(target_id))?;

    let widget = &config.editor.widget;
    host.construct_widget(widget, &target, &EditorOptions::PAGE)?
        .ok_or_else(|| UiError::EditorUnavailable {
            widget: widget.clone(),
        })
}

/// Bootstraps the widget and keeps it for the rest of the page's life.
pub fn install(host: &BrowserHost, config: &UiConfig) -> Result<(), UiError> {
    let instance = bootstrap(host, config)?;
    INSTANCE.with(|slot| *slot.borrow_mut() = Some(instance));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::FakeHost;

    #[test]
    fn constructs_widget_on_textarea_without_spellcheck() {
        let host = FakeHost::page().with_widget("SimpleMDE");
        let widget = bootstrap(&host, &UiConfig::default()).unwrap();
        assert_eq!(widget, "SimpleMDE");

        let textarea = host.element("textarea").unwrap();
        assert_eq!(
            *host.constructed.borrow(),
            vec![(
                "SimpleMDE".to_string(),
                textarea,
                r#"{"spellChecker":false}"#.to_string()
            )]
        );
    }

    #[test]
    fn missing_textarea_is_reported() {
        let host = FakeHost::page().without("textarea").with_widget("SimpleMDE");
        assert!(matches!(
            bootstrap(&host, &UiConfig::default()),
            Err(UiError::MissingElement { ref id }) if id == "textarea"
        ));
        assert!(host.constructed.borrow().is_empty());
    }

    #[test]
    fn unloaded_widget_is_reported() {
        let host = FakeHost::page();
        assert!(matches!(
            bootstrap(&host, &UiConfig::default()),
            Err(UiError::EditorUnavailable { ref widget }) if widget == "SimpleMDE"
        ));
    }

    #[test]
    fn widget_name_comes_from_config() {
        let host = FakeHost::page().with_widget("EasyMDE");
        let config = UiConfig::from_json(r#"{"editor": {"widget": "EasyMDE"}}"#).unwrap();
        assert_eq!(bootstrap(&host, &config).unwrap(), "EasyMDE");
    }
}
