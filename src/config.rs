use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// Id of the optional `<script type="application/json">` block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct UiConfig {
    pub elements: ElementIds,
    pub routes: RouteConfig,
    pub sidebar_class: SidebarClass,
    pub dialogs: DialogText,
    pub editor: EditorConfig,
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ElementIds {
    pub textarea: String,
    pub menu: String,
    pub sidebar: String,
    pub new_file: String,
    pub delete_file: String,
    pub file_name: String,
    pub search: String,
    pub list: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            textarea: "textarea".to_string(),
            menu: "menu".to_string(),
            sidebar: "sidebar".to_string(),
            new_file: "new_file".to_string(),
            delete_file: "delete_file".to_string(),
            file_name: "file_name".to_string(),
            search: "search".to_string(),
            list: "list".to_string(),
        }
    }
}

impl ElementIds {
    pub fn list_item_selector(&self) -> String {
        format!("#{} li", self.list)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RouteConfig {
    pub edit_prefix: String,
    pub delete_prefix: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            edit_prefix: "/edit/".to_string(),
            delete_prefix: "/delete/".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct SidebarClass(pub String);

impl Default for SidebarClass {
    fn default() -> Self {
        Self("toggle".to_string())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DialogText {
    pub new_file_message: String,
    pub new_file_placeholder: String,
    /// `{name}` is replaced with the current file name.
    pub delete_confirm: String,
}

impl Default for DialogText {
    fn default() -> Self {
        Self {
            new_file_message: "Enter the file name".to_string(),
            new_file_placeholder: "my-file.md".to_string(),
            delete_confirm: "Are you sure you want to delete the file {name}?".to_string(),
        }
    }
}

impl DialogText {
    pub fn delete_message(&self, name: &str) -> String {
        self.delete_confirm.replace("{name}", name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Global constructor name of the markdown widget.
    pub widget: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            widget: "SimpleMDE".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let config = UiConfig::from_json("  ").unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.routes.edit_prefix, "/edit/");
        assert_eq!(config.sidebar_class.0, "toggle");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = UiConfig::from_json(
            r#"{"routes": {"edit_prefix": "/notes/edit/"}, "sidebar_class": "open"}"#,
        )
        .unwrap();
        assert_eq!(config.routes.edit_prefix, "/notes/edit/");
        assert_eq!(config.routes.delete_prefix, "/delete/");
        assert_eq!(config.sidebar_class.0, "open");
        assert_eq!(config.elements, ElementIds::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            UiConfig::from_json("{ not json"),
            Err(UiError::Config(_))
        ));
    }

    #[test]
    fn delete_message_interpolates_name() {
        let dialogs = DialogText::default();
        assert_eq!(
            dialogs.delete_message("todo.md"),
            "Are you sure you want to delete the file todo.md?"
        );
    }

    #[test]
    fn defaults_match_page_script() {
        let config = UiConfig::default();
        assert_eq!(config.sidebar_class.0, "toggle");
        assert_eq!(config.dialogs.new_file_message, "Enter the file name");
        assert_eq!(config.dialogs.new_file_placeholder, "my-file.md");
        assert_eq!(
            config.dialogs.delete_message("a.md"),
            "Are you sure you want to delete the file a.md?"
        );
    }

    #[test]
    fn spell_checker_is_not_configurable() {
        assert!(matches!(
            serde_json::from_str::<EditorConfig>(r#"{"spell_checker": true}"#),
            Ok(EditorConfig { ref widget }) if widget == "SimpleMDE"
        ));
    }

    #[test]
    fn list_item_selector_follows_list_id() {
        let mut ids = ElementIds::default();
        assert_eq!(ids.list_item_selector(), "#list li");
        ids.list = "files".to_string();
        assert_eq!(ids.list_item_selector(), "#files li");
    }
}
