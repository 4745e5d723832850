//! Tab descriptors

use serde::{Deserialize, Serialize};

/// One entry of a tab strip.
///
/// `value` should be unique within a group. Duplicates are not rejected:
/// both render, they share one active state, and the registry keeps the last
/// registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabDescriptor {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub badge: Option<String>,
    /// Plain-text panel content
    pub content: Option<String>,
    pub custom_classes: Option<String>,
    pub panel_classes: Option<String>,
}

impl TabDescriptor {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn badge(mut self, badge: impl ToString) -> Self {
        self.badge = Some(badge.to_string());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Values of the enabled tabs, in order
pub fn enabled_values(tabs: &[TabDescriptor]) -> Vec<String> {
    tabs.iter()
        .filter(|t| !t.disabled)
        .map(|t| t.value.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let tab = TabDescriptor::new("inbox", "Inbox").badge(5).content("mail");
        assert_eq!(tab.badge.as_deref(), Some("5"));
        assert_eq!(tab.content.as_deref(), Some("mail"));
        assert!(!tab.disabled);
    }

    #[test]
    fn enabled_values_skip_disabled() {
        let tabs = vec![
            TabDescriptor::new("a", "A"),
            TabDescriptor::new("b", "B").disabled(),
            TabDescriptor::new("c", "C"),
        ];
        assert_eq!(enabled_values(&tabs), vec!["a", "c"]);
    }

    #[test]
    fn deserializes_from_camel_case() {
        let tab: TabDescriptor =
            serde_json::from_str(r#"{ "value": "x", "label": "X", "panelClasses": "p-2" }"#).unwrap();
        assert_eq!(tab.panel_classes.as_deref(), Some("p-2"));
    }
}
