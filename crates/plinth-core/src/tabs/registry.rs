//! Tab registry: tabs that are currently mounted.
//!
//! Tabs register when they mount and unregister when they unmount. The
//! registry keeps mount order; navigation order comes from the group's
//! descriptors and falls back to mount order only without them.

use tracing::debug;

/// Registration metadata for one mounted tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRegistryEntry {
    pub value: String,
    pub dom_id: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabRegistry {
    entries: Vec<TabRegistryEntry>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `value`.
    ///
    /// Re-registering keeps the original position and replaces the metadata.
    pub fn register(&mut self, value: impl Into<String>, dom_id: impl Into<String>, disabled: bool) {
        let entry = TabRegistryEntry {
            value: value.into(),
            dom_id: dom_id.into(),
            disabled,
        };
        debug!(value = %entry.value, dom_id = %entry.dom_id, disabled, "tab registered");

        match self.entries.iter_mut().find(|e| e.value == entry.value) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Remove the entry for `value`; unknown values are ignored
    pub fn unregister(&mut self, value: &str) {
        let before = self.entries.len();
        self.entries.retain(|e| e.value != value);
        if self.entries.len() != before {
            debug!(value, "tab unregistered");
        }
    }

    pub fn get(&self, value: &str) -> Option<&TabRegistryEntry> {
        self.entries.iter().find(|e| e.value == value)
    }

    pub fn dom_id(&self, value: &str) -> Option<&str> {
        self.get(value).map(|e| e.dom_id.as_str())
    }

    pub fn is_disabled(&self, value: &str) -> bool {
        self.get(value).is_some_and(|e| e.disabled)
    }

    /// Enabled tab values in registration order
    pub fn focus_order(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| !e.disabled)
            .map(|e| e.value.clone())
            .collect()
    }

    /// All tab values in registration order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut registry = TabRegistry::new();
        registry.register("a", "tab-a", false);
        registry.register("b", "tab-b", true);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.dom_id("a"), Some("tab-a"));
        assert!(registry.is_disabled("b"));
        assert!(!registry.is_disabled("a"));
        assert!(!registry.is_disabled("missing"));
    }

    #[test]
    fn last_registration_wins_in_place() {
        let mut registry = TabRegistry::new();
        registry.register("a", "tab-a", false);
        registry.register("b", "tab-b", false);
        registry.register("a", "tab-a-2", true);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.dom_id("a"), Some("tab-a-2"));
        assert!(registry.is_disabled("a"));
        assert_eq!(registry.values().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn unregister_missing_is_noop() {
        let mut registry = TabRegistry::new();
        registry.register("a", "tab-a", false);
        registry.unregister("zzz");
        assert_eq!(registry.len(), 1);
        registry.unregister("a");
        assert!(registry.is_empty());
        registry.unregister("a");
        assert!(registry.is_empty());
    }

    #[test]
    fn focus_order_skips_disabled() {
        let mut registry = TabRegistry::new();
        registry.register("a", "tab-a", false);
        registry.register("b", "tab-b", true);
        registry.register("c", "tab-c", false);
        assert_eq!(registry.focus_order(), vec!["a", "c"]);
    }
}
