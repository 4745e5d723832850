//! Panel mounting and visibility

use super::state::{HasBeenActive, NavigationDirection};

/// Whether the panel for `panel` should exist in the tree.
///
/// Eager groups mount every panel. Lazy groups mount a panel once its tab has
/// been active and keep it mounted afterwards.
pub fn should_mount(panel: &str, active: &str, lazy: bool, has_been_active: &HasBeenActive) -> bool {
    !lazy || panel == active || has_been_active.contains(panel)
}

/// Whether a mounted panel is shown
pub fn is_visible(panel: &str, active: &str) -> bool {
    panel == active
}

/// Entry animation for a panel that just became visible
pub fn panel_transition_classes(direction: NavigationDirection, animated: bool) -> &'static str {
    match (animated, direction) {
        (false, _) => "",
        (true, NavigationDirection::Forward) => "slide-left transition-all duration-300 ease-in-out",
        (true, NavigationDirection::Backward) => "slide-right transition-all duration-300 ease-in-out",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eager_mounts_everything() {
        let seen = HasBeenActive::new();
        assert!(should_mount("b", "a", false, &seen));
    }

    #[test]
    fn lazy_mounts_active_and_history() {
        let mut seen = HasBeenActive::new();
        seen.record("a");
        assert!(should_mount("a", "a", true, &seen));
        assert!(!should_mount("b", "a", true, &seen));

        seen.record("b");
        assert!(should_mount("b", "a", true, &seen));
    }

    #[test]
    fn visibility() {
        assert!(is_visible("a", "a"));
        assert!(!is_visible("b", "a"));
    }

    #[test]
    fn transitions() {
        assert!(panel_transition_classes(NavigationDirection::Forward, true).contains("slide-left"));
        assert!(panel_transition_classes(NavigationDirection::Backward, true).contains("slide-right"));
        assert_eq!(panel_transition_classes(NavigationDirection::Backward, false), "");
    }
}
