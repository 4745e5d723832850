//! Roving-focus keyboard navigation for tab lists.
//!
//! Horizontal lists move with Left/Right, vertical lists with Up/Down. Keys
//! on the other axis do nothing. Home and End jump to the ends and movement
//! wraps around.

use std::str::FromStr;

use tracing::trace;

use super::Orientation;
use crate::error::ThemeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

impl NavigationKey {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavigationKey::ArrowLeft),
            "ArrowRight" => Some(NavigationKey::ArrowRight),
            "ArrowUp" => Some(NavigationKey::ArrowUp),
            "ArrowDown" => Some(NavigationKey::ArrowDown),
            "Home" => Some(NavigationKey::Home),
            "End" => Some(NavigationKey::End),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationKey::ArrowLeft => "ArrowLeft",
            NavigationKey::ArrowRight => "ArrowRight",
            NavigationKey::ArrowUp => "ArrowUp",
            NavigationKey::ArrowDown => "ArrowDown",
            NavigationKey::Home => "Home",
            NavigationKey::End => "End",
        }
    }

    /// Signed step along `orientation`, or `None` if the key is on the other axis
    fn step(&self, orientation: Orientation) -> Option<isize> {
        match (self, orientation) {
            (NavigationKey::ArrowLeft, Orientation::Horizontal) => Some(-1),
            (NavigationKey::ArrowRight, Orientation::Horizontal) => Some(1),
            (NavigationKey::ArrowUp, Orientation::Vertical) => Some(-1),
            (NavigationKey::ArrowDown, Orientation::Vertical) => Some(1),
            _ => None,
        }
    }

    /// Whether this key means anything for `orientation`
    pub fn applies_to(&self, orientation: Orientation) -> bool {
        matches!(self, NavigationKey::Home | NavigationKey::End) || self.step(orientation).is_some()
    }

    fn is_backward(&self) -> bool {
        matches!(
            self,
            NavigationKey::ArrowLeft | NavigationKey::ArrowUp | NavigationKey::End
        )
    }
}

impl FromStr for NavigationKey {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ThemeError::unknown("navigation key", s))
    }
}

/// Index reached from `current` by pressing `key` in a list of `count` tabs
pub fn next_index(current: usize, count: usize, key: NavigationKey, orientation: Orientation) -> usize {
    if count == 0 {
        return current;
    }

    match key {
        NavigationKey::Home => 0,
        NavigationKey::End => count - 1,
        _ => match key.step(orientation) {
            Some(step) => {
                let count = count as isize;
                let current = current.min(count as usize - 1) as isize;
                (current + step).rem_euclid(count) as usize
            }
            None => current,
        },
    }
}

/// Value to activate when `key` is pressed while `active` has focus.
///
/// `order` lists the enabled tabs. Returns `None` when the key does not move
/// focus. When `active` is not in `order`, forward keys land on the first tab
/// and backward keys on the last.
pub fn resolve_navigation(
    order: &[String],
    active: &str,
    key: NavigationKey,
    orientation: Orientation,
) -> Option<String> {
    if order.is_empty() || !key.applies_to(orientation) {
        return None;
    }

    let target = match order.iter().position(|v| v == active) {
        Some(current) => next_index(current, order.len(), key, orientation),
        None if key == NavigationKey::Home => 0,
        None if key.is_backward() => order.len() - 1,
        None => 0,
    };

    let value = order.get(target)?;
    trace!(key = key.as_str(), from = active, to = %value, "keyboard navigation");
    if value == active {
        None
    } else {
        Some(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parse_keys() {
        assert_eq!(NavigationKey::parse("ArrowLeft"), Some(NavigationKey::ArrowLeft));
        assert_eq!(NavigationKey::parse("End"), Some(NavigationKey::End));
        assert_eq!(NavigationKey::parse("Tab"), None);
        assert!("Enter".parse::<NavigationKey>().is_err());
        assert_eq!("Home".parse::<NavigationKey>().unwrap(), NavigationKey::Home);
    }

    #[test]
    fn horizontal_wraps() {
        let h = Orientation::Horizontal;
        assert_eq!(next_index(2, 3, NavigationKey::ArrowRight, h), 0);
        assert_eq!(next_index(0, 3, NavigationKey::ArrowLeft, h), 2);
        assert_eq!(next_index(1, 3, NavigationKey::ArrowRight, h), 2);
    }

    #[test]
    fn vertical_uses_up_down() {
        let v = Orientation::Vertical;
        assert_eq!(next_index(0, 3, NavigationKey::ArrowDown, v), 1);
        assert_eq!(next_index(0, 3, NavigationKey::ArrowUp, v), 2);
        assert_eq!(next_index(1, 3, NavigationKey::ArrowLeft, v), 1);
        assert_eq!(next_index(1, 3, NavigationKey::ArrowDown, Orientation::Horizontal), 1);
    }

    #[test]
    fn home_end() {
        assert_eq!(next_index(1, 4, NavigationKey::Home, Orientation::Vertical), 0);
        assert_eq!(next_index(1, 4, NavigationKey::End, Orientation::Horizontal), 3);
    }

    #[test]
    fn empty_list_keeps_index() {
        assert_eq!(next_index(0, 0, NavigationKey::ArrowRight, Orientation::Horizontal), 0);
        assert_eq!(next_index(0, 0, NavigationKey::End, Orientation::Horizontal), 0);
    }

    #[test]
    fn resolve_skips_disabled_via_order() {
        // tab2 is disabled so it is absent from the focus order
        let enabled = order(&["tab1", "tab3"]);
        assert_eq!(
            resolve_navigation(&enabled, "tab1", NavigationKey::ArrowRight, Orientation::Horizontal),
            Some("tab3".to_string())
        );
        assert_eq!(
            resolve_navigation(&enabled, "tab3", NavigationKey::ArrowRight, Orientation::Horizontal),
            Some("tab1".to_string())
        );
    }

    #[test]
    fn resolve_orthogonal_and_self() {
        let enabled = order(&["a", "b"]);
        assert_eq!(
            resolve_navigation(&enabled, "a", NavigationKey::ArrowDown, Orientation::Horizontal),
            None
        );
        assert_eq!(
            resolve_navigation(&enabled, "a", NavigationKey::Home, Orientation::Horizontal),
            None
        );
        assert_eq!(
            resolve_navigation(&[], "a", NavigationKey::End, Orientation::Horizontal),
            None
        );
    }

    #[test]
    fn resolve_from_missing_active() {
        let enabled = order(&["a", "b", "c"]);
        let h = Orientation::Horizontal;
        assert_eq!(resolve_navigation(&enabled, "x", NavigationKey::ArrowRight, h), Some("a".into()));
        assert_eq!(resolve_navigation(&enabled, "x", NavigationKey::ArrowLeft, h), Some("c".into()));
        assert_eq!(resolve_navigation(&enabled, "x", NavigationKey::Home, h), Some("a".into()));
        assert_eq!(resolve_navigation(&enabled, "x", NavigationKey::End, h), Some("c".into()));
    }
}
