//! Active-tab state machine.
//!
//! A group is either *controlled* (the active value lives with the caller and
//! is read through a [`ValueProvider`]) or *uncontrolled* (the group stores
//! it). Requests to change the active tab go through
//! [`TabGroupState::set_active_tab`], which returns a [`Transition`] listing
//! the events the caller must emit.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use super::descriptor::TabDescriptor;
use super::registry::TabRegistry;

/// Source of the active value in controlled mode
pub trait ValueProvider {
    fn current(&self) -> String;
}

impl<F> ValueProvider for F
where
    F: Fn() -> String,
{
    fn current(&self) -> String {
        self()
    }
}

pub enum ActiveSource {
    Controlled(Box<dyn ValueProvider>),
    Uncontrolled(String),
}

impl ActiveSource {
    pub fn is_controlled(&self) -> bool {
        matches!(self, ActiveSource::Controlled(_))
    }

    fn current(&self) -> String {
        match self {
            ActiveSource::Controlled(provider) => provider.current(),
            ActiveSource::Uncontrolled(value) => value.clone(),
        }
    }
}

impl fmt::Debug for ActiveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveSource::Controlled(provider) => f
                .debug_tuple("Controlled")
                .field(&provider.current())
                .finish(),
            ActiveSource::Uncontrolled(value) => f.debug_tuple("Uncontrolled").field(value).finish(),
        }
    }
}

/// Event the group asks its owner to emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// Two-way binding update (controlled mode only)
    UpdateModelValue(String),
    Change(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationDirection {
    #[default]
    Forward,
    Backward,
}

impl NavigationDirection {
    /// Direction of travel from index `from` to index `to`
    pub fn between(from: Option<usize>, to: Option<usize>) -> Self {
        match (from, to) {
            (Some(from), Some(to)) if to < from => NavigationDirection::Backward,
            _ => NavigationDirection::Forward,
        }
    }
}

/// Outcome of an activation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Target is disabled
    Ignored,
    /// Target is already active
    Unchanged,
    Changed {
        events: Vec<TabEvent>,
        direction: NavigationDirection,
    },
}

impl Transition {
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed { .. })
    }

    pub fn events(&self) -> &[TabEvent] {
        match self {
            Transition::Changed { events, .. } => events,
            _ => &[],
        }
    }
}

/// Tab values that have ever been active. Only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HasBeenActive(BTreeSet<String>);

impl HasBeenActive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.0.insert(value);
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// State owned by one tab group
#[derive(Debug)]
pub struct TabGroupState {
    source: ActiveSource,
    tabs: Vec<TabDescriptor>,
    registry: TabRegistry,
    has_been_active: HasBeenActive,
    direction: NavigationDirection,
}

impl TabGroupState {
    /// Group that stores its own active value.
    ///
    /// Starts on `default_value` when non-empty, else the first tab.
    pub fn uncontrolled(default_value: Option<&str>, tabs: &[TabDescriptor]) -> Self {
        let initial = initial_value(None, default_value, tabs);
        Self::with_source(ActiveSource::Uncontrolled(initial), tabs)
    }

    /// Group whose active value is owned by the caller
    pub fn controlled<P>(provider: P, tabs: &[TabDescriptor]) -> Self
    where
        P: ValueProvider + 'static,
    {
        Self::with_source(ActiveSource::Controlled(Box::new(provider)), tabs)
    }

    fn with_source(source: ActiveSource, tabs: &[TabDescriptor]) -> Self {
        let mut has_been_active = HasBeenActive::new();
        has_been_active.record(source.current());
        debug!(active = %source.current(), controlled = source.is_controlled(), "tab group created");

        Self {
            source,
            tabs: tabs.to_vec(),
            registry: TabRegistry::new(),
            has_been_active,
            direction: NavigationDirection::Forward,
        }
    }

    pub fn active(&self) -> String {
        self.source.current()
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.active() == value
    }

    pub fn is_controlled(&self) -> bool {
        self.source.is_controlled()
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    /// Replace the descriptor list; history is kept
    pub fn set_tabs(&mut self, tabs: &[TabDescriptor]) {
        self.tabs = tabs.to_vec();
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TabRegistry {
        &mut self.registry
    }

    pub fn has_been_active(&self) -> &HasBeenActive {
        &self.has_been_active
    }

    /// Direction of the most recent change
    pub fn direction(&self) -> NavigationDirection {
        self.direction
    }

    /// Tab order used for direction and keyboard navigation.
    ///
    /// Follows the descriptor order, which is the rendered order, limited to
    /// mounted tabs once any have registered. Registered values without a
    /// descriptor follow in mount order; with no descriptors the registry
    /// order is used as is.
    pub fn order(&self) -> Vec<String> {
        if self.registry.is_empty() {
            return self.tabs.iter().map(|t| t.value.clone()).collect();
        }
        let mut order: Vec<String> = self
            .tabs
            .iter()
            .filter(|t| self.registry.get(&t.value).is_some())
            .map(|t| t.value.clone())
            .collect();
        order.extend(
            self.registry
                .values()
                .filter(|v| !self.tabs.iter().any(|t| t.value == *v))
                .map(str::to_string),
        );
        order
    }

    /// Enabled tab values in navigation order
    pub fn focus_order(&self) -> Vec<String> {
        if self.tabs.is_empty() {
            return self.registry.focus_order();
        }
        self.order()
            .into_iter()
            .filter(|v| !self.is_disabled(v))
            .collect()
    }

    pub fn is_disabled(&self, value: &str) -> bool {
        self.registry.is_disabled(value)
            || self.tabs.iter().any(|t| t.value == value && t.disabled)
    }

    /// Request `value` become the active tab.
    ///
    /// Controlled groups emit `UpdateModelValue` then `Change` and leave the
    /// value to the caller. Uncontrolled groups store the value and emit
    /// `Change`. Either way the target joins [`HasBeenActive`].
    pub fn set_active_tab(&mut self, value: &str) -> Transition {
        if self.is_disabled(value) {
            debug!(value, "ignoring activation of disabled tab");
            return Transition::Ignored;
        }

        let previous = self.active();
        if previous == value {
            return Transition::Unchanged;
        }

        let order = self.order();
        let direction = NavigationDirection::between(
            order.iter().position(|v| *v == previous),
            order.iter().position(|v| v == value),
        );
        self.direction = direction;

        let events = match &mut self.source {
            ActiveSource::Controlled(_) => vec![
                TabEvent::UpdateModelValue(value.to_string()),
                TabEvent::Change(value.to_string()),
            ],
            ActiveSource::Uncontrolled(current) => {
                *current = value.to_string();
                vec![TabEvent::Change(value.to_string())]
            }
        };
        self.has_been_active.record(value);

        debug!(from = %previous, to = value, ?direction, "active tab changed");
        Transition::Changed { events, direction }
    }

    /// Record the value currently reported by the source.
    ///
    /// Controlled groups call this when the caller feeds a new value back.
    pub fn observe_active(&mut self) {
        let current = self.active();
        self.has_been_active.record(current);
    }
}

/// Initial active value: external, else non-empty default, else first tab, else empty
pub fn initial_value(
    external: Option<&str>,
    default_value: Option<&str>,
    tabs: &[TabDescriptor],
) -> String {
    external
        .or(default_value.filter(|v| !v.is_empty()))
        .map(str::to_string)
        .or_else(|| tabs.first().map(|t| t.value.clone()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn three_tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("tab1", "One"),
            TabDescriptor::new("tab2", "Two"),
            TabDescriptor::new("tab3", "Three"),
        ]
    }

    #[test]
    fn initial_value_precedence() {
        let tabs = three_tabs();
        assert_eq!(initial_value(Some("tab3"), Some("tab2"), &tabs), "tab3");
        assert_eq!(initial_value(None, Some("tab2"), &tabs), "tab2");
        assert_eq!(initial_value(None, Some(""), &tabs), "tab1");
        assert_eq!(initial_value(None, None, &tabs), "tab1");
        assert_eq!(initial_value(None, None, &[]), "");
    }

    #[test]
    fn uncontrolled_change_stores_and_emits() {
        let mut state = TabGroupState::uncontrolled(None, &three_tabs());
        assert_eq!(state.active(), "tab1");

        let transition = state.set_active_tab("tab3");
        assert_eq!(
            transition,
            Transition::Changed {
                events: vec![TabEvent::Change("tab3".into())],
                direction: NavigationDirection::Forward,
            }
        );
        assert_eq!(state.active(), "tab3");
        assert!(state.has_been_active().contains("tab1"));
        assert!(state.has_been_active().contains("tab3"));
    }

    #[test]
    fn controlled_emits_without_mutating() {
        let model = Rc::new(RefCell::new("tab2".to_string()));
        let reader = model.clone();
        let mut state = TabGroupState::controlled(move || reader.borrow().clone(), &three_tabs());

        let transition = state.set_active_tab("tab1");
        assert_eq!(
            transition.events(),
            &[
                TabEvent::UpdateModelValue("tab1".into()),
                TabEvent::Change("tab1".into()),
            ]
        );
        assert_eq!(state.active(), "tab2");
        assert!(state.has_been_active().contains("tab1"));

        *model.borrow_mut() = "tab3".to_string();
        state.observe_active();
        assert_eq!(state.active(), "tab3");
        assert!(state.has_been_active().contains("tab3"));
        assert_eq!(state.direction(), NavigationDirection::Backward);
    }

    #[test]
    fn same_value_is_unchanged() {
        let mut state = TabGroupState::uncontrolled(Some("tab2"), &three_tabs());
        assert_eq!(state.set_active_tab("tab2"), Transition::Unchanged);
        assert!(state.set_active_tab("tab2").events().is_empty());
    }

    #[test]
    fn disabled_is_ignored() {
        let mut tabs = three_tabs();
        tabs[1] = TabDescriptor::new("tab2", "Two").disabled();
        let mut state = TabGroupState::uncontrolled(None, &tabs);

        assert_eq!(state.set_active_tab("tab2"), Transition::Ignored);
        assert_eq!(state.active(), "tab1");

        state.registry_mut().register("tab3", "tab-tab3", true);
        assert_eq!(state.set_active_tab("tab3"), Transition::Ignored);
    }

    #[test]
    fn direction_follows_order() {
        let mut state = TabGroupState::uncontrolled(Some("tab3"), &three_tabs());
        let transition = state.set_active_tab("tab1");
        assert!(matches!(
            transition,
            Transition::Changed {
                direction: NavigationDirection::Backward,
                ..
            }
        ));
        state.set_active_tab("tab2");
        assert_eq!(state.direction(), NavigationDirection::Forward);
    }

    #[test]
    fn unknown_target_moves_forward() {
        let mut state = TabGroupState::uncontrolled(None, &three_tabs());
        let transition = state.set_active_tab("elsewhere");
        assert!(transition.is_changed());
        assert_eq!(state.direction(), NavigationDirection::Forward);
    }

    #[test]
    fn empty_initial_value_not_recorded() {
        let state = TabGroupState::uncontrolled(None, &[]);
        assert_eq!(state.active(), "");
        assert!(state.has_been_active().is_empty());
    }

    #[test]
    fn order_follows_descriptors_of_mounted_tabs() {
        let mut state = TabGroupState::uncontrolled(None, &three_tabs());
        state.registry_mut().register("tab3", "tab-tab3", false);
        state.registry_mut().register("tab1", "tab-tab1", false);
        assert_eq!(state.order(), vec!["tab1", "tab3"]);
        assert_eq!(state.focus_order(), vec!["tab1", "tab3"]);
    }

    #[test]
    fn registry_order_without_descriptors() {
        let mut state = TabGroupState::uncontrolled(None, &[]);
        state.registry_mut().register("b", "tab-b", false);
        state.registry_mut().register("a", "tab-a", false);
        state.registry_mut().register("c", "tab-c", true);
        assert_eq!(state.order(), vec!["b", "a", "c"]);
        assert_eq!(state.focus_order(), vec!["b", "a"]);
    }

    #[test]
    fn undescribed_tabs_follow_described_ones() {
        let mut state = TabGroupState::uncontrolled(None, &three_tabs());
        state.registry_mut().register("extra", "tab-extra", false);
        state.registry_mut().register("tab2", "tab-tab2", false);
        assert_eq!(state.order(), vec!["tab2", "extra"]);
    }
}
