//! End-to-end tab group scenarios
//!
//! Drives `TabGroupState` the way the tab components do: tabs register on
//! mount, clicks and keys go through `set_active_tab`, and panels ask
//! `should_mount` on every render.

use std::cell::RefCell;
use std::rc::Rc;

use plinth_core::tabs::{
    resolve_navigation, should_mount, tab_id, tab_index, NavigationDirection, NavigationKey,
    Orientation, TabDescriptor, TabEvent, TabGroupState, Transition,
};

fn three_tabs(third_disabled: bool) -> Vec<TabDescriptor> {
    let third = TabDescriptor::new("tab3", "Tab 3");
    vec![
        TabDescriptor::new("tab1", "Tab 1"),
        TabDescriptor::new("tab2", "Tab 2"),
        if third_disabled { third.disabled() } else { third },
    ]
}

fn mount(state: &mut TabGroupState) {
    let tabs = state.tabs().to_vec();
    for tab in &tabs {
        state
            .registry_mut()
            .register(tab.value.clone(), tab_id(&tab.value), tab.disabled);
    }
}

/// `aria-selected` for each tab, as rendered
fn selected(state: &TabGroupState) -> Vec<(String, bool)> {
    state
        .tabs()
        .iter()
        .map(|t| (t.value.clone(), state.is_active(&t.value)))
        .collect()
}

fn mounted_panels(state: &TabGroupState, lazy: bool) -> usize {
    let active = state.active();
    state
        .tabs()
        .iter()
        .filter(|t| should_mount(&t.value, &active, lazy, state.has_been_active()))
        .count()
}

#[test]
fn clicking_disabled_tab_keeps_selection() {
    let mut state = TabGroupState::uncontrolled(Some("tab1"), &three_tabs(true));
    mount(&mut state);

    assert_eq!(
        selected(&state),
        vec![
            ("tab1".to_string(), true),
            ("tab2".to_string(), false),
            ("tab3".to_string(), false),
        ]
    );
    assert_eq!(tab_index(state.is_active("tab1")), "0");
    assert_eq!(tab_index(state.is_active("tab2")), "-1");

    let transition = state.set_active_tab("tab3");
    assert_eq!(transition, Transition::Ignored);
    assert!(transition.events().is_empty());
    assert_eq!(state.active(), "tab1");
}

#[test]
fn controlled_group_waits_for_feedback() {
    let model = Rc::new(RefCell::new("tab1".to_string()));
    let reader = model.clone();
    let mut state = TabGroupState::controlled(move || reader.borrow().clone(), &three_tabs(false));
    mount(&mut state);

    let transition = state.set_active_tab("tab2");
    assert_eq!(
        transition.events(),
        &[
            TabEvent::UpdateModelValue("tab2".to_string()),
            TabEvent::Change("tab2".to_string()),
        ]
    );
    assert_eq!(state.active(), "tab1", "rendered tab must not move before feedback");

    // The owner handles UpdateModelValue by writing its model
    for event in transition.events() {
        if let TabEvent::UpdateModelValue(value) = event {
            *model.borrow_mut() = value.clone();
        }
    }
    state.observe_active();
    assert_eq!(state.active(), "tab2");
    assert!(state.is_active("tab2"));
}

#[test]
fn lazy_panels_stay_mounted() {
    let mut state = TabGroupState::uncontrolled(Some("tab1"), &three_tabs(false));
    mount(&mut state);

    assert_eq!(mounted_panels(&state, true), 1);

    assert!(state.set_active_tab("tab2").is_changed());
    assert_eq!(mounted_panels(&state, true), 2);

    assert!(state.set_active_tab("tab1").is_changed());
    assert_eq!(mounted_panels(&state, true), 2);

    assert_eq!(mounted_panels(&state, false), 3);
}

#[test]
fn keyboard_walk_skips_disabled_and_wraps() {
    let mut state = TabGroupState::uncontrolled(None, &three_tabs(true));
    mount(&mut state);
    let order = state.focus_order();
    assert_eq!(order, vec!["tab1", "tab2"]);

    let mut visited = Vec::new();
    for _ in 0..3 {
        let next = resolve_navigation(
            &order,
            &state.active(),
            NavigationKey::ArrowRight,
            Orientation::Horizontal,
        )
        .expect("two enabled tabs always move");
        state.set_active_tab(&next);
        visited.push(state.active());
    }
    assert_eq!(visited, vec!["tab2", "tab1", "tab2"]);

    let end = resolve_navigation(&order, &state.active(), NavigationKey::End, Orientation::Horizontal);
    assert_eq!(end, None, "already on the last enabled tab");

    let home = resolve_navigation(&order, &state.active(), NavigationKey::Home, Orientation::Horizontal);
    assert_eq!(home.as_deref(), Some("tab1"));
}

#[test]
fn unmounted_tabs_leave_the_focus_order() {
    let mut state = TabGroupState::uncontrolled(None, &three_tabs(false));
    mount(&mut state);
    state.registry_mut().unregister("tab2");
    state.registry_mut().unregister("not-a-tab");

    assert_eq!(state.focus_order(), vec!["tab1", "tab3"]);
    assert_eq!(
        resolve_navigation(&state.focus_order(), "tab1", NavigationKey::ArrowRight, Orientation::Horizontal)
            .as_deref(),
        Some("tab3")
    );
}

#[test]
fn prepended_tab_navigates_in_rendered_order() {
    let initial = vec![TabDescriptor::new("b", "B"), TabDescriptor::new("c", "C")];
    let mut state = TabGroupState::uncontrolled(Some("b"), &initial);
    mount(&mut state);

    // A keyed tab rendered in front mounts after the others
    let prepended = vec![
        TabDescriptor::new("a", "A"),
        TabDescriptor::new("b", "B"),
        TabDescriptor::new("c", "C"),
    ];
    state.set_tabs(&prepended);
    state.registry_mut().register("a", tab_id("a"), false);

    let order = state.focus_order();
    assert_eq!(order, vec!["a", "b", "c"]);

    let home = resolve_navigation(&order, "b", NavigationKey::Home, Orientation::Horizontal);
    assert_eq!(home.as_deref(), Some("a"));
    let end = resolve_navigation(&order, "b", NavigationKey::End, Orientation::Horizontal);
    assert_eq!(end.as_deref(), Some("c"));
    let wrapped = resolve_navigation(&order, "c", NavigationKey::ArrowRight, Orientation::Horizontal);
    assert_eq!(wrapped.as_deref(), Some("a"));

    assert!(state.set_active_tab("a").is_changed());
    assert_eq!(state.direction(), NavigationDirection::Backward);
}
