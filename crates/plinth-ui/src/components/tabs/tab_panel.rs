//! Tab panel

use dioxus::prelude::*;
use plinth_core::style::ClassList;
use plinth_core::tabs::{is_visible, panel_id, panel_transition_classes, should_mount, tab_id};
use plinth_core::theme::tabs::tab_panel_classes;

use super::group::TabGroupHandle;

#[derive(Clone, PartialEq, Props)]
pub struct TabPanelProps {
    pub group: TabGroupHandle,
    /// Value of the tab this panel belongs to
    #[props(into)]
    pub value: String,
    #[props(default, into)]
    pub custom_classes: Option<String>,
    pub children: Element,
}

/// Content for one tab.
///
/// Lazy groups skip panels that have never been active; once mounted a panel
/// stays in the tree and is hidden while inactive.
#[component]
pub fn TabPanel(props: TabPanelProps) -> Element {
    let group = &props.group;
    let config = &group.config;
    let state = group.state();
    let state = state.read();

    let active = state.active();
    if !should_mount(&props.value, &active, config.lazy, state.has_been_active()) {
        return rsx! {};
    }

    let visible = is_visible(&props.value, &active);
    let class = ClassList::new()
        .push(tab_panel_classes(config.variant, props.custom_classes.as_deref(), &config.theme))
        .push_if(visible, panel_transition_classes(state.direction(), config.animated))
        .build();

    rsx! {
        div {
            id: panel_id(&props.value),
            class: "{class}",
            role: "tabpanel",
            "aria-labelledby": tab_id(&props.value),
            tabindex: "0",
            hidden: !visible,
            {props.children.clone()}
        }
    }
}
