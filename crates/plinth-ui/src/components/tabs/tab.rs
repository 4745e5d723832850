//! A single tab

use dioxus::prelude::*;
use plinth_core::tabs::{panel_id, tab_id, tab_index};
use plinth_core::theme::tabs::{tab_classes, TabStyle, TAB_BADGE_CLASSES};

use super::group::TabGroupHandle;

#[derive(Clone, PartialEq, Props)]
pub struct TabProps {
    pub group: TabGroupHandle,
    /// Identifies the tab within its group
    #[props(into)]
    pub value: String,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default, into)]
    pub badge: Option<String>,
    #[props(default)]
    pub left_icon: Option<Element>,
    #[props(default)]
    pub right_icon: Option<Element>,
    #[props(default, into)]
    pub custom_classes: Option<String>,
    /// Called with the tab's value on every click, before activation
    #[props(default)]
    pub on_click: Option<EventHandler<String>>,
    pub children: Element,
}

#[component]
pub fn Tab(props: TabProps) -> Element {
    let group = props.group.clone();
    let value = props.value.clone();
    let disabled = props.disabled;
    let dom_id = tab_id(&value);

    let registration = group.clone();
    let registered = value.clone();
    let registered_id = dom_id.clone();
    use_effect(use_reactive((&disabled,), move |(disabled,)| {
        registration.register(&registered, &registered_id, disabled)
    }));

    let dropped = group.clone();
    let dropped_value = value.clone();
    use_drop(move || dropped.unregister(&dropped_value));

    let active = group.is_active(&value);
    let config = &group.config;
    let class = tab_classes(
        &TabStyle {
            variant: config.variant,
            size: config.size,
            orientation: config.orientation,
            active,
            custom_classes: props.custom_classes.clone(),
        },
        &config.theme,
    );

    let mounted = group.clone();
    let mounted_value = value.clone();
    let clicked = group.clone();
    let clicked_value = value.clone();
    let on_click = props.on_click;

    rsx! {
        button {
            id: "{dom_id}",
            class: "{class}",
            r#type: "button",
            role: "tab",
            "aria-controls": panel_id(&value),
            "aria-selected": if active { "true" } else { "false" },
            tabindex: tab_index(active),
            disabled,
            onmounted: move |e| mounted.set_element(&mounted_value, e.data()),
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &on_click {
                    handler.call(clicked_value.clone());
                }
                clicked.select(&clicked_value);
            },
            if let Some(icon) = props.left_icon.clone() {
                span { class: "mr-2 inline-flex shrink-0", "aria-hidden": "true", {icon} }
            }
            {props.children}
            if let Some(icon) = props.right_icon.clone() {
                span { class: "ml-2 inline-flex shrink-0", "aria-hidden": "true", {icon} }
            }
            if let Some(badge) = &props.badge {
                span { class: TAB_BADGE_CLASSES, "{badge}" }
            }
        }
    }
}
