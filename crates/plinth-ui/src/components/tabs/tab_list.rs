//! Tab list: the `role="tablist"` strip with roving keyboard focus and the
//! selection indicator.

use std::rc::Rc;

use dioxus::prelude::*;
use plinth_core::pointer::Rect;
use plinth_core::tabs::{
    indicator_classes, indicator_style, resolve_navigation, IndicatorStyle, NavigationKey,
};
use plinth_core::theme::tabs::tab_list_classes;
use tracing::trace;

use super::group::TabGroupHandle;

#[derive(Clone, PartialEq, Props)]
pub struct TabListProps {
    pub group: TabGroupHandle,
    /// Draw a sliding indicator under the active tab
    #[props(default = false)]
    pub show_indicator: bool,
    #[props(default, into)]
    pub custom_classes: Option<String>,
    pub children: Element,
}

async fn client_rect(element: Option<Rc<MountedData>>) -> Option<Rect> {
    let rect = element?.get_client_rect().await.ok()?;
    Some(Rect::new(rect.origin.x, rect.origin.y, rect.width(), rect.height()))
}

/// # Example
///
/// ```rust,ignore
/// let group = use_tab_group(TabGroupOptions { tabs: tabs.clone(), ..Default::default() });
///
/// rsx! {
///     TabList { group: group.clone(),
///         for tab in tabs {
///             Tab { group: group.clone(), value: tab.value.clone(), "{tab.label}" }
///         }
///     }
/// }
/// ```
#[component]
pub fn TabList(props: TabListProps) -> Element {
    let group = props.group.clone();
    let config = &group.config;
    let class = tab_list_classes(
        config.variant,
        config.size,
        config.orientation,
        props.custom_classes.as_deref(),
        &config.theme,
    );

    let mut list_element = use_signal(|| None::<Rc<MountedData>>);
    let mut indicator = use_signal(|| None::<IndicatorStyle>);
    let indicator_class = indicator_classes(config.variant, config.orientation, config.animated);

    let variant = config.variant;
    let orientation = config.orientation;
    let show_indicator = props.show_indicator;
    let measured = group.clone();
    use_effect(move || {
        if !show_indicator {
            return;
        }
        let active = measured.active();
        let list = list_element();
        let tab = measured.element(&active);
        spawn(async move {
            let list_rect = client_rect(list).await;
            let tab_rect = client_rect(tab).await;
            indicator.set(indicator_style(variant, orientation, list_rect, tab_rect));
        });
    });

    let keyboard = group.clone();
    let onkeydown = move |e: KeyboardEvent| {
        let Some(key) = NavigationKey::parse(&e.key().to_string()) else {
            return;
        };
        e.prevent_default();

        let signal = keyboard.state();
        let (order, active) = {
            let state = signal.peek();
            (state.focus_order(), state.active())
        };
        trace!(key = key.as_str(), %active, "tab list keydown");

        if let Some(next) = resolve_navigation(&order, &active, key, orientation) {
            keyboard.focus(&next);
            keyboard.select(&next);
        }
    };

    rsx! {
        div {
            class: "{class}",
            role: "tablist",
            "aria-orientation": orientation.as_str(),
            onmounted: move |e| list_element.set(Some(e.data())),
            onkeydown: onkeydown,
            {props.children}
            if let Some(style) = indicator() {
                div {
                    class: "{indicator_class}",
                    style: style.to_style(),
                    "aria-hidden": "true",
                }
            }
        }
    }
}
