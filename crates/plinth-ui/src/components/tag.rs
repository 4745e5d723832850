//! Tag Component
//!
//! Small coloured label. Static tags render a `<span>` outside the tab
//! order; clickable tags render a `<button>` that also answers Enter and
//! Space, and can act as a toggle through `pressed`.

use dioxus::prelude::*;
use plinth_core::theme::tag::{
    tag_classes, tag_content_classes, tag_icon_classes, TagSize, TagStyle, TagVariant,
};
use plinth_core::theme::{MergeTheme, TagTheme, TagThemeOverride};

const CLOSE_BUTTON_CLASSES: &str =
    "ml-1 -mr-1 inline-flex items-center justify-center rounded-full hover:bg-black/10 focus:outline-none";

/// Properties for the Tag component
#[derive(Clone, PartialEq, Props)]
pub struct TagProps {
    #[props(default)]
    pub variant: TagVariant,
    #[props(default)]
    pub size: TagSize,
    #[props(default, into)]
    pub label: Option<String>,
    pub children: Element,
    /// Render as an interactive button
    #[props(default = false)]
    pub clickable: bool,
    /// Toggle state, exposed as `aria-pressed`
    #[props(default)]
    pub pressed: Option<bool>,
    #[props(default = false)]
    pub disabled: bool,
    /// Show a close button that emits `on_close`
    #[props(default = false)]
    pub closable: bool,
    #[props(default)]
    pub left_icon: Option<Element>,
    #[props(default)]
    pub right_icon: Option<Element>,
    #[props(default, into)]
    pub custom_classes: Option<String>,
    #[props(default)]
    pub theme: Option<TagThemeOverride>,
    #[props(default)]
    pub on_click: Option<EventHandler<()>>,
    #[props(default)]
    pub on_close: Option<EventHandler<()>>,
}

/// Whether a key activates a clickable tag
pub(crate) fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

/// Coloured label, optionally clickable or closable
///
/// # Example
///
/// ```rust,ignore
/// let mut active = use_signal(|| false);
///
/// rsx! {
///     Tag { variant: TagVariant::Success, "Published" }
///
///     Tag {
///         clickable: true,
///         pressed: active(),
///         on_click: move |_| active.toggle(),
///         "Filter"
///     }
/// }
/// ```
#[component]
pub fn Tag(props: TagProps) -> Element {
    let theme = TagTheme::default().merge(props.theme.as_ref());
    let style = TagStyle {
        variant: props.variant,
        size: props.size,
        clickable: props.clickable,
        disabled: props.disabled,
        custom_classes: props.custom_classes.clone(),
    };

    let class = tag_classes(&style, &theme);
    let content_class = tag_content_classes(&theme);
    let icon_class = tag_icon_classes(&style, &theme);

    let disabled = props.disabled;
    let on_click = props.on_click;
    let on_close = props.on_close;
    let emit_click = move || {
        if disabled {
            return;
        }
        if let Some(handler) = &on_click {
            handler.call(());
        }
    };

    let body = rsx! {
        span { class: "{content_class}",
            if let Some(icon) = props.left_icon.clone() {
                span { class: "{icon_class}", "aria-hidden": "true", {icon} }
            }
            {
                match &props.label {
                    Some(label) => rsx! { "{label}" },
                    None => props.children.clone(),
                }
            }
            if let Some(icon) = props.right_icon.clone() {
                span { class: "{icon_class}", "aria-hidden": "true", {icon} }
            }
        }
        if props.closable {
            span {
                class: CLOSE_BUTTON_CLASSES,
                role: "button",
                tabindex: if disabled { "-1" } else { "0" },
                "aria-label": "Remove",
                onclick: move |e| {
                    e.stop_propagation();
                    if disabled {
                        return;
                    }
                    if let Some(handler) = &on_close {
                        handler.call(());
                    }
                },
                onkeydown: move |e| {
                    if is_activation_key(&e.key()) {
                        e.prevent_default();
                        e.stop_propagation();
                        if !disabled {
                            if let Some(handler) = &on_close {
                                handler.call(());
                            }
                        }
                    }
                },
                svg {
                    class: "{icon_class}",
                    xmlns: "http://www.w3.org/2000/svg",
                    view_box: "0 0 20 20",
                    fill: "currentColor",
                    "aria-hidden": "true",
                    path { d: "M6.28 5.22a.75.75 0 00-1.06 1.06L8.94 10l-3.72 3.72a.75.75 0 101.06 1.06L10 11.06l3.72 3.72a.75.75 0 101.06-1.06L11.06 10l3.72-3.72a.75.75 0 00-1.06-1.06L10 8.94 6.28 5.22z" }
                }
            }
        }
    };

    if props.clickable {
        let pressed = props.pressed.map(|p| if p { "true" } else { "false" });
        rsx! {
            button {
                class: "{class}",
                r#type: "button",
                role: "button",
                tabindex: "0",
                disabled,
                "aria-pressed": pressed,
                "aria-disabled": if disabled { "true" } else { "false" },
                onclick: move |_| emit_click(),
                onkeydown: move |e| {
                    if is_activation_key(&e.key()) {
                        // the native click that follows is suppressed
                        e.prevent_default();
                        emit_click();
                    }
                },
                {body}
            }
        }
    } else {
        rsx! {
            span {
                class: "{class}",
                tabindex: "-1",
                "aria-disabled": if disabled { Some("true") } else { None },
                {body}
            }
        }
    }
}
