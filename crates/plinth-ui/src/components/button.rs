//! Button Component
//!
//! Themed `<button>` with variants, sizes, rounding, optional icons on either
//! side, icon-only mode and a loading state that overlays a spinner.

use dioxus::prelude::*;
use plinth_core::theme::button::{
    button_classes, button_content_classes, button_icon_classes, button_spinner_classes,
    ButtonRounded, ButtonSize, ButtonStyle, ButtonType, ButtonVariant, IconSide,
};
use plinth_core::theme::{ButtonTheme, ButtonThemeOverride, MergeTheme};

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default)]
    pub rounded: ButtonRounded,
    /// HTML `type` attribute
    #[props(default)]
    pub button_type: ButtonType,
    /// Text label; takes precedence over children
    #[props(default, into)]
    pub label: Option<String>,
    pub children: Element,
    #[props(default = false)]
    pub disabled: bool,
    /// Show a spinner and block clicks
    #[props(default = false)]
    pub loading: bool,
    #[props(default)]
    pub left_icon: Option<Element>,
    #[props(default)]
    pub right_icon: Option<Element>,
    /// Square button holding only an icon
    #[props(default = false)]
    pub icon_only: bool,
    #[props(default = false)]
    pub full_width: bool,
    /// Accessible name, needed for icon-only buttons
    #[props(default, into)]
    pub aria_label: Option<String>,
    #[props(default, into)]
    pub custom_classes: Option<String>,
    /// Partial theme merged onto the default button theme
    #[props(default)]
    pub theme: Option<ButtonThemeOverride>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
}

/// Themed button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Danger,
///         size: ButtonSize::Sm,
///         loading: saving(),
///         onclick: move |_| save(),
///         "Delete"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let theme = ButtonTheme::default().merge(props.theme.as_ref());
    let style = ButtonStyle {
        variant: props.variant,
        size: props.size,
        rounded: props.rounded,
        icon_only: props.icon_only,
        full_width: props.full_width,
        loading: props.loading,
        custom_classes: props.custom_classes.clone(),
    };

    let class = button_classes(&style, &theme);
    let content_class = button_content_classes(&style, &theme);
    let spinner_class = button_spinner_classes(&style, &theme);
    let left_icon_class = button_icon_classes(&style, IconSide::Left, &theme);
    let right_icon_class = button_icon_classes(&style, IconSide::Right, &theme);

    let blocked = props.disabled || props.loading;
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{class}",
            r#type: props.button_type.as_str(),
            disabled: blocked,
            "aria-busy": if props.loading { "true" } else { "false" },
            "aria-label": props.aria_label.clone(),
            onclick: move |e| {
                if blocked {
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(e);
                }
            },

            if props.loading {
                Spinner { class: spinner_class }
            }

            span { class: "{content_class}",
                if let Some(icon) = props.left_icon.clone() {
                    span { class: "{left_icon_class}", "aria-hidden": "true", {icon} }
                }
                if !props.icon_only {
                    {
                        match &props.label {
                            Some(label) => rsx! { "{label}" },
                            None => props.children.clone(),
                        }
                    }
                }
                if let Some(icon) = props.right_icon.clone() {
                    span { class: "{right_icon_class}", "aria-hidden": "true", {icon} }
                }
            }
        }
    }
}

/// Rotating ring shown while a button is loading
#[component]
fn Spinner(class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            circle {
                class: "opacity-25",
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "currentColor",
                stroke_width: "4",
            }
            path {
                class: "opacity-75",
                fill: "currentColor",
                d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z",
            }
        }
    }
}
