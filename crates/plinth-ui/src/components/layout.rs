//! Layout Components
//!
//! Flex stacks, a spacing wrapper and a full-height page container.

use dioxus::prelude::*;
use plinth_core::layout::{
    spacing_class, stack_classes, Align, Justify, Spacing, SpacingKind, SpacingSide,
    StackDirection, StackStyle, SCREEN_VIEW_CLASSES,
};
use plinth_core::style::ClassList;

/// Properties shared by [`HStack`] and [`VStack`]
#[derive(Clone, PartialEq, Props)]
pub struct StackProps {
    /// Gap between children
    #[props(default)]
    pub spacing: Spacing,
    #[props(default)]
    pub align: Align,
    #[props(default)]
    pub justify: Justify,
    /// `auto`, `full`, `fit`, `min`, `max` or a fixed step
    #[props(default = "auto".to_string(), into)]
    pub width: String,
    /// As `width`, plus `screen`
    #[props(default = "auto".to_string(), into)]
    pub height: String,
    /// Step on the padding scale
    #[props(default = "0".to_string(), into)]
    pub padding: String,
    #[props(default = false)]
    pub wrap: bool,
    #[props(default, into)]
    pub class: Option<String>,
    pub children: Element,
}

impl StackProps {
    fn style(&self) -> StackStyle {
        StackStyle {
            spacing: self.spacing,
            align: self.align,
            justify: self.justify,
            width: self.width.clone(),
            height: self.height.clone(),
            padding: self.padding.clone(),
            wrap: self.wrap,
            custom_classes: self.class.clone(),
        }
    }
}

/// Children in a row
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HStack { spacing: Spacing::Lg, align: Align::Center,
///         Button { "Cancel" }
///         Button { variant: ButtonVariant::Primary, "Save" }
///     }
/// }
/// ```
#[component]
pub fn HStack(props: StackProps) -> Element {
    let class = stack_classes(StackDirection::Horizontal, &props.style());
    rsx! {
        div { class: "{class}", {props.children} }
    }
}

/// Children in a column
#[component]
pub fn VStack(props: StackProps) -> Element {
    let class = stack_classes(StackDirection::Vertical, &props.style());
    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SpacingBoxProps {
    #[props(default)]
    pub size: Spacing,
    /// Padding, margin or gap
    #[props(default)]
    pub kind: SpacingKind,
    #[props(default)]
    pub direction: SpacingSide,
    #[props(default, into)]
    pub class: Option<String>,
    pub children: Element,
}

/// Applies one spacing token to a wrapper `div`
#[component]
pub fn SpacingBox(props: SpacingBoxProps) -> Element {
    let class = ClassList::new()
        .push(spacing_class(props.size, props.kind, props.direction))
        .push_opt(props.class.as_deref())
        .build();

    rsx! {
        div { class: "{class}", {props.children} }
    }
}

/// Full-height page container
#[component]
pub fn ScreenView(#[props(default, into)] class: Option<String>, children: Element) -> Element {
    let class = ClassList::new()
        .push(SCREEN_VIEW_CLASSES)
        .push_opt(class.as_deref())
        .build();

    rsx! {
        main { class: "{class}", {children} }
    }
}
