//! Text Component
//!
//! Typography on a chosen element. The element only sets semantics; the
//! look comes from the variant, so an `h2` can read as body text.

use dioxus::prelude::*;
use plinth_core::theme::text::{
    text_classes, TextAlignment, TextDecoration, TextElement, TextFontWeight, TextStyle, TextTone,
    TextVariant,
};
use plinth_core::theme::{MergeTheme, TextTheme, TextThemeOverride};

#[derive(Clone, PartialEq, Props)]
pub struct TextProps {
    /// Element to render
    #[props(default)]
    pub element: TextElement,
    #[props(default)]
    pub variant: TextVariant,
    #[props(default)]
    pub tone: Option<TextTone>,
    #[props(default)]
    pub alignment: Option<TextAlignment>,
    #[props(default)]
    pub font_weight: Option<TextFontWeight>,
    #[props(default)]
    pub decoration: Option<TextDecoration>,
    #[props(default = false)]
    pub break_word: bool,
    #[props(default = false)]
    pub truncate: bool,
    /// Monospaced tabular digits
    #[props(default = false)]
    pub numeric: bool,
    /// Hide visually but keep for screen readers
    #[props(default = false)]
    pub visually_hidden: bool,
    #[props(default, into)]
    pub id: Option<String>,
    #[props(default, into)]
    pub custom_classes: Option<String>,
    #[props(default)]
    pub theme: Option<TextThemeOverride>,
    pub children: Element,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Text { element: TextElement::H2, variant: TextVariant::HeadingLg, "Settings" }
///     Text { tone: Some(TextTone::Subdued), "Changes are saved automatically." }
/// }
/// ```
#[component]
pub fn Text(props: TextProps) -> Element {
    let theme = TextTheme::default().merge(props.theme.as_ref());
    let style = TextStyle {
        variant: props.variant,
        tone: props.tone,
        alignment: props.alignment,
        font_weight: props.font_weight,
        decoration: props.decoration,
        break_word: props.break_word,
        truncate: props.truncate,
        numeric: props.numeric,
        visually_hidden: props.visually_hidden,
        custom_classes: props.custom_classes.clone(),
    };
    let class = text_classes(&style, &theme);
    let id = props.id.clone();
    let children = props.children.clone();

    match props.element {
        TextElement::P => rsx! { p { class: "{class}", id, {children} } },
        TextElement::Span => rsx! { span { class: "{class}", id, {children} } },
        TextElement::Div => rsx! { div { class: "{class}", id, {children} } },
        TextElement::H1 => rsx! { h1 { class: "{class}", id, {children} } },
        TextElement::H2 => rsx! { h2 { class: "{class}", id, {children} } },
        TextElement::H3 => rsx! { h3 { class: "{class}", id, {children} } },
        TextElement::H4 => rsx! { h4 { class: "{class}", id, {children} } },
        TextElement::H5 => rsx! { h5 { class: "{class}", id, {children} } },
        TextElement::H6 => rsx! { h6 { class: "{class}", id, {children} } },
        TextElement::Strong => rsx! { strong { class: "{class}", id, {children} } },
        TextElement::Em => rsx! { em { class: "{class}", id, {children} } },
        TextElement::Code => rsx! { code { class: "{class}", id, {children} } },
        TextElement::Label => rsx! { label { class: "{class}", id, {children} } },
        TextElement::Legend => rsx! { legend { class: "{class}", id, {children} } },
        TextElement::Dt => rsx! { dt { class: "{class}", id, {children} } },
        TextElement::Dd => rsx! { dd { class: "{class}", id, {children} } },
    }
}
