//! Gallery stories, one page per component family

mod button;
mod layout;
mod overview;
mod pointer;
mod tabs;
mod tag;
mod text;

pub use button::ButtonStory;
pub use layout::LayoutStory;
pub use overview::Overview;
pub use pointer::PointerStory;
pub use tabs::TabsStory;
pub use tag::TagStory;
pub use text::TextStory;

use dioxus::prelude::*;
use plinth_core::theme::text::{TextElement, TextTone, TextVariant};
use plinth_ui::Text;

/// Titled block inside a story page
#[component]
fn Section(#[props(into)] title: String, #[props(default, into)] note: Option<String>, children: Element) -> Element {
    rsx! {
        section { class: "mb-10",
            Text { element: TextElement::H2, variant: TextVariant::HeadingMd, custom_classes: "mb-1", "{title}" }
            if let Some(note) = note {
                Text { variant: TextVariant::BodySm, tone: TextTone::Subdued, custom_classes: "mb-4", "{note}" }
            }
            {children}
        }
    }
}
