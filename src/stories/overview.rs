use dioxus::prelude::*;
use plinth_core::theme::text::{TextElement, TextTone, TextVariant};
use plinth_ui::{Text, VStack};
use plinth_core::layout::Spacing;

use crate::app::Story;

#[component]
pub fn Overview() -> Element {
    rsx! {
        VStack { spacing: Spacing::Md,
            Text { element: TextElement::H1, variant: TextVariant::Heading2xl, "Plinth" }
            Text { tone: TextTone::Subdued,
                "Themeable components with accessible tabs, typography and layout primitives."
            }
            ul { class: "list-disc pl-6 text-sm",
                for story in Story::ALL.iter().copied() {
                    li { key: "{story.title()}",
                        Link { to: story.route(), class: "text-blue-600 hover:underline", "{story.title()}" }
                    }
                }
            }
        }
    }
}
