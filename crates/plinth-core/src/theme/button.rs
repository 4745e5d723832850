//! Button theme and class resolution

use serde::{Deserialize, Serialize};

use super::{
    lookup, overlay, pick, style_map, BaseSection, BaseSectionOverride, MergeTheme, SizedSection,
    SizedSectionOverride, StyleMap,
};
use crate::style::ClassList;

named_enum! {
    /// Button colour variants
    pub enum ButtonVariant ("button variant") {
        #[default]
        Primary => "primary",
        Secondary => "secondary",
        Tertiary => "tertiary",
        Danger => "danger",
        Success => "success",
        Warning => "warning",
    }
}

named_enum! {
    /// Button sizes
    pub enum ButtonSize ("button size") {
        Xs => "xs",
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
}

named_enum! {
    /// Corner rounding
    pub enum ButtonRounded ("button rounding") {
        None => "none",
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
        Full => "full",
    }
}

named_enum! {
    /// The HTML `type` attribute
    pub enum ButtonType ("button type") {
        #[default]
        Button => "button",
        Submit => "submit",
        Reset => "reset",
    }
}

/// Root element leaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonRootTheme {
    pub base: String,
    pub variants: StyleMap,
    pub sizes: StyleMap,
    pub icon_only_sizes: StyleMap,
    pub rounded: StyleMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonRootOverride {
    pub base: Option<String>,
    pub variants: Option<StyleMap>,
    pub sizes: Option<StyleMap>,
    pub icon_only_sizes: Option<StyleMap>,
    pub rounded: Option<StyleMap>,
}

/// Effective button theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonTheme {
    pub root: ButtonRootTheme,
    pub icon: SizedSection,
    pub content: BaseSection,
    pub loading: SizedSection,
}

/// Partial button theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonThemeOverride {
    pub root: Option<ButtonRootOverride>,
    pub icon: Option<SizedSectionOverride>,
    pub content: Option<BaseSectionOverride>,
    pub loading: Option<SizedSectionOverride>,
}

const SPINNER_SIZES: &[(&str, &str)] = &[
    ("xs", "w-3 h-3"),
    ("sm", "w-4 h-4"),
    ("md", "w-4 h-4"),
    ("lg", "w-5 h-5"),
    ("xl", "w-6 h-6"),
];

impl Default for ButtonTheme {
    fn default() -> Self {
        Self {
            root: ButtonRootTheme {
                base: "inline-flex items-center justify-center font-medium transition-all duration-200 \
                       focus:outline-none focus:ring-2 focus:ring-offset-2 \
                       disabled:opacity-50 disabled:cursor-not-allowed disabled:pointer-events-none \
                       active:transform active:scale-[0.98] relative"
                    .to_string(),
                variants: style_map(&[
                    (
                        "primary",
                        "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500 border border-transparent \
                         active:bg-blue-800 active:shadow-[inset_0_4px_8px_rgba(0,0,0,0.4)]",
                    ),
                    (
                        "secondary",
                        "bg-gray-100 text-gray-900 hover:bg-gray-200 focus:ring-gray-500 border border-gray-300 \
                         hover:border-gray-400 active:bg-gray-300 active:shadow-[inset_0_4px_8px_rgba(0,0,0,0.2)]",
                    ),
                    (
                        "tertiary",
                        "bg-transparent text-blue-600 hover:bg-blue-50 focus:ring-blue-500 border border-transparent \
                         hover:border-blue-200 active:bg-blue-100 active:shadow-[inset_0_4px_8px_rgba(59,130,246,0.2)]",
                    ),
                    (
                        "danger",
                        "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500 border border-transparent \
                         active:bg-red-800 active:shadow-[inset_0_4px_8px_rgba(0,0,0,0.4)]",
                    ),
                    (
                        "success",
                        "bg-green-600 text-white hover:bg-green-700 focus:ring-green-500 border border-transparent \
                         active:bg-green-800 active:shadow-[inset_0_4px_8px_rgba(0,0,0,0.4)]",
                    ),
                    (
                        "warning",
                        "bg-yellow-500 text-white hover:bg-yellow-600 focus:ring-yellow-500 border border-transparent \
                         active:bg-yellow-700 active:shadow-[inset_0_4px_8px_rgba(0,0,0,0.4)]",
                    ),
                ]),
                sizes: style_map(&[
                    ("xs", "px-2 py-1 text-xs"),
                    ("sm", "px-3 py-1.5 text-sm"),
                    ("md", "px-4 py-2 text-sm"),
                    ("lg", "px-6 py-3 text-base"),
                    ("xl", "px-8 py-4 text-lg"),
                ]),
                icon_only_sizes: style_map(&[
                    ("xs", "p-1"),
                    ("sm", "p-1.5"),
                    ("md", "p-2"),
                    ("lg", "p-3"),
                    ("xl", "p-4"),
                ]),
                rounded: style_map(&[
                    ("none", "rounded-none"),
                    ("sm", "rounded-sm"),
                    ("md", "rounded-md"),
                    ("lg", "rounded-lg"),
                    ("full", "rounded-full"),
                ]),
            },
            icon: SizedSection::new("", SPINNER_SIZES),
            content: BaseSection::new(""),
            loading: SizedSection::new("animate-spin", SPINNER_SIZES),
        }
    }
}

impl MergeTheme for ButtonTheme {
    type Override = ButtonThemeOverride;

    fn merge(&self, custom: Option<&ButtonThemeOverride>) -> Self {
        let Some(custom) = custom else {
            return self.clone();
        };
        let root = custom.root.as_ref();

        Self {
            root: ButtonRootTheme {
                base: pick(&self.root.base, root.and_then(|r| r.base.as_ref())),
                variants: overlay(&self.root.variants, root.and_then(|r| r.variants.as_ref())),
                sizes: overlay(&self.root.sizes, root.and_then(|r| r.sizes.as_ref())),
                icon_only_sizes: overlay(
                    &self.root.icon_only_sizes,
                    root.and_then(|r| r.icon_only_sizes.as_ref()),
                ),
                rounded: overlay(&self.root.rounded, root.and_then(|r| r.rounded.as_ref())),
            },
            icon: self.icon.merge(custom.icon.as_ref()),
            content: self.content.merge(custom.content.as_ref()),
            loading: self.loading.merge(custom.loading.as_ref()),
        }
    }
}

/// Resolved button props that affect styling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub rounded: ButtonRounded,
    pub icon_only: bool,
    pub full_width: bool,
    pub loading: bool,
    pub custom_classes: Option<String>,
}

/// Classes for the `<button>` element
pub fn button_classes(style: &ButtonStyle, theme: &ButtonTheme) -> String {
    let size = if style.icon_only {
        lookup(&theme.root.icon_only_sizes, style.size.as_str())
    } else {
        lookup(&theme.root.sizes, style.size.as_str())
    };

    ClassList::new()
        .push(&theme.root.base)
        .push(lookup(&theme.root.variants, style.variant.as_str()))
        .push(size)
        .push(lookup(&theme.root.rounded, style.rounded.as_str()))
        .push_if(style.full_width, "w-full")
        .push_if(style.loading, "cursor-wait")
        .push_opt(style.custom_classes.as_deref())
        .build()
}

/// Which side of the label an icon sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconSide {
    Left,
    Right,
}

/// Classes for an icon wrapper; spacing is dropped in icon-only mode
pub fn button_icon_classes(style: &ButtonStyle, side: IconSide, theme: &ButtonTheme) -> String {
    let spacing = match side {
        IconSide::Left => "mr-2",
        IconSide::Right => "ml-2",
    };

    ClassList::new()
        .push("inline-flex shrink-0")
        .push(&theme.icon.base)
        .push(theme.icon.size(style.size.as_str()))
        .push_if(!style.icon_only, spacing)
        .build()
}

/// Classes for the content wrapper; hidden (but still laid out) while loading
pub fn button_content_classes(style: &ButtonStyle, theme: &ButtonTheme) -> String {
    ClassList::new()
        .push("inline-flex items-center")
        .push(&theme.content.base)
        .push_if(style.loading, "opacity-0")
        .build()
}

/// Classes for the loading spinner
pub fn button_spinner_classes(style: &ButtonStyle, theme: &ButtonTheme) -> String {
    ClassList::new()
        .push("absolute")
        .push(&theme.loading.base)
        .push(theme.loading.size(style.size.as_str()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(style: ButtonStyle) -> Vec<String> {
        button_classes(&style, &ButtonTheme::default())
            .split(' ')
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn default_button_classes() {
        let c = classes(ButtonStyle::default());
        assert!(c.contains(&"inline-flex".to_string()));
        assert!(c.contains(&"bg-blue-600".to_string()));
        assert!(c.contains(&"text-white".to_string()));
        assert!(c.contains(&"border-transparent".to_string()));
        assert!(c.contains(&"px-4".to_string()));
        assert!(c.contains(&"rounded-md".to_string()));
        assert!(c.contains(&"disabled:opacity-50".to_string()));
    }

    #[test]
    fn variant_classes() {
        let expectations = [
            (ButtonVariant::Secondary, "bg-gray-100"),
            (ButtonVariant::Tertiary, "bg-transparent"),
            (ButtonVariant::Danger, "bg-red-600"),
            (ButtonVariant::Success, "bg-green-600"),
            (ButtonVariant::Warning, "bg-yellow-500"),
        ];
        for (variant, class) in expectations {
            let c = classes(ButtonStyle {
                variant,
                ..Default::default()
            });
            assert!(c.contains(&class.to_string()), "{variant} missing {class}");
        }
    }

    #[test]
    fn size_classes() {
        let c = classes(ButtonStyle {
            size: ButtonSize::Xs,
            ..Default::default()
        });
        assert!(c.contains(&"px-2".to_string()));
        assert!(c.contains(&"py-1".to_string()));
        assert!(c.contains(&"text-xs".to_string()));
    }

    #[test]
    fn icon_only_uses_square_padding() {
        let c = classes(ButtonStyle {
            size: ButtonSize::Lg,
            icon_only: true,
            ..Default::default()
        });
        assert!(c.contains(&"p-3".to_string()));
        assert!(!c.contains(&"px-6".to_string()));
    }

    #[test]
    fn rounded_and_full_width() {
        let c = classes(ButtonStyle {
            rounded: ButtonRounded::Full,
            full_width: true,
            ..Default::default()
        });
        assert!(c.contains(&"rounded-full".to_string()));
        assert!(!c.contains(&"rounded-md".to_string()));
        assert!(c.contains(&"w-full".to_string()));
    }

    #[test]
    fn custom_classes_override_size() {
        let c = classes(ButtonStyle {
            custom_classes: Some("px-10 my-button".to_string()),
            ..Default::default()
        });
        assert!(c.contains(&"px-10".to_string()));
        assert!(!c.contains(&"px-4".to_string()));
        assert!(c.contains(&"my-button".to_string()));
    }

    #[test]
    fn icon_spacing_dropped_when_icon_only() {
        let theme = ButtonTheme::default();
        let with_label = ButtonStyle::default();
        assert!(button_icon_classes(&with_label, IconSide::Left, &theme).contains("mr-2"));
        assert!(button_icon_classes(&with_label, IconSide::Right, &theme).contains("ml-2"));

        let icon_only = ButtonStyle {
            icon_only: true,
            ..Default::default()
        };
        assert!(!button_icon_classes(&icon_only, IconSide::Left, &theme).contains("mr-2"));
    }

    #[test]
    fn spinner_and_content_while_loading() {
        let theme = ButtonTheme::default();
        let style = ButtonStyle {
            size: ButtonSize::Xs,
            loading: true,
            ..Default::default()
        };
        let spinner = button_spinner_classes(&style, &theme);
        assert!(spinner.contains("animate-spin"));
        assert!(spinner.contains("w-3"));
        assert!(spinner.contains("h-3"));
        assert!(button_content_classes(&style, &theme).contains("opacity-0"));
    }

    #[test]
    fn merge_replaces_base_and_one_variant() {
        let custom = ButtonThemeOverride {
            root: Some(ButtonRootOverride {
                base: Some("custom-base-class".to_string()),
                variants: Some(style_map(&[("primary", "custom-primary-class")])),
                ..Default::default()
            }),
            ..Default::default()
        };
        let default = ButtonTheme::default();
        let merged = default.merge(Some(&custom));

        assert_eq!(merged.root.base, "custom-base-class");
        assert_eq!(lookup(&merged.root.variants, "primary"), "custom-primary-class");
        assert_eq!(merged.root.variants["danger"], default.root.variants["danger"]);
        assert_eq!(merged.loading, default.loading);
    }

    #[test]
    fn merge_without_override_is_identity() {
        let default = ButtonTheme::default();
        assert_eq!(default.merge(None), default);
        assert_eq!(default.merge(Some(&ButtonThemeOverride::default())), default);
    }

    #[test]
    fn option_names_parse() {
        assert_eq!("danger".parse::<ButtonVariant>().unwrap(), ButtonVariant::Danger);
        assert_eq!("xl".parse::<ButtonSize>().unwrap(), ButtonSize::Xl);
        assert_eq!("submit".parse::<ButtonType>().unwrap(), ButtonType::Submit);
        assert!("huge".parse::<ButtonSize>().is_err());
        assert_eq!(ButtonVariant::ALL.len(), 6);
    }
}
