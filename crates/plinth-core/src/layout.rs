//! Layout tokens: stack alignment, spacing scale and box sizing.
//!
//! Spacing tokens sit on a 4px base unit and map onto the Tailwind spacing
//! scale (`sm` is `1`, i.e. 4px; `base` is `2`, i.e. 8px).

use crate::style::ClassList;

/// Base spacing unit in pixels
pub const BASE_UNIT: u32 = 4;

/// Tailwind padding steps accepted by [`is_valid_padding`]
const PADDING_SCALE: &[&str] = &[
    "0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11",
    "12", "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60", "64",
    "72", "80", "96",
];

const FIXED_STEPS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "8", "10", "12", "16", "20", "24", "32", "40", "48", "56",
    "64", "72", "80", "96",
];

named_enum! {
    /// Cross-axis alignment
    pub enum Align ("alignment") {
        Start => "start",
        Center => "center",
        End => "end",
        #[default]
        Stretch => "stretch",
        Baseline => "baseline",
    }
}

impl Align {
    pub fn class(&self) -> &'static str {
        match self {
            Align::Start => "items-start",
            Align::Center => "items-center",
            Align::End => "items-end",
            Align::Stretch => "items-stretch",
            Align::Baseline => "items-baseline",
        }
    }
}

named_enum! {
    /// Main-axis distribution
    pub enum Justify ("justify") {
        #[default]
        Start => "start",
        Center => "center",
        End => "end",
        Between => "between",
        Around => "around",
        Evenly => "evenly",
    }
}

impl Justify {
    pub fn class(&self) -> &'static str {
        match self {
            Justify::Start => "justify-start",
            Justify::Center => "justify-center",
            Justify::End => "justify-end",
            Justify::Between => "justify-between",
            Justify::Around => "justify-around",
            Justify::Evenly => "justify-evenly",
        }
    }
}

named_enum! {
    /// Semantic spacing scale
    pub enum Spacing ("spacing") {
        None => "none",
        Px => "px",
        Xs => "xs",
        Sm => "sm",
        #[default]
        Base => "base",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
        Xl3 => "3xl",
        Xl4 => "4xl",
        Xl5 => "5xl",
        Xl6 => "6xl",
        Xl7 => "7xl",
        Xl8 => "8xl",
        Xl9 => "9xl",
        Xl10 => "10xl",
    }
}

impl Spacing {
    /// Step on the Tailwind spacing scale
    pub fn scale(&self) -> &'static str {
        match self {
            Spacing::None => "0",
            Spacing::Px => "px",
            Spacing::Xs => "0.5",
            Spacing::Sm => "1",
            Spacing::Base => "2",
            Spacing::Md => "3",
            Spacing::Lg => "4",
            Spacing::Xl => "5",
            Spacing::Xl2 => "6",
            Spacing::Xl3 => "8",
            Spacing::Xl4 => "10",
            Spacing::Xl5 => "12",
            Spacing::Xl6 => "16",
            Spacing::Xl7 => "20",
            Spacing::Xl8 => "24",
            Spacing::Xl9 => "32",
            Spacing::Xl10 => "40",
        }
    }

    /// Size in pixels
    pub fn pixels(&self) -> u32 {
        match self {
            Spacing::None => 0,
            Spacing::Px => 1,
            Spacing::Xs => BASE_UNIT / 2,
            Spacing::Sm => BASE_UNIT,
            Spacing::Base => BASE_UNIT * 2,
            Spacing::Md => BASE_UNIT * 3,
            Spacing::Lg => BASE_UNIT * 4,
            Spacing::Xl => BASE_UNIT * 5,
            Spacing::Xl2 => BASE_UNIT * 6,
            Spacing::Xl3 => BASE_UNIT * 8,
            Spacing::Xl4 => BASE_UNIT * 10,
            Spacing::Xl5 => BASE_UNIT * 12,
            Spacing::Xl6 => BASE_UNIT * 16,
            Spacing::Xl7 => BASE_UNIT * 20,
            Spacing::Xl8 => BASE_UNIT * 24,
            Spacing::Xl9 => BASE_UNIT * 32,
            Spacing::Xl10 => BASE_UNIT * 40,
        }
    }

    pub fn gap_class(&self) -> String {
        format!("gap-{}", self.scale())
    }
}

named_enum! {
    /// Which box property a spacing applies to
    pub enum SpacingKind ("spacing type") {
        #[default]
        Padding => "padding",
        Margin => "margin",
        Gap => "gap",
    }
}

named_enum! {
    /// Sides a padding or margin applies to
    pub enum SpacingSide ("spacing direction") {
        #[default]
        All => "all",
        X => "x",
        Y => "y",
        Top => "t",
        Right => "r",
        Bottom => "b",
        Left => "l",
    }
}

/// Class for `spacing` applied as `kind` on `side`; gaps ignore the side
pub fn spacing_class(spacing: Spacing, kind: SpacingKind, side: SpacingSide) -> String {
    let prefix = match kind {
        SpacingKind::Gap => return spacing.gap_class(),
        SpacingKind::Padding => "p",
        SpacingKind::Margin => "m",
    };
    let side = match side {
        SpacingSide::All => "",
        other => other.as_str(),
    };
    format!("{}{}-{}", prefix, side, spacing.scale())
}

/// Whether `value` is a step on the Tailwind padding scale
pub fn is_valid_padding(value: &str) -> bool {
    PADDING_SCALE.contains(&value)
}

/// `w-*` class for a width value; `auto` and unknown values give `None`
pub fn width_class(value: &str) -> Option<String> {
    match value {
        "full" | "fit" | "min" | "max" => Some(format!("w-{}", value)),
        v if FIXED_STEPS.contains(&v) => Some(format!("w-{}", v)),
        _ => None,
    }
}

/// `h-*` class for a height value; `auto` and unknown values give `None`
pub fn height_class(value: &str) -> Option<String> {
    match value {
        "full" | "fit" | "min" | "max" | "screen" => Some(format!("h-{}", value)),
        v if FIXED_STEPS.contains(&v) => Some(format!("h-{}", v)),
        _ => None,
    }
}

/// `p-*` class for a padding step; `0` and invalid steps give `None`
pub fn padding_class(value: &str) -> Option<String> {
    (value != "0" && is_valid_padding(value)).then(|| format!("p-{}", value))
}

named_enum! {
    pub enum StackDirection ("stack direction") {
        #[default]
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

/// Props shared by horizontal and vertical stacks
#[derive(Debug, Clone, PartialEq)]
pub struct StackStyle {
    pub spacing: Spacing,
    pub align: Align,
    pub justify: Justify,
    pub width: String,
    pub height: String,
    pub padding: String,
    pub wrap: bool,
    pub custom_classes: Option<String>,
}

impl Default for StackStyle {
    fn default() -> Self {
        Self {
            spacing: Spacing::Base,
            align: Align::Stretch,
            justify: Justify::Start,
            width: "auto".to_string(),
            height: "auto".to_string(),
            padding: "0".to_string(),
            wrap: false,
            custom_classes: None,
        }
    }
}

/// Classes for a flex stack.
///
/// Alignment, justification, sizing, padding and wrapping only add a class
/// when they differ from their default.
pub fn stack_classes(direction: StackDirection, style: &StackStyle) -> String {
    let defaults = StackStyle::default();
    let axis = match direction {
        StackDirection::Horizontal => "flex-row",
        StackDirection::Vertical => "flex-col",
    };

    ClassList::new()
        .push("flex")
        .push(axis)
        .push(style.spacing.gap_class())
        .push_if(style.align != defaults.align, style.align.class())
        .push_if(style.justify != defaults.justify, style.justify.class())
        .push_opt(width_class(&style.width))
        .push_opt(height_class(&style.height))
        .push_opt(padding_class(&style.padding))
        .push_if(style.wrap, "flex-wrap")
        .push_opt(style.custom_classes.as_deref())
        .build()
}

/// Full-viewport page container
pub const SCREEN_VIEW_CLASSES: &str = "relative flex flex-col w-full min-h-screen overflow-hidden";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale() {
        assert_eq!(Spacing::Base.pixels(), 8);
        assert_eq!(Spacing::Xs.pixels(), 2);
        assert_eq!(Spacing::Xl10.pixels(), 160);
        assert_eq!(Spacing::Xl2.gap_class(), "gap-6");
        assert_eq!("2xl".parse::<Spacing>().unwrap(), Spacing::Xl2);
        assert!("11xl".parse::<Spacing>().is_err());
    }

    #[test]
    fn spacing_classes() {
        assert_eq!(spacing_class(Spacing::Lg, SpacingKind::Padding, SpacingSide::All), "p-4");
        assert_eq!(spacing_class(Spacing::Px, SpacingKind::Margin, SpacingSide::X), "mx-px");
        assert_eq!(spacing_class(Spacing::Xs, SpacingKind::Padding, SpacingSide::Top), "pt-0.5");
        assert_eq!(spacing_class(Spacing::None, SpacingKind::Gap, SpacingSide::Left), "gap-0");
    }

    #[test]
    fn padding_validation() {
        assert!(is_valid_padding("0"));
        assert!(is_valid_padding("2.5"));
        assert!(is_valid_padding("96"));
        assert!(!is_valid_padding("13"));
        assert!(!is_valid_padding("p-4"));
        assert_eq!(padding_class("0"), None);
        assert_eq!(padding_class("6").as_deref(), Some("p-6"));
    }

    #[test]
    fn sizing() {
        assert_eq!(width_class("auto"), None);
        assert_eq!(width_class("full").as_deref(), Some("w-full"));
        assert_eq!(height_class("screen").as_deref(), Some("h-screen"));
        assert_eq!(width_class("screen"), None);
        assert_eq!(height_class("96").as_deref(), Some("h-96"));
    }

    #[test]
    fn default_stack_has_no_optional_classes() {
        assert_eq!(
            stack_classes(StackDirection::Horizontal, &StackStyle::default()),
            "flex flex-row gap-2"
        );
        assert_eq!(
            stack_classes(StackDirection::Vertical, &StackStyle::default()),
            "flex flex-col gap-2"
        );
    }

    #[test]
    fn stack_with_options() {
        let style = StackStyle {
            spacing: Spacing::Xl2,
            align: Align::Center,
            justify: Justify::Between,
            height: "screen".to_string(),
            padding: "4".to_string(),
            wrap: true,
            custom_classes: Some("gap-8".to_string()),
            ..Default::default()
        };
        assert_eq!(
            stack_classes(StackDirection::Vertical, &style),
            "flex flex-col items-center justify-between h-screen p-4 flex-wrap gap-8"
        );
    }
}
