//! Selection indicator drawn under (or around) the active tab.
//!
//! Geometry is relative to the tab list, so callers pass both bounding rects
//! as reported by the renderer.

use std::fmt;

use super::{Orientation, TabsVariant};
use crate::pointer::Rect;
use crate::style::merge_classes;

const INDICATOR_BASE: &str = "absolute pointer-events-none";
const INDICATOR_ANIMATED: &str = "absolute transition-all duration-300 ease-in-out pointer-events-none";

pub fn indicator_classes(variant: TabsVariant, orientation: Orientation, animated: bool) -> String {
    let base = if animated { INDICATOR_ANIMATED } else { INDICATOR_BASE };

    match variant {
        TabsVariant::Underline => {
            let placement = if orientation.is_horizontal() {
                "bottom-0 h-1"
            } else {
                "left-0 w-1 h-auto"
            };
            merge_classes([base, "bg-blue-600", placement])
        }
        _ => merge_classes([base, "bg-primary/10 rounded-md backdrop-blur-sm"]),
    }
}

/// Absolute placement in pixels; unset sides are omitted
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorStyle {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub width: f64,
    pub height: f64,
}

impl IndicatorStyle {
    pub fn to_style(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IndicatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(left) = self.left {
            write!(f, "left: {}px; ", left)?;
        }
        if let Some(top) = self.top {
            write!(f, "top: {}px; ", top)?;
        }
        if let Some(bottom) = self.bottom {
            write!(f, "bottom: {}px; ", bottom)?;
        }
        write!(f, "width: {}px; height: {}px;", self.width, self.height)
    }
}

/// Indicator placement, or `None` while either rect is unknown
pub fn indicator_style(
    variant: TabsVariant,
    orientation: Orientation,
    list_rect: Option<Rect>,
    active_rect: Option<Rect>,
) -> Option<IndicatorStyle> {
    let (list, active) = (list_rect?, active_rect?);
    let left = active.left - list.left;
    let top = active.top - list.top;

    let style = match (variant, orientation) {
        (TabsVariant::Underline, Orientation::Vertical) => IndicatorStyle {
            left: Some(0.0),
            top: Some(top),
            bottom: None,
            width: 6.0,
            height: active.height,
        },
        (TabsVariant::Underline, Orientation::Horizontal) => IndicatorStyle {
            left: Some(left),
            top: None,
            bottom: Some(0.0),
            width: active.width,
            height: 4.0,
        },
        _ => IndicatorStyle {
            left: Some(left),
            top: Some(top),
            bottom: None,
            width: active.width,
            height: active.height,
        },
    };
    Some(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects() -> (Rect, Rect) {
        (Rect::new(10.0, 20.0, 300.0, 40.0), Rect::new(110.0, 24.0, 80.0, 32.0))
    }

    #[test]
    fn underline_horizontal_is_bottom_bar() {
        let (list, active) = rects();
        let style = indicator_style(TabsVariant::Underline, Orientation::Horizontal, Some(list), Some(active)).unwrap();
        assert_eq!(style.left, Some(100.0));
        assert_eq!(style.bottom, Some(0.0));
        assert_eq!(style.width, 80.0);
        assert_eq!(style.height, 4.0);
        assert_eq!(style.to_style(), "left: 100px; bottom: 0px; width: 80px; height: 4px;");
    }

    #[test]
    fn underline_vertical_is_left_bar() {
        let (list, active) = rects();
        let style = indicator_style(TabsVariant::Underline, Orientation::Vertical, Some(list), Some(active)).unwrap();
        assert_eq!(style.left, Some(0.0));
        assert_eq!(style.top, Some(4.0));
        assert_eq!(style.width, 6.0);
        assert_eq!(style.height, 32.0);
    }

    #[test]
    fn other_variants_cover_the_tab() {
        let (list, active) = rects();
        let style = indicator_style(TabsVariant::Pills, Orientation::Horizontal, Some(list), Some(active)).unwrap();
        assert_eq!((style.left, style.top), (Some(100.0), Some(4.0)));
        assert_eq!((style.width, style.height), (80.0, 32.0));
    }

    #[test]
    fn hidden_without_geometry() {
        let (list, _) = rects();
        assert!(indicator_style(TabsVariant::Default, Orientation::Horizontal, Some(list), None).is_none());
    }

    #[test]
    fn classes() {
        let underline = indicator_classes(TabsVariant::Underline, Orientation::Vertical, false);
        assert_eq!(underline, "absolute pointer-events-none bg-blue-600 left-0 w-1 h-auto");

        let pills = indicator_classes(TabsVariant::Pills, Orientation::Horizontal, true);
        assert!(pills.contains("transition-all"));
        assert!(pills.contains("rounded-md"));
    }
}
