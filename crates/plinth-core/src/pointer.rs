//! Pointer-driven dynamic styles.
//!
//! Elements lit "from the pointer" get a gradient angle and two drop-shadow
//! offsets derived from where the pointer sits relative to their centre.
//! The values are exposed as CSS custom properties:
//!
//! | Property | Meaning |
//! |---|---|
//! | `--gradient-angle` | angle from centre to pointer, plus 180 degrees |
//! | `--shadow-x`, `--shadow-y` | primary shadow, pointing away from the pointer |
//! | `--shadow-x2`, `--shadow-y2` | secondary shadow, pointing towards it |
//!
//! Pointer and rect must share a coordinate space (client coordinates in the
//! desktop renderer).

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Styles used before the element has been measured
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackStyles {
    pub gradient_angle: String,
    pub shadow_x: String,
    pub shadow_y: String,
    pub shadow_x2: String,
    pub shadow_y2: String,
}

impl Default for FallbackStyles {
    fn default() -> Self {
        Self {
            gradient_angle: "45deg".to_string(),
            shadow_x: "0px".to_string(),
            shadow_y: "-2px".to_string(),
            shadow_x2: "0px".to_string(),
            shadow_y2: "-1px".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DynamicStyleOptions {
    pub border_radius: String,
    pub shadow_intensity: f64,
    pub shadow_intensity_secondary: f64,
    pub fallback: FallbackStyles,
}

impl Default for DynamicStyleOptions {
    fn default() -> Self {
        Self {
            border_radius: "9999px !important".to_string(),
            shadow_intensity: 3.0,
            shadow_intensity_secondary: 1.5,
            fallback: FallbackStyles::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DynamicStyles {
    pub border_radius: String,
    pub gradient_angle: String,
    pub shadow_x: String,
    pub shadow_y: String,
    pub shadow_x2: String,
    pub shadow_y2: String,
}

impl DynamicStyles {
    /// Inline `style` attribute value
    pub fn to_style(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DynamicStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "border-radius: {}; --gradient-angle: {}; --shadow-x: {}; --shadow-y: {}; --shadow-x2: {}; --shadow-y2: {};",
            self.border_radius,
            self.gradient_angle,
            self.shadow_x,
            self.shadow_y,
            self.shadow_x2,
            self.shadow_y2
        )
    }
}

/// Compute the dynamic styles for an element at `rect` given the pointer.
///
/// Without a rect the fallback styles are returned.
pub fn dynamic_styles(pointer: Point, rect: Option<Rect>, options: &DynamicStyleOptions) -> DynamicStyles {
    let Some(rect) = rect else {
        let fallback = &options.fallback;
        return DynamicStyles {
            border_radius: options.border_radius.clone(),
            gradient_angle: fallback.gradient_angle.clone(),
            shadow_x: fallback.shadow_x.clone(),
            shadow_y: fallback.shadow_y.clone(),
            shadow_x2: fallback.shadow_x2.clone(),
            shadow_y2: fallback.shadow_y2.clone(),
        };
    };

    let center = rect.center();
    let angle = (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees();

    let (sin, cos) = angle.to_radians().sin_cos();
    let (sin2, cos2) = (angle + 180.0).to_radians().sin_cos();

    DynamicStyles {
        border_radius: options.border_radius.clone(),
        gradient_angle: format!("{}deg", clean(angle + 180.0)),
        shadow_x: px(-cos * options.shadow_intensity),
        shadow_y: px(-sin * options.shadow_intensity),
        shadow_x2: px(-cos2 * options.shadow_intensity_secondary),
        shadow_y2: px(-sin2 * options.shadow_intensity_secondary),
    }
}

// -0 renders as "0"
fn clean(value: f64) -> f64 {
    value + 0.0
}

fn px(value: f64) -> String {
    format!("{}px", clean(value))
}
