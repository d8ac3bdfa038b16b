use derive_more::Display;
use serde::Serialize;
use strum::{AsRefStr, EnumString};

/// Widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Glyphs never come closer than this to the plot's top or bottom edge.
pub const EDGE_PADDING: f64 = 10.0;

/// Value Object - responsive size class
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    #[display(fmt = "mobile")]
    #[strum(serialize = "mobile")]
    Mobile,
    #[display(fmt = "desktop")]
    #[strum(serialize = "desktop")]
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT { Self::Mobile } else { Self::Desktop }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile)
    }

    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics::for_class(*self)
    }
}

/// Value Object - every size constant the chart depends on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutMetrics {
    pub plot_height: f64,
    pub axis_width: f64,
    pub body_scale: f64,
    pub candle_width: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    /// Horizontal split between the up and down candle of one year.
    pub per_year_offset: f64,
    /// Vertical split around the shared baseline.
    pub up_down_offset: f64,
    /// Upper bound for the clickable glyph box.
    pub glyph_max_width: f64,
}

impl LayoutMetrics {
    pub const MOBILE: LayoutMetrics = LayoutMetrics {
        plot_height: 250.0,
        axis_width: 74.0,
        body_scale: 0.85,
        candle_width: 10.0,
        wick_top: 10.0,
        wick_bottom: 10.0,
        per_year_offset: 7.0,
        up_down_offset: 7.0,
        glyph_max_width: 56.0,
    };

    pub const DESKTOP: LayoutMetrics = LayoutMetrics {
        plot_height: 340.0,
        axis_width: 165.0,
        body_scale: 1.35,
        candle_width: 16.0,
        wick_top: 14.0,
        wick_bottom: 14.0,
        per_year_offset: 18.0,
        up_down_offset: 12.0,
        glyph_max_width: 70.0,
    };

    pub fn for_class(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Mobile => Self::MOBILE,
            ViewportClass::Desktop => Self::DESKTOP,
        }
    }
}

/// Value Object - screen point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Value Object - axis-aligned rectangle in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Converts a client point into this rectangle's local space,
    /// clamped to `[0, width] x [0, height]`.
    pub fn local_clamped(&self, client: Point) -> Point {
        Point::new(
            clamp_floor(client.x - self.left, 0.0, self.width),
            clamp_floor(client.y - self.top, 0.0, self.height),
        )
    }
}

/// Identifies one glyph: year column and slot within that year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CandleKey {
    pub column: usize,
    pub slot: usize,
}

impl CandleKey {
    pub fn new(column: usize, slot: usize) -> Self {
        Self { column, slot }
    }
}

/// `max(min, min(max, n))`: the lower bound wins when the range is empty.
/// Unlike `f64::clamp` this never panics on `min > max`.
pub fn clamp_floor(n: f64, min: f64, max: f64) -> f64 {
    n.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive_for_mobile() {
        assert_eq!(ViewportClass::from_width(767.9), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Desktop);
    }

    #[test]
    fn clamp_floor_prefers_lower_bound_on_empty_range() {
        assert_eq!(clamp_floor(5.0, 10.0, 2.0), 10.0);
        assert_eq!(clamp_floor(50.0, 0.0, 20.0), 20.0);
    }

    #[test]
    fn class_parses_from_str() {
        use std::str::FromStr;
        assert_eq!(ViewportClass::from_str("mobile").ok(), Some(ViewportClass::Mobile));
        assert_eq!(ViewportClass::Desktop.as_ref(), "desktop");
    }
}
