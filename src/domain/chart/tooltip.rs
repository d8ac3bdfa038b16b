use derive_more::Display;

use super::value_objects::{Rect, clamp_floor};

pub const TOOLTIP_WIDTH: f64 = 390.0;
pub const TOOLTIP_MARGIN: f64 = 12.0;
/// Static guess of the panel height; the panel is never measured.
pub const ESTIMATED_HEIGHT: f64 = 190.0;
pub const ANCHOR_GAP: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PanelSide {
    #[display(fmt = "above")]
    Above,
    #[display(fmt = "below")]
    Below,
}

/// Where the desktop tooltip panel goes, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub side: PanelSide,
}

impl PanelPlacement {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Centers the panel over the anchor, keeps it inside the viewport
/// horizontally and flips it below the anchor when there is no room above.
pub fn place_desktop(anchor: Rect, viewport_width: f64) -> PanelPlacement {
    let centered = anchor.left + anchor.width / 2.0 - TOOLTIP_WIDTH / 2.0;
    let left = clamp_floor(
        centered,
        TOOLTIP_MARGIN,
        viewport_width - TOOLTIP_WIDTH - TOOLTIP_MARGIN,
    );

    let above = anchor.top - ANCHOR_GAP;
    let (top, side) = if above - ESTIMATED_HEIGHT < TOOLTIP_MARGIN {
        (anchor.bottom() + ANCHOR_GAP, PanelSide::Below)
    } else {
        (above - ESTIMATED_HEIGHT, PanelSide::Above)
    };

    PanelPlacement { left, top, width: TOOLTIP_WIDTH, side }
}

/// Access to the page's scroll overflow setting.
pub trait OverflowHost {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// Locks page scrolling while alive and restores the previous overflow
/// value exactly when dropped.
pub struct ScrollLock<H: OverflowHost> {
    host: H,
    previous: String,
}

impl<H: OverflowHost> ScrollLock<H> {
    pub fn acquire(host: H) -> Self {
        let previous = host.overflow();
        host.set_overflow("hidden");
        Self { host, previous }
    }

    pub fn previous(&self) -> &str {
        &self.previous
    }
}

impl<H: OverflowHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.host.set_overflow(&self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_below_near_top_edge() {
        let anchor = Rect::new(500.0, 60.0, 16.0, 100.0);
        let placement = place_desktop(anchor, 1280.0);
        assert_eq!(placement.side, PanelSide::Below);
        assert_eq!(placement.top, 160.0 + ANCHOR_GAP);
    }

    #[test]
    fn stays_above_with_room() {
        let anchor = Rect::new(500.0, 400.0, 16.0, 100.0);
        let placement = place_desktop(anchor, 1280.0);
        assert_eq!(placement.side, PanelSide::Above);
        assert_eq!(placement.top, 400.0 - ANCHOR_GAP - ESTIMATED_HEIGHT);
        assert_eq!(placement.left, 508.0 - TOOLTIP_WIDTH / 2.0);
    }
}
