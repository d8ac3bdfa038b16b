use super::value_objects::{CandleKey, Point, Rect, ViewportClass};
use crate::domain::career::CandleRecord;

/// The candle currently hovered (desktop) or tapped (mobile).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    pub key: CandleKey,
    pub candle: &'static CandleRecord,
    /// Glyph bounds in client coordinates.
    pub rect: Rect,
    /// Whether a story section resolved for this candle at hover time.
    pub has_story: bool,
}

/// Side effect requested by an interaction; the caller performs it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartAction {
    None,
    Navigate(&'static CandleRecord),
}

impl ChartAction {
    pub fn is_navigate(&self) -> bool {
        matches!(self, ChartAction::Navigate(_))
    }
}

/// Per-chart pointer state. Each chart instance owns one.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInteraction {
    class: ViewportClass,
    hover: Option<HoverState>,
    crosshair: Option<Point>,
}

impl ChartInteraction {
    pub fn new(class: ViewportClass) -> Self {
        Self { class, hover: None, crosshair: None }
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    pub fn crosshair(&self) -> Option<Point> {
        self.crosshair
    }

    /// Switching between mobile and desktop drops all pointer state.
    pub fn set_viewport_class(&mut self, class: ViewportClass) {
        if self.class != class {
            self.class = class;
            self.clear();
        }
    }

    /// Pointer moved over the plot (desktop only).
    pub fn pointer_move(&mut self, pointer: Point, plot: Rect) {
        if self.class.is_mobile() {
            return;
        }
        self.crosshair = Some(plot.local_clamped(pointer));
    }

    /// Pointer entered a glyph (desktop only); the crosshair snaps to its center.
    pub fn pointer_enter_candle(
        &mut self,
        key: CandleKey,
        candle: &'static CandleRecord,
        rect: Rect,
        plot: Rect,
        has_story: bool,
    ) {
        if self.class.is_mobile() {
            return;
        }
        self.hover = Some(HoverState { key, candle, rect, has_story });
        self.crosshair = Some(plot.local_clamped(rect.center()));
    }

    pub fn pointer_leave_candle(&mut self) {
        if self.class.is_mobile() {
            return;
        }
        self.hover = None;
    }

    pub fn pointer_leave_plot(&mut self) {
        self.clear();
    }

    /// Mobile tap: the first tap opens the tooltip, a second tap on the same
    /// candle jumps to its story when one exists.
    pub fn tap_candle(
        &mut self,
        key: CandleKey,
        candle: &'static CandleRecord,
        rect: Rect,
        has_story: bool,
    ) -> ChartAction {
        let same_candle = self.hover.as_ref().is_some_and(|h| h.key == key);
        if has_story && same_candle {
            return ChartAction::Navigate(candle);
        }
        self.hover = Some(HoverState { key, candle, rect, has_story });
        ChartAction::None
    }

    /// Desktop click navigates straight away.
    pub fn click_candle(&mut self, candle: &'static CandleRecord, has_story: bool) -> ChartAction {
        if has_story { ChartAction::Navigate(candle) } else { ChartAction::None }
    }

    /// Enter or Space on a focused glyph.
    pub fn activate_with_key(
        &mut self,
        key_name: &str,
        candle: &'static CandleRecord,
        has_story: bool,
    ) -> ChartAction {
        match key_name {
            "Enter" | " " => self.click_candle(candle, has_story),
            _ => ChartAction::None,
        }
    }

    /// "Open story" button inside the tooltip.
    pub fn open_story_from_tooltip(&mut self) -> ChartAction {
        match self.hover {
            Some(hover) if hover.has_story => {
                self.hover = None;
                ChartAction::Navigate(hover.candle)
            }
            _ => ChartAction::None,
        }
    }

    /// Scrim or close button.
    pub fn dismiss(&mut self) {
        self.clear();
    }

    /// Called after a navigation completes.
    pub fn navigated(&mut self) {
        self.hover = None;
    }

    fn clear(&mut self) {
        self.hover = None;
        self.crosshair = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::career::CANDLES;

    #[test]
    fn mobile_ignores_pointer_moves() {
        let mut state = ChartInteraction::new(ViewportClass::Mobile);
        state.pointer_move(Point::new(5.0, 5.0), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(state.crosshair().is_none());
    }

    #[test]
    fn class_change_clears_state() {
        let mut state = ChartInteraction::new(ViewportClass::Desktop);
        let plot = Rect::new(0.0, 0.0, 400.0, 340.0);
        state.pointer_enter_candle(
            CandleKey::new(0, 0),
            &CANDLES[0],
            Rect::new(10.0, 10.0, 16.0, 60.0),
            plot,
            true,
        );
        assert!(state.hover().is_some());
        state.set_viewport_class(ViewportClass::Mobile);
        assert!(state.hover().is_none());
        assert!(state.crosshair().is_none());
    }

    #[test]
    fn open_story_requires_story() {
        let mut state = ChartInteraction::new(ViewportClass::Mobile);
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        state.tap_candle(CandleKey::new(1, 0), &CANDLES[2], rect, false);
        assert_eq!(state.open_story_from_tooltip(), ChartAction::None);
        assert!(state.hover().is_some());
    }
}
