use career_candles::domain::career::CANDLES;
use career_candles::domain::chart::{CandleKey, ChartInteraction, Point, Rect, ViewportClass};
use quickcheck_macros::quickcheck;

fn plot() -> Rect {
    Rect::new(165.0, 120.0, 900.0, 340.0)
}

fn inside(p: Point, plot: Rect) -> bool {
    (0.0..=plot.width).contains(&p.x) && (0.0..=plot.height).contains(&p.y)
}

#[quickcheck]
fn crosshair_stays_in_plot_after_move(x: i16, y: i16) -> bool {
    let mut state = ChartInteraction::new(ViewportClass::Desktop);
    state.pointer_move(Point::new(x as f64, y as f64), plot());
    state.crosshair().is_some_and(|p| inside(p, plot()))
}

#[quickcheck]
fn crosshair_snaps_inside_plot_on_enter(left: i16, top: i16) -> bool {
    let mut state = ChartInteraction::new(ViewportClass::Desktop);
    let glyph = Rect::new(left as f64, top as f64, 16.0, 106.0);
    state.pointer_enter_candle(CandleKey::new(0, 0), &CANDLES[0], glyph, plot(), true);
    state.crosshair().is_some_and(|p| inside(p, plot()))
}

#[test]
fn enter_snaps_to_glyph_center() {
    let mut state = ChartInteraction::new(ViewportClass::Desktop);
    let glyph = Rect::new(300.0, 200.0, 16.0, 100.0);
    state.pointer_enter_candle(CandleKey::new(1, 0), &CANDLES[2], glyph, plot(), false);
    assert_eq!(state.crosshair(), Some(Point::new(143.0, 130.0)));
}

#[test]
fn leaving_candle_keeps_crosshair_but_leaving_plot_clears_it() {
    let mut state = ChartInteraction::new(ViewportClass::Desktop);
    let glyph = Rect::new(300.0, 200.0, 16.0, 100.0);
    state.pointer_enter_candle(CandleKey::new(1, 0), &CANDLES[2], glyph, plot(), false);

    state.pointer_leave_candle();
    assert!(state.hover().is_none());
    assert!(state.crosshair().is_some());

    state.pointer_leave_plot();
    assert!(state.crosshair().is_none());
}

#[test]
fn mobile_never_shows_crosshair() {
    let mut state = ChartInteraction::new(ViewportClass::Mobile);
    state.pointer_move(Point::new(400.0, 300.0), plot());
    let glyph = Rect::new(300.0, 200.0, 16.0, 100.0);
    state.tap_candle(CandleKey::new(0, 0), &CANDLES[0], glyph, true);
    assert!(state.crosshair().is_none());
    assert!(state.hover().is_some());
}
