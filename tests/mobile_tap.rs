use std::collections::HashSet;

use career_candles::domain::career::{CANDLES, CandleRecord};
use career_candles::domain::chart::{
    CandleKey, ChartAction, ChartInteraction, Rect, ViewportClass, layout_chart,
};
use career_candles::domain::story::resolve_story_id;

fn glyph() -> Rect {
    Rect::new(120.0, 300.0, 10.0, 60.0)
}

fn has_story(candle: &CandleRecord, anchors: &HashSet<&str>) -> bool {
    resolve_story_id(candle.year, Some(candle.direction), anchors).is_some()
}

#[test]
fn tap_without_story_only_shows_tooltip() {
    let anchors: HashSet<&str> = HashSet::new();
    let candle = &CANDLES[0];
    let key = CandleKey::new(0, 0);
    let mut state = ChartInteraction::new(ViewportClass::Mobile);

    for _ in 0..3 {
        let action = state.tap_candle(key, candle, glyph(), has_story(candle, &anchors));
        assert_eq!(action, ChartAction::None);
        let hover = state.hover().copied();
        assert!(hover.is_some_and(|h| h.key == key && !h.has_story));
    }
    assert_eq!(state.open_story_from_tooltip(), ChartAction::None);
    assert!(state.hover().is_some());
}

#[test]
fn second_tap_on_same_candle_navigates() {
    let anchors: HashSet<&str> = ["story-2020"].into_iter().collect();
    let candle = &CANDLES[1];
    let key = CandleKey::new(0, 1);
    let mut state = ChartInteraction::new(ViewportClass::Mobile);
    let story = has_story(candle, &anchors);

    assert_eq!(state.tap_candle(key, candle, glyph(), story), ChartAction::None);
    assert_eq!(state.tap_candle(key, candle, glyph(), story), ChartAction::Navigate(candle));
}

#[test]
fn tapping_another_candle_moves_the_tooltip() {
    let layout = layout_chart(CANDLES, ViewportClass::Mobile);
    let first = layout.columns[0].candles[0];
    let second = layout.columns[1].candles[0];
    let mut state = ChartInteraction::new(ViewportClass::Mobile);

    state.tap_candle(first.key, first.record, glyph(), true);
    let action = state.tap_candle(second.key, second.record, glyph(), true);

    assert_eq!(action, ChartAction::None);
    assert_eq!(state.hover().map(|h| h.key), Some(second.key));
}

#[test]
fn open_story_button_navigates_and_closes() {
    let candle = &CANDLES[2];
    let mut state = ChartInteraction::new(ViewportClass::Mobile);
    state.tap_candle(CandleKey::new(1, 0), candle, glyph(), true);

    assert_eq!(state.open_story_from_tooltip(), ChartAction::Navigate(candle));
    assert!(state.hover().is_none());
}

#[test]
fn dismiss_closes_sheet() {
    let mut state = ChartInteraction::new(ViewportClass::Mobile);
    state.tap_candle(CandleKey::new(1, 0), &CANDLES[2], glyph(), true);
    state.dismiss();
    assert!(state.hover().is_none());
}

#[test]
fn desktop_click_and_keyboard() {
    let candle = &CANDLES[3];
    let mut state = ChartInteraction::new(ViewportClass::Desktop);

    assert_eq!(state.click_candle(candle, true), ChartAction::Navigate(candle));
    assert_eq!(state.click_candle(candle, false), ChartAction::None);
    assert_eq!(state.activate_with_key("Enter", candle, true), ChartAction::Navigate(candle));
    assert_eq!(state.activate_with_key(" ", candle, true), ChartAction::Navigate(candle));
    assert_eq!(state.activate_with_key("Tab", candle, true), ChartAction::None);
}
