use career_candles::domain::career::{CANDLES, CandleRecord, Direction, MAX_LEVEL};
use career_candles::domain::chart::{
    EDGE_PADDING, LayoutMetrics, ViewportClass, layout_candle, layout_chart,
};
use insta::assert_snapshot;
use quickcheck_macros::quickcheck;

#[test]
fn desktop_top_candle_is_pinned_to_edge_padding() {
    let record = CandleRecord::new("2025", Direction::Up, 58.0, 4.2, "Top", "");
    let g = layout_candle(&record, &LayoutMetrics::DESKTOP);

    assert_eq!(g.body_height, 78.0);
    assert_eq!(g.total_height, 106.0);
    assert_eq!(g.top, 10.0);
    assert_eq!(g.x_shift, -18.0);
}

#[test]
fn mobile_uses_smaller_metrics() {
    let record = CandleRecord::new("2025", Direction::Up, 58.0, 4.2, "Top", "");
    let g = layout_candle(&record, &LayoutMetrics::MOBILE);

    assert_eq!(g.body_height, 49.0);
    assert_eq!(g.total_height, 69.0);
    assert_eq!(g.top, EDGE_PADDING);
    assert_eq!(g.width, 10.0);
}

#[test]
fn same_year_candles_share_baseline_with_mirrored_offsets() {
    for class in [ViewportClass::Mobile, ViewportClass::Desktop] {
        let layout = layout_chart(CANDLES, class);
        for column in &layout.columns {
            let up = column.candles.iter().find(|c| c.record.direction == Direction::Up);
            let down = column.candles.iter().find(|c| c.record.direction == Direction::Down);
            let (Some(up), Some(down)) = (up, down) else { continue };

            assert_eq!(up.geometry.baseline_y, down.geometry.baseline_y, "{}", column.year);
            assert_eq!(
                up.geometry.vertical_offset(),
                -down.geometry.vertical_offset(),
                "{}",
                column.year
            );
            assert_eq!(up.geometry.x_shift, -down.geometry.x_shift);
            assert!(up.geometry.x_shift < 0.0);
        }
    }
}

#[test]
fn columns_follow_dataset_order() {
    let layout = layout_chart(CANDLES, ViewportClass::Desktop);
    let years: Vec<_> = layout.columns.iter().map(|c| c.year).collect();
    assert_eq!(years, ["2020", "2021", "2022-23", "2024", "2025"]);

    let last = &layout.columns[4];
    assert_eq!(last.candles[0].record.direction, Direction::Down);
    assert_eq!(last.candles[1].record.direction, Direction::Up);
}

#[test]
fn candle_centers_sit_inside_their_column() {
    let layout = layout_chart(CANDLES, ViewportClass::Desktop);
    let plot_width = 1000.0;
    for candle in layout.candles() {
        let x = layout.candle_center_x(candle, plot_width);
        let column_left = candle.key.column as f64 * 200.0;
        assert!(x > column_left && x < column_left + 200.0);
    }
}

#[test]
fn desktop_layout_geometry() {
    let json = serde_json::to_string_pretty(&layout_chart(CANDLES, ViewportClass::Desktop)).unwrap();
    assert_snapshot!("desktop_layout", json);
}

#[test]
fn mobile_layout_geometry() {
    let json = serde_json::to_string_pretty(&layout_chart(CANDLES, ViewportClass::Mobile)).unwrap();
    assert_snapshot!("mobile_layout", json);
}

#[test]
fn out_of_range_level_is_absorbed_by_clamping() {
    let record = CandleRecord::new("2030", Direction::Down, 40.0, 9.0, "", "");
    let g = layout_candle(&record, &LayoutMetrics::DESKTOP);
    assert_eq!(g.top, EDGE_PADDING);

    let record = CandleRecord::new("2030", Direction::Down, 40.0, -3.0, "", "");
    let g = layout_candle(&record, &LayoutMetrics::DESKTOP);
    assert_eq!(g.top, LayoutMetrics::DESKTOP.plot_height - g.total_height - EDGE_PADDING);
}

#[test]
fn oversized_candle_does_not_panic() {
    let record = CandleRecord::new("2030", Direction::Up, 10_000.0, 2.0, "", "");
    let g = layout_candle(&record, &LayoutMetrics::MOBILE);
    assert_eq!(g.top, EDGE_PADDING);
}

#[quickcheck]
fn glyph_stays_inside_plot(magnitude: u8, level: u8, up: bool, mobile: bool) -> bool {
    let magnitude = (magnitude as f64 % 200.0) + 1.0;
    let level = level as f64 / 255.0 * MAX_LEVEL;
    let direction = if up { Direction::Up } else { Direction::Down };
    let metrics = if mobile { LayoutMetrics::MOBILE } else { LayoutMetrics::DESKTOP };

    let record = CandleRecord::new("2024", direction, magnitude, level, "", "");
    let g = layout_candle(&record, &metrics);

    g.top >= EDGE_PADDING && g.top <= metrics.plot_height - g.total_height - EDGE_PADDING
}
