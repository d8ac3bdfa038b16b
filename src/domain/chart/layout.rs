use serde::{Serialize, Serializer};

use super::value_objects::{CandleKey, EDGE_PADDING, LayoutMetrics, ViewportClass, clamp_floor};
use crate::domain::career::{CandleRecord, MAX_LEVEL, year_columns};

/// Pixel geometry of one candle glyph inside the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandleGeometry {
    /// Top edge of the glyph, clamped into the plot.
    pub top: f64,
    /// Horizontal offset from the year column's center.
    pub x_shift: f64,
    pub width: f64,
    pub wick_top: f64,
    pub body_height: f64,
    pub wick_bottom: f64,
    pub total_height: f64,
    pub baseline_y: f64,
    pub center_y: f64,
}

impl CandleGeometry {
    /// Signed distance from the shared baseline to the glyph center.
    pub fn vertical_offset(&self) -> f64 {
        self.center_y - self.baseline_y
    }
}

/// Y of a level's baseline: higher level, smaller Y.
pub fn baseline_y(level: f64, plot_height: f64) -> f64 {
    plot_height - (level / MAX_LEVEL) * plot_height
}

pub fn layout_candle(record: &CandleRecord, metrics: &LayoutMetrics) -> CandleGeometry {
    let body_height = (record.magnitude * metrics.body_scale).round();
    let total_height = metrics.wick_top + body_height + metrics.wick_bottom;

    let baseline_y = baseline_y(record.level, metrics.plot_height);
    let center_y = baseline_y + record.direction.sign() * metrics.up_down_offset;

    let top = clamp_floor(
        center_y - total_height / 2.0,
        EDGE_PADDING,
        metrics.plot_height - total_height - EDGE_PADDING,
    );
    let x_shift = record.direction.sign() * metrics.per_year_offset;

    CandleGeometry {
        top,
        x_shift,
        width: metrics.candle_width,
        wick_top: metrics.wick_top,
        body_height,
        wick_bottom: metrics.wick_bottom,
        total_height,
        baseline_y,
        center_y,
    }
}

/// A record with its computed geometry and stable key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedCandle {
    pub key: CandleKey,
    #[serde(rename = "direction", serialize_with = "direction_only")]
    pub record: &'static CandleRecord,
    pub geometry: CandleGeometry,
}

fn direction_only<S: Serializer>(record: &&'static CandleRecord, serializer: S) -> Result<S::Ok, S::Error> {
    record.direction.serialize(serializer)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearColumn {
    pub year: &'static str,
    pub candles: Vec<PlacedCandle>,
}

/// Full chart layout for one viewport class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub class: ViewportClass,
    pub metrics: LayoutMetrics,
    pub columns: Vec<YearColumn>,
}

impl ChartLayout {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Center X of a column in an equal-width grid spanning `plot_width`.
    pub fn column_center_x(&self, column: usize, plot_width: f64) -> f64 {
        if self.columns.is_empty() {
            return plot_width / 2.0;
        }
        let column_width = plot_width / self.columns.len() as f64;
        (column as f64 + 0.5) * column_width
    }

    pub fn candle_center_x(&self, candle: &PlacedCandle, plot_width: f64) -> f64 {
        self.column_center_x(candle.key.column, plot_width) + candle.geometry.x_shift
    }

    pub fn candles(&self) -> impl Iterator<Item = &PlacedCandle> {
        self.columns.iter().flat_map(|c| c.candles.iter())
    }

    pub fn find(&self, key: CandleKey) -> Option<&PlacedCandle> {
        self.columns.get(key.column).and_then(|c| c.candles.get(key.slot))
    }
}

pub fn layout_chart(records: &'static [CandleRecord], class: ViewportClass) -> ChartLayout {
    let metrics = LayoutMetrics::for_class(class);
    let columns = year_columns(records)
        .into_iter()
        .enumerate()
        .map(|(column, year)| YearColumn {
            year,
            candles: records
                .iter()
                .filter(|r| r.year == year)
                .enumerate()
                .map(|(slot, record)| PlacedCandle {
                    key: CandleKey::new(column, slot),
                    record,
                    geometry: layout_candle(record, &metrics),
                })
                .collect(),
        })
        .collect();

    ChartLayout { class, metrics, columns }
}
