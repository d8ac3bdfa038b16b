//! Career aggregate: milestone candles, story sections and the built-in dataset.

pub mod dataset;
pub mod entities;

pub use dataset::*;
pub use entities::*;
