//! Leptos components and browser-side hooks.

pub mod chart;
pub mod journey;
pub mod story_section;
pub mod tooltip;
pub mod viewport;

pub use chart::CandlestickChart;
pub use journey::Journey;
pub use story_section::StorySection;
pub use tooltip::TooltipOverlay;
pub use viewport::{Viewport, provide_viewport, use_viewport, use_viewport_class};
