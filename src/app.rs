use leptos::*;

use crate::domain::logging::LogComponent;
use crate::log_info;
use crate::presentation::{CandlestickChart, Journey, provide_viewport};

/// Page stylesheet, inlined into `App`.
pub const STYLES: &str = r#"
:root {
    --bg: #0b0d10;
    --card: rgba(22, 25, 30, 0.95);
    --border: rgba(255, 255, 255, 0.08);
    --muted: rgba(255, 255, 255, 0.62);
    --dot: rgba(255, 255, 255, 0.22);
}

body {
    margin: 0;
    background: var(--bg);
    color: #f5f5f5;
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, 'Inter', sans-serif;
}

.career-app { max-width: 1180px; margin: 0 auto; padding: 48px 20px 96px; }
.page-head { text-align: center; margin-bottom: 28px; }
.page-head h1 { margin: 0; font-size: 30px; letter-spacing: -0.02em; }
.page-head p { color: var(--muted); margin: 8px 0 0; }

.chart-card {
    border: 1px solid var(--border);
    border-radius: 28px;
    background: var(--card);
    padding: 28px;
    box-shadow: 0 18px 70px -55px rgba(0, 0, 0, 0.85);
}

.candle-chart { width: 100%; }
.chart-body { display: flex; }
.y-axis { display: flex; flex-direction: column; justify-content: space-between; flex-shrink: 0; }
.y-label { display: flex; align-items: center; gap: 8px; font-size: 12px; color: var(--muted); user-select: none; }
.y-label.accent { color: rgb(34, 197, 94); font-weight: 500; }
.y-icon { display: inline-grid; place-items: center; width: 24px; height: 24px; border-radius: 8px; background: rgba(255, 255, 255, 0.06); }
.candle-chart.mobile .y-text { display: none; }

.plot { position: relative; flex: 1; min-width: 0; }
.grid-lines { position: absolute; inset: 0; display: flex; flex-direction: column; justify-content: space-between; pointer-events: none; }
.grid-line { height: 1px; background: rgba(255, 255, 255, 0.06); }

.crosshair { position: absolute; inset: 0; pointer-events: none; z-index: 5; }
.crosshair-v, .crosshair-h { position: absolute; }
.crosshair-v { top: 0; bottom: 0; width: 1px; background-image: repeating-linear-gradient(to bottom, transparent 0 6px, var(--dot) 6px 8px); }
.crosshair-h { left: 0; right: 0; height: 1px; background-image: repeating-linear-gradient(to right, transparent 0 6px, var(--dot) 6px 8px); }
.crosshair-avatar {
    position: absolute; width: 36px; height: 36px; border-radius: 50%; overflow: hidden;
    transform: translate(-50%, -50%); border: 1px solid rgba(255, 255, 255, 0.2); background: rgba(0, 0, 0, 0.2);
}
.crosshair-avatar img { width: 100%; height: 100%; object-fit: cover; }
.avatar-fallback { display: grid; place-items: center; width: 100%; height: 100%; font-weight: 600; font-size: 14px; }

.year-columns { position: absolute; inset: 0; display: grid; }
.year-column { position: relative; }
.candle-glyph { position: absolute; left: 50%; width: 100%; cursor: pointer; outline: none; }
.candle-glyph:focus-visible .candle-body, .candle-glyph.active .candle-body { filter: brightness(1.15); }
.candle-stick { position: relative; margin: 0 auto; }
.candle-wick { width: 1px; margin: 0 auto; }
.candle-body { border-radius: 10px; }

.x-axis { margin-top: 22px; }
.year-buttons { display: grid; }
.year-button { background: none; border: 0; color: var(--muted); font-size: 12px; padding: 4px 0; border-radius: 6px; cursor: pointer; }
.year-button:hover { color: #fff; }
.year-button.disabled { opacity: 0.5; cursor: not-allowed; }

.legend { display: flex; justify-content: center; gap: 28px; margin-top: 22px; font-size: 13px; }
.legend-item { display: inline-flex; align-items: center; gap: 8px; }
.legend-dot { width: 12px; height: 12px; border-radius: 50%; }

.tooltip-layer { position: fixed; inset: 0; z-index: 9999; pointer-events: none; }
.tooltip-card {
    position: absolute; overflow: hidden; padding: 16px; border-radius: 16px;
    border: 1px solid var(--border); background: var(--card); backdrop-filter: blur(18px);
    box-shadow: 0 26px 90px -55px rgba(0, 0, 0, 0.75);
}
.tooltip-accent { position: absolute; left: 0; right: 0; top: 0; height: 2px; }
.tooltip-year { font-size: 12px; color: var(--muted); }
.tooltip-title { margin-top: 8px; font-size: 16px; font-weight: 600; line-height: 1.3; }
.tooltip-subtitle { margin-top: 6px; font-size: 12px; color: var(--muted); }
.tooltip-text { margin-top: 12px; font-size: 13px; color: var(--muted); line-height: 1.55; }

.tooltip-sheet { position: fixed; inset: 0; z-index: 2147483000; }
.candle-chart.sheet-open .plot { z-index: 2147483001; }
.tooltip-scrim { position: absolute; inset: 0; border: 0; background: rgba(0, 0, 0, 0.45); }
.tooltip-card.sheet { left: 12px; right: 12px; bottom: 12px; }
.tooltip-head { display: flex; justify-content: space-between; gap: 12px; }
.tooltip-close { width: 36px; height: 36px; border-radius: 12px; border: 1px solid var(--border); background: rgba(255, 255, 255, 0.05); color: inherit; }
.tooltip-actions { display: flex; align-items: center; justify-content: space-between; gap: 12px; margin-top: 16px; }
.tooltip-open { height: 40px; padding: 0 16px; border-radius: 12px; border: 1px solid var(--border); background: rgba(255, 255, 255, 0.08); color: inherit; font-weight: 600; }
.tooltip-open.disabled { opacity: 0.6; cursor: not-allowed; }
.tooltip-hint { font-size: 11px; color: var(--muted); }

.journey { margin-top: 96px; }
.journey-head { text-align: center; margin-bottom: 48px; }
.journey-head p { color: var(--muted); }
.journey-stories { display: flex; flex-direction: column; gap: 120px; }

.story-section { position: relative; min-width: 0; scroll-margin-top: 24px; }
.story-card {
    position: relative; overflow: hidden; max-width: 720px; margin: 0 auto; padding: 28px;
    border: 1px solid; border-radius: 28px; background: var(--card);
}
.story-glow { position: absolute; top: -96px; left: 50%; width: 520px; height: 192px; transform: translateX(-50%); border-radius: 50%; filter: blur(48px); opacity: 0.4; pointer-events: none; }
.story-head { display: flex; align-items: center; justify-content: space-between; gap: 12px; }
.story-year { display: flex; align-items: center; gap: 12px; }
.story-dot { width: 10px; height: 10px; border-radius: 50%; }
.year-chip { display: inline-flex; gap: 8px; padding: 4px 12px; border-radius: 999px; border: 1px solid rgba(255, 255, 255, 0.1); font-size: 12px; }
.year-chip-label { opacity: 0.8; }
.story-badge { padding: 4px 12px; border-radius: 999px; border: 1px solid; font-size: 12px; font-weight: 600; }
.story-title { margin: 16px 0 0; font-size: 20px; letter-spacing: -0.02em; }
.story-subtitle { margin-top: 8px; font-size: 14px; color: var(--muted); }
.story-description, .story-body-text { color: var(--muted); line-height: 1.6; font-size: 15px; }
.story-body-heading { margin: 20px 0 4px; font-size: 15px; }
.story-highlights { color: var(--muted); font-size: 14px; line-height: 1.6; }
.story-footer { display: flex; justify-content: space-between; margin-top: 20px; font-size: 12px; color: var(--muted); }

.media-strip { position: relative; overflow: hidden; padding: 56px 0 64px; touch-action: pan-y; }
.media-track { display: flex; align-items: center; padding: 0 64px; will-change: transform; cursor: grab; }
.story-section.mobile .media-strip { padding: 40px 0; }
.story-section.mobile .media-track { padding: 0 16px; }
.media-card { flex-shrink: 0; position: relative; }
.media-link { position: relative; display: block; border-radius: 16px; color: inherit; text-decoration: none; }
.media-plate { position: absolute; inset: -2px; border-radius: 22px; transform: translate(8px, 8px); z-index: -1; }
.media-frame { position: relative; overflow: hidden; border-radius: 16px; border: 1px solid var(--border); background: var(--card); }
.media-image { position: relative; aspect-ratio: 16 / 9; background: rgba(255, 255, 255, 0.04); }
.media-image img { width: 100%; height: 100%; object-fit: cover; user-select: none; }
.media-play { position: absolute; inset: 0; display: grid; place-items: center; font-size: 18px; background: rgba(0, 0, 0, 0.35); }
.media-pill { position: absolute; left: 12px; top: 12px; padding: 2px 10px; border-radius: 999px; font-size: 11px; background: rgba(0, 0, 0, 0.55); }
.media-caption { padding: 16px; min-height: 64px; }
.media-caption-row { display: flex; justify-content: space-between; gap: 12px; }
.media-moment { font-size: 14px; font-weight: 600; }
.media-open, .media-x { font-size: 12px; color: var(--muted); }
.media-x { margin-top: 4px; }
"#;

/// 🦀 Career portfolio: candle chart on top, story sections below
#[component]
pub fn App() -> impl IntoView {
    provide_viewport();
    log_info!(LogComponent::Presentation("App"), "mounting career chart");

    view! {
        <style>{STYLES}</style>
        <main class="career-app">
            <header class="page-head">
                <h1>"Career Index"</h1>
                <p>"Every green candle is a win, every red one a lesson. Hover or tap to read, click to jump."</p>
            </header>
            <div class="chart-card">
                <CandlestickChart/>
            </div>
            <Journey/>
        </main>
    }
}
