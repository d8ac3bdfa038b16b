use leptos::html::Div;
use leptos::*;
use wasm_bindgen::JsCast;

use super::tooltip::TooltipOverlay;
use super::viewport::use_viewport;
use crate::domain::career::{CANDLES, Tone, YEARS};
use crate::domain::chart::{
    ChartAction, ChartInteraction, ChartLayout, LayoutMetrics, PlacedCandle, Point, Rect, ViewportClass,
    layout_chart,
};
use crate::domain::logging::LogComponent;
use crate::infrastructure::{bounding_rect, story_navigator};
use crate::log_debug;

pub const DEFAULT_AVATAR: &str = "/avatar.png";

const Y_AXIS: [(&str, &str); 5] = [
    ("Moon", "\u{1F319}"),
    ("Growth", "\u{1F4C8}"),
    ("Stable", "\u{2696}"),
    ("Learning", "\u{1F4DA}"),
    ("Start", "\u{1F680}"),
];

/// Performs the side effect an interaction asked for.
pub(crate) fn perform(interaction: RwSignal<ChartInteraction>, action: ChartAction) {
    if let ChartAction::Navigate(candle) = action {
        interaction.update(|s| s.navigated());
        if let Some(id) = story_navigator().navigate(candle.year, Some(candle.direction)) {
            log_debug!(LogComponent::Presentation("Chart"), "jumped to #{}", id);
        }
    }
}

fn target_rect(ev: &web_sys::Event) -> Rect {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| bounding_rect(&el))
        .unwrap_or_default()
}

fn body_gradient(tone: Tone) -> String {
    format!("linear-gradient(180deg, {}, {})", tone.rgba(0.98), tone.rgba(0.64))
}

/// 📊 Career candlestick chart with crosshair, tooltip and story links
#[component]
pub fn CandlestickChart(
    #[prop(default = DEFAULT_AVATAR)] avatar_src: &'static str,
    #[prop(default = "A")] initials: &'static str,
) -> impl IntoView {
    let viewport = use_viewport();
    let interaction = create_rw_signal(ChartInteraction::new(viewport.class.get_untracked()));
    let layout = create_memo(move |_| layout_chart(CANDLES, viewport.class.get()));
    let plot_ref = create_node_ref::<Div>();

    // Story sections mount after the chart; re-check anchors once they exist.
    let anchors_ready = create_trigger();
    request_animation_frame(move || anchors_ready.notify());

    create_effect(move |_| {
        let class = viewport.class.get();
        interaction.update(|s| s.set_viewport_class(class));
    });

    let plot_rect = move || plot_ref.get_untracked().map(|el| bounding_rect(&el)).unwrap_or_default();

    let on_plot_move = move |ev: ev::MouseEvent| {
        let pointer = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        let plot = plot_rect();
        interaction.update(|s| s.pointer_move(pointer, plot));
    };

    let glyph = move |placed: PlacedCandle, class: ViewportClass| {
        let record = placed.record;
        let g = placed.geometry;
        let tone = record.tone();
        let has_story = move || story_navigator().has_story(record.year, Some(record.direction));
        let is_active = move || interaction.with(|s| s.hover().is_some_and(|h| h.key == placed.key));

        let on_enter = move |ev: ev::MouseEvent| {
            let rect = target_rect(&ev);
            let plot = plot_rect();
            let story = has_story();
            interaction.update(|s| s.pointer_enter_candle(placed.key, record, rect, plot, story));
        };
        let on_click = move |ev: ev::MouseEvent| {
            let story = has_story();
            let action = if class.is_mobile() {
                let rect = target_rect(&ev);
                interaction
                    .try_update(|s| s.tap_candle(placed.key, record, rect, story))
                    .unwrap_or(ChartAction::None)
            } else {
                interaction.try_update(|s| s.click_candle(record, story)).unwrap_or(ChartAction::None)
            };
            perform(interaction, action);
        };
        let on_key = move |ev: ev::KeyboardEvent| {
            let key = ev.key();
            let story = has_story();
            let action = interaction
                .try_update(|s| s.activate_with_key(&key, record, story))
                .unwrap_or(ChartAction::None);
            if action.is_navigate() {
                ev.prevent_default();
            }
            perform(interaction, action);
        };

        view! {
            <div
                class="candle-glyph"
                class:active=is_active
                role="button"
                tabindex="0"
                aria-label=format!("{} {}: {}", record.year, tone.badge(), record.title)
                style:top=format!("{}px", g.top)
                style:transform=format!("translateX(calc(-50% + {}px))", g.x_shift)
                style:max-width=format!("{}px", LayoutMetrics::for_class(class).glyph_max_width)
                on:mouseenter=on_enter
                on:mouseleave=move |_| interaction.update(|s| s.pointer_leave_candle())
                on:click=on_click
                on:keydown=on_key
            >
                <div class="candle-stick" style:width=format!("{}px", g.width)>
                    <div class="candle-wick" style:height=format!("{}px", g.wick_top) style:background-color=tone.rgba(0.75)/>
                    <div
                        class="candle-body"
                        style:height=format!("{}px", g.body_height)
                        style:background=body_gradient(tone)
                        style:box-shadow=format!("0 14px 30px {}", tone.rgba(0.16))
                    />
                    <div class="candle-wick" style:height=format!("{}px", g.wick_bottom) style:background-color=tone.rgba(0.75)/>
                </div>
            </div>
        }
    };

    let columns = move || {
        let chart: ChartLayout = layout.get();
        chart
            .columns
            .into_iter()
            .map(|column| {
                let class = chart.class;
                view! {
                    <div class="year-column">
                        {column.candles.into_iter().map(|placed| glyph(placed, class)).collect_view()}
                    </div>
                }
            })
            .collect_view()
    };

    // While the mobile sheet is open the plot sits above its scrim, so the
    // same candle can be tapped again.
    let sheet_open =
        create_memo(move |_| viewport.class.get().is_mobile() && interaction.with(|s| s.hover().is_some()));

    let (avatar_ok, set_avatar_ok) = create_signal(true);
    let crosshair = create_memo(move |_| {
        if viewport.class.get().is_mobile() {
            None
        } else {
            interaction.with(|s| s.crosshair())
        }
    });
    let cross_x = move || format!("{}px", crosshair.get().unwrap_or_default().x);
    let cross_y = move || format!("{}px", crosshair.get().unwrap_or_default().y);

    let grid_template = move || format!("repeat({}, minmax(0, 1fr))", layout.with(|l| l.column_count()));
    let axis_width = move || format!("{}px", layout.with(|l| l.metrics.axis_width));
    let plot_height = move || format!("{}px", layout.with(|l| l.metrics.plot_height));

    let year_buttons = move || {
        anchors_ready.track();
        YEARS
            .iter()
            .map(|&year| {
                let enabled = story_navigator().has_story(year, None);
                view! {
                    <button
                        type="button"
                        class="year-button"
                        class:disabled={!enabled}
                        disabled={!enabled}
                        aria-label=format!("Jump to {} story", year)
                        on:click=move |_| {
                            if enabled {
                                story_navigator().navigate(year, None);
                            }
                        }
                    >
                        {year}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class="candle-chart"
            class:mobile=move || viewport.class.get().is_mobile()
            class:sheet-open=move || sheet_open.get()
        >
            <div class="chart-body">
                <div class="y-axis" style:width=axis_width style:height=plot_height>
                    {Y_AXIS
                        .iter()
                        .enumerate()
                        .map(|(i, (label, icon))| view! {
                            <div class="y-label" class:accent={i == 0}>
                                <span class="y-icon">{*icon}</span>
                                <span class="y-text">{*label}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div
                    class="plot"
                    node_ref=plot_ref
                    style:height=plot_height
                    on:mousemove=on_plot_move
                    on:mouseleave=move |_| interaction.update(|s| s.pointer_leave_plot())
                >
                    <div class="grid-lines">
                        {(0..Y_AXIS.len()).map(|_| view! { <div class="grid-line"/> }).collect_view()}
                    </div>
                    <Show when=move || crosshair.get().is_some()>
                        <div class="crosshair">
                            <div class="crosshair-v" style:left=cross_x/>
                            <div class="crosshair-h" style:top=cross_y/>
                            <div class="crosshair-avatar" style:left=cross_x style:top=cross_y>
                                <Show
                                    when=move || avatar_ok.get()
                                    fallback=move || view! { <span class="avatar-fallback">{initials}</span> }
                                >
                                    <img
                                        src=avatar_src
                                        alt="Avatar"
                                        draggable="false"
                                        on:error=move |_| set_avatar_ok.set(false)
                                    />
                                </Show>
                            </div>
                        </div>
                    </Show>
                    <div class="year-columns" style:grid-template-columns=grid_template>
                        {columns}
                    </div>
                </div>
            </div>
            <div class="x-axis" style:padding-left=axis_width>
                <div class="year-buttons" style:grid-template-columns=grid_template>
                    {year_buttons}
                </div>
            </div>
            <div class="legend">
                <span class="legend-item"><span class="legend-dot" style:background=Tone::Green.rgba(1.0)/>"Growth"</span>
                <span class="legend-item"><span class="legend-dot" style:background=Tone::Red.rgba(1.0)/>"Learning"</span>
            </div>
            <TooltipOverlay interaction=interaction/>
        </div>
    }
}
