use leptos::*;

use super::chart::perform;
use super::viewport::use_viewport;
use crate::domain::chart::{
    ChartAction, ChartInteraction, HoverState, PanelSide, ScrollLock, place_desktop,
};
use crate::infrastructure::BodyOverflow;

fn accent_bar(hover: &HoverState) -> String {
    format!("linear-gradient(90deg, {} 0%, rgba(0,0,0,0) 60%)", hover.candle.tone().rgba(0.95))
}

/// 🎯 Candle details: anchored panel on desktop, bottom sheet on mobile
#[component]
pub fn TooltipOverlay(interaction: RwSignal<ChartInteraction>) -> impl IntoView {
    let viewport = use_viewport();
    let hover = create_memo(move |_| interaction.with(|s| s.hover().copied()));
    let mobile_open = create_memo(move |_| viewport.class.get().is_mobile() && hover.get().is_some());

    let scroll_lock = store_value(None::<ScrollLock<BodyOverflow>>);
    create_effect(move |_| {
        let open = mobile_open.get();
        scroll_lock.update_value(|lock| match (open, lock.is_some()) {
            (true, false) => *lock = Some(ScrollLock::acquire(BodyOverflow)),
            (false, true) => *lock = None,
            _ => {}
        });
    });
    on_cleanup(move || {
        scroll_lock.try_update_value(|lock| *lock = None);
    });

    let close = move |_: ev::MouseEvent| interaction.update(|s| s.dismiss());
    let open_story = move |_: ev::MouseEvent| {
        let action = interaction.try_update(|s| s.open_story_from_tooltip()).unwrap_or(ChartAction::None);
        perform(interaction, action);
    };

    move || {
        let hover = hover.get()?;
        let candle = hover.candle;

        if viewport.class.get().is_mobile() {
            return Some(
                view! {
                    <div class="tooltip-sheet" role="dialog" aria-modal="true">
                        <button class="tooltip-scrim" aria-label="Close" on:click=close/>
                        <div class="tooltip-card sheet">
                            <div class="tooltip-accent" style:background=accent_bar(&hover)/>
                            <div class="tooltip-head">
                                <div>
                                    <div class="tooltip-year">{candle.year}</div>
                                    <div class="tooltip-title">{candle.title}</div>
                                </div>
                                <button type="button" class="tooltip-close" aria-label="Close" on:click=close>
                                    "\u{2715}"
                                </button>
                            </div>
                            {candle.subtitle.map(|s| view! { <div class="tooltip-subtitle">{s}</div> })}
                            <div class="tooltip-text">{candle.description}</div>
                            <div class="tooltip-actions">
                                <button
                                    type="button"
                                    class="tooltip-open"
                                    class:disabled={!hover.has_story}
                                    disabled={!hover.has_story}
                                    on:click=open_story
                                >
                                    "Open story"
                                </button>
                                <div class="tooltip-hint">
                                    {if hover.has_story {
                                        "Tip: tap candle again to jump"
                                    } else {
                                        "No story section for this candle"
                                    }}
                                </div>
                            </div>
                        </div>
                    </div>
                }
                .into_view(),
            );
        }

        let placement = place_desktop(hover.rect, viewport.width.get());
        Some(
            view! {
                <div class="tooltip-layer" aria-hidden="true">
                    <div
                        class="tooltip-card"
                        class:below={placement.side == PanelSide::Below}
                        style:left=format!("{}px", placement.left)
                        style:top=format!("{}px", placement.top)
                        style:width=format!("{}px", placement.width)
                    >
                        <div class="tooltip-accent" style:background=accent_bar(&hover)/>
                        <div class="tooltip-year">{candle.year}</div>
                        <div class="tooltip-title">{candle.title}</div>
                        {candle.subtitle.map(|s| view! { <div class="tooltip-subtitle">{s}</div> })}
                        <div class="tooltip-text">{candle.description}</div>
                    </div>
                </div>
            }
            .into_view(),
        )
    }
}
