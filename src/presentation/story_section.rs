use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use leptos::html::Div;
use leptos::*;
use wasm_bindgen::JsCast;

use super::viewport::use_viewport;
use crate::domain::career::{BodyBlock, MediaKind, StoryRecord, Tone};
use crate::domain::story::{
    Marquee, StripCard, card_gap, card_width, loop_distance, loop_duration_secs, strip_cards,
};
use crate::domain::logging::LogComponent;
use crate::infrastructure::{bounding_rect, describe};
use crate::log_debug;

/// Re-arms itself every frame until the handle in `frame` is dropped.
fn run_frame_loop(
    marquee: Rc<RefCell<Marquee>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    offset: RwSignal<f64>,
) {
    let handle = {
        let marquee = Rc::clone(&marquee);
        let frame = Rc::clone(&frame);
        request_animation_frame(move |timestamp| {
            let position = marquee.borrow_mut().tick(timestamp);
            if offset.get_untracked() != position {
                offset.set(position);
            }
            run_frame_loop(marquee, frame, offset);
        })
    };
    *frame.borrow_mut() = Some(handle);
}

fn media_card(card: StripCard, year: &'static str, tone: Tone, width: Memo<f64>) -> impl IntoView {
    let href = card.href();
    let inner = view! {
        <div class="media-plate" style:background=tone.rgba(0.10)/>
        <div class="media-frame">
            <div class="media-image">
                <img src=card.src().to_string() alt=card.alt().to_string() loading="lazy" draggable="false"/>
                {(card.kind() == MediaKind::Video).then(|| view! { <div class="media-play">"\u{25B6}"</div> })}
                <span class="media-pill">{card.label().to_string()}</span>
            </div>
            <div class="media-caption">
                <div class="media-caption-row">
                    <span class="media-moment">{format!("{} moment", year)}</span>
                    {href.map(|_| view! { <span class="media-open">"Open \u{2197}"</span> })}
                </div>
                {card.is_x_link().then(|| view! { <div class="media-x">"View on X"</div> })}
            </div>
        </div>
    };

    let wrapper = match href {
        Some(href) => view! {
            <a class="media-link" href=href target="_blank" rel="noreferrer">{inner}</a>
        }
        .into_view(),
        None => view! { <div class="media-link static">{inner}</div> }.into_view(),
    };

    view! {
        <div class="media-card" style:width=move || format!("{}px", width.get())>
            {wrapper}
        </div>
    }
}

/// 📖 One story: text card plus an endlessly scrolling media strip
#[component]
pub fn StorySection(story: &'static StoryRecord, index: usize) -> impl IntoView {
    let viewport = use_viewport();
    let strip_ref = create_node_ref::<Div>();
    let cards = strip_cards(story.media, story.year);
    let card_count = cards.len();

    // Window width is read first so every resize re-measures the strip.
    let width = create_memo(move |_| {
        let vw = viewport.width.get();
        let class = viewport.class.get();
        let measured = strip_ref.get().map(|el| bounding_rect(&el).width).filter(|w| *w > 0.0);
        card_width(class, measured.unwrap_or(vw))
    });

    let marquee = {
        let class = viewport.class.get_untracked();
        let distance = loop_distance(width.get_untracked(), card_gap(class), card_count);
        Rc::new(RefCell::new(Marquee::new(distance, loop_duration_secs(class))))
    };
    let offset = create_rw_signal(0.0);

    {
        let marquee = Rc::clone(&marquee);
        create_effect(move |_| {
            let class = viewport.class.get();
            let distance = loop_distance(width.get(), card_gap(class), card_count);
            let position = {
                let mut m = marquee.borrow_mut();
                m.set_geometry(distance, loop_duration_secs(class));
                m.position()
            };
            offset.set(position);
        });
    }

    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
    run_frame_loop(Rc::clone(&marquee), Rc::clone(&frame), offset);
    on_cleanup(move || {
        frame.borrow_mut().take();
    });

    let drag_from: Rc<Cell<Option<f64>>> = Rc::default();
    let on_pointer_down = {
        let marquee = Rc::clone(&marquee);
        let drag_from = Rc::clone(&drag_from);
        move |ev: ev::PointerEvent| {
            marquee.borrow_mut().pause();
            drag_from.set(Some(ev.client_x() as f64));
            if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                if let Err(e) = el.set_pointer_capture(ev.pointer_id()) {
                    log_debug!(LogComponent::Infrastructure("Pointer"), "capture refused: {}", describe(&e));
                }
            }
        }
    };
    let on_pointer_move = {
        let marquee = Rc::clone(&marquee);
        let drag_from = Rc::clone(&drag_from);
        move |ev: ev::PointerEvent| {
            let Some(last) = drag_from.get() else { return };
            let x = ev.client_x() as f64;
            drag_from.set(Some(x));
            let position = {
                let mut m = marquee.borrow_mut();
                m.drag_by(x - last);
                m.position()
            };
            offset.set(position);
        }
    };
    let end_drag = {
        let marquee = Rc::clone(&marquee);
        let drag_from = Rc::clone(&drag_from);
        move |_: ev::PointerEvent| {
            if drag_from.take().is_some() {
                marquee.borrow_mut().resume();
            }
        }
    };
    let on_pointer_cancel = end_drag.clone();
    let on_enter = {
        let marquee = Rc::clone(&marquee);
        move |_: ev::MouseEvent| marquee.borrow_mut().pause()
    };
    let on_leave = {
        let marquee = Rc::clone(&marquee);
        move |_: ev::MouseEvent| marquee.borrow_mut().resume()
    };

    let tone = story.tone;
    let strip = cards
        .iter()
        .chain(cards.iter())
        .cloned()
        .map(|card| media_card(card, story.year, tone, width))
        .collect_view();

    view! {
        <section
            id=story.id
            class="story-section"
            class:from-right={index % 2 == 0}
            class:from-left={index % 2 == 1}
            class:mobile=move || viewport.class.get().is_mobile()
        >
            <div class="story-card" style:border-color=tone.rgba(0.2)>
                <div class="story-glow" style:background=tone.rgba(0.3)/>
                <div class="story-head">
                    <div class="story-year">
                        <span class="story-dot" style:background=tone.rgba(1.0)/>
                        <span class="year-chip">
                            <span class="year-chip-label">"Year"</span>
                            <span>{story.year}</span>
                        </span>
                    </div>
                    <span class="story-badge" style:color=tone.rgba(1.0) style:border-color=tone.rgba(0.25)>
                        {format!("{} {}", tone.badge_icon(), tone.badge())}
                    </span>
                </div>
                <h3 class="story-title" style:color=tone.rgba(1.0)>{story.title}</h3>
                {story.subtitle.map(|s| view! { <div class="story-subtitle">{s}</div> })}
                <p class="story-description">{story.description}</p>
                <div class="story-body">
                    {story
                        .body_blocks()
                        .map(|block| match block {
                            BodyBlock::Heading(text) => view! { <h4 class="story-body-heading">{text}</h4> }.into_view(),
                            BodyBlock::Paragraph(text) => view! { <p class="story-body-text">{text}</p> }.into_view(),
                        })
                        .collect_view()}
                </div>
                {(!story.highlights.is_empty()).then(|| view! {
                    <ul class="story-highlights">
                        {story.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                    </ul>
                })}
                <div class="story-footer">
                    <span>"Moment \u{2022} Story timeline"</span>
                    <span>"Scroll to explore"</span>
                </div>
            </div>

            <div class="media-strip" node_ref=strip_ref on:mouseenter=on_enter on:mouseleave=on_leave>
                <div
                    class="media-track"
                    style:transform=move || format!("translateX({}px)", offset.get())
                    style:gap=move || format!("{}px", card_gap(viewport.class.get()))
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=end_drag
                    on:pointercancel=on_pointer_cancel
                >
                    {strip}
                </div>
            </div>
        </section>
    }
}
