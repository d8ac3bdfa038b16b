use career_candles::domain::career::MediaKind;
use career_candles::domain::chart::ViewportClass;
use career_candles::domain::story::{
    Marquee, PLACEHOLDER_CARDS, PLACEHOLDER_SRC, StripCard, card_gap, card_width, loop_distance,
    loop_duration_secs, strip_cards, wrap_position,
};
use quickcheck_macros::quickcheck;

fn desktop_marquee() -> Marquee {
    let class = ViewportClass::Desktop;
    let width = card_width(class, 1440.0);
    Marquee::new(loop_distance(width, card_gap(class), 4), loop_duration_secs(class))
}

#[test]
fn card_width_is_clamped_per_class() {
    assert_eq!(card_width(ViewportClass::Mobile, 200.0), 260.0);
    assert_eq!(card_width(ViewportClass::Mobile, 375.0), 307.0);
    assert_eq!(card_width(ViewportClass::Mobile, 700.0), 340.0);
    assert_eq!(card_width(ViewportClass::Desktop, 800.0), 380.0);
    assert_eq!(card_width(ViewportClass::Desktop, 1600.0), 448.0);
    assert_eq!(card_width(ViewportClass::Desktop, 4000.0), 520.0);
}

#[test]
fn one_loop_takes_the_configured_duration() {
    let mut m = Marquee::new(1000.0, 20.0);
    m.tick(0.0);
    m.tick(10_000.0);
    assert_eq!(m.position(), -500.0);
    m.tick(20_000.0);
    assert_eq!(m.position(), 0.0);
}

#[test]
fn first_frame_does_not_move() {
    let mut m = desktop_marquee();
    assert_eq!(m.tick(123_456.0), 0.0);
}

#[test]
fn paused_strip_holds_and_resumes_without_jump() {
    let mut m = desktop_marquee();
    m.tick(0.0);
    m.tick(1_000.0);
    let held = m.position();

    m.pause();
    m.tick(5_000.0);
    assert_eq!(m.position(), held);

    m.resume();
    m.tick(5_016.0);
    let step = held - m.position();
    assert!(step > 0.0 && step < m.speed() * 0.02);
}

#[test]
fn resize_keeps_position_rewrapped() {
    let mut m = Marquee::new(1000.0, 20.0);
    m.tick(0.0);
    m.tick(15_000.0);
    assert_eq!(m.position(), -750.0);

    m.set_geometry(600.0, 20.0);
    assert_eq!(m.position(), -150.0);
    assert_eq!(m.speed(), 30.0);
}

#[test]
fn drag_moves_both_ways() {
    let mut m = Marquee::new(1000.0, 20.0);
    m.drag_by(-120.0);
    assert_eq!(m.position(), -120.0);
    m.drag_by(200.0);
    assert_eq!(m.position(), -920.0);
}

#[test]
fn empty_media_gets_placeholders() {
    let cards = strip_cards(&[], "2021");
    assert_eq!(cards.len(), PLACEHOLDER_CARDS);
    assert_eq!(cards[0].kind(), MediaKind::Video);
    assert_eq!(cards[1].kind(), MediaKind::Image);
    assert_eq!(cards[0].label(), "Video");
    assert_eq!(cards[1].label(), "Photo");
    assert_eq!(cards[2].src(), PLACEHOLDER_SRC);
    assert_eq!(cards[2].alt(), "Story media 3 for 2021");
    assert!(cards.iter().all(|c| matches!(c, StripCard::Placeholder { .. }) && c.href().is_none()));
}

#[quickcheck]
fn position_stays_in_half_open_loop(frames: Vec<u16>, width: u16) -> bool {
    let d = loop_distance(260.0 + width as f64 % 300.0, 14.0, 6);
    let mut m = Marquee::new(d, 22.0);
    let mut now = 0.0;
    let mut prev = m.tick(now);

    for dt in frames {
        now += dt as f64;
        let pos = m.tick(now);
        if !(pos > -d && pos <= 0.0) {
            return false;
        }
        let advanced = prev - m.speed() * (dt as f64 / 1000.0);
        let drift = (pos - advanced).rem_euclid(d);
        if drift > 1e-6 && d - drift > 1e-6 {
            return false;
        }
        prev = pos;
    }
    true
}

#[quickcheck]
fn wrap_is_idempotent(position: i32, distance: u16) -> bool {
    let d = distance as f64 + 1.0;
    let once = wrap_position(position as f64, d);
    once > -d && once <= 0.0 && wrap_position(once, d) == once
}
