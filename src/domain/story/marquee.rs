use crate::domain::career::{MediaItem, MediaKind};
use crate::domain::chart::ViewportClass;

/// Cards shown when a story has no media of its own.
pub const PLACEHOLDER_CARDS: usize = 6;
pub const PLACEHOLDER_SRC: &str = "/placeholder.svg";

/// Horizontal gap between strip cards.
pub fn card_gap(class: ViewportClass) -> f64 {
    match class {
        ViewportClass::Mobile => 14.0,
        ViewportClass::Desktop => 18.0,
    }
}

/// Seconds for one full loop.
pub fn loop_duration_secs(class: ViewportClass) -> f64 {
    match class {
        ViewportClass::Mobile => 22.0,
        ViewportClass::Desktop => 20.0,
    }
}

/// Card width derived from the strip's visible width.
pub fn card_width(class: ViewportClass, viewport_width: f64) -> f64 {
    match class {
        ViewportClass::Mobile => (viewport_width * 0.82).floor().clamp(260.0, 340.0),
        ViewportClass::Desktop => (viewport_width * 0.28).floor().clamp(380.0, 520.0),
    }
}

/// Distance after which the duplicated strip looks identical again.
pub fn loop_distance(card_width: f64, gap: f64, card_count: usize) -> f64 {
    (card_width + gap) * card_count as f64
}

/// Story media, or generated placeholders when there is none.
pub fn strip_cards(media: &'static [MediaItem], year: &str) -> Vec<StripCard> {
    if !media.is_empty() {
        return media.iter().copied().map(StripCard::Media).collect();
    }
    (0..PLACEHOLDER_CARDS)
        .map(|i| StripCard::Placeholder {
            kind: if i % 3 == 0 { MediaKind::Video } else { MediaKind::Image },
            alt: format!("Story media {} for {}", i + 1, year),
        })
        .collect()
}

/// One card of the strip.
#[derive(Debug, Clone, PartialEq)]
pub enum StripCard {
    Media(MediaItem),
    Placeholder { kind: MediaKind, alt: String },
}

impl StripCard {
    pub fn kind(&self) -> MediaKind {
        match self {
            StripCard::Media(item) => item.kind,
            StripCard::Placeholder { kind, .. } => *kind,
        }
    }

    pub fn src(&self) -> &str {
        match self {
            StripCard::Media(item) => item.src,
            StripCard::Placeholder { .. } => PLACEHOLDER_SRC,
        }
    }

    pub fn alt(&self) -> &str {
        match self {
            StripCard::Media(item) => item.alt,
            StripCard::Placeholder { alt, .. } => alt,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StripCard::Media(item) => item.display_label(),
            StripCard::Placeholder { kind: MediaKind::Video, .. } => "Video",
            StripCard::Placeholder { .. } => "Photo",
        }
    }

    pub fn href(&self) -> Option<&'static str> {
        match self {
            StripCard::Media(item) => item.href,
            StripCard::Placeholder { .. } => None,
        }
    }

    pub fn is_x_link(&self) -> bool {
        matches!(self, StripCard::Media(item) if item.is_x_link())
    }
}

/// Keeps `position` in `(-distance, 0]` without ever snapping back to zero.
pub fn wrap_position(position: f64, distance: f64) -> f64 {
    if distance <= 0.0 || !position.is_finite() {
        return 0.0;
    }
    let r = position.rem_euclid(distance);
    let wrapped = r - distance;
    if r == 0.0 || wrapped <= -distance { 0.0 } else { wrapped }
}

/// Auto-scrolling strip state, advanced once per animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Marquee {
    position: f64,
    distance: f64,
    /// Pixels per second.
    speed: f64,
    paused: bool,
    last_frame_ms: Option<f64>,
}

impl Marquee {
    pub fn new(distance: f64, duration_secs: f64) -> Self {
        Self {
            position: 0.0,
            distance,
            speed: Self::speed_for(distance, duration_secs),
            paused: false,
            last_frame_ms: None,
        }
    }

    fn speed_for(distance: f64, duration_secs: f64) -> f64 {
        if duration_secs > 0.0 { distance / duration_secs } else { 0.0 }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// New card width or count: keep the current position, re-wrapped.
    pub fn set_geometry(&mut self, distance: f64, duration_secs: f64) {
        self.distance = distance;
        self.speed = Self::speed_for(distance, duration_secs);
        self.position = wrap_position(self.position, distance);
    }

    /// Advances by `speed * dt`. The first frame only records its timestamp.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_frame_ms.replace(now_ms) {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        if !self.paused {
            self.position = wrap_position(self.position - self.speed * dt, self.distance);
        }
        self.position
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Manual drag while paused.
    pub fn drag_by(&mut self, dx: f64) {
        self.position = wrap_position(self.position + dx, self.distance);
    }
}
