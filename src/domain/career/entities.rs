use derive_more::Display;
use serde::Serialize;
use strum::AsRefStr;

/// Highest level a candle can sit on ("Moon").
pub const MAX_LEVEL: f64 = 4.5;

/// Value Object - candle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[display(fmt = "up")]
    Up,
    #[display(fmt = "down")]
    Down,
}

impl Direction {
    pub fn tone(&self) -> Tone {
        match self {
            Direction::Up => Tone::Green,
            Direction::Down => Tone::Red,
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Direction::Up)
    }

    /// -1 for up, +1 for down. Screen Y grows downwards.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// Value Object - semantic color of a candle or story section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum Tone {
    #[display(fmt = "green")]
    #[strum(serialize = "green")]
    Green,
    #[display(fmt = "red")]
    #[strum(serialize = "red")]
    Red,
}

impl Tone {
    pub fn badge(&self) -> &'static str {
        match self {
            Tone::Green => "Achievement",
            Tone::Red => "Lesson",
        }
    }

    pub fn badge_icon(&self) -> &'static str {
        match self {
            Tone::Green => "📈",
            Tone::Red => "📚",
        }
    }

    /// RGB triple used for candle bodies, wicks and accents.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Tone::Green => (34, 197, 94),
            Tone::Red => (239, 68, 68),
        }
    }

    pub fn rgba(&self, alpha: f32) -> String {
        let (r, g, b) = self.rgb();
        format!("rgba({},{},{},{})", r, g, b, alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MediaKind {
    #[display(fmt = "image")]
    Image,
    #[display(fmt = "video")]
    Video,
}

/// One card of a story's media strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: &'static str,
    /// Caption, also used as the image alt text.
    pub alt: &'static str,
    pub href: Option<&'static str>,
    pub label: Option<&'static str>,
}

impl MediaItem {
    pub const fn image(src: &'static str, alt: &'static str) -> Self {
        Self { kind: MediaKind::Image, src, alt, href: None, label: None }
    }

    pub const fn with_link(mut self, href: &'static str) -> Self {
        self.href = Some(href);
        self
    }

    pub const fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn is_clickable(&self) -> bool {
        self.href.is_some()
    }

    pub fn is_x_link(&self) -> bool {
        self.href.is_some_and(|href| {
            let href = href.to_lowercase();
            href.contains("x.com") || href.contains("twitter.com")
        })
    }

    pub fn display_label(&self) -> &'static str {
        self.label.unwrap_or("Story")
    }
}

/// Domain entity - one career milestone drawn as a candle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleRecord {
    pub year: &'static str,
    pub direction: Direction,
    /// Drives the rendered body length.
    pub magnitude: f64,
    /// Vertical band, `0..=MAX_LEVEL`.
    pub level: f64,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub media: &'static [MediaItem],
}

impl CandleRecord {
    pub const fn new(
        year: &'static str,
        direction: Direction,
        magnitude: f64,
        level: f64,
        title: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            year,
            direction,
            magnitude,
            level,
            title,
            subtitle: None,
            description,
            media: &[],
        }
    }

    pub fn tone(&self) -> Tone {
        self.direction.tone()
    }
}

/// Domain entity - an anchored narrative block a candle can jump to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoryRecord {
    /// DOM id, part of the anchor contract (`story-<year>`).
    pub id: &'static str,
    pub year: &'static str,
    pub tone: Tone,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub media: &'static [MediaItem],
    /// Long-form paragraphs; lines starting with `### ` are sub-headings.
    pub body: &'static [&'static str],
    pub highlights: &'static [&'static str],
}

/// A rendered line of a story body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyBlock<'a> {
    Heading(&'a str),
    Paragraph(&'a str),
}

impl StoryRecord {
    pub fn body_blocks(&self) -> impl Iterator<Item = BodyBlock<'static>> {
        self.body.iter().map(|line| match line.strip_prefix("### ") {
            Some(heading) => BodyBlock::Heading(heading.trim()),
            None => BodyBlock::Paragraph(line),
        })
    }
}
