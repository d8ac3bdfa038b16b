use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use crate::domain::career::{Direction, Tone};

/// Anything that can answer "is there an element with this id?".
pub trait AnchorLookup {
    fn contains_anchor(&self, id: &str) -> bool;
}

impl<T: AnchorLookup + ?Sized> AnchorLookup for &T {
    fn contains_anchor(&self, id: &str) -> bool {
        (**self).contains_anchor(id)
    }
}

impl<S: Borrow<str> + Eq + Hash> AnchorLookup for HashSet<S> {
    fn contains_anchor(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl<S: Borrow<str> + Ord> AnchorLookup for BTreeSet<S> {
    fn contains_anchor(&self, id: &str) -> bool {
        self.contains(id)
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Splits `YYYY-YYYY` / `YYYY-YY` into its two halves.
fn split_span(year: &str) -> Option<(&str, &str)> {
    let (start, end) = year.split_once('-')?;
    (is_digits(start, 4) && (is_digits(end, 2) || is_digits(end, 4))).then_some((start, end))
}

/// Trims, folds en/em dashes to `-` and shortens `2022-2023` to `2022-23`.
pub fn normalize_year(label: &str) -> String {
    let dashed: String = label
        .trim()
        .chars()
        .map(|c| if c == '\u{2013}' || c == '\u{2014}' { '-' } else { c })
        .collect();

    match split_span(&dashed) {
        Some((start, end)) if end.len() == 4 && start[..2] == end[..2] => {
            format!("{}-{}", start, &end[2..])
        }
        _ => dashed,
    }
}

/// The long spelling of a short span: `2022-23` becomes `2022-2023`.
pub fn alternate_year_spelling(normalized: &str) -> Option<String> {
    let (start, end) = split_span(normalized)?;
    (end.len() == 2).then(|| format!("{}-{}{}", start, &start[..2], end))
}

/// Ordered candidate ids for a candle. Order is a fallback priority:
/// tone-specific id, bare year, remaining tones, then the same for the
/// alternate year spelling.
pub fn story_id_candidates(year: &str, direction: Option<Direction>) -> Vec<String> {
    let normalized = normalize_year(year);
    let spellings = std::iter::once(normalized.clone()).chain(alternate_year_spelling(&normalized));

    let mut candidates: Vec<String> = Vec::new();
    let mut push = |id: String| {
        if !candidates.contains(&id) {
            candidates.push(id);
        }
    };

    for spelling in spellings {
        if let Some(direction) = direction {
            push(format!("story-{}-{}", spelling, direction.tone().as_ref()));
        }
        push(format!("story-{}", spelling));
        push(format!("story-{}-{}", spelling, Tone::Green.as_ref()));
        push(format!("story-{}-{}", spelling, Tone::Red.as_ref()));
    }

    candidates
}

/// First candidate present in `anchors`. Re-evaluated on every call.
pub fn resolve_story_id(
    year: &str,
    direction: Option<Direction>,
    anchors: &impl AnchorLookup,
) -> Option<String> {
    story_id_candidates(year, direction).into_iter().find(|id| anchors.contains_anchor(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_dashes_and_long_spans() {
        assert_eq!(normalize_year(" 2022\u{2013}2023 "), "2022-23");
        assert_eq!(normalize_year("2022\u{2014}23"), "2022-23");
        assert_eq!(normalize_year("2024"), "2024");
    }

    #[test]
    fn keeps_cross_century_spans_long() {
        assert_eq!(normalize_year("1999-2000"), "1999-2000");
        assert_eq!(alternate_year_spelling("1999-2000"), None);
    }

    #[test]
    fn plain_year_has_no_alternate() {
        assert_eq!(alternate_year_spelling("2021"), None);
        assert_eq!(alternate_year_spelling("2022-23").as_deref(), Some("2022-2023"));
    }
}
