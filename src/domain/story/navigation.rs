use super::resolver::{AnchorLookup, resolve_story_id};
use crate::domain::career::Direction;
use crate::domain::errors::DomResult;
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Document operations needed to jump to a story section.
pub trait ScrollHost {
    /// Smooth-scrolls the element with `id` to the top of the viewport.
    fn scroll_to_anchor(&self, id: &str) -> DomResult<()>;
    /// Replaces the URL fragment with `#id` without reloading.
    fn replace_fragment(&self, id: &str) -> DomResult<()>;
}

impl<T: ScrollHost + ?Sized> ScrollHost for &T {
    fn scroll_to_anchor(&self, id: &str) -> DomResult<()> {
        (**self).scroll_to_anchor(id)
    }

    fn replace_fragment(&self, id: &str) -> DomResult<()> {
        (**self).replace_fragment(id)
    }
}

/// Resolves a candle to its story section and scrolls there.
/// Every step is best-effort; failures are logged and swallowed.
pub struct StoryNavigator<A: AnchorLookup, S: ScrollHost> {
    anchors: A,
    scroll: S,
}

impl<A: AnchorLookup, S: ScrollHost> StoryNavigator<A, S> {
    pub fn new(anchors: A, scroll: S) -> Self {
        Self { anchors, scroll }
    }

    pub fn resolve(&self, year: &str, direction: Option<Direction>) -> Option<String> {
        resolve_story_id(year, direction, &self.anchors)
    }

    pub fn has_story(&self, year: &str, direction: Option<Direction>) -> bool {
        self.resolve(year, direction).is_some()
    }

    /// Returns the id navigated to, or `None` when nothing resolved.
    pub fn navigate(&self, year: &str, direction: Option<Direction>) -> Option<String> {
        let Some(id) = self.resolve(year, direction) else {
            log_debug!(LogComponent::Domain("StoryNavigator"), "no story section for {}", year);
            return None;
        };
        self.navigate_to_id(&id);
        Some(id)
    }

    /// Scroll and fragment update are independent of each other.
    pub fn navigate_to_id(&self, id: &str) {
        if let Err(e) = self.scroll.scroll_to_anchor(id) {
            log_debug!(LogComponent::Domain("StoryNavigator"), "scroll to {} skipped: {}", id, e);
        }
        if let Err(e) = self.scroll.replace_fragment(id) {
            log_debug!(LogComponent::Domain("StoryNavigator"), "fragment #{} not updated: {}", id, e);
        }
    }
}
