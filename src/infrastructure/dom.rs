use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::domain::chart::{OverflowHost, Rect};
use crate::domain::errors::{AppError, DomResult};
use crate::domain::logging::LogComponent;
use crate::domain::story::{AnchorLookup, ScrollHost, StoryNavigator};
use crate::log_warn;

fn document() -> DomResult<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::DomError("Document not available".to_string()))
}

/// Best-effort text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl From<&web_sys::DomRect> for Rect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Client rectangle of an element.
pub fn bounding_rect(element: &web_sys::Element) -> Rect {
    Rect::from(&element.get_bounding_client_rect())
}

/// Current `window.innerWidth`, if a window exists.
pub fn viewport_width() -> Option<f64> {
    web_sys::window().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64())
}

/// Looks anchors up in the live document on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomAnchors;

impl AnchorLookup for DomAnchors {
    fn contains_anchor(&self, id: &str) -> bool {
        document().map(|d| d.get_element_by_id(id).is_some()).unwrap_or(false)
    }
}

/// Smooth scrolling plus `history.replaceState` on the live window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScroll;

impl ScrollHost for BrowserScroll {
    fn scroll_to_anchor(&self, id: &str) -> DomResult<()> {
        let element = document()?
            .get_element_by_id(id)
            .ok_or_else(|| AppError::DomError(format!("element #{} not found", id)))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn replace_fragment(&self, id: &str) -> DomResult<()> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::HistoryError("Window not available".to_string()))?;
        let history = window.history().map_err(|e| AppError::HistoryError(describe(&e)))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", id)))
            .map_err(|e| AppError::HistoryError(describe(&e)))
    }
}

/// `document.body.style.overflow`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyOverflow;

impl BodyOverflow {
    fn body() -> Option<HtmlElement> {
        document().ok().and_then(|d| d.body())
    }
}

impl OverflowHost for BodyOverflow {
    fn overflow(&self) -> String {
        Self::body()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let Some(body) = Self::body() else { return };
        if let Err(e) = body.style().set_property("overflow", value) {
            log_warn!(LogComponent::Infrastructure("BodyOverflow"), "overflow not set: {}", describe(&e));
        }
    }
}

/// Navigator wired to the live document.
pub fn story_navigator() -> StoryNavigator<DomAnchors, BrowserScroll> {
    StoryNavigator::new(DomAnchors, BrowserScroll)
}
