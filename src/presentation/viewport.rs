use leptos::*;

use crate::domain::chart::ViewportClass;
use crate::event_utils::on_window_resize;
use crate::infrastructure::viewport_width;

/// Window width when no window can be queried.
const FALLBACK_WIDTH: f64 = 1200.0;

/// Reactive window size shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: ReadSignal<f64>,
    pub class: Memo<ViewportClass>,
}

impl Viewport {
    /// Derives the size class from any width signal.
    pub fn new(width: ReadSignal<f64>) -> Self {
        let class = create_memo(move |_| ViewportClass::from_width(width.get()));
        Self { width, class }
    }
}

/// Tracks `window.innerWidth` and publishes it to child components.
pub fn provide_viewport() -> Viewport {
    let (width, set_width) = create_signal(viewport_width().unwrap_or(FALLBACK_WIDTH));

    let listener = on_window_resize(move |_| {
        if let Some(next) = viewport_width() {
            if width.get_untracked() != next {
                set_width.set(next);
            }
        }
    });
    on_cleanup(move || drop(listener));

    let viewport = Viewport::new(width);
    provide_context(viewport);
    viewport
}

/// The nearest provided viewport, or a fresh one for standalone use.
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>().unwrap_or_else(provide_viewport)
}

pub fn use_viewport_class() -> Memo<ViewportClass> {
    use_viewport().class
}
