use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event};

use crate::domain::logging::LogComponent;
use crate::infrastructure::describe;
use crate::{log_error, log_warn};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
    pub once: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false, once: false }
    }
}

impl EventOptions {
    fn to_js(&self) -> AddEventListenerOptions {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(self.passive);
        opts.set_capture(self.capture);
        opts.set_once(self.once);
        opts
    }
}

/// Window listener that detaches itself when dropped.
pub struct WindowEventListenerHandle {
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl Drop for WindowEventListenerHandle {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else { return };
        if let Err(e) = window.remove_event_listener_with_callback_and_bool(
            &self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        ) {
            log_warn!(
                LogComponent::Infrastructure("Events"),
                "{} listener not removed: {}",
                self.event_name,
                describe(&e)
            );
        }
    }
}

pub fn window_event_listener_with_options<E>(
    event: E,
    options: &EventOptions,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> WindowEventListenerHandle
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let event_name = event.name().to_string();
    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
                &event_name,
                callback.as_ref().unchecked_ref(),
                &options.to_js(),
            ) {
                log_error!(
                    LogComponent::Infrastructure("Events"),
                    "{} listener not attached: {}",
                    event_name,
                    describe(&e)
                );
            }
        }
        None => {
            log_warn!(LogComponent::Infrastructure("Events"), "no window for {} listener", event_name);
        }
    }

    WindowEventListenerHandle { event_name, callback, capture: options.capture }
}

/// Passive `resize` listener on the window.
pub fn on_window_resize(cb: impl FnMut(web_sys::UiEvent) + 'static) -> WindowEventListenerHandle {
    window_event_listener_with_options(leptos::ev::resize, &EventOptions::default(), cb)
}
