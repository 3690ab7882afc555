//! Window-level event subscription that unsubscribes when dropped.

use dioxus::logger::tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

pub struct WindowListener {
    event: &'static str,
    target: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// Returns `None` when there is no window or the browser refuses the
    /// listener.
    pub fn new(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let target = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        if let Err(err) = target.add_event_listener_with_callback(event, function) {
            warn!(event, ?err, "failed to register window listener");
            return None;
        }
        debug!(event, "window listener registered");
        Some(Self {
            event,
            target,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let function: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, function);
        debug!(event = self.event, "window listener removed");
    }
}
