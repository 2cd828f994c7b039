// ============================================================================
// EVENT HANDLING - Listeners con identidad estable
// ============================================================================
// El closure vive dentro del EventListener: misma función registrada y
// desregistrada. Drop => remove_event_listener. Nada de closure.forget()
// para listeners globales (document), así el widget se puede desmontar.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MouseEvent};

/// The part of a click event the widget acts on.
pub trait ClickEvent {
    fn stop_propagation(&self);
}

impl ClickEvent for MouseEvent {
    fn stop_propagation(&self) {
        Event::stop_propagation(self);
    }
}

/// A registered DOM listener that removes itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl EventListener {
    /// Register `handler` for `event_type` on `target`.
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            closure,
        })
    }

    /// Click listener
    pub fn click<F>(target: &EventTarget, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        Self::new(target, "click", handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("⚠️ [DOM] No se pudo quitar listener '{}': {:?}", self.event_type, e);
        }
    }
}

/// One-shot listener for a plain `Event` that lives as long as the page
/// (used for `DOMContentLoaded`).
pub fn on_event_once<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let closure: Closure<dyn FnMut(Event)> = Closure::once(move |_e: Event| handler());
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Se dispara una sola vez por página
    closure.forget();
    Ok(())
}
