use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Window};

use crate::config;
use crate::visibility::{Geometry, GeometrySource, ScrollHost, WatchError};

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Reads geometry straight from the live document.
#[derive(Clone, Copy, Default)]
pub struct DomGeometry;

impl GeometrySource for DomGeometry {
    fn geometry(&self, id: &str) -> Option<Geometry> {
        let window = window()?;
        let element = window.document()?.get_element_by_id(id)?;
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        Some(Geometry {
            top: element.get_bounding_client_rect().top(),
            viewport_height,
        })
    }
}

/// Handler registered on the window, kept alive until detached.
pub struct ScrollListener {
    callback: Closure<dyn FnMut()>,
}

#[derive(Clone)]
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new() -> Result<Self, WatchError> {
        let window = window().ok_or(WatchError::NoWindow)?;
        Ok(Self { window })
    }
}

impl ScrollHost for WindowScroll {
    type Registration = ScrollListener;

    fn attach(&self, handler: Box<dyn FnMut()>) -> Result<ScrollListener, WatchError> {
        let callback = Closure::wrap(handler);
        self.window
            .add_event_listener_with_callback(config::SCROLL_EVENT, callback.as_ref().unchecked_ref())
            .map_err(|e| WatchError::Attach(describe(e)))?;
        Ok(ScrollListener { callback })
    }

    fn detach(&self, registration: ScrollListener) -> Result<(), WatchError> {
        let result = self
            .window
            .remove_event_listener_with_callback(
                config::SCROLL_EVENT,
                registration.callback.as_ref().unchecked_ref(),
            )
            .map_err(describe);
        settle_detach(result, move || registration.callback.forget())
    }
}

// A listener the browser refused to remove is still registered, so its
// closure must be leaked rather than freed. It keeps firing after detach.
fn settle_detach(result: Result<(), String>, leak: impl FnOnce()) -> Result<(), WatchError> {
    result.map_err(|reason| {
        warn!("Scroll listener still attached after detach: {}", reason);
        leak();
        WatchError::Detach(reason)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn removed_listener_is_released() {
        let leaked = Cell::new(false);
        assert!(settle_detach(Ok(()), || leaked.set(true)).is_ok());
        assert!(!leaked.get());
    }

    #[test]
    fn failed_removal_leaks_closure_and_reports() {
        let leaked = Cell::new(false);
        let err = settle_detach(Err("InvalidStateError".to_string()), || leaked.set(true)).unwrap_err();
        assert!(leaked.get());
        assert!(matches!(err, WatchError::Detach(reason) if reason == "InvalidStateError"));
    }
}
