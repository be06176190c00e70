use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Element, HtmlElement, ResizeObserver, ResizeObserverEntry};

use crate::error::LayoutError;

/// A `ResizeObserver` watching a single element. The observer is disconnected
/// when this is dropped.
pub struct ResizeWatch {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeWatch {
    pub fn observe<F>(element: &Element, mut on_resize: F) -> Result<Self, LayoutError>
    where
        F: FnMut(HtmlElement) + 'static,
    {
        // Entries may arrive batched, each one is handled on its own.
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<ResizeObserverEntry>() else {
                    continue;
                };

                if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                    on_resize(target);
                }
            }
        });

        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
            .map_err(LayoutError::observer)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
