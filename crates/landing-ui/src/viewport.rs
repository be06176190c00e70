use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use yew::prelude::*;

use crate::error::LayoutError;

/// Window width in CSS pixels. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ViewportWidth(u32);

impl ViewportWidth {
    pub fn new(px: u32) -> Self {
        Self(px)
    }

    /// Clamp a raw `innerWidth` reading into a usable width.
    pub fn from_px(px: f64) -> Self {
        if px.is_finite() && px > 0.0 {
            Self(px.round().min(f64::from(u32::MAX)) as u32)
        } else {
            Self(0)
        }
    }

    pub fn px(&self) -> u32 {
        self.0
    }
}

/// Current window width, or `None` when there's no window (e.g. prerendering).
pub fn read_viewport_width() -> Option<ViewportWidth> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    Some(ViewportWidth::from_px(width))
}

/// Window `resize` subscription. Dropping it removes the listener.
pub struct ViewportSubscription {
    _listener: EventListener,
}

impl ViewportSubscription {
    pub fn new<F>(on_change: F) -> Result<Self, LayoutError>
    where
        F: Fn(ViewportWidth) + 'static,
    {
        let window = web_sys::window().ok_or(LayoutError::NoWindow)?;
        let listener = EventListener::new(&window, "resize", move |_| {
            if let Some(width) = read_viewport_width() {
                on_change(width);
            }
        });

        Ok(Self {
            _listener: listener,
        })
    }
}

/// Shared view of the last known viewport width.
#[derive(Clone)]
pub struct ViewportHandle(Rc<RefCell<Option<ViewportWidth>>>);

impl ViewportHandle {
    /// Last observed width, falling back to a fresh read if nothing has been
    /// observed yet.
    pub fn current(&self) -> Option<ViewportWidth> {
        let known = *self.0.borrow();
        known.or_else(|| {
            let width = read_viewport_width();
            *self.0.borrow_mut() = width;
            width
        })
    }
}

/// Tracks the window width for as long as the calling component is mounted.
///
/// The first reading is taken when the component is first rendered, later ones
/// come from window `resize` events. Updates don't trigger a re-render.
#[hook]
pub fn use_viewport_width() -> ViewportHandle {
    let width = use_mut_ref(read_viewport_width);

    {
        let width = width.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = ViewportSubscription::new(move |updated| {
                    *width.borrow_mut() = Some(updated);
                });

                if let Err(err) = &subscription {
                    log::warn!("viewport width will not track resizes: {err}");
                }

                move || drop(subscription)
            },
            (),
        );
    }

    ViewportHandle(width)
}
