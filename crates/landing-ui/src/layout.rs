//! Overflow correction for floating panels.
//!
//! This is the one place where a rendered node's style is written outside of
//! `html!`. Everything else stays declarative.
use web_sys::HtmlElement;

use crate::constants::edge_inset;
use crate::error::LayoutError;
use crate::viewport::ViewportWidth;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub width: i32,
}

impl Bounds {
    pub fn right_edge(&self) -> i64 {
        i64::from(self.left) + i64::from(self.width)
    }

    pub fn overflows(&self, viewport: ViewportWidth) -> bool {
        self.right_edge() > i64::from(viewport.px())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Correction {
    Pinned,
    Untouched,
}

/// Something with a horizontal position we can measure and pin.
pub trait Measured {
    fn bounds(&self) -> Bounds;
    fn pin_right(&self, inset: &str) -> Result<(), LayoutError>;
}

impl Measured for HtmlElement {
    fn bounds(&self) -> Bounds {
        Bounds {
            left: self.offset_left(),
            width: self.offset_width(),
        }
    }

    fn pin_right(&self, inset: &str) -> Result<(), LayoutError> {
        self.style()
            .set_property("right", inset)
            .map_err(LayoutError::style)
    }
}

/// Pin `target` to the right inset if it sticks out past the viewport.
pub fn correct_overflow<T: Measured>(
    target: &T,
    viewport: ViewportWidth,
) -> Result<Correction, LayoutError> {
    let bounds = target.bounds();
    if !bounds.overflows(viewport) {
        return Ok(Correction::Untouched);
    }

    log::debug!(
        "panel overflows viewport ({} > {}), pinning right edge",
        bounds.right_edge(),
        viewport.px()
    );
    target.pin_right(&edge_inset())?;
    Ok(Correction::Pinned)
}
