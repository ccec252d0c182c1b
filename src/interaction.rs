//! Interaction state machines behind the site's animated components.
//!
//! Nothing in here touches the DOM. Components in `crate::app` own the signals,
//! measure elements and feed events into these types, then render whatever
//! style they derive.

pub mod chip;
pub mod device;
pub mod hover;
pub mod marquee;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod theme;

/// Bounding box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}
