//! Scroll timeline — mapping continuous page scroll to camera pose and
//! per-section asset transitions, plus the tween machinery behind the
//! continuous animations.

mod easing;
mod tween;
mod controller;

pub use easing::Easing;
pub use tween::{Repeat, Tween};
pub use controller::{
    ScrollAdapter, ScrollTimelineController, SectionBinding, SectionExtent,
};
