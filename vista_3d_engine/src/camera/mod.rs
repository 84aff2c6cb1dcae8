//! Camera module — the perspective camera driven by the scroll timeline.

mod camera;

pub use camera::PerspectiveCamera;
