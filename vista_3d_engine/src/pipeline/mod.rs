//! Post-processing pipeline — the ordered pass chain over the base
//! scene render.

mod pipeline;

pub use pipeline::{BloomSettings, RenderPipeline, SsaoSettings};
