/*!
# Vista 3D Engine

Scene orchestration core for a scroll-driven cinematic 3D experience.

As the hosting page scrolls, a camera moves through a sequence of
waypoints while 3D assets associated with page sections fade in, animate,
and fade out. This crate owns the hard parts of that experience:

- **SceneResourceManager**: scene graph, camera, render device and the
  lifetime of every loaded asset (load/get/dispose)
- **RenderPipeline**: ordered post-processing pass chain (SSAO, bloom,
  anti-aliasing, tone-mapped output) over the base scene render
- **ScrollTimelineController**: maps continuous scroll position to camera
  pose and per-section enter/leave asset transitions
- **AssetMetadataStore** / **progress**: asset metadata loading and
  aggregate load-progress reporting
- **DiagnosticInspector**: read-only scene introspection for verification

The page markup, navigation, styling and the scroll/render host
primitives are external collaborators, reached through the `FetchSource`,
`ScrollAdapter`, `FrameDriver` and `RenderDevice` traits. Backend
implementations provide concrete types for those seams.
*/

// Internal modules
mod error;
pub mod log;
pub mod fetch;
pub mod metadata;
pub mod progress;
pub mod camera;
pub mod scene;
pub mod pipeline;
pub mod timeline;
pub mod inspect;

// Main vista3d namespace module
pub mod vista3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, dispatch, dispatch_detailed,
        };
        // Note: engine_* macros are NOT re-exported here - they live at the crate root
    }

    // Fetch seam (non-blocking asset/metadata retrieval)
    pub mod fetch {
        pub use crate::fetch::*;
    }

    // Asset metadata and section configuration
    pub mod metadata {
        pub use crate::metadata::*;
    }

    // Load progress aggregation
    pub mod progress {
        pub use crate::progress::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module (nodes, resources, manager)
    pub mod scene {
        pub use crate::scene::*;
    }

    // Post-processing pipeline
    pub mod pipeline {
        pub use crate::pipeline::*;
    }

    // Scroll timeline (bindings, tweens, controller)
    pub mod timeline {
        pub use crate::timeline::*;
    }

    // Diagnostic inspection
    pub mod inspect {
        pub use crate::inspect::*;
    }
}

// Re-export math library at crate root
pub use glam;
