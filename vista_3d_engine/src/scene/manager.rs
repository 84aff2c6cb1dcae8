//! Scene resource manager — owner of the scene graph, camera, render
//! device and every loaded asset's GPU resources.
//!
//! The manager is the sole mutator of GPU resource lifetime: it uploads
//! buffers when an asset loads and releases them on dispose. The scroll
//! timeline only reads scene state and writes transforms/materials
//! through handles obtained here; it never creates or destroys nodes.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::{engine_debug, engine_info, engine_warn};
use crate::camera::PerspectiveCamera;
use crate::error::{Error, Result};
use crate::fetch::{FetchPoll, FetchSource, FetchStream};
use crate::inspect::DiagnosticInspector;
use crate::metadata::{color_vec3, AssetDescriptor, SceneConfig};
use crate::pipeline::RenderPipeline;
use super::device::{FrameDraw, GeometryHandle, GeometryUpload, MaterialHandle, RenderDevice};
use super::light::Light;
use super::loader::ModelLoader;
use super::node::{Mesh, NodeKey, NodeKind, SceneNode};
use super::scene::{collect_draws, Scene};

const LOG_SRC: &str = "vista3d::SceneResourceManager";

/// External per-frame scheduling primitive (the display's vsync callback).
///
/// `next_frame` blocks until the next display frame and returns false
/// when the host stops driving frames.
pub trait FrameDriver {
    fn next_frame(&mut self) -> bool;
}

/// A successfully loaded asset: its scene subtree root plus the GPU
/// buffers uploaded for it. Owned exclusively by the manager.
pub struct LoadedAsset {
    /// Root group node of the instantiated subtree
    pub root: NodeKey,
    geometry_buffers: Vec<GeometryHandle>,
    material_buffers: Vec<MaterialHandle>,
}

/// Owner of the 3D scene, camera, renderer and loaded-asset lifecycle.
pub struct SceneResourceManager {
    device: Arc<Mutex<dyn RenderDevice>>,
    fetch: Arc<dyn FetchSource>,
    loader: Box<dyn ModelLoader>,
    scene: Scene,
    camera: PerspectiveCamera,
    pipeline: Option<RenderPipeline>,
    assets: FxHashMap<String, LoadedAsset>,
    last_frame: Option<Instant>,
    disposed: bool,
}

impl SceneResourceManager {
    /// Build the scene: background, camera, lighting rig and (when the
    /// device cooperates) the post-processing pipeline.
    ///
    /// A pipeline that fails to construct entirely is not fatal — the
    /// manager degrades to direct base-scene rendering.
    pub fn new(
        device: Arc<Mutex<dyn RenderDevice>>,
        fetch: Arc<dyn FetchSource>,
        loader: Box<dyn ModelLoader>,
        config: &SceneConfig,
        width: u32,
        height: u32,
    ) -> Self {
        let mut scene = Scene::new();
        Self::build_lighting(&mut scene, config);

        let mut camera = PerspectiveCamera::new(
            config.camera.fov,
            width as f32 / height.max(1) as f32,
            config.camera.near,
            config.camera.far,
        );
        camera.set_position(config.camera.initial_position);
        camera.look_at(glam::Vec3::ZERO);
        engine_debug!(
            LOG_SRC,
            "Camera at {:?} looking at the origin",
            config.camera.initial_position
        );

        let pipeline = match RenderPipeline::new(Arc::clone(&device), width, height) {
            Ok(pipeline) => {
                engine_info!(LOG_SRC, "Post-processing enabled");
                Some(pipeline)
            }
            Err(e) => {
                engine_warn!(LOG_SRC, "Post-processing failed, using base rendering: {}", e);
                None
            }
        };

        Self {
            device,
            fetch,
            loader,
            scene,
            camera,
            pipeline,
            assets: FxHashMap::default(),
            last_frame: None,
            disposed: false,
        }
    }

    fn build_lighting(scene: &mut Scene, config: &SceneConfig) {
        let rig = &config.lighting;
        let root = scene.root();

        scene.add_node(
            root,
            SceneNode::new(
                "ambient-light",
                NodeKind::Light(Light::ambient(
                    color_vec3(rig.ambient.color),
                    rig.ambient.intensity,
                )),
            ),
        );

        if let Some(directional) = &rig.directional {
            scene.add_node(
                root,
                SceneNode::new(
                    "key-light",
                    NodeKind::Light(Light::directional_from(
                        directional.position,
                        color_vec3(directional.color),
                        directional.intensity,
                    )),
                ),
            );
        }

        scene.add_node(
            root,
            SceneNode::new(
                "hemisphere-light",
                NodeKind::Light(Light::hemisphere(
                    color_vec3(rig.hemisphere.color),
                    color_vec3(0x444444),
                    rig.hemisphere.intensity,
                )),
            ),
        );
    }

    // ===== ACCESSORS =====

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    pub fn pipeline(&self) -> Option<&RenderPipeline> {
        self.pipeline.as_ref()
    }

    pub fn pipeline_mut(&mut self) -> Option<&mut RenderPipeline> {
        self.pipeline.as_mut()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Number of loaded assets.
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Pure lookup of a loaded asset; no side effects.
    pub fn get_asset(&self, id: &str) -> Option<&LoadedAsset> {
        self.assets.get(id)
    }

    /// Scene-graph root key of a loaded asset.
    pub fn asset_root(&self, id: &str) -> Option<NodeKey> {
        self.assets.get(id).map(|a| a.root)
    }

    // ===== LOADING =====

    /// Load one asset: fetch its binary, parse it, apply the descriptor
    /// transform and visibility, upload buffers and attach the subtree.
    ///
    /// Fractional progress in [0,100] is reported through `on_progress`
    /// as bytes stream in.
    pub fn load_asset<F: FnMut(f32)>(
        &mut self,
        descriptor: &AssetDescriptor,
        mut on_progress: F,
    ) -> Result<NodeKey> {
        if self.disposed {
            return Err(Error::Disposed("load_asset"));
        }

        let path = format!("assets/{}", descriptor.file);
        engine_debug!(LOG_SRC, "Loading asset from: {}", path);

        let mut stream = self
            .fetch
            .open(&path)
            .map_err(|e| with_asset_id(e, &descriptor.id))?;
        let bytes = loop {
            match stream.poll().map_err(|e| with_asset_id(e, &descriptor.id))? {
                FetchPoll::Progress { received, total } => {
                    if total > 0 {
                        on_progress(received as f32 / total as f32 * 100.0);
                    }
                }
                FetchPoll::Done(bytes) => break bytes,
            }
        };
        on_progress(100.0);

        self.instantiate_asset(descriptor, &bytes)
    }

    /// Load all descriptors with overlapping in-flight transfers.
    ///
    /// All streams are opened up front and polled round-robin, so
    /// per-asset progress callbacks interleave arbitrarily while their
    /// completions stay serialized on this thread. The first failure
    /// fails the aggregate operation; remaining streams are dropped,
    /// which abandons their transfers without leaking. Assets that
    /// finished before the failure remain loaded.
    pub fn load_all_assets<F: FnMut(&str, f32)>(
        &mut self,
        descriptors: &[AssetDescriptor],
        mut on_progress: F,
    ) -> Result<()> {
        if self.disposed {
            return Err(Error::Disposed("load_all_assets"));
        }

        struct InFlight<'a> {
            descriptor: &'a AssetDescriptor,
            stream: Box<dyn FetchStream>,
        }

        let mut pending: Vec<InFlight<'_>> = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let path = format!("assets/{}", descriptor.file);
            let stream = self
                .fetch
                .open(&path)
                .map_err(|e| with_asset_id(e, &descriptor.id))?;
            pending.push(InFlight { descriptor, stream });
        }

        while !pending.is_empty() {
            let mut i = 0;
            while i < pending.len() {
                match pending[i].stream.poll() {
                    Ok(FetchPoll::Progress { received, total }) => {
                        if total > 0 {
                            on_progress(
                                &pending[i].descriptor.id,
                                received as f32 / total as f32 * 100.0,
                            );
                        }
                        i += 1;
                    }
                    Ok(FetchPoll::Done(bytes)) => {
                        let flight = pending.swap_remove(i);
                        on_progress(&flight.descriptor.id, 100.0);
                        self.instantiate_asset(flight.descriptor, &bytes)?;
                    }
                    Err(e) => {
                        return Err(with_asset_id(e, &pending[i].descriptor.id));
                    }
                }
            }
        }

        engine_info!(LOG_SRC, "All {} assets loaded", descriptors.len());
        Ok(())
    }

    /// Parse a fetched payload and attach it to the scene under the
    /// descriptor's id, with buffers uploaded to the device.
    fn instantiate_asset(
        &mut self,
        descriptor: &AssetDescriptor,
        bytes: &[u8],
    ) -> Result<NodeKey> {
        let model = self.loader.parse(descriptor, bytes)?;

        // Asset root: transform is a direct assignment from the
        // descriptor so it reads back exactly as configured.
        let mut root_node = SceneNode::new(&descriptor.id, NodeKind::Group);
        root_node.transform.position = descriptor.position;
        root_node.transform.rotation = descriptor.rotation;
        root_node.transform.scale = descriptor.scale;
        root_node.visible = descriptor.default_visible();
        let root = self.scene.add_node(self.scene.root(), root_node);

        let mut geometry_buffers = Vec::with_capacity(model.meshes.len());
        let mut material_buffers = Vec::with_capacity(model.meshes.len());
        let device = Arc::clone(&self.device);

        let upload_result: Result<()> = (|| {
            let mut device = lock_device(&device)?;
            for parsed in model.meshes {
                let mut geometry = parsed.geometry;
                // Smooth shading regardless of source file origin
                geometry.compute_vertex_normals();
                let vertices = geometry.pack_vertices();
                let geometry_handle = device.upload_geometry(&GeometryUpload {
                    vertices: &vertices,
                    indices: &geometry.indices,
                    label: &parsed.name,
                })?;
                geometry.gpu = Some(geometry_handle);
                geometry_buffers.push(geometry_handle);

                let mut material = parsed.material;
                let material_handle = device.upload_material(&material, &parsed.name)?;
                material.gpu = Some(material_handle);
                material_buffers.push(material_handle);

                if material.is_emissive() {
                    engine_debug!(
                        LOG_SRC,
                        "Emissive material: {} (intensity {})",
                        material.name,
                        material.emissive_intensity
                    );
                }

                // Baked lighting: shadows stay off
                let mesh = Mesh::new(geometry, material);
                self.scene
                    .add_node(root, SceneNode::new(&parsed.name, NodeKind::Mesh(mesh)));
            }
            Ok(())
        })();

        if let Err(e) = upload_result {
            // Roll back the partial subtree and any buffers it uploaded.
            if let Ok(mut device) = self.device.lock() {
                for handle in geometry_buffers {
                    device.release_geometry(handle);
                }
                for handle in material_buffers {
                    device.release_material(handle);
                }
            }
            self.scene.remove_subtree(root);
            return Err(e);
        }

        // Early material/lighting verification on the very first load.
        // Debug-only hook, not required for correctness.
        if self.assets.is_empty() {
            engine_info!(LOG_SRC, "Running first-load diagnostic...");
            DiagnosticInspector::analyze_model(&self.scene, root);
            DiagnosticInspector::full_diagnostic(&self.scene, &self.camera);
        }

        engine_info!(LOG_SRC, "Loaded asset '{}'", descriptor.id);
        self.assets.insert(
            descriptor.id.clone(),
            LoadedAsset {
                root,
                geometry_buffers,
                material_buffers,
            },
        );
        Ok(root)
    }

    // ===== ASSET STATE =====

    /// Toggle an asset's render visibility. No-op when the id is absent.
    pub fn set_asset_visibility(&mut self, id: &str, visible: bool) {
        if let Some(root) = self.asset_root(id) {
            if let Some(node) = self.scene.node_mut(root) {
                node.visible = visible;
            }
        }
    }

    /// Set the opacity of every material in an asset's subtree, marking
    /// them transparent so the blend state follows. No-op when absent.
    pub fn set_asset_opacity(&mut self, id: &str, opacity: f32) {
        let Some(root) = self.asset_root(id) else {
            return;
        };
        for key in self.scene.subtree_keys(root) {
            if let Some(mesh) = self.scene.node_mut(key).and_then(|n| n.as_mesh_mut()) {
                mesh.material.transparent = true;
                mesh.material.opacity = opacity.clamp(0.0, 1.0);
            }
        }
    }

    // ===== RENDERING =====

    /// Render one frame: through the pipeline when attached, otherwise a
    /// direct base scene render (graceful degradation when post-processing
    /// initialization failed).
    pub fn render(&mut self) -> Result<()> {
        if self.disposed {
            return Err(Error::Disposed("render"));
        }
        if let Some(pipeline) = self.pipeline.as_mut() {
            return pipeline.render(&self.scene, &self.camera);
        }

        let draws = collect_draws(&self.scene);
        let mut device = lock_device(&self.device)?;
        device.draw(
            &FrameDraw {
                draws: &draws,
                view: self.camera.view_matrix(),
                projection: self.camera.projection_matrix(),
                clear_color: self.scene.background,
            },
            None,
        )?;
        device.present()
    }

    /// Drive the continuous frame loop.
    ///
    /// Each tick computes the wall-clock delta since the previous frame,
    /// invokes `on_frame` (which receives the manager so scroll/animation
    /// state can be advanced), then renders. The loop checks the liveness
    /// flag every tick and stops as soon as the manager is disposed —
    /// there is no other stop mechanism besides the driver running out of
    /// frames.
    pub fn animate<F>(&mut self, driver: &mut dyn FrameDriver, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&mut Self, f32),
    {
        self.last_frame = Some(Instant::now());
        loop {
            if self.disposed || !driver.next_frame() || self.disposed {
                return Ok(());
            }
            let now = Instant::now();
            let delta = self
                .last_frame
                .map(|last| now.duration_since(last).as_secs_f32())
                .unwrap_or(0.0);
            self.last_frame = Some(now);

            on_frame(self, delta);
            if self.disposed {
                // Disposed from inside the frame callback
                return Ok(());
            }
            self.render()?;
        }
    }

    /// Viewport resize: camera aspect + projection, renderer framebuffer,
    /// and every pipeline pass target. No-op once disposed.
    pub fn handle_resize(&mut self, width: u32, height: u32) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        self.camera
            .set_aspect(width as f32 / height.max(1) as f32);
        {
            let mut device = lock_device(&self.device)?;
            device.resize_surface(width, height);
        }
        if let Some(pipeline) = self.pipeline.as_mut() {
            pipeline.set_size(width, height)?;
        }
        Ok(())
    }

    // ===== TEARDOWN =====

    /// Release everything: pipeline targets, every asset's geometry and
    /// material buffers, the asset mapping and the scene graph.
    /// Idempotent; later calls return immediately.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        if let Some(mut pipeline) = self.pipeline.take() {
            pipeline.dispose();
        }

        if let Ok(mut device) = self.device.lock() {
            for (_, asset) in self.assets.drain() {
                for handle in asset.geometry_buffers {
                    device.release_geometry(handle);
                }
                for handle in asset.material_buffers {
                    device.release_material(handle);
                }
            }
        } else {
            self.assets.clear();
        }

        self.scene = Scene::new();
        engine_info!(LOG_SRC, "Scene disposed");
    }
}

fn lock_device<'a>(
    device: &'a Arc<Mutex<dyn RenderDevice>>,
) -> Result<MutexGuard<'a, dyn RenderDevice + 'static>> {
    device
        .lock()
        .map_err(|_| Error::Device("render device lock poisoned".to_string()))
}

fn with_asset_id(err: Error, id: &str) -> Error {
    match err {
        Error::AssetFetch { path, reason, .. } => Error::AssetFetch {
            asset_id: Some(id.to_string()),
            path,
            reason,
        },
        other => other,
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
