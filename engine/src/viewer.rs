//! Viewer Core
//!
//! The toolkit-free heart of the demo. `RenderHooks` is the explicit
//! interface a host window adapter drives (init, resize, frame, key);
//! `TerrainViewer` implements it on top of the camera, mesh, and terrain
//! pass. No windowing types appear here, so the whole render path can be
//! exercised headless from tests.

use glam::Mat4;

use crate::camera::{FlyCamera, Projection, turntable_angle};
use crate::error::TerrainError;
use crate::input::{CameraAction, KeyBindings, KeyCode};
use crate::render::shader_loader::{ShaderSource, embedded};
use crate::render::terrain_pass::TerrainPass;
use crate::terrain::{CellOrder, Heightmap, TerrainMesh};

/// GPU handles a hook implementation may create resources against.
pub struct RenderContext<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub width: u32,
    pub height: u32,
}

/// Per-frame recording targets.
pub struct FrameContext<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
    pub depth_view: &'a wgpu::TextureView,
}

/// Host-toolkit-facing interface of the render core.
///
/// The windowing adapter calls these; the core never calls the toolkit.
pub trait RenderHooks {
    /// Create GPU resources. Called once, after the context exists.
    fn on_init(&mut self, ctx: &RenderContext);

    /// Window size changed: recompute the projection. Nothing else.
    fn on_resize(&mut self, width: u32, height: u32);

    /// Record one frame for the given timer tick.
    fn on_frame(&mut self, ctx: &RenderContext, frame: &mut FrameContext, tick: u64);

    /// Handle a key press. Returns true if state changed and a redraw is
    /// needed.
    fn on_key(&mut self, key: KeyCode) -> bool;
}

/// Viewer behavior knobs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewerConfig {
    /// Rotate the model as a pure function of the timer tick.
    pub auto_spin: bool,
    /// Index-buffer cell emission order (experimental Morton option).
    pub cell_order: CellOrder,
}

/// The render core: camera + projection + mesh + terrain pass.
pub struct TerrainViewer {
    camera: FlyCamera,
    projection: Projection,
    bindings: KeyBindings,
    heightmap: Heightmap,
    mesh: TerrainMesh,
    terrain: Option<TerrainPass>,
    auto_spin: bool,
}

impl TerrainViewer {
    /// Build the CPU side of the viewer. Fails on degenerate heightmap
    /// dimensions before any GPU work happens.
    pub fn new(heightmap: Heightmap, config: ViewerConfig) -> Result<Self, TerrainError> {
        let mesh = TerrainMesh::generate_ordered(
            heightmap.width(),
            heightmap.height(),
            config.cell_order,
        )?;

        Ok(Self {
            camera: FlyCamera::new(),
            projection: Projection::new(1, 1),
            bindings: KeyBindings::new(),
            heightmap,
            mesh,
            terrain: None,
            auto_spin: config.auto_spin,
        })
    }

    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    pub fn mesh(&self) -> &TerrainMesh {
        &self.mesh
    }

    /// Compute this frame's (MV, MVP) pair from camera state and tick.
    ///
    /// Pure: no state is mutated, so a frame is reproducible from the same
    /// camera state and tick count.
    pub fn matrices(&self, tick: u64) -> (Mat4, Mat4) {
        let mut model = self.camera.model_matrix();
        if self.auto_spin {
            model = Mat4::from_rotation_y(turntable_angle(tick).to_radians()) * model;
        }
        let mv = self.camera.view_matrix() * model;
        let mvp = self.projection.matrix() * mv;
        (mv, mvp)
    }

    fn apply_action(&mut self, action: CameraAction) {
        match action {
            CameraAction::ZoomIn => self.camera.zoom_in(),
            CameraAction::ZoomOut => self.camera.zoom_out(),
            CameraAction::DollyForward => self.camera.dolly_forward(),
            CameraAction::DollyBack => self.camera.dolly_back(),
            CameraAction::StrafeLeft => self.camera.strafe_left(),
            CameraAction::StrafeRight => self.camera.strafe_right(),
            CameraAction::YawLeft => self.camera.yaw_left(),
            CameraAction::YawRight => self.camera.yaw_right(),
        }
    }
}

impl RenderHooks for TerrainViewer {
    fn on_init(&mut self, ctx: &RenderContext) {
        self.projection.resize(ctx.width, ctx.height);
        let shader = ShaderSource::Embedded(embedded::TERRAIN);
        self.terrain = Some(TerrainPass::new(
            ctx.device,
            ctx.queue,
            ctx.surface_format,
            &self.heightmap,
            &self.mesh,
            &shader,
        ));
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    fn on_frame(&mut self, ctx: &RenderContext, frame: &mut FrameContext, tick: u64) {
        let Some(terrain) = &self.terrain else {
            return;
        };

        let (mv, mvp) = self.matrices(tick);
        terrain.update(ctx.queue, mv, mvp);

        // Bindings are scoped to this pass; dropping it releases them.
        let mut render_pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Terrain Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: frame.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.0,
                        g: 0.0,
                        b: 0.0,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: frame.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        terrain.draw(&mut render_pass);
    }

    fn on_key(&mut self, key: KeyCode) -> bool {
        match self.bindings.action_for(key) {
            Some(action) => {
                self.apply_action(action);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    fn viewer() -> TerrainViewer {
        TerrainViewer::new(Heightmap::procedural(16, 16), ViewerConfig::default()).unwrap()
    }

    #[test]
    fn test_viewer_rejects_degenerate_heightmap() {
        let result = TerrainViewer::new(Heightmap::procedural(1, 16), ViewerConfig::default());
        assert!(matches!(result, Err(TerrainError::InvalidGeometry { .. })));
    }

    #[test]
    fn test_key_marks_frame_dirty() {
        let mut viewer = viewer();
        assert!(viewer.on_key(KeyCode::W));
        assert!(viewer.on_key(KeyCode::ArrowLeft));
        assert!(!viewer.on_key(KeyCode::Escape));
    }

    #[test]
    fn test_matrices_depend_only_on_state() {
        let viewer = viewer();
        let (mv_a, mvp_a) = viewer.matrices(7);
        let (mv_b, mvp_b) = viewer.matrices(7);
        assert_eq!(mv_a, mv_b);
        assert_eq!(mvp_a, mvp_b);
    }

    #[test]
    fn test_mv_places_center_on_view_axis() {
        let mut viewer = viewer();
        viewer.on_resize(800, 600);
        let (mv, _) = viewer.matrices(0);
        // The model origin (= camera center) sits 5 units down the -Z view axis
        let origin_view = mv * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((Vec3::new(origin_view.x, origin_view.y, origin_view.z)
            - Vec3::new(0.0, 0.0, -5.0))
        .length()
            < 1e-5);
    }

    #[test]
    fn test_zoom_keys_change_scale() {
        let mut viewer = viewer();
        viewer.on_key(KeyCode::Equal);
        assert!((viewer.camera().scale - 1.1).abs() < 1e-6);
        viewer.on_key(KeyCode::Minus);
        viewer.on_key(KeyCode::Minus);
        assert!((viewer.camera().scale - 0.9).abs() < 1e-6);
    }
}
