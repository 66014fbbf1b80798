//! Terrain Viewer
//!
//! Run with: `cargo run --bin terrain_viewer [heightmap.png] [--spin]`
//!
//! Renders a textured, lit terrain plane generated from a heightmap image
//! (or a procedural fallback when no file is given) and flies a look-at
//! camera over it.
//!
//! Controls:
//! - W / Up, S / Down: dolly forward / back
//! - A, D: strafe
//! - Left / Right: yaw 1 degree per press
//! - `+` / `-`: scale up / down
//! - ESC: Exit
//!
//! This file is the thin winit adapter; all rendering and camera logic lives
//! in the engine behind the `RenderHooks` interface.

use std::sync::Arc;
use std::time::{Duration, Instant};

use heightfield_engine::input;
use heightfield_engine::render::{GpuContext, GpuContextConfig};
use heightfield_engine::terrain::Heightmap;
use heightfield_engine::viewer::{
    FrameContext, RenderContext, RenderHooks, TerrainViewer, ViewerConfig,
};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

/// Fixed redraw timer interval (~83 ticks per second).
const TICK_INTERVAL: Duration = Duration::from_millis(12);

/// Grid size of the procedural fallback heightmap.
const FALLBACK_GRID: u32 = 129;

/// Map winit key codes onto the engine's generic key codes.
fn translate_key(key: KeyCode) -> input::KeyCode {
    match key {
        KeyCode::KeyW => input::KeyCode::W,
        KeyCode::KeyA => input::KeyCode::A,
        KeyCode::KeyS => input::KeyCode::S,
        KeyCode::KeyD => input::KeyCode::D,
        KeyCode::ArrowUp => input::KeyCode::ArrowUp,
        KeyCode::ArrowDown => input::KeyCode::ArrowDown,
        KeyCode::ArrowLeft => input::KeyCode::ArrowLeft,
        KeyCode::ArrowRight => input::KeyCode::ArrowRight,
        KeyCode::Equal => input::KeyCode::Equal,
        KeyCode::Minus => input::KeyCode::Minus,
        KeyCode::NumpadAdd => input::KeyCode::NumpadAdd,
        KeyCode::NumpadSubtract => input::KeyCode::NumpadSubtract,
        KeyCode::Escape => input::KeyCode::Escape,
        _ => input::KeyCode::Unknown,
    }
}

struct ViewerApp {
    // Declared before `gpu`: the viewer owns GPU buffers and textures, and
    // they must drop while the device is still alive.
    viewer: TerrainViewer,
    gpu: Option<GpuContext>,
    window: Option<Arc<Window>>,
    tick: u64,
    next_tick: Instant,
}

impl ViewerApp {
    fn new(viewer: TerrainViewer) -> Self {
        Self {
            viewer,
            gpu: None,
            window: None,
            tick: 0,
            next_tick: Instant::now() + TICK_INTERVAL,
        }
    }

    fn render(&mut self) {
        let Some(gpu) = &self.gpu else {
            return;
        };

        let output = match gpu.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Surface needs reconfiguring; skip this frame
                if let Some(gpu) = &mut self.gpu {
                    let (width, height) = gpu.dimensions();
                    gpu.resize(width, height);
                }
                return;
            }
            Err(e) => {
                eprintln!("[TerrainViewer] Dropped frame: {e}");
                return;
            }
        };

        let color_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        let (width, height) = gpu.dimensions();
        let ctx = RenderContext {
            device: &gpu.device,
            queue: &gpu.queue,
            surface_format: gpu.format(),
            width,
            height,
        };
        let mut frame = FrameContext {
            encoder: &mut encoder,
            color_view: &color_view,
            depth_view: &gpu.depth_view,
        };

        self.viewer.on_frame(&ctx, &mut frame, self.tick);

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Terrain Viewer")
                .with_inner_size(PhysicalSize::new(800, 600));
            let window = Arc::new(event_loop.create_window(attrs).unwrap());

            let gpu = GpuContext::new(Arc::clone(&window), GpuContextConfig::default());
            let (width, height) = gpu.dimensions();
            let ctx = RenderContext {
                device: &gpu.device,
                queue: &gpu.queue,
                surface_format: gpu.format(),
                width,
                height,
            };
            self.viewer.on_init(&ctx);
            self.viewer.on_resize(width, height);

            self.gpu = Some(gpu);
            self.window = Some(window);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape {
                        event_loop.exit();
                        return;
                    }
                    // Each handled key mutates camera state and triggers
                    // exactly one redraw; no batching
                    if self.viewer.on_key(translate_key(key))
                        && let Some(window) = &self.window
                    {
                        window.request_redraw();
                    }
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                }
                self.viewer.on_resize(new_size.width, new_size.height);
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_tick {
            self.tick += 1;
            self.next_tick = now + TICK_INTERVAL;
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

fn main() {
    println!("===========================================");
    println!("   Terrain Viewer");
    println!("===========================================");
    println!();
    println!("Controls: WASD/Arrows Move, +/- Scale, ESC Exit");
    println!();

    let mut heightmap_path = None;
    let mut config = ViewerConfig::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--spin" => config.auto_spin = true,
            path => heightmap_path = Some(path.to_string()),
        }
    }

    let heightmap = match &heightmap_path {
        Some(path) => match Heightmap::load(path) {
            Ok(heightmap) => heightmap,
            Err(e) => {
                eprintln!("[TerrainViewer] {e}");
                std::process::exit(1);
            }
        },
        None => {
            println!(
                "[TerrainViewer] No heightmap given, using procedural {}x{} fallback",
                FALLBACK_GRID, FALLBACK_GRID
            );
            Heightmap::procedural(FALLBACK_GRID, FALLBACK_GRID)
        }
    };

    let viewer = match TerrainViewer::new(heightmap, config) {
        Ok(viewer) => viewer,
        Err(e) => {
            eprintln!("[TerrainViewer] {e}");
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new().unwrap();
    let mut app = ViewerApp::new(viewer);
    event_loop.run_app(&mut app).unwrap();
}
