//! Heightfield Engine Library
//!
//! Core of the terrain viewer demo: grid-mesh generation from a heightmap
//! image, a free-fly look-at camera, and a single-pass wgpu renderer. The
//! windowing host drives the engine through the [`viewer::RenderHooks`]
//! interface; nothing in here depends on a GUI toolkit.
//!
//! # Modules
//!
//! - [`terrain`] - Heightmap decoding and grid mesh generation
//! - [`camera`] - Free-fly camera state and projection math
//! - [`input`] - Generic key codes and key-to-action bindings
//! - [`render`] - wgpu context, shader loading, and the terrain pass
//! - [`viewer`] - Render core implementing the host-facing hooks
//!
//! # Example
//!
//! ```ignore
//! use heightfield_engine::terrain::Heightmap;
//! use heightfield_engine::viewer::{TerrainViewer, ViewerConfig, RenderHooks};
//!
//! let heightmap = Heightmap::load("terrain.png")?;
//! let mut viewer = TerrainViewer::new(heightmap, ViewerConfig::default())?;
//!
//! // Host adapter, once the GPU context exists:
//! viewer.on_init(&render_context);
//! viewer.on_resize(800, 600);
//! // ...each tick:
//! viewer.on_frame(&render_context, &mut frame_context, tick);
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod render;
pub mod terrain;
pub mod viewer;

pub use camera::{FlyCamera, Projection};
pub use error::TerrainError;
pub use input::{CameraAction, KeyBindings, KeyCode};
pub use render::{GpuContext, GpuContextConfig, TerrainPass};
pub use terrain::{CellOrder, Heightmap, TerrainMesh, TerrainVertex};
pub use viewer::{FrameContext, RenderContext, RenderHooks, TerrainViewer, ViewerConfig};
