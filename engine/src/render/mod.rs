//! Render Module
//!
//! wgpu-based rendering for the terrain viewer: GPU context ownership,
//! shader loading, uniform layout, and the terrain render pass.

pub mod gpu_context;
pub mod shader_loader;
pub mod terrain_pass;
pub mod uniforms;

pub use gpu_context::{GpuContext, GpuContextConfig};
pub use shader_loader::{ShaderSource, create_shader_module, embedded, load_shader_file};
pub use terrain_pass::TerrainPass;
pub use uniforms::TerrainUniforms;
