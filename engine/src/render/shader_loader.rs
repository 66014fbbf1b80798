//! Shader Loading Utilities
//!
//! WGSL sources are embedded at compile time by default; the runtime path
//! exists so the terrain shader can be swapped on disk without rebuilding.
//! Compilation failures are fatal — wgpu validation panics, and the viewer
//! has no meaningful behavior without its shader.

use std::path::Path;

/// Shader source that is either embedded at compile time or loaded from disk.
pub enum ShaderSource {
    /// Embedded shader source (no file I/O at runtime)
    Embedded(&'static str),
    /// Runtime-loaded shader source
    Runtime(String),
}

impl ShaderSource {
    /// Get the shader source as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            ShaderSource::Embedded(s) => s,
            ShaderSource::Runtime(s) => s.as_str(),
        }
    }
}

/// Load a WGSL shader from the filesystem at runtime.
pub fn load_shader_file(path: impl AsRef<Path>) -> Result<ShaderSource, std::io::Error> {
    let source = std::fs::read_to_string(path)?;
    Ok(ShaderSource::Runtime(source))
}

/// Create a wgpu shader module from the given source.
pub fn create_shader_module(
    device: &wgpu::Device,
    label: &str,
    source: &ShaderSource,
) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.as_str().into()),
    })
}

/// Shaders compiled into the binary.
pub mod embedded {
    /// The terrain vertex/fragment shader.
    pub const TERRAIN: &str = include_str!("../../../shaders/terrain.wgsl");
}
