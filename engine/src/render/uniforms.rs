//! Uniform Structs for the Terrain Shader
//!
//! GPU-compatible uniform layout; must match `shaders/terrain.wgsl` exactly.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Per-frame matrices for the terrain pipeline.
///
/// `mv` is view * model (used to take the fixed light direction into view
/// space), `mvp` is projection * view * model. Column-major, as glam stores
/// matrices and WGSL expects them.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct TerrainUniforms {
    pub mv: [[f32; 4]; 4],
    pub mvp: [[f32; 4]; 4],
}

static_assertions::assert_eq_size!(TerrainUniforms, [u8; 128]);

impl Default for TerrainUniforms {
    fn default() -> Self {
        Self {
            mv: Mat4::IDENTITY.to_cols_array_2d(),
            mvp: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

impl TerrainUniforms {
    /// Pack the two matrices for upload.
    pub fn new(mv: Mat4, mvp: Mat4) -> Self {
        Self {
            mv: mv.to_cols_array_2d(),
            mvp: mvp.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_default_identity() {
        let uniforms = TerrainUniforms::default();
        assert_eq!(uniforms.mv, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniforms.mvp, Mat4::IDENTITY.to_cols_array_2d());
    }

    #[test]
    fn test_uniforms_bytemuck_pod() {
        let uniforms = TerrainUniforms::default();
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 128);
    }
}
