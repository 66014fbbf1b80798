//! Terrain Module
//!
//! Heightmap decoding and grid mesh generation. Everything here is CPU-side
//! and window-system agnostic; the render module owns the GPU copies.

pub mod heightmap;
pub mod mesh;

pub use heightmap::Heightmap;
pub use mesh::{CellOrder, TerrainMesh, TerrainVertex, morton_interleave};
