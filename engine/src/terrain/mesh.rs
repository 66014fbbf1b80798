//! Grid Mesh Generation
//!
//! Builds a regular width x height vertex lattice over [-0.5, 0.5]^2 with two
//! triangles per grid cell, matching the layout the terrain shader expects:
//! position, texture coordinates, normal at an 8-float stride. The mesh is
//! generated once, uploaded once, and never touched again.
//!
//! The plane is flat: z is 0 everywhere and the normal is +Z for every
//! vertex. Heightmap intensity drives the color texture only.

use bytemuck::{Pod, Zeroable};

use crate::error::TerrainError;

/// One terrain vertex. Layout matches the vertex buffer the terrain pipeline
/// binds: position at offset 0, tex coords at 3 floats, normal at 5 floats.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
}

static_assertions::assert_eq_size!(TerrainVertex, [f32; 8]);

/// Emission order of grid cells into the index buffer.
///
/// `Morton` interleaves the 16-bit cell coordinates into a Z-order key and
/// emits cells in key order for spatial locality. Experimental; it changes
/// nothing about which triangles exist, only the order they appear in the
/// index buffer. Default is plain row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CellOrder {
    #[default]
    RowMajor,
    Morton,
}

/// Generated terrain mesh data.
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    pub vertices: Vec<TerrainVertex>,
    pub indices: Vec<u32>,
    pub width: u32,
    pub height: u32,
}

impl TerrainMesh {
    /// Generate the grid mesh for a `width` x `height` heightmap with the
    /// default row-major cell order.
    pub fn generate(width: u32, height: u32) -> Result<Self, TerrainError> {
        Self::generate_ordered(width, height, CellOrder::RowMajor)
    }

    /// Generate the grid mesh with an explicit cell emission order.
    pub fn generate_ordered(
        width: u32,
        height: u32,
        order: CellOrder,
    ) -> Result<Self, TerrainError> {
        if width < 2 || height < 2 {
            return Err(TerrainError::InvalidGeometry { width, height });
        }
        if order == CellOrder::Morton && (width > u16::MAX as u32 + 1 || height > u16::MAX as u32 + 1)
        {
            return Err(TerrainError::GridTooLarge { width, height });
        }

        let mut vertices = Vec::with_capacity((width * height) as usize);
        for iy in 0..height {
            let v = iy as f32 / (height - 1) as f32;
            for ix in 0..width {
                let u = ix as f32 / (width - 1) as f32;
                vertices.push(TerrainVertex {
                    position: [u - 0.5, v - 0.5, 0.0],
                    tex_coords: [u, v],
                    normal: [0.0, 0.0, 1.0],
                });
            }
        }

        let mut cells: Vec<(u32, u32)> = (0..height - 1)
            .flat_map(|iy| (0..width - 1).map(move |ix| (ix, iy)))
            .collect();
        if order == CellOrder::Morton {
            cells.sort_by_key(|&(ix, iy)| morton_interleave(ix as u16, iy as u16));
        }

        let mut indices = Vec::with_capacity(((width - 1) * (height - 1) * 6) as usize);
        for (ix, iy) in cells {
            let idx0 = iy * width + ix;
            let idx1 = (iy + 1) * width + ix;
            let idx2 = (iy + 1) * width + ix + 1;
            let idx3 = iy * width + ix + 1;
            indices.extend_from_slice(&[idx0, idx1, idx2, idx0, idx2, idx3]);
        }

        Ok(Self {
            vertices,
            indices,
            width,
            height,
        })
    }

    /// Number of indices in one full draw.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Interleave the bits of two 16-bit coordinates into a Z-order curve key
/// (x in the even bits, y in the odd bits).
pub fn morton_interleave(x: u16, y: u16) -> u32 {
    part1by1(x) | (part1by1(y) << 1)
}

/// Spread the 16 bits of `v` into the even bit positions of a u32.
fn part1by1(v: u16) -> u32 {
    let mut v = v as u32;
    v = (v | (v << 8)) & 0x00FF_00FF;
    v = (v | (v << 4)) & 0x0F0F_0F0F;
    v = (v | (v << 2)) & 0x3333_3333;
    v = (v | (v << 1)) & 0x5555_5555;
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_index_counts() {
        let mesh = TerrainMesh::generate(4, 3).unwrap();
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.indices.len(), 6 * 3 * 2);
    }

    #[test]
    fn test_rejects_degenerate_grids() {
        assert!(matches!(
            TerrainMesh::generate(0, 4),
            Err(TerrainError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            TerrainMesh::generate(4, 1),
            Err(TerrainError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_first_cell_triangles() {
        let mesh = TerrainMesh::generate(129, 129).unwrap();
        assert_eq!(&mesh.indices[0..3], &[0, 129, 130]);
        assert_eq!(&mesh.indices[3..6], &[0, 130, 1]);
    }

    #[test]
    fn test_morton_interleave_known_values() {
        assert_eq!(morton_interleave(0, 0), 0);
        assert_eq!(morton_interleave(1, 0), 0b01);
        assert_eq!(morton_interleave(0, 1), 0b10);
        assert_eq!(morton_interleave(0xFFFF, 0xFFFF), 0xFFFF_FFFF);
    }

    #[test]
    fn test_morton_order_same_triangles() {
        let row = TerrainMesh::generate(5, 5).unwrap();
        let morton = TerrainMesh::generate_ordered(5, 5, CellOrder::Morton).unwrap();
        assert_eq!(row.vertices, morton.vertices);

        let mut a: Vec<[u32; 3]> = row.indices.chunks(3).map(|c| [c[0], c[1], c[2]]).collect();
        let mut b: Vec<[u32; 3]> = morton
            .indices
            .chunks(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
