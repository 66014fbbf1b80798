//! Central error type for terrain setup.
//!
//! Covers everything that can fail before the first frame: heightmap decode,
//! grid validation, and the optional spatial-reorder precondition. GPU setup
//! failures (adapter, device, shader, pipeline) are fatal and panic instead;
//! the viewer has no meaningful behavior without them.

/// Errors produced while loading a heightmap or generating the terrain mesh.
#[derive(thiserror::Error, Debug)]
pub enum TerrainError {
    /// The heightmap grid cannot produce any triangles.
    ///
    /// A width or height below 2 yields zero cells; this is reported
    /// explicitly rather than returning an empty mesh.
    #[error("invalid terrain grid {width}x{height}: both dimensions must be at least 2")]
    InvalidGeometry { width: u32, height: u32 },

    /// The grid exceeds the 16-bit cell coordinates used by Morton reordering.
    #[error("terrain grid {width}x{height} too large for Morton cell reordering (16-bit coordinates)")]
    GridTooLarge { width: u32, height: u32 },

    #[error("failed to decode heightmap image: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
