//! Heightmap Loading
//!
//! Wraps image decoding into the pixel grid the mesh generator and the
//! terrain pass consume. The grid dimensions become the mesh dimensions and
//! the RGB channels double as the color texture. Pixel intensity is kept
//! around but does not displace the mesh; the plane stays flat and the
//! heightmap only drives coloring.

use std::path::Path;

use glam::Vec2;

use crate::error::TerrainError;

/// Decoded heightmap: an RGBA8 pixel grid.
#[derive(Clone, Debug)]
pub struct Heightmap {
    width: u32,
    height: u32,
    /// Tightly packed RGBA8 rows, `4 * width * height` bytes.
    pixels: Vec<u8>,
}

impl Heightmap {
    /// Load a heightmap from an image file (any format the `image` crate
    /// decodes; PNG in practice).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TerrainError> {
        let path = path.as_ref();
        let img = image::open(path)?.to_rgba8();
        let (width, height) = (img.width(), img.height());

        println!(
            "[Heightmap] Loaded {} ({}x{})",
            path.display(),
            width,
            height
        );

        Ok(Self {
            width,
            height,
            pixels: img.into_raw(),
        })
    }

    /// Build a heightmap directly from RGBA8 pixels.
    ///
    /// `pixels.len()` must equal `4 * width * height`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            (4 * width * height) as usize,
            "pixel buffer does not match {}x{} RGBA8",
            width,
            height
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Synthesize a deterministic grayscale heightmap from value noise, so
    /// the viewer runs without any asset on disk.
    pub fn procedural(width: u32, height: u32) -> Self {
        let mut pixels = Vec::with_capacity((4 * width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let p = Vec2::new(x as f32, y as f32);
                let v = fbm(p * 0.06, 5).clamp(0.0, 1.0);
                let byte = (v * 255.0) as u8;
                pixels.extend_from_slice(&[byte, byte, byte, 255]);
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major, ready for a texture upload.
    pub fn rgba8(&self) -> &[u8] {
        &self.pixels
    }

    /// Grayscale intensity of a pixel in [0,1] (mean of RGB).
    pub fn intensity(&self, x: u32, y: u32) -> f32 {
        let i = (4 * (y * self.width + x)) as usize;
        let [r, g, b] = [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]];
        (r as f32 + g as f32 + b as f32) / (3.0 * 255.0)
    }
}

// Value noise used for the procedural fallback. Deterministic by
// construction: no RNG state, only hashing of the sample position.

fn hash21(p: Vec2) -> f32 {
    let p3 = glam::Vec3::new(p.x, p.y, p.x) * 0.1031;
    let p3 = p3 - p3.floor();
    let p3 = p3 + glam::Vec3::splat(p3.dot(glam::Vec3::new(p3.y, p3.z, p3.x) + glam::Vec3::splat(33.33)));
    ((p3.x + p3.y) * p3.z).fract()
}

fn noise2d(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;
    let u = f * f * (Vec2::splat(3.0) - f * 2.0);

    let a = hash21(i);
    let b = hash21(i + Vec2::new(1.0, 0.0));
    let c = hash21(i + Vec2::new(0.0, 1.0));
    let d = hash21(i + Vec2::new(1.0, 1.0));

    let ab = a + (b - a) * u.x;
    let cd = c + (d - c) * u.x;
    ab + (cd - ab) * u.y
}

fn fbm(p: Vec2, octaves: u32) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut p = p;

    for _ in 0..octaves {
        value += amplitude * noise2d(p);
        p *= 2.0;
        amplitude *= 0.5;
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procedural_dimensions() {
        let map = Heightmap::procedural(8, 5);
        assert_eq!(map.width(), 8);
        assert_eq!(map.height(), 5);
        assert_eq!(map.rgba8().len(), 4 * 8 * 5);
    }

    #[test]
    fn test_procedural_deterministic() {
        let a = Heightmap::procedural(16, 16);
        let b = Heightmap::procedural(16, 16);
        assert_eq!(a.rgba8(), b.rgba8());
    }

    #[test]
    fn test_intensity_range() {
        let map = Heightmap::procedural(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                let v = map.intensity(x, y);
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_from_rgba8_white_intensity() {
        let map = Heightmap::from_rgba8(2, 2, vec![255; 16]);
        assert_eq!(map.intensity(1, 1), 1.0);
    }

    #[test]
    fn test_noise_deterministic() {
        let p = Vec2::new(10.5, 20.3);
        assert_eq!(noise2d(p), noise2d(p));
    }
}
