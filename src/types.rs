// Core pixel types: the window's backing buffer, off-screen layers, and the
// two compositing modes used to put one on top of the other.

use crate::error::Error;
use crate::geometry::{IPoint, IRect};
use image::{Rgba, RgbaImage};

/// Largest edge we accept for an off-screen layer.
pub const MAX_LAYER_EDGE: i32 = 16_384;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // window width (pixels)
    pub height: usize,     // window height (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Reallocate for a new window size. Contents are cleared.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, 0);
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
}

/// How a texture combines with what is already on the surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Op {
    /// Replace the destination pixel.
    Src,
    /// Alpha-blend the source over the destination.
    Over,
}

/// Something the renderer can draw into.
pub trait Surface {
    fn size(&self) -> IPoint;

    /// Solid fill of `rect` (clipped to the surface).
    fn fill(&mut self, rect: IRect, color: Rgba<u8>);

    /// Draw `src` stretched over `dst` (clipped to the surface).
    /// Visual: the texture appears blocky when enlarged (nearest neighbour).
    fn scale(&mut self, dst: IRect, src: &RgbaImage, op: Op);
}

/// Allocate a transparent off-screen layer.
pub fn new_layer(size: IPoint) -> Result<RgbaImage, Error> {
    if size.x <= 0 || size.y <= 0 || size.x > MAX_LAYER_EDGE || size.y > MAX_LAYER_EDGE {
        return Err(Error::Surface(format!("layer size {}x{} out of range", size.x, size.y)));
    }
    Ok(RgbaImage::new(size.x as u32, size.y as u32))
}

/// Pack into 0x00RRGGBB. The window has no alpha, so the colour is taken as
/// composited over black.
#[inline]
pub fn pack_rgb(c: Rgba<u8>) -> u32 {
    let [r, g, b, a] = c.0;
    let a = a as u32;
    let r = r as u32 * a / 255;
    let g = g as u32 * a / 255;
    let b = b as u32 * a / 255;
    (r << 16) | (g << 8) | b
}

/// Straight-alpha "over" of `src` onto an opaque 0x00RRGGBB pixel.
/// Visual: soft edges of a layer fade into whatever is underneath.
#[inline]
pub fn blend_over(dst: u32, src: Rgba<u8>) -> u32 {
    let [sr, sg, sb, sa] = src.0;
    match sa {
        0 => return dst,
        255 => return ((sr as u32) << 16) | ((sg as u32) << 8) | sb as u32,
        _ => {}
    }
    let a = sa as u32;
    let inv = 255 - a;
    let dr = (dst >> 16) & 0xFF;
    let dg = (dst >> 8) & 0xFF;
    let db = dst & 0xFF;
    let r = (sr as u32 * a + dr * inv + 127) / 255;
    let g = (sg as u32 * a + dg * inv + 127) / 255;
    let b = (sb as u32 * a + db * inv + 127) / 255;
    (r << 16) | (g << 8) | b
}

impl Surface for FrameBuffer {
    fn size(&self) -> IPoint {
        IPoint::new(self.width as i32, self.height as i32)
    }

    fn fill(&mut self, rect: IRect, color: Rgba<u8>) {
        let Some(clip) = rect.intersect(IRect::from_size(self.size())) else { return };
        let px = pack_rgb(color);
        for y in clip.min.y..clip.max.y {
            let row = y as usize * self.width;
            self.pixels[row + clip.min.x as usize..row + clip.max.x as usize].fill(px);
        }
    }

    fn scale(&mut self, dst: IRect, src: &RgbaImage, op: Op) {
        let (sw, sh) = src.dimensions();
        if dst.is_empty() || sw == 0 || sh == 0 {
            return;
        }
        let Some(clip) = dst.intersect(IRect::from_size(self.size())) else { return };
        let (dw, dh) = (dst.width() as i64, dst.height() as i64);

        // Nearest-neighbour: each destination pixel picks the source texel under it.
        for y in clip.min.y..clip.max.y {
            let sy = (((y - dst.min.y) as i64 * sh as i64) / dh).min(sh as i64 - 1) as u32;
            let row = y as usize * self.width;
            for x in clip.min.x..clip.max.x {
                let sx = (((x - dst.min.x) as i64 * sw as i64) / dw).min(sw as i64 - 1) as u32;
                let texel = *src.get_pixel(sx, sy);
                let idx = row + x as usize;
                self.pixels[idx] = match op {
                    Op::Src => pack_rgb(texel),
                    Op::Over => blend_over(self.pixels[idx], texel),
                };
            }
        }
    }
}
