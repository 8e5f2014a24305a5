// Circle masks for eye whites, pupils and glare, plus the "poor man's ellipse":
// a circular mask resampled into a per-axis squashed rectangle.

use crate::error::Error;
use crate::geometry::{scale_about_center, IPoint, IRect, Point};
use crate::types::new_layer;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// A filled circle of one colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Circle {
    pub center: IPoint,
    pub radius: i32,
    pub color: Rgba<u8>,
}

impl Circle {
    pub const fn new(center: IPoint, radius: i32, color: Rgba<u8>) -> Self {
        Self { center, radius, color }
    }

    /// `[center - radius, center + radius)` on both axes.
    pub fn bounds(&self) -> IRect {
        IRect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Pixel membership, sampled at the pixel centre.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let dx = (x - self.center.x) as f64 + 0.5;
        let dy = (y - self.center.y) as f64 + 0.5;
        let r = self.radius as f64;
        dx * dx + dy * dy < r * r
    }

    /// Colour at a pixel. Outside pixels keep the RGB but have zero alpha so
    /// that bilinear resampling does not bleed a foreign colour into the edge.
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> Rgba<u8> {
        if self.contains(x, y) {
            self.color
        } else {
            let [r, g, b, _] = self.color.0;
            Rgba([r, g, b, 0])
        }
    }

    /// Same circle expressed relative to `origin`.
    pub fn translate_from(&self, origin: IPoint) -> Circle {
        Circle { center: self.center - origin, ..*self }
    }

    /// Same circle moved into a frame whose origin sits at `origin`.
    pub fn translate_to(&self, origin: IPoint) -> Circle {
        Circle { center: self.center + origin, ..*self }
    }

    /// Rasterise over the circle's own bounding box; pixel (0,0) of the
    /// result is `bounds().min`.
    pub fn mask(&self) -> Result<RgbaImage, Error> {
        let bounds = self.bounds();
        let mut out = new_layer(bounds.size())?;
        for (x, y, px) in out.enumerate_pixels_mut() {
            *px = self.at(bounds.min.x + x as i32, bounds.min.y + y as i32);
        }
        Ok(out)
    }
}

/// Resample `mask` into a rectangle squashed by `ratio` per axis, recentred
/// inside a transparent image of the original size.
/// Visual: a round pupil becomes a slightly narrow oval with soft sides.
pub fn squash(mask: &RgbaImage, ratio: Point) -> Result<RgbaImage, Error> {
    let size = IPoint::new(mask.width() as i32, mask.height() as i32);
    let mut out = new_layer(size)?;

    let (scaled, offset) = scale_about_center(IRect::from_size(size), ratio);
    let dst = scaled.translate(offset);
    if dst.is_empty() {
        return Ok(out);
    }

    let resized = imageops::resize(mask, dst.width() as u32, dst.height() as u32, FilterType::Triangle);
    imageops::replace(&mut out, &resized, dst.min.x as i64, dst.min.y as i64);
    Ok(out)
}
