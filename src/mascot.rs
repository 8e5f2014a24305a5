// The mascot: a face sprite plus its eyes.
// Each eye's two layers (whites, pupil+glare) are composited once here and
// never touched again; per-frame work only moves them around.

use crate::config::Config;
use crate::error::Error;
use crate::geometry::{IPoint, IRect, Point};
use crate::shape::{squash, Circle};
use crate::types::new_layer;
use image::imageops;
use image::{Rgba, RgbaImage};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Geometry of one eye.
///
/// `background` and `pupil` are in sprite coordinates; the pupil's centre is
/// where it rests when looking straight ahead. `glare` is relative to the
/// top-left of the pupil's bounding box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EyeSpec {
    pub background: Circle,
    pub pupil: Circle,
    pub glare: Circle,
    /// Per-axis squash applied to the pupil to fake an elliptical eye.
    pub pupil_ellipse_ratio: Point,
}

/// An eye with its pre-built layers. Both layers cover `background.bounds()`.
pub struct Eye {
    pub background: Circle,
    pub pupil: Circle,
    pub base: RgbaImage,
    pub pupil_layer: RgbaImage,
}

pub struct Mascot {
    pub texture: RgbaImage,
    pub eyes: Vec<Eye>,
}

impl Mascot {
    /// Build the mascot and all eye layers. Any layer failure aborts the
    /// whole construction.
    pub fn new(texture: RgbaImage, eyes: &[EyeSpec], config: &Config) -> Result<Self, Error> {
        if texture.width() == 0 || texture.height() == 0 {
            return Err(Error::AssetDecode("sprite has no pixels".into()));
        }
        let eyes = eyes
            .iter()
            .enumerate()
            .map(|(idx, spec)| Eye::build(spec, idx, config))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("mascot {}x{} with {} eyes", texture.width(), texture.height(), eyes.len());
        Ok(Self { texture, eyes })
    }

    pub fn size(&self) -> IPoint {
        IPoint::new(self.texture.width() as i32, self.texture.height() as i32)
    }

    pub fn bounds(&self) -> IRect {
        IRect::from_size(self.size())
    }
}

impl Eye {
    /// Visual: a white disc (base) and a black squashed pupil with a small
    /// white glare (pupil layer), each on a transparent square.
    fn build(spec: &EyeSpec, idx: usize, config: &Config) -> Result<Eye, Error> {
        let area = spec.background.bounds();
        let origin = area.min;

        // base (whites)
        let whites = Circle { color: eye_white(idx, config, spec.background.color), ..spec.background };
        let mut base = new_layer(area.size())?;
        imageops::overlay(&mut base, &whites.translate_from(origin).mask()?, 0, 0);

        // pupil, squashed into an ellipse, at its resting spot
        let mut pupil_layer = new_layer(area.size())?;
        let pupil_at = spec.pupil.bounds().min - origin;
        let pupil = squash(&spec.pupil.mask()?, spec.pupil_ellipse_ratio)?;
        imageops::overlay(&mut pupil_layer, &pupil, pupil_at.x as i64, pupil_at.y as i64);

        // glare on top, positioned inside the pupil's box
        let glare = spec.glare.translate_to(pupil_at);
        let glare_at = glare.bounds().min;
        imageops::overlay(&mut pupil_layer, &glare.mask()?, glare_at.x as i64, glare_at.y as i64);

        Ok(Eye {
            background: spec.background,
            pupil: spec.pupil,
            base,
            pupil_layer,
        })
    }

    /// Sprite-space rectangle both layers cover.
    pub fn bounds(&self) -> IRect {
        self.background.bounds()
    }
}

/// Colour of an eye's whites. Debug mode paints each eye differently so the
/// layer boxes are easy to spot.
pub fn eye_white(idx: usize, config: &Config, normal: Rgba<u8>) -> Rgba<u8> {
    if !config.debug {
        return normal;
    }
    match idx {
        0 => Rgba([0, 0, 255, 255]), // Blue
        1 => Rgba([0, 255, 0, 255]), // Green
        _ => Rgba([255, 0, 0, 255]), // Red
    }
}

/// Eye geometry of the bundled `mascot.png` (240x200).
pub fn default_eyes() -> Vec<EyeSpec> {
    vec![
        EyeSpec {
            background: Circle::new(IPoint::new(80, 84), 34, WHITE),
            pupil: Circle::new(IPoint::new(80, 88), 12, BLACK),
            glare: Circle::new(IPoint::new(16, 8), 4, WHITE),
            pupil_ellipse_ratio: Point::new(0.925, 1.0),
        },
        EyeSpec {
            background: Circle::new(IPoint::new(160, 84), 34, WHITE),
            pupil: Circle::new(IPoint::new(160, 88), 12, BLACK),
            glare: Circle::new(IPoint::new(16, 8), 4, WHITE),
            pupil_ellipse_ratio: Point::new(0.90, 1.0),
        },
    ]
}
