// Per-frame drawing: fit the sprite to the window, then for every eye put the
// whites down and slide the pupil layer toward the pointer.

use crate::config::Config;
use crate::geometry::{center_offset, ratio_to_fit, scale_rect, IPoint, IRect, Point, Rect};
use crate::mascot::{Eye, Mascot, BLACK};
use crate::types::{Op, Surface};

/// Gaze is kept inside this box so the pupil never reaches the rim.
pub const GAZE_MARGIN: Rect = Rect::new(Point::splat(0.15), Point::splat(0.85));

/// Gaze of an eye looking straight ahead.
pub const REST: Point = Point::splat(0.5);

/// Sprite space to window space: `window = sprite * ratio + offset`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTransform {
    pub ratio: f64,
    pub offset: Point,
}

impl FrameTransform {
    /// Largest uniform scale of `sprite` that fits `window`, centered.
    pub fn fit(sprite: IPoint, window: IPoint) -> Self {
        let ratio = ratio_to_fit(sprite, window);
        let scaled = scale_rect(IRect::from_size(sprite), ratio, Point::default());
        let offset = center_offset(scaled.size(), window);
        Self { ratio, offset }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        p * self.ratio + self.offset
    }

    /// Window-space rectangle of a sprite-space one, before pixel truncation.
    pub fn rect(&self, r: IRect) -> Rect {
        Rect::new(self.apply(r.min.into()), self.apply(r.max.into()))
    }
}

/// Where `look` sits relative to `eye`, in unit space, kept within `GAZE_MARGIN`.
pub fn gaze(look: Point, eye: Rect) -> Point {
    look.clip(eye).normalize(eye).clip(GAZE_MARGIN)
}

/// On-screen placement of one eye's two layers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EyePlacement {
    /// Window-space bounds of the eye's whites.
    pub bounds: Rect,
    pub gaze: Point,
    pub base: IRect,
    pub pupil: IRect,
}

/// Compute where `eye` is drawn under `t` when looking at `look`.
/// Visual: the pupil leans toward the pointer but stops short of the rim.
///
/// The pupil layer is shifted from its resting place by `(gaze - 0.5)` times
/// the pupil's diameter at twice the frame ratio.
pub fn place_eye(eye: &Eye, t: &FrameTransform, look: Option<Point>) -> EyePlacement {
    let area = eye.bounds();
    let bounds = t.rect(area);
    let layer = IRect::from_size(area.size());

    let gaze = look.map_or(REST, |p| gaze(p, bounds));
    let travel = Point::splat(2.0 * eye.pupil.radius as f64 * 2.0 * t.ratio);
    let shift = (gaze - REST) * travel;

    EyePlacement {
        bounds,
        gaze,
        base: scale_rect(layer, t.ratio, bounds.min),
        pupil: scale_rect(layer, t.ratio, bounds.min + shift),
    }
}

pub struct Renderer {
    mascot: Mascot,
    debug: bool,
    transform: Option<FrameTransform>,
}

impl Renderer {
    pub fn new(mascot: Mascot, config: &Config) -> Self {
        Self { mascot, debug: config.debug, transform: None }
    }

    /// Current transform; `None` until the first resize.
    pub fn transform(&self) -> Option<FrameTransform> {
        self.transform
    }

    /// Refit the sprite to a new window size and keep the result for later frames.
    /// Visual: the mascot grows or shrinks to the window and stays centered.
    pub fn resize(&mut self, window: IPoint) -> FrameTransform {
        let t = FrameTransform::fit(self.mascot.size(), window);
        if self.debug {
            let face = scale_rect(self.mascot.bounds(), t.ratio, t.offset);
            log::debug!("window {window:?} ratio {} face {face:?} offset {:?}", t.ratio, t.offset);
        }
        self.transform = Some(t);
        t
    }

    /// Placement of every eye, in mascot order. Empty before the first resize.
    pub fn layout(&self, look: Option<Point>) -> Vec<EyePlacement> {
        let Some(t) = self.transform else { return Vec::new() };
        self.mascot.eyes.iter().map(|eye| place_eye(eye, &t, look)).collect()
    }

    /// Draw a full frame. Does nothing before the first resize.
    /// Visual: black letterbox, the face scaled into the middle, and each
    /// eye's whites with the pupil slid toward the pointer.
    pub fn draw<S: Surface>(&self, surface: &mut S, look: Option<Point>) {
        let Some(t) = self.transform else { return };

        let full = IRect::from_size(surface.size());
        surface.fill(full, BLACK);
        let face = scale_rect(self.mascot.bounds(), t.ratio, t.offset);
        surface.scale(face, &self.mascot.texture, Op::Src);

        let placements = self.layout(look);
        for (idx, (eye, p)) in self.mascot.eyes.iter().zip(&placements).enumerate() {
            if self.debug {
                log::debug!(
                    "eye {idx} bounds {:?} gaze {:?} base {:?} pupil {:?}",
                    p.bounds,
                    p.gaze,
                    p.base,
                    p.pupil
                );
            }
            surface.scale(p.base, &eye.base, Op::Over);
            surface.scale(p.pupil, &eye.pupil_layer, Op::Over);
        }
    }
}
