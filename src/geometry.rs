// Points, rectangles and the handful of transforms the renderer composes:
// fit-to-window ratio, corner scaling, centering, and unit-space normalize/clip.
//
// Real-valued math stays in `Point`/`Rect` (f64); `IPoint`/`IRect` are pixel
// coordinates. Conversion back to pixels happens once, in `scale_rect`.

use core::ops::{Add, Div, Mul, Sub};

/// 2D point (or size) in real coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Position of `self` inside `bounds`, as a fraction of its size per axis.
    ///
    /// The result is always non-negative: a point left of / above `bounds`
    /// maps to the mirrored fraction. Clip first if that matters.
    #[inline]
    pub fn normalize(self, bounds: Rect) -> Point {
        let size = bounds.size();
        Point::new(
            ((self.x - bounds.min.x) / size.x).abs(),
            ((self.y - bounds.min.y) / size.y).abs(),
        )
    }

    /// Clamp each axis into `[bounds.min, bounds.max]`.
    #[inline]
    pub fn clip(self, bounds: Rect) -> Point {
        Point::new(
            self.x.max(bounds.min.x).min(bounds.max.x),
            self.y.max(bounds.min.y).min(bounds.max.y),
        )
    }
}

impl From<IPoint> for Point {
    #[inline]
    fn from(p: IPoint) -> Self {
        Point::new(p.x as f64, p.y as f64)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Component-wise product.
impl Mul for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        Point::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Component-wise quotient.
impl Div for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: Point) -> Point {
        Point::new(self.x / rhs.x, self.y / rhs.y)
    }
}

/// Integer pixel coordinate (or pixel size).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IPoint {
    pub x: i32,
    pub y: i32,
}

impl IPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for IPoint {
    type Output = IPoint;
    #[inline]
    fn add(self, rhs: IPoint) -> IPoint {
        IPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for IPoint {
    type Output = IPoint;
    #[inline]
    fn sub(self, rhs: IPoint) -> IPoint {
        IPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle in real coordinates. Callers keep `max >= min`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.width(), self.height())
    }
}

impl From<IRect> for Rect {
    #[inline]
    fn from(r: IRect) -> Self {
        Rect::new(r.min.into(), r.max.into())
    }
}

/// Axis-aligned pixel rectangle, half-open `[min, max)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct IRect {
    pub min: IPoint,
    pub max: IPoint,
}

impl IRect {
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: IPoint::new(x0, y0),
            max: IPoint::new(x1, y1),
        }
    }

    /// Rectangle of the given size anchored at the origin.
    #[inline]
    pub const fn from_size(size: IPoint) -> Self {
        Self::new(0, 0, size.x, size.y)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(self) -> IPoint {
        IPoint::new(self.width(), self.height())
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn translate(self, by: IPoint) -> IRect {
        IRect {
            min: self.min + by,
            max: self.max + by,
        }
    }

    /// Overlap of two rectangles, `None` when they share no pixel.
    pub fn intersect(self, other: IRect) -> Option<IRect> {
        let r = IRect::new(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        );
        if r.is_empty() { None } else { Some(r) }
    }
}

/// Largest uniform scale that fits `source` inside `target` without cropping.
///
/// `source` must have non-zero width and height.
pub fn ratio_to_fit(source: IPoint, target: IPoint) -> f64 {
    let rw = target.x as f64 / source.x as f64;
    let rh = target.y as f64 / source.y as f64;
    rw.min(rh)
}

/// Scale both corners by `ratio`, shift by `offset`, and truncate to pixels.
///
/// Corners are truncated independently, so the resulting size may differ by
/// one pixel from `size * ratio` depending on where the rectangle sits.
pub fn scale_rect(r: IRect, ratio: f64, offset: Point) -> IRect {
    let corner = |p: IPoint| {
        IPoint::new(
            (p.x as f64 * ratio + offset.x) as i32,
            (p.y as f64 * ratio + offset.y) as i32,
        )
    };
    IRect {
        min: corner(r.min),
        max: corner(r.max),
    }
}

/// Offset that centers something of `inner` size inside `outer`.
pub fn center_offset(inner: IPoint, outer: IPoint) -> Point {
    Point::new(
        (outer.x - inner.x) as f64 / 2.0,
        (outer.y - inner.y) as f64 / 2.0,
    )
}

/// Scale a rectangle's corners per axis and return the shift that keeps the
/// scaled shape centered where the original was.
pub fn scale_about_center(r: IRect, ratio: Point) -> (IRect, IPoint) {
    let size = r.size();
    let offset = IPoint::new(
        (size.x as f64 * (1.0 - ratio.x) / 2.0) as i32,
        (size.y as f64 * (1.0 - ratio.y) / 2.0) as i32,
    );
    let scaled = IRect::new(
        (r.min.x as f64 * ratio.x) as i32,
        (r.min.y as f64 * ratio.y) as i32,
        (r.max.x as f64 * ratio.x) as i32,
        (r.max.y as f64 * ratio.y) as i32,
    );
    (scaled, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    // ── ratio_to_fit ──────────────────────────────────────────────────────

    #[test]
    fn ratio_is_min_of_axis_ratios() {
        let cases = [
            (IPoint::new(100, 100), IPoint::new(200, 50), 0.5),
            (IPoint::new(100, 50), IPoint::new(300, 300), 3.0),
            (IPoint::new(240, 200), IPoint::new(480, 400), 2.0),
            (IPoint::new(7, 3), IPoint::new(5, 11), 5.0 / 7.0),
        ];
        for (src, dst, want) in cases {
            let ratio = ratio_to_fit(src, dst);
            assert_eq!(ratio, want, "{src:?} -> {dst:?}");
            assert!(src.x as f64 * ratio <= dst.x as f64 + 1e-9);
            assert!(src.y as f64 * ratio <= dst.y as f64 + 1e-9);
        }
    }

    #[test]
    fn native_size_gives_unit_ratio_and_zero_offset() {
        let size = IPoint::new(240, 200);
        let ratio = ratio_to_fit(size, size);
        assert_eq!(ratio, 1.0);
        let scaled = scale_rect(IRect::from_size(size), ratio, Point::default());
        assert_eq!(center_offset(scaled.size(), size), Point::default());
    }

    // ── scale_rect ────────────────────────────────────────────────────────

    #[test]
    fn scale_rect_truncates_each_corner() {
        let r = IRect::new(3, 3, 8, 8);
        let s = scale_rect(r, 1.5, Point::new(0.25, 0.0));
        // 3*1.5+0.25 = 4.75 -> 4, 8*1.5+0.25 = 12.25 -> 12
        assert_eq!(s, IRect::new(4, 4, 12, 12));
        assert_eq!(s.width(), 8);
    }

    #[test]
    fn scale_rect_size_jitters_with_position() {
        let a = scale_rect(IRect::new(0, 0, 3, 3), 1.5, Point::default());
        let b = scale_rect(IRect::new(1, 1, 4, 4), 1.5, Point::default());
        assert_eq!(a.width(), 4);
        assert_eq!(b.width(), 5);
    }

    // ── center_offset ─────────────────────────────────────────────────────

    #[test]
    fn center_offset_halves_the_slack() {
        let o = center_offset(IPoint::new(100, 50), IPoint::new(300, 55));
        assert_eq!(o, Point::new(100.0, 2.5));
    }

    // ── normalize / clip ──────────────────────────────────────────────────

    #[test]
    fn normalize_maps_into_unit_space() {
        let r = rect(10.0, 20.0, 30.0, 60.0);
        assert_eq!(Point::new(20.0, 40.0).normalize(r), Point::new(0.5, 0.5));
        assert_eq!(Point::new(10.0, 20.0).normalize(r), Point::new(0.0, 0.0));
        assert_eq!(Point::new(30.0, 60.0).normalize(r), Point::new(1.0, 1.0));
    }

    #[test]
    fn normalize_is_never_negative() {
        let r = rect(10.0, 10.0, 20.0, 20.0);
        assert_eq!(Point::new(5.0, 0.0).normalize(r), Point::new(0.5, 1.0));
    }

    #[test]
    fn normalize_round_trips_interior_points() {
        let r = rect(-4.0, 2.0, 12.0, 10.0);
        for p in [Point::new(0.0, 3.0), Point::new(11.5, 9.0), Point::new(4.0, 6.0)] {
            let n = p.normalize(r);
            let back = n * r.size() + r.min;
            let again = back.normalize(r);
            assert!((again.x - n.x).abs() < 1e-12);
            assert!((again.y - n.y).abs() < 1e-12);
        }
    }

    #[test]
    fn clip_clamps_each_axis() {
        let r = rect(0.0, 0.0, 10.0, 5.0);
        assert_eq!(Point::new(-3.0, 7.0).clip(r), Point::new(0.0, 5.0));
        assert_eq!(Point::new(4.0, 2.0).clip(r), Point::new(4.0, 2.0));
        let unit = rect(0.0, 0.0, 1.0, 1.0);
        assert_eq!(Point::new(12.0, -1.0).clip(unit), Point::new(1.0, 0.0));
    }

    // ── scale_about_center ────────────────────────────────────────────────

    #[test]
    fn scale_about_center_squashes_one_axis() {
        let (scaled, offset) = scale_about_center(IRect::new(0, 0, 40, 40), Point::new(0.9, 1.0));
        assert_eq!(scaled, IRect::new(0, 0, 36, 40));
        assert_eq!(offset, IPoint::new(2, 0));
        // re-centered shape spans [2, 38)
        assert_eq!(scaled.translate(offset), IRect::new(2, 0, 38, 40));
    }

    #[test]
    fn scale_about_center_identity() {
        let r = IRect::new(0, 0, 24, 24);
        assert_eq!(scale_about_center(r, Point::splat(1.0)), (r, IPoint::default()));
    }

    // ── IRect ─────────────────────────────────────────────────────────────

    #[test]
    fn intersect_disjoint_is_none() {
        assert!(IRect::new(0, 0, 5, 5).intersect(IRect::new(5, 0, 9, 5)).is_none());
        assert_eq!(
            IRect::new(0, 0, 5, 5).intersect(IRect::new(-2, 3, 3, 9)),
            Some(IRect::new(0, 3, 3, 5))
        );
    }
}
