use super::Point;

/// Horizontal control-point offset bounds, in screen units.
const MIN_CONTROL_OFFSET: f64 = 50.0;
const MAX_CONTROL_OFFSET: f64 = 180.0;
const CONTROL_RATIO: f64 = 0.45;

/// A cubic Bézier between two port anchors.
///
/// The control points leave the source anchor to the right and enter the
/// target anchor from the left, offset by a fraction of the horizontal
/// distance between the anchors. Nearby or vertically stacked nodes get a
/// pronounced S-curve; long horizontal runs flatten out because the offset
/// is capped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCurve {
    pub from: Point,
    pub to: Point,
    pub c1: Point,
    pub c2: Point,
}

impl EdgeCurve {
    /// Builds the curve between a source output anchor and a target input
    /// anchor, both in screen space.
    pub fn between(from: Point, to: Point) -> Self {
        let offset = Self::control_offset(from, to);
        Self {
            from,
            to,
            c1: from.offset(offset, 0.0),
            c2: to.offset(-offset, 0.0),
        }
    }

    /// `clamp(0.45 * |dx|, 50, 180)`
    pub fn control_offset(from: Point, to: Point) -> f64 {
        let dx = (to.x - from.x).abs();
        (dx * CONTROL_RATIO).clamp(MIN_CONTROL_OFFSET, MAX_CONTROL_OFFSET)
    }

    /// Evaluates the curve at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let uu = u * u;
        let tt = t * t;
        let uuu = uu * u;
        let ttt = tt * t;
        Point::new(
            uuu * self.from.x
                + 3.0 * uu * t * self.c1.x
                + 3.0 * u * tt * self.c2.x
                + ttt * self.to.x,
            uuu * self.from.y
                + 3.0 * uu * t * self.c1.y
                + 3.0 * u * tt * self.c2.y
                + ttt * self.to.y,
        )
    }

    /// Samples the curve into a polyline with `segments + 1` points, for
    /// renderers without a native cubic primitive.
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }

    /// SVG path data for this curve (`M x y C c1x c1y, c2x c2y, x y`).
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.from.x, self.from.y, self.c1.x, self.c1.y, self.c2.x, self.c2.y, self.to.x, self.to.y
        )
    }
}
