//! Coordinate spaces and the zoom transform.
//!
//! Node positions are stored in *logical* canvas units, independent of the
//! current zoom. The rendered canvas is scaled uniformly from its top-left
//! corner, so converting a pointer-space delta into model space is a plain
//! division by the zoom factor. Nothing in this module ever rewrites stored
//! coordinates when the zoom changes.

pub mod curve;

pub use curve::EdgeCurve;

/// Minimum logical coordinate on both axes. Nodes are never dragged or
/// placed off the top-left of the canvas.
pub const MARGIN: f64 = 10.0;

/// A point in either screen or logical space, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Clamps both axes to the canvas margin and rounds to whole units,
    /// matching how positions are stored in the document.
    pub fn clamped(self) -> Self {
        Self::new(self.x.max(MARGIN).round(), self.y.max(MARGIN).round())
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// The uniform canvas scale factor, clamped to `[0.3, 2.0]` in steps of 0.1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom(f64);

impl Default for Zoom {
    fn default() -> Self {
        Zoom(1.0)
    }
}

impl Zoom {
    pub const MIN: f64 = 0.3;
    pub const MAX: f64 = 2.0;
    pub const STEP: f64 = 0.1;

    pub fn factor(self) -> f64 {
        self.0
    }

    pub fn zoom_in(self) -> Self {
        // One decimal of precision keeps repeated steps from accumulating
        // float noise (0.30000000000000004 and friends).
        Zoom(((self.0 + Self::STEP).min(Self::MAX) * 10.0).round() / 10.0)
    }

    pub fn zoom_out(self) -> Self {
        Zoom(((self.0 - Self::STEP).max(Self::MIN) * 10.0).round() / 10.0)
    }

    pub fn reset(self) -> Self {
        Zoom::default()
    }

    /// Percentage label for UI display, e.g. `110%`.
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }

    /// Converts a screen-space point or delta into logical units.
    pub fn to_logical(self, screen: Point) -> Point {
        Point::new(screen.x / self.0, screen.y / self.0)
    }

    /// Converts a logical point into screen units.
    pub fn to_screen(self, logical: Point) -> Point {
        Point::new(logical.x * self.0, logical.y * self.0)
    }
}

/// The scrollable viewport over the canvas, in screen units.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    pub scroll: Point,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll: Point, width: f64, height: f64) -> Self {
        Self {
            scroll,
            width,
            height,
        }
    }

    /// Logical position for the `index`-th node added to the canvas: the
    /// visible center minus half a card, nudged per insertion so stacked
    /// inserts never land exactly on top of each other.
    pub fn place_new_node(&self, index: usize, zoom: Zoom) -> Point {
        let center_x = self.scroll.x + self.width / 2.0 - 100.0;
        let center_y = self.scroll.y + self.height / 2.0 - 30.0;
        let offset = (index * 30) as f64;
        zoom.to_logical(Point::new(center_x + offset, center_y + offset % 120.0))
            .clamped()
    }
}
