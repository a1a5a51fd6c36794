//! Geometry primitives
//!
//! All coordinates are page coordinates: the origin is the top-left corner of
//! the document, `y` grows downward and is independent of scrolling.

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// An axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn area(&self) -> f32 {
        self.size.area()
    }

    pub fn is_empty(&self) -> bool {
        self.area() <= 0.0
    }

    /// Overlapping region of two rects, `None` if they do not overlap
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x().max(other.x());
        let top = self.y().max(other.y());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right > left && bottom > top {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Smallest rect containing both rects
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.x().min(other.x());
        let top = self.y().min(other.y());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect::new(self.x() + dx, self.y() + dy, self.width(), self.height())
    }
}

/// The visible window onto the document
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset in page coordinates
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// The viewport's rect in page coordinates
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.height)
    }

    /// Fraction (0.0 to 1.0) of `bounds` that lies inside the viewport
    ///
    /// Zero-area bounds count as fully visible when their origin is inside the
    /// viewport, so empty placeholders still trigger.
    pub fn visible_fraction(&self, bounds: &Rect) -> f32 {
        let view = self.rect();
        if bounds.is_empty() {
            let inside = bounds.y() >= view.y() && bounds.y() <= view.bottom();
            return if inside { 1.0 } else { 0.0 };
        }
        match bounds.intersection(&view) {
            Some(visible) => (visible.area() / bounds.area()).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_and_union() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);

        assert_eq!(a.intersection(&b), Some(Rect::new(50.0, 50.0, 50.0, 50.0)));
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 150.0, 150.0));

        let far = Rect::new(500.0, 500.0, 10.0, 10.0);
        assert_eq!(a.intersection(&far), None);
    }

    #[test]
    fn test_visible_fraction() {
        let mut viewport = Viewport::new(1000.0, 800.0);
        let card = Rect::new(0.0, 750.0, 1000.0, 100.0);

        assert_eq!(viewport.visible_fraction(&card), 0.5);

        viewport.scroll_y = 50.0;
        assert_eq!(viewport.visible_fraction(&card), 1.0);

        viewport.scroll_y = 900.0;
        assert_eq!(viewport.visible_fraction(&card), 0.0);
    }

    #[test]
    fn test_visible_fraction_empty_bounds() {
        let viewport = Viewport::new(1000.0, 800.0);
        assert_eq!(viewport.visible_fraction(&Rect::new(0.0, 100.0, 0.0, 0.0)), 1.0);
        assert_eq!(viewport.visible_fraction(&Rect::new(0.0, 2000.0, 0.0, 0.0)), 0.0);
    }
}
