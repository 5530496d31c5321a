//! Geometry primitives shared by both coordinate spaces.
//!
//! Plain value types with public fields: a [`Point`] and an axis-aligned
//! [`Rect`], generic over the coordinate type. The same structs describe
//! document space and display space; [`Projection`](crate::Projection) maps
//! values between the two.

use std::ops::{Add, Sub};

use num_traits::{NumCast, ToPrimitive};

use crate::coord::Coordinate;

/// Return `(min, max)` for two owned values.
fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// A point in document or display space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy + ToPrimitive> Point<T> {
    /// Converts both components to another coordinate type.
    ///
    /// Returns `None` when a component is not representable in `U`.
    pub fn cast_opt<U: NumCast>(self) -> Option<Point<U>> {
        Some(Point::new(U::from(self.x)?, U::from(self.y)?))
    }

    /// Converts both components to another coordinate type.
    ///
    /// Panics when a component is not representable; see
    /// [`Point::cast_opt`] for the fallible form.
    pub fn cast<U: NumCast>(self) -> Point<U> {
        self.cast_opt().unwrap()
    }
}

impl<T: Add<Output = T>> Add for Point<T> {
    type Output = Point<T>;

    fn add(self, other: Point<T>) -> Point<T> {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Sub<Output = T>> Sub for Point<T> {
    type Output = Point<T>;

    fn sub(self, other: Point<T>) -> Point<T> {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// An axis-aligned rectangle.
///
/// `x`/`y` is the origin corner and `width`/`height` the extent toward
/// increasing coordinates. A rectangle covers the half-open region
/// `[x, x + width) × [y, y + height)` — the pixel-grid convention, under
/// which two rectangles sharing an edge share no cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect<T> {
    /// Origin X coordinate.
    pub x: T,
    /// Origin Y coordinate.
    pub y: T,
    /// Horizontal extent.
    pub width: T,
    /// Vertical extent.
    pub height: T,
}

impl<T> Rect<T> {
    /// Creates a new rectangle from its origin corner and extent.
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Coordinate> Rect<T> {
    /// Creates the rectangle spanning two corner points.
    ///
    /// The corners may come in any order; the result always has
    /// non-negative extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use lupe::{Point, Rect};
    ///
    /// let rect = Rect::from_points(Point::new(9, 2), Point::new(4, 7));
    /// assert_eq!(rect, Rect::new(4, 2, 5, 5));
    /// ```
    pub fn from_points(p1: Point<T>, p2: Point<T>) -> Self {
        let (x1, x2) = sorted_pair(p1.x, p2.x);
        let (y1, y2) = sorted_pair(p1.y, p2.y);
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Returns the far X edge, `x + width`.
    pub fn max_x(&self) -> T {
        self.x + self.width
    }

    /// Returns the far Y edge, `y + height`.
    pub fn max_y(&self) -> T {
        self.y + self.height
    }

    /// Returns true when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero()
    }

    /// Returns true when `point` lies inside the rectangle.
    ///
    /// The near edges are inclusive and the far edges exclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use lupe::{Point, Rect};
    ///
    /// let rect = Rect::new(0, 0, 10, 10);
    /// assert!(rect.contains(Point::new(0, 0)));
    /// assert!(rect.contains(Point::new(9, 9)));
    /// assert!(!rect.contains(Point::new(10, 0)));
    /// ```
    pub fn contains(&self, point: Point<T>) -> bool {
        point.x >= self.x && point.x < self.max_x() && point.y >= self.y && point.y < self.max_y()
    }
}

impl<T: Copy + ToPrimitive> Rect<T> {
    /// Converts all four fields to another coordinate type.
    ///
    /// Returns `None` when a field is not representable in `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lupe::Rect;
    ///
    /// let display: Rect<i32> = Rect::new(10, 20, 640, 480);
    /// let continuous: Rect<f64> = display.cast();
    /// assert_eq!(continuous.width, 640.0);
    ///
    /// assert!(display.cast_opt::<i8>().is_none()); // 640 does not fit
    /// ```
    pub fn cast_opt<U: NumCast>(self) -> Option<Rect<U>> {
        Some(Rect::new(
            U::from(self.x)?,
            U::from(self.y)?,
            U::from(self.width)?,
            U::from(self.height)?,
        ))
    }

    /// Converts all four fields to another coordinate type.
    ///
    /// Panics when a field is not representable; see [`Rect::cast_opt`]
    /// for the fallible form.
    pub fn cast<U: NumCast>(self) -> Rect<U> {
        self.cast_opt().unwrap()
    }
}
