//! The full document-to-display transform.
//!
//! A [`Projection`] composes two per-axis scale factors: the document's
//! [`PixelRatio`] (how wide and tall one document pixel is, for formats
//! with non-square pixels) and the view's [`Zoom`]. Everything a view
//! needs to map coordinates, points, and rectangles between the two
//! spaces goes through this one type.

use crate::coord::Coordinate;
use crate::geom::{Point, Rect};
use crate::zoom::Zoom;

/// The shape of one document pixel, as the integer factors `w` and `h`.
///
/// Square pixels are `{1, 1}`. A format whose pixels are twice as wide
/// as tall carries `{2, 1}`: every document pixel occupies two display
/// pixels horizontally at 1:1 zoom. Both factors must be positive; like
/// [`Zoom::new`](crate::Zoom::new), this is not validated and degenerate
/// values flow through to later transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRatio {
    pub w: i32,
    pub h: i32,
}

impl PixelRatio {
    /// Creates a pixel ratio of `w` by `h`.
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// True when document pixels are square (`w == h`).
    pub const fn is_square(&self) -> bool {
        self.w == self.h
    }
}

impl Default for PixelRatio {
    /// Square pixels: `{1, 1}`.
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// A document-space to display-space transform: pixel ratio, then zoom.
///
/// Going toward display space, a coordinate is stretched by the pixel
/// ratio first and zoomed second; coming back, the zoom is removed first
/// and the ratio divided out last. [`Projection::default`] is the
/// identity on every coordinate type.
///
/// Rectangles transform corner-by-corner rather than by scaling their
/// size, so document rectangles that share an edge keep sharing it in
/// display space. See [`Projection::apply_rect`].
///
/// ```
/// use lupe::{PixelRatio, Projection, Zoom};
///
/// let proj = Projection::new(PixelRatio::new(2, 1), Zoom::new(2, 1));
/// assert_eq!(proj.apply_x(5), 20); // 5 * 2 (ratio) * 2 (zoom)
/// assert_eq!(proj.apply_y(5), 10); // the y axis sees only the zoom
/// assert_eq!(proj.remove_x(20), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projection {
    pixel_ratio: PixelRatio,
    zoom: Zoom,
}

impl Projection {
    /// Creates a projection from a pixel ratio and a zoom level.
    pub const fn new(pixel_ratio: PixelRatio, zoom: Zoom) -> Self {
        Self { pixel_ratio, zoom }
    }

    /// The document's pixel ratio.
    pub const fn pixel_ratio(&self) -> PixelRatio {
        self.pixel_ratio
    }

    /// The view's zoom level.
    pub const fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Replaces the pixel ratio, keeping the zoom.
    pub fn set_pixel_ratio(&mut self, pixel_ratio: PixelRatio) {
        self.pixel_ratio = pixel_ratio;
    }

    /// Replaces the zoom, keeping the pixel ratio.
    pub fn set_zoom(&mut self, zoom: Zoom) {
        self.zoom = zoom;
    }

    /// The combined horizontal factor as a continuous multiplier.
    pub fn scale_x(&self) -> f64 {
        self.zoom.scale() * f64::from(self.pixel_ratio.w)
    }

    /// The combined vertical factor as a continuous multiplier.
    pub fn scale_y(&self) -> f64 {
        self.zoom.scale() * f64::from(self.pixel_ratio.h)
    }

    /// Maps a horizontal document coordinate to display space.
    pub fn apply_x<T: Coordinate>(&self, x: T) -> T {
        self.zoom.apply(x.mul_factor(self.pixel_ratio.w))
    }

    /// Maps a vertical document coordinate to display space.
    pub fn apply_y<T: Coordinate>(&self, y: T) -> T {
        self.zoom.apply(y.mul_factor(self.pixel_ratio.h))
    }

    /// Maps a horizontal display coordinate back to document space.
    ///
    /// Undoes [`Projection::apply_x`] stage by stage: the zoom comes off
    /// first, then the ratio divides out.
    pub fn remove_x<T: Coordinate>(&self, x: T) -> T {
        self.zoom.remove(x).div_factor(self.pixel_ratio.w)
    }

    /// Maps a vertical display coordinate back to document space.
    pub fn remove_y<T: Coordinate>(&self, y: T) -> T {
        self.zoom.remove(y).div_factor(self.pixel_ratio.h)
    }

    /// Maps a document point to display space, each axis independently.
    pub fn apply_point<T: Coordinate>(&self, point: Point<T>) -> Point<T> {
        Point::new(self.apply_x(point.x), self.apply_y(point.y))
    }

    /// Maps a display point back to document space.
    pub fn remove_point<T: Coordinate>(&self, point: Point<T>) -> Point<T> {
        Point::new(self.remove_x(point.x), self.remove_y(point.y))
    }

    /// Maps a document rectangle to display space.
    ///
    /// Both corners are projected and the size is taken as their
    /// difference; the size field itself is never scaled. Rounding
    /// therefore lands on each corner exactly once, and two rectangles
    /// sharing an edge in document space still share it afterward —
    /// a tiled canvas projects without gaps or overlaps.
    ///
    /// ```
    /// use lupe::{Projection, Rect, Zoom};
    ///
    /// let mut proj = Projection::default();
    /// proj.set_zoom(Zoom::new(1, 2));
    /// // Half zoom on a 7-wide rect: corners land on 0 and 3.
    /// assert_eq!(proj.apply_rect(Rect::new(0, 0, 7, 7)), Rect::new(0, 0, 3, 3));
    /// ```
    pub fn apply_rect<T: Coordinate>(&self, rect: Rect<T>) -> Rect<T> {
        let x = self.apply_x(rect.x);
        let y = self.apply_y(rect.y);
        Rect::new(
            x,
            y,
            self.apply_x(rect.max_x()) - x,
            self.apply_y(rect.max_y()) - y,
        )
    }

    /// Maps a display rectangle back to document space.
    ///
    /// Corner-by-corner, like [`Projection::apply_rect`], with the same
    /// shared-edge guarantee.
    pub fn remove_rect<T: Coordinate>(&self, rect: Rect<T>) -> Rect<T> {
        let x = self.remove_x(rect.x);
        let y = self.remove_y(rect.y);
        Rect::new(
            x,
            y,
            self.remove_x(rect.max_x()) - x,
            self.remove_y(rect.max_y()) - y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_projection_is_identity() {
        let proj = Projection::default();
        for x in -20..20 {
            assert_eq!(proj.apply_x(x), x);
            assert_eq!(proj.apply_y(x), x);
            assert_eq!(proj.remove_x(x), x);
            assert_eq!(proj.remove_y(x), x);
        }
        let rect = Rect::new(-3, 4, 7, 9);
        assert_eq!(proj.apply_rect(rect), rect);
        assert_eq!(proj.remove_rect(rect), rect);
        assert_eq!(proj.apply_x(2.5f64), 2.5);
    }

    #[test]
    fn scale_factors_compose_zoom_and_ratio() {
        let proj = Projection::new(PixelRatio::new(2, 1), Zoom::new(3, 2));
        assert_eq!(proj.scale_x(), 3.0);
        assert_eq!(proj.scale_y(), 1.5);
    }

    #[test]
    fn doubling_zoom_scales_coordinates_and_rects() {
        let mut proj = Projection::default();
        proj.set_zoom(Zoom::new(2, 1));
        assert_eq!(proj.apply_x(5), 10);
        assert_eq!(proj.remove_x(10), 5);
        assert_eq!(
            proj.apply_rect(Rect::new(0, 0, 10, 10)),
            Rect::new(0, 0, 20, 20)
        );
    }

    #[test]
    fn wide_pixels_scale_only_the_x_axis() {
        let mut proj = Projection::default();
        proj.set_pixel_ratio(PixelRatio::new(2, 1));
        assert_eq!(proj.apply_x(5), 10);
        assert_eq!(proj.apply_y(5), 5);
        assert_eq!(
            proj.apply_rect(Rect::new(0, 0, 4, 4)),
            Rect::new(0, 0, 8, 4)
        );
        assert_eq!(proj.remove_x(10), 5);
        assert_eq!(proj.remove_y(10), 10);
    }

    #[test]
    fn rect_size_comes_from_the_corners_not_the_size_field() {
        let mut proj = Projection::default();
        proj.set_zoom(Zoom::new(1, 2));
        // Scaling the width 7 directly would give 3 in a different place:
        // here both corners floor, 0 -> 0 and 7 -> 3.
        assert_eq!(proj.apply_x(7), 3);
        assert_eq!(
            proj.apply_rect(Rect::new(0, 0, 7, 7)),
            Rect::new(0, 0, 3, 3)
        );
    }

    #[test]
    fn float_coordinates_never_round() {
        let mut proj = Projection::default();
        proj.set_zoom(Zoom::new(3, 2));
        assert_eq!(proj.apply_x(2.0f64), 3.0);
        assert_eq!(proj.apply_x(7.0f64), 10.5);
        assert_eq!(
            proj.apply_rect(Rect::new(0.0f64, 0.0, 7.0, 7.0)),
            Rect::new(0.0, 0.0, 10.5, 10.5)
        );
        assert_eq!(proj.remove_x(10.5f64), 7.0);
    }

    #[test]
    fn adjacent_rects_stay_adjacent_after_apply() {
        let configs = [
            Projection::new(PixelRatio::new(1, 1), Zoom::new(1, 3)),
            Projection::new(PixelRatio::new(2, 1), Zoom::new(2, 3)),
            Projection::new(PixelRatio::new(1, 2), Zoom::new(5, 1)),
            Projection::new(PixelRatio::new(3, 2), Zoom::new(1, 2)),
        ];
        for proj in configs {
            for x in -8..8 {
                // Sharing a vertical edge at x + 5.
                let left = proj.apply_rect(Rect::new(x, -2, 5, 4));
                let right = proj.apply_rect(Rect::new(x + 5, -2, 3, 4));
                assert_eq!(left.max_x(), right.x);

                // Sharing a horizontal edge at x + 6.
                let top = proj.apply_rect(Rect::new(-2, x, 4, 6));
                let bottom = proj.apply_rect(Rect::new(-2, x + 6, 4, 2));
                assert_eq!(top.max_y(), bottom.y);
            }
        }
    }

    #[test]
    fn adjacent_rects_stay_adjacent_after_remove() {
        let configs = [
            Projection::new(PixelRatio::new(1, 1), Zoom::new(1, 3)),
            Projection::new(PixelRatio::new(2, 1), Zoom::new(2, 3)),
            Projection::new(PixelRatio::new(1, 2), Zoom::new(5, 1)),
            Projection::new(PixelRatio::new(3, 2), Zoom::new(1, 2)),
        ];
        for proj in configs {
            for x in -8..8 {
                let left = proj.remove_rect(Rect::new(x, -2, 5, 4));
                let right = proj.remove_rect(Rect::new(x + 5, -2, 3, 4));
                assert_eq!(left.max_x(), right.x);

                let top = proj.remove_rect(Rect::new(-2, x, 4, 6));
                let bottom = proj.remove_rect(Rect::new(-2, x + 6, 4, 2));
                assert_eq!(top.max_y(), bottom.y);
            }
        }
    }

    #[test]
    fn round_trip_is_exact_for_unit_ratio_and_whole_zoom() {
        for num in 1..=8 {
            let mut proj = Projection::default();
            proj.set_zoom(Zoom::new(num, 1));
            for x in -100..100 {
                assert_eq!(proj.remove_x(proj.apply_x(x)), x);
                assert_eq!(proj.remove_y(proj.apply_y(x)), x);
            }
        }
    }

    #[test]
    fn setters_replace_one_field_and_keep_the_other() {
        let mut proj = Projection::default();
        proj.set_zoom(Zoom::new(3, 1));
        assert_eq!(proj.zoom(), Zoom::new(3, 1));
        assert_eq!(proj.pixel_ratio(), PixelRatio::default());

        proj.set_pixel_ratio(PixelRatio::new(1, 2));
        assert_eq!(proj.pixel_ratio(), PixelRatio::new(1, 2));
        assert_eq!(proj.zoom(), Zoom::new(3, 1));
    }

    #[test]
    fn points_transform_component_wise() {
        let proj = Projection::new(PixelRatio::new(2, 1), Zoom::new(2, 1));
        let display = proj.apply_point(Point::new(3, 5));
        assert_eq!(display, Point::new(12, 10));
        assert_eq!(proj.remove_point(display), Point::new(3, 5));
    }

    #[test]
    fn negative_coordinates_floor_consistently() {
        let mut proj = Projection::default();
        proj.set_zoom(Zoom::new(1, 2));
        // Floor, not truncation: both sides of zero step the same way.
        assert_eq!(proj.apply_x(-7), -4);
        assert_eq!(proj.apply_x(-8), -4);
        assert_eq!(proj.apply_x(7), 3);
        assert_eq!(
            proj.apply_rect(Rect::new(-7, -7, 14, 14)),
            Rect::new(-4, -4, 7, 7)
        );
    }
}
