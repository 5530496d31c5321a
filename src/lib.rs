//! Lupe (Loupe) library
//!
//! `lupe` is a coordinate projection library for pixel editors and other
//! document viewers. It focuses on one job: mapping coordinates, points, and
//! rectangles between a document and its zoomed, aspect-corrected view, in
//! both directions, with predictable rounding.
//!
//! # Core Concepts
//!
//! ## Two Spaces
//!
//! Every transform runs between the same two spaces:
//! - *Document space* - the pixel grid of the document being edited
//! - *Display space* - the coordinates of the view rendering it
//!
//! A [`Projection`] carries the document-to-display mapping and its inverse.
//! `apply` goes toward display space, `remove` comes back.
//!
//! ## One Transform, Two Factors
//!
//! The projection composes two independent per-axis factors:
//! - [`PixelRatio`] - the shape of one document pixel, for formats whose
//!   pixels are not square
//! - [`Zoom`] - the view's magnification, a rational `num:den` with preset
//!   stepping for interactive zooming
//!
//! Going toward display space the ratio stretches first and the zoom scales
//! second; coming back the order reverses.
//!
//! ## Rounding
//!
//! Coordinates keep their own numeric domain through the [`Coordinate`]
//! trait. Integer coordinates floor exactly once, at the final division of
//! each direction; floating-point coordinates never round. Rectangles
//! transform corner-by-corner, so rounding can never open a gap between
//! rectangles that share an edge.
//!
//! # Examples
//!
//! ## Projecting Coordinates
//!
//! ```rust
//! use lupe::{PixelRatio, Projection, Zoom};
//!
//! // Double-wide pixels at 200% zoom.
//! let proj = Projection::new(PixelRatio::new(2, 1), Zoom::new(2, 1));
//!
//! // x is stretched by the ratio and the zoom, y only by the zoom.
//! assert_eq!(proj.apply_x(5), 20);
//! assert_eq!(proj.apply_y(5), 10);
//!
//! // remove is the inverse direction.
//! assert_eq!(proj.remove_x(20), 5);
//! ```
//!
//! ## Tiles Keep Their Shared Edges
//!
//! ```rust
//! use lupe::{Projection, Rect, Zoom};
//!
//! let mut proj = Projection::default();
//! proj.set_zoom(Zoom::new(2, 3));
//!
//! // Two document tiles meeting at x = 5.
//! let left = proj.apply_rect(Rect::new(0, 0, 5, 8));
//! let right = proj.apply_rect(Rect::new(5, 0, 5, 8));
//!
//! // Both corners floored, but onto the same display column.
//! assert_eq!(left, Rect::new(0, 0, 3, 5));
//! assert_eq!(left.max_x(), right.x);
//! ```
//!
//! ## Integer and Float Paths
//!
//! ```rust
//! use lupe::{Projection, Zoom};
//!
//! let mut proj = Projection::default();
//! proj.set_zoom(Zoom::new(3, 2)); // 150%
//! assert_eq!(proj.scale_x(), 1.5);
//!
//! // The same projection serves both numeric domains.
//! assert_eq!(proj.apply_x(7), 10); // integers floor
//! assert_eq!(proj.apply_x(7.0), 10.5); // floats do not
//! ```
//!

pub mod coord;
pub mod geom;
pub mod projection;
pub mod zoom;

pub use coord::Coordinate;
pub use geom::{Point, Rect};
pub use num_traits::NumCast;
pub use projection::{PixelRatio, Projection};
pub use zoom::Zoom;
