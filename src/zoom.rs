//! The magnification level of a view.
//!
//! A [`Zoom`] is a positive rational `num:den`: `2:1` renders every document
//! pixel as two display pixels (200%), `1:3` packs three document pixels
//! into one display pixel. Keeping the level rational instead of a float
//! gives the integer coordinate path a single, well-defined rounding point
//! and keeps whole-number levels exactly invertible.
//!
//! Interactive views rarely pick arbitrary levels; they walk a preset
//! ladder. [`Zoom::step_in`] and [`Zoom::step_out`] move along that ladder
//! and [`Zoom::from_scale`] snaps a continuous multiplier onto it.

use crate::coord::Coordinate;

/// Preset magnification levels, ordered from farthest out to farthest in.
///
/// Fine steps around 1:1 (including 2:3 and 3:2), doubling toward both
/// ends — the usual pixel-editor ladder.
const LADDER: &[Zoom] = &[
    Zoom::new(1, 64),
    Zoom::new(1, 48),
    Zoom::new(1, 32),
    Zoom::new(1, 24),
    Zoom::new(1, 16),
    Zoom::new(1, 12),
    Zoom::new(1, 8),
    Zoom::new(1, 6),
    Zoom::new(1, 4),
    Zoom::new(1, 3),
    Zoom::new(1, 2),
    Zoom::new(2, 3),
    Zoom::new(1, 1),
    Zoom::new(3, 2),
    Zoom::new(2, 1),
    Zoom::new(3, 1),
    Zoom::new(4, 1),
    Zoom::new(5, 1),
    Zoom::new(6, 1),
    Zoom::new(8, 1),
    Zoom::new(12, 1),
    Zoom::new(16, 1),
    Zoom::new(24, 1),
    Zoom::new(32, 1),
    Zoom::new(48, 1),
    Zoom::new(64, 1),
];

/// Index of the ladder level whose scale is closest to `scale`.
///
/// Ties keep the earlier (farther-out) level. `scale` must be finite.
fn closest_level(scale: f64) -> usize {
    let mut best = 0;
    let mut best_diff = f64::INFINITY;
    for (i, level) in LADDER.iter().enumerate() {
        let diff = (level.scale() - scale).abs();
        if diff < best_diff {
            best = i;
            best_diff = diff;
        }
    }
    best
}

/// A magnification level, stored as the positive rational `num:den`.
///
/// `Zoom` scales one coordinate at a time. The work happens in the
/// coordinate's own numeric domain through [`Coordinate`], so integer
/// coordinates floor once at the final division while floating-point
/// coordinates never round:
///
/// ```
/// use lupe::Zoom;
///
/// let zoom = Zoom::new(3, 2); // 150%
/// assert_eq!(zoom.scale(), 1.5);
/// assert_eq!(zoom.apply(10), 15);
/// assert_eq!(zoom.apply(7), 10); // 10.5 floors
/// assert_eq!(zoom.apply(7.0), 10.5); // floats do not
/// assert_eq!(zoom.remove(15), 10);
/// ```
///
/// `apply` and `remove` are exact inverses wherever the intermediate
/// products divide exactly — always for whole-number levels on integer
/// coordinates — and approximate inverses elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    num: i32,
    den: i32,
}

impl Zoom {
    /// Creates a zoom level of `num:den`.
    ///
    /// Both terms must be positive. That is not validated here: a zero or
    /// negative term flows through to degenerate results on later
    /// transforms (infinities or NaNs for floats, a division fault for
    /// integers), as with the rest of the crate.
    pub const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /// Snaps a continuous multiplier to the closest preset level.
    ///
    /// Multipliers at or below zero snap to the farthest-out level;
    /// non-finite multipliers yield 1:1.
    ///
    /// # Examples
    ///
    /// ```
    /// use lupe::Zoom;
    ///
    /// assert_eq!(Zoom::from_scale(1.5), Zoom::new(3, 2));
    /// assert_eq!(Zoom::from_scale(0.26), Zoom::new(1, 4));
    /// assert_eq!(Zoom::from_scale(f64::NAN), Zoom::default());
    /// ```
    pub fn from_scale(scale: f64) -> Self {
        if !scale.is_finite() {
            return Self::default();
        }
        LADDER[closest_level(scale)]
    }

    /// The display-side term of the level.
    pub const fn num(&self) -> i32 {
        self.num
    }

    /// The document-side term of the level.
    pub const fn den(&self) -> i32 {
        self.den
    }

    /// The level as a continuous multiplier: 200% is `2.0`, 1:3 is `0.333…`.
    pub fn scale(&self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Scales a document-space coordinate to display space.
    ///
    /// The multiplication happens first, so integer coordinates lose
    /// precision only at the final division (floor; see
    /// [`Coordinate::div_factor`]).
    pub fn apply<T: Coordinate>(&self, x: T) -> T {
        x.mul_factor(self.num).div_factor(self.den)
    }

    /// Scales a display-space coordinate back to document space.
    ///
    /// The mirror of [`Zoom::apply`]: multiply by `den`, divide by `num`.
    pub fn remove<T: Coordinate>(&self, x: T) -> T {
        x.mul_factor(self.den).div_factor(self.num)
    }

    /// The integer [`Zoom::remove`] with ceiling rounding instead of floor.
    ///
    /// A display span maps to the document span covering it by removing
    /// the near edge with `remove` and the far edge with `remove_ceil`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lupe::Zoom;
    ///
    /// let zoom = Zoom::new(2, 1);
    /// // Document columns covering the display span [3, 11):
    /// assert_eq!(zoom.remove(3), 1); // floor(1.5)
    /// assert_eq!(zoom.remove_ceil(11), 6); // ceil(5.5)
    /// ```
    pub fn remove_ceil(&self, x: i32) -> i32 {
        let v = x * self.den;
        v.div_euclid(self.num) + if v.rem_euclid(self.num) != 0 { 1 } else { 0 }
    }

    /// True for levels with a whole-pixel mapping in one direction
    /// (`num` or `den` is 1). Renderers key simple scaling paths off this.
    pub const fn is_simple(&self) -> bool {
        self.num == 1 || self.den == 1
    }

    /// Steps to the next preset level toward magnification.
    ///
    /// An off-ladder level snaps onto the ladder as part of the step.
    /// Returns whether the level changed; at the innermost level the zoom
    /// stays put and this returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lupe::Zoom;
    ///
    /// let mut zoom = Zoom::default();
    /// assert!(zoom.step_in());
    /// assert_eq!(zoom, Zoom::new(3, 2));
    /// assert!(zoom.step_out());
    /// assert_eq!(zoom, Zoom::default());
    /// ```
    pub fn step_in(&mut self) -> bool {
        let closest = closest_level(self.scale());
        let next = (closest + 1).min(LADDER.len() - 1);
        self.replace_with(LADDER[next])
    }

    /// Steps to the previous preset level, away from magnification.
    ///
    /// The counterpart of [`Zoom::step_in`], clamping at the
    /// farthest-out level.
    pub fn step_out(&mut self) -> bool {
        let closest = closest_level(self.scale());
        let prev = closest.saturating_sub(1);
        self.replace_with(LADDER[prev])
    }

    fn replace_with(&mut self, level: Zoom) -> bool {
        let changed = level != *self;
        *self = level;
        changed
    }
}

impl Default for Zoom {
    /// The 1:1 level: no magnification.
    fn default() -> Self {
        Self::new(1, 1)
    }
}
