use egui::{Align2, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by [`SheetAlignment::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AlignmentError {
    #[error("alignment component {axis} is not finite: {value}")]
    NotFinite { axis: char, value: f32 },

    #[error("alignment component {axis} is outside of [-1, 1]: {value}")]
    OutOfRange { axis: char, value: f32 },
}

/// Normalized placement of the sheet relative to its anchor.
///
/// Each component lies in `[-1, 1]`: `(-1, -1)` is top-left, `(0, 0)` is center
/// and `(1, 1)` is bottom-right. The same fraction of the anchor and of the
/// sheet are lined up, so `x = -1` puts the sheet's left edge on the anchor's
/// left edge and the sheet grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetAlignment {
    pub x: f32,
    pub y: f32,
}

impl Default for SheetAlignment {
    fn default() -> Self {
        Self::CENTER
    }
}

impl SheetAlignment {
    pub const TOP_LEFT: Self = Self { x: -1., y: -1. };
    pub const TOP_CENTER: Self = Self { x: 0., y: -1. };
    pub const TOP_RIGHT: Self = Self { x: 1., y: -1. };
    pub const CENTER_LEFT: Self = Self { x: -1., y: 0. };
    pub const CENTER: Self = Self { x: 0., y: 0. };
    pub const CENTER_RIGHT: Self = Self { x: 1., y: 0. };
    pub const BOTTOM_LEFT: Self = Self { x: -1., y: 1. };
    pub const BOTTOM_CENTER: Self = Self { x: 0., y: 1. };
    pub const BOTTOM_RIGHT: Self = Self { x: 1., y: 1. };

    /// Creates alignment without validation.
    ///
    /// Components outside of `[-1, 1]` are a caller error and are only caught
    /// in debug builds. Use [`Self::try_new`] for untrusted input.
    pub fn new(x: f32, y: f32) -> Self {
        debug_assert!((-1. ..=1.).contains(&x), "alignment x out of range: {x}");
        debug_assert!((-1. ..=1.).contains(&y), "alignment y out of range: {y}");
        Self { x, y }
    }

    /// Creates alignment, rejecting non-finite and out of range components.
    ///
    /// # Errors
    ///
    /// Returns [`AlignmentError`] naming the first offending component.
    pub fn try_new(x: f32, y: f32) -> Result<Self, AlignmentError> {
        check_component('x', x)?;
        check_component('y', y)?;
        Ok(Self { x, y })
    }

    /// Maps each component from `[-1, 1]` to an interpolation fraction in `[0, 1]`.
    pub fn fraction(self) -> Vec2 {
        Vec2::new(fraction(self.x), fraction(self.y))
    }

    /// Sheet sits entirely right of the anchor point.
    pub fn is_leading_x(self) -> bool {
        self.x == -1.
    }

    /// Sheet sits entirely left of the anchor point.
    pub fn is_trailing_x(self) -> bool {
        self.x == 1.
    }

    /// Sheet sits entirely below the anchor point.
    pub fn is_leading_y(self) -> bool {
        self.y == -1.
    }

    /// Sheet sits entirely above the anchor point.
    pub fn is_trailing_y(self) -> bool {
        self.y == 1.
    }
}

impl From<Align2> for SheetAlignment {
    fn from(a: Align2) -> Self {
        Self {
            x: a.x().to_sign(),
            y: a.y().to_sign(),
        }
    }
}

/// `a / 2 + 0.5`: `-1 -> 0`, `0 -> 0.5`, `1 -> 1`.
pub fn fraction(a: f32) -> f32 {
    a / 2. + 0.5
}

fn check_component(axis: char, value: f32) -> Result<(), AlignmentError> {
    if !value.is_finite() {
        return Err(AlignmentError::NotFinite { axis, value });
    }
    if !(-1. ..=1.).contains(&value) {
        return Err(AlignmentError::OutOfRange { axis, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_mapping() {
        assert_eq!(fraction(-1.), 0.);
        assert_eq!(fraction(0.), 0.5);
        assert_eq!(fraction(1.), 1.);
        assert_eq!(fraction(-0.5), 0.25);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(
            SheetAlignment::try_new(1.5, 0.),
            Err(AlignmentError::OutOfRange { axis: 'x', value: 1.5 })
        );
        assert_eq!(
            SheetAlignment::try_new(0., -1.01),
            Err(AlignmentError::OutOfRange {
                axis: 'y',
                value: -1.01
            })
        );
        assert!(matches!(
            SheetAlignment::try_new(f32::NAN, 0.),
            Err(AlignmentError::NotFinite { axis: 'x', .. })
        ));
    }

    #[test]
    fn test_try_new_accepts_corners() {
        for (x, y) in [(-1., -1.), (1., -1.), (-1., 1.), (1., 1.), (0., 0.)] {
            assert_eq!(SheetAlignment::try_new(x, y), Ok(SheetAlignment { x, y }));
        }
    }

    #[test]
    fn test_from_align2() {
        assert_eq!(SheetAlignment::from(Align2::LEFT_TOP), SheetAlignment::TOP_LEFT);
        assert_eq!(
            SheetAlignment::from(Align2::CENTER_CENTER),
            SheetAlignment::CENTER
        );
        assert_eq!(
            SheetAlignment::from(Align2::RIGHT_BOTTOM),
            SheetAlignment::BOTTOM_RIGHT
        );
    }

    #[test]
    fn test_edge_predicates() {
        assert!(SheetAlignment::TOP_LEFT.is_leading_x());
        assert!(SheetAlignment::TOP_LEFT.is_leading_y());
        assert!(SheetAlignment::BOTTOM_RIGHT.is_trailing_x());
        assert!(SheetAlignment::BOTTOM_RIGHT.is_trailing_y());
        assert!(!SheetAlignment::new(-0.99, 0.).is_leading_x());
    }

    #[test]
    fn test_error_display() {
        let err = AlignmentError::OutOfRange { axis: 'x', value: 2. };
        assert_eq!(
            err.to_string(),
            "alignment component x is outside of [-1, 1]: 2"
        );
    }
}
