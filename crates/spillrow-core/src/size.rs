#![forbid(unsafe_code)]

//! Measured extent of a host element.
//!
//! Sizes are expressed in the host's layout-distance units (device pixels,
//! logical points, terminal cells scaled to floats). The engine never rounds
//! or converts; whatever the host reports is what the fit calculator sees.

/// Width and height of an element as reported by the host.
///
/// Fields are `f64` because hosts commonly report fractional extents.
/// Negative values are never produced by a well-behaved host; the engine
/// treats any non-positive dimension as "empty" rather than rejecting it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent in layout units.
    pub width: f64,
    /// Vertical extent in layout units.
    pub height: f64,
}

impl Size {
    /// Create a size from explicit extents.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The zero size.
    #[inline]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// True when either dimension is non-positive.
    ///
    /// An empty container hides everything; an empty item still occupies a
    /// slot in the measured width set (its width simply contributes 0).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_extents() {
        let s = Size::new(120.5, 24.0);
        assert_eq!(s.width, 120.5);
        assert_eq!(s.height, 24.0);
    }

    #[test]
    fn zero_is_empty() {
        assert!(Size::zero().is_empty());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Size::default(), Size::zero());
    }

    #[test]
    fn negative_dimension_is_empty() {
        assert!(Size::new(-1.0, 10.0).is_empty());
        assert!(Size::new(10.0, -1.0).is_empty());
    }

    #[test]
    fn positive_extents_are_not_empty() {
        assert!(!Size::new(0.1, 0.1).is_empty());
    }

    #[test]
    fn zero_width_is_empty_even_with_height() {
        assert!(Size::new(0.0, 50.0).is_empty());
    }
}
