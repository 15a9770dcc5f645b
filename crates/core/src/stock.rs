//! Stock (raw material) descriptions.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular stock sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetStock {
    /// Sheet width (x extent).
    pub width: f64,
    /// Sheet height (y extent).
    pub height: f64,
}

impl SheetStock {
    /// Creates a new sheet stock description.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Sheet area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if a `width` x `height` piece fits an empty sheet in
    /// either orientation.
    pub fn admits(&self, width: f64, height: f64) -> bool {
        (width <= self.width && height <= self.height)
            || (height <= self.width && width <= self.height)
    }

    /// Rejects non-positive or non-finite dimensions.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::InvalidStock(format!(
                "sheet width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::InvalidStock(format!(
                "sheet height must be positive, got {}",
                self.height
            )));
        }
        Ok(())
    }
}

/// A linear stock bar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BarStock {
    /// Bar length.
    pub length: f64,
}

impl BarStock {
    /// Creates a new bar stock description.
    pub fn new(length: f64) -> Self {
        Self { length }
    }

    /// Rejects non-positive or non-finite lengths.
    pub fn validate(&self) -> Result<()> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(Error::InvalidStock(format!(
                "bar length must be positive, got {}",
                self.length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sheet_area() {
        let sheet = SheetStock::new(3000.0, 1500.0);
        assert_relative_eq!(sheet.area(), 4_500_000.0);
    }

    #[test]
    fn test_sheet_admits_rotated() {
        let sheet = SheetStock::new(1000.0, 500.0);
        assert!(sheet.admits(400.0, 900.0));
        assert!(sheet.admits(1000.0, 500.0));
        assert!(!sheet.admits(1200.0, 100.0));
        assert!(!sheet.admits(600.0, 600.0));
    }

    #[test]
    fn test_validation() {
        assert!(SheetStock::new(100.0, 50.0).validate().is_ok());
        assert!(SheetStock::new(0.0, 50.0).validate().is_err());
        assert!(SheetStock::new(100.0, -1.0).validate().is_err());
        assert!(SheetStock::new(f64::INFINITY, 1.0).validate().is_err());
        assert!(BarStock::new(6000.0).validate().is_ok());
        assert!(BarStock::new(0.0).validate().is_err());
    }
}
