//! Piece specs and the individual piece units expanded from them.

use crate::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Zero-based index of the spec a piece unit was expanded from.
///
/// Used for grouping and display (`P1`, `P2`, ...), never for packing
/// decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpecId(pub usize);

impl fmt::Display for SpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Unique handle of a single piece unit within one packing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PieceId(pub usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Orientation of a placed sheet piece relative to its spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Width and height as specified.
    #[default]
    Original,
    /// Width and height swapped.
    Rotated,
}

impl Orientation {
    /// Returns the other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Original => Orientation::Rotated,
            Orientation::Rotated => Orientation::Original,
        }
    }
}

/// A rectangular sheet part requested `quantity` times.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceSpec2D {
    /// Part width.
    pub width: f64,
    /// Part height.
    pub height: f64,
    /// Number of copies.
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    pub quantity: usize,
    /// Optional display label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
}

impl PieceSpec2D {
    /// Creates a spec for a single part.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            quantity: 1,
            label: None,
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Checks dimensions and quantity; `index` is reported on failure.
    pub fn validate(&self, index: usize) -> Result<()> {
        check_dimension(index, "width", self.width)?;
        check_dimension(index, "height", self.height)?;
        check_quantity(index, self.quantity)
    }
}

/// A linear segment requested `quantity` times.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceSpec1D {
    /// Segment length.
    pub length: f64,
    /// Number of copies.
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    pub quantity: usize,
    /// Optional display label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
}

impl PieceSpec1D {
    /// Creates a spec for a single segment.
    pub fn new(length: f64) -> Self {
        Self {
            length,
            quantity: 1,
            label: None,
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Checks length and quantity; `index` is reported on failure.
    pub fn validate(&self, index: usize) -> Result<()> {
        check_dimension(index, "length", self.length)?;
        check_quantity(index, self.quantity)
    }
}

/// One rectangular piece unit, ready for packing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    /// Unit handle.
    pub id: PieceId,
    /// Originating spec.
    pub spec_id: SpecId,
    /// Width as specified.
    pub width: f64,
    /// Height as specified.
    pub height: f64,
    /// Display label.
    pub label: String,
}

impl Piece {
    /// Dimensions in the given orientation, as `(width, height)`.
    pub fn dims(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Original => (self.width, self.height),
            Orientation::Rotated => (self.height, self.width),
        }
    }

    /// Piece area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// One linear segment unit, ready for packing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Unit handle.
    pub id: PieceId,
    /// Originating spec.
    pub spec_id: SpecId,
    /// Segment length.
    pub length: f64,
    /// Display label.
    pub label: String,
}

#[cfg(feature = "serde")]
fn default_quantity() -> usize {
    1
}

fn check_dimension(index: usize, name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::piece(
            index,
            format!("{} must be positive, got {}", name, value),
        ));
    }
    Ok(())
}

fn check_quantity(index: usize, quantity: usize) -> Result<()> {
    if quantity == 0 {
        return Err(Error::piece(index, "quantity must be at least 1"));
    }
    Ok(())
}
