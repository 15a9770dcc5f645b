//! Bar and cut types.

use stockcut_core::{BarStock, Bin, LengthBin, PieceId, Segment, SpecId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A segment cut from a bar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cut {
    /// The cut unit.
    pub piece_id: PieceId,
    /// Spec the unit came from.
    pub spec_id: SpecId,
    /// Display label.
    pub label: String,
    /// Segment length, excluding kerf.
    pub length: f64,
    /// Distance from the start of the bar to the start of this cut.
    pub offset: f64,
}

impl Cut {
    /// Distance from the start of the bar to the end of this cut.
    pub fn end(&self) -> f64 {
        self.offset + self.length
    }
}

/// A stock bar and the cuts assigned to it, in cutting order.
///
/// The first cut costs no kerf; every following one costs one kerf width.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bar {
    length: f64,
    kerf: f64,
    cuts: Vec<Cut>,
    remaining_length: f64,
}

impl Bar {
    /// Creates an empty bar.
    pub fn new(stock: &BarStock, kerf: f64) -> Self {
        Self {
            length: stock.length,
            kerf,
            cuts: Vec::new(),
            remaining_length: stock.length,
        }
    }

    /// Stock length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Blade width charged between cuts.
    pub fn kerf(&self) -> f64 {
        self.kerf
    }

    /// Cuts in cutting order.
    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    /// Cut lengths in cutting order.
    pub fn cut_lengths(&self) -> Vec<f64> {
        self.cuts.iter().map(|c| c.length).collect()
    }

    /// Length still available, before the kerf of the next cut.
    pub fn remaining_length(&self) -> f64 {
        self.remaining_length
    }

    /// Returns true if nothing has been cut from the bar.
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Bar length consumed by cutting a segment of `length` next.
    pub fn required_for(&self, length: f64) -> f64 {
        if self.cuts.is_empty() {
            length
        } else {
            length + self.kerf
        }
    }

    /// Returns true if a segment of `length` can still be cut from this bar.
    pub fn fits(&self, length: f64, tolerance: f64) -> bool {
        self.remaining_length + tolerance >= self.required_for(length)
    }

    /// Appends a cut for `segment`. The caller checks [`fits`](Self::fits).
    pub(crate) fn push(&mut self, segment: Segment) {
        let required = self.required_for(segment.length);
        let offset = self.length - self.remaining_length + (required - segment.length);
        self.remaining_length -= required;
        self.cuts.push(Cut {
            piece_id: segment.id,
            spec_id: segment.spec_id,
            label: segment.label,
            length: segment.length,
            offset,
        });
    }

    /// Returns true if cuts, kerf and remainder add up to the bar length.
    pub fn is_conserved(&self, tolerance: f64) -> bool {
        let total = self.used_length() + self.kerf_loss() + self.remaining_length;
        (total - self.length).abs() <= tolerance
    }
}

impl Bin for Bar {
    fn item_count(&self) -> usize {
        self.cuts.len()
    }

    fn piece_ids(&self) -> Vec<PieceId> {
        self.cuts.iter().map(|c| c.piece_id).collect()
    }
}

impl LengthBin for Bar {
    fn stock_length(&self) -> f64 {
        self.length
    }

    fn used_length(&self) -> f64 {
        self.cuts.iter().map(|c| c.length).sum()
    }

    fn kerf_loss(&self) -> f64 {
        self.kerf * self.cuts.len().saturating_sub(1) as f64
    }

    fn remainder(&self) -> f64 {
        self.remaining_length
    }
}
