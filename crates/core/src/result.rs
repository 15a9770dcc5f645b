//! Packing result representation.

use crate::piece::{PieceId, SpecId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A stock bin (sheet or bar) holding placed piece units.
pub trait Bin {
    /// Number of piece units placed in this bin.
    fn item_count(&self) -> usize;

    /// Ids of the piece units placed in this bin.
    fn piece_ids(&self) -> Vec<PieceId>;
}

/// A piece that was dropped because it does not fit the stock in any
/// orientation. Non-fatal: every other piece is still packed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementWarning {
    /// The dropped unit.
    pub piece_id: PieceId,
    /// Spec the unit came from.
    pub spec_id: SpecId,
    /// Display label.
    pub label: String,
    /// Unit dimensions (`[width, height]` or `[length]`).
    pub dimensions: Vec<f64>,
    /// Human-readable reason.
    pub message: String,
}

impl PlacementWarning {
    /// Warning for a sheet piece larger than the sheet in both orientations.
    pub fn oversized_piece(
        piece_id: PieceId,
        spec_id: SpecId,
        label: impl Into<String>,
        width: f64,
        height: f64,
        sheet_width: f64,
        sheet_height: f64,
    ) -> Self {
        let label = label.into();
        Self {
            message: format!(
                "piece {} ({} x {}) does not fit a {} x {} sheet in any orientation",
                label, width, height, sheet_width, sheet_height
            ),
            piece_id,
            spec_id,
            label,
            dimensions: vec![width, height],
        }
    }

    /// Warning for a segment longer than the bar.
    pub fn oversized_segment(
        piece_id: PieceId,
        spec_id: SpecId,
        label: impl Into<String>,
        length: f64,
        bar_length: f64,
    ) -> Self {
        let label = label.into();
        Self {
            message: format!(
                "segment {} ({}) is longer than the {} bar",
                label, length, bar_length
            ),
            piece_id,
            spec_id,
            label,
            dimensions: vec![length],
        }
    }
}

/// Result of a packing run: the bins used plus warnings for dropped pieces.
///
/// A re-run always produces a new result; results are never updated
/// incrementally.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementResult<B> {
    /// Bins in creation order.
    pub bins: Vec<B>,

    /// Pieces dropped as too large for the stock.
    pub warnings: Vec<PlacementWarning>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl<B> PlacementResult<B> {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self {
            bins: Vec::new(),
            warnings: Vec::new(),
            computation_time_ms: 0,
        }
    }

    /// Number of bins used.
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Returns true if no piece was dropped.
    pub fn all_placed(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of dropped pieces.
    pub fn dropped_count(&self) -> usize {
        self.warnings.len()
    }

    /// Ids of dropped pieces.
    pub fn dropped_ids(&self) -> Vec<PieceId> {
        self.warnings.iter().map(|w| w.piece_id).collect()
    }
}

impl<B: Bin> PlacementResult<B> {
    /// Number of placed piece units across all bins.
    pub fn placed_count(&self) -> usize {
        self.bins.iter().map(Bin::item_count).sum()
    }

    /// Ids of all placed units, in bin order.
    pub fn placed_ids(&self) -> Vec<PieceId> {
        self.bins.iter().flat_map(Bin::piece_ids).collect()
    }

    /// Placed and dropped ids together, sorted.
    ///
    /// For any successful run this equals the full set of unit ids the
    /// normalizer produced.
    pub fn accounted_ids(&self) -> Vec<PieceId> {
        let mut ids = self.placed_ids();
        ids.extend(self.dropped_ids());
        ids.sort_unstable();
        ids
    }
}

impl<B> Default for PlacementResult<B> {
    fn default() -> Self {
        Self::new()
    }
}
