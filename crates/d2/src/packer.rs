//! Shelf packer for rectangular pieces on stock sheets.

use crate::sheet::{Placement, Sheet};
use std::time::Instant;
use stockcut_core::normalize::normalize_2d;
use stockcut_core::{
    Orientation, Packer, PackingConfig, Piece, PieceSpec2D, PlacementResult, PlacementWarning,
    ProgressCallback, ProgressInfo, Result, SheetStock,
};

/// Result of a sheet packing run.
pub type SheetPlan = PlacementResult<Sheet>;

const ORIENTATIONS: [Orientation; 2] = [Orientation::Original, Orientation::Rotated];

/// Best existing-shelf slot found for a piece.
#[derive(Debug, Clone, Copy)]
struct ShelfFit {
    shelf: usize,
    orientation: Orientation,
    waste: f64,
}

/// Greedy shelf packer.
///
/// Pieces are taken in normalized order. Each piece goes onto the first
/// sheet that accepts it, either on the existing shelf that leaves the least
/// vertical slack or on a new shelf stacked above the others. Rotation by 90
/// degrees is always considered.
#[derive(Debug, Clone, Default)]
pub struct ShelfPacker {
    config: PackingConfig,
}

impl ShelfPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: PackingConfig) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(PackingConfig::default())
    }

    pub fn config(&self) -> &PackingConfig {
        &self.config
    }

    /// Packs pieces that were already normalized (validated and sorted).
    ///
    /// Pieces are placed in the given order. Never fails: pieces that fit
    /// no sheet in either orientation are reported as warnings.
    pub fn pack_pieces(&self, pieces: Vec<Piece>, stock: &SheetStock) -> SheetPlan {
        self.pack_inner(pieces, stock, None)
    }

    fn pack_inner(
        &self,
        pieces: Vec<Piece>,
        stock: &SheetStock,
        callback: Option<&ProgressCallback>,
    ) -> SheetPlan {
        let start = Instant::now();
        let mut plan = SheetPlan::new();
        let total = pieces.len();

        if let Some(cb) = callback {
            cb(ProgressInfo::new()
                .with_phase("Shelf Placement")
                .with_items(0, total));
        }

        for (processed, piece) in pieces.into_iter().enumerate() {
            let placed = plan
                .bins
                .iter_mut()
                .any(|sheet| self.place_on_sheet(sheet, &piece));

            if !placed {
                let mut sheet = Sheet::new(stock);
                if self.place_on_new_shelf(&mut sheet, &piece) {
                    log::debug!(
                        "opened sheet {} for piece {}",
                        plan.bins.len() + 1,
                        piece.label
                    );
                    plan.bins.push(sheet);
                } else {
                    let warning = PlacementWarning::oversized_piece(
                        piece.id,
                        piece.spec_id,
                        piece.label.as_str(),
                        piece.width,
                        piece.height,
                        stock.width,
                        stock.height,
                    );
                    log::warn!("{}", warning.message);
                    plan.warnings.push(warning);
                }
            }

            if let Some(cb) = callback {
                cb(ProgressInfo::new()
                    .with_phase("Shelf Placement")
                    .with_items(processed + 1, total)
                    .with_bins(plan.bins.len())
                    .with_elapsed(start.elapsed().as_millis() as u64));
            }
        }

        plan.computation_time_ms = start.elapsed().as_millis() as u64;

        if let Some(cb) = callback {
            cb(ProgressInfo::new()
                .with_phase("Complete")
                .with_items(total, total)
                .with_bins(plan.bins.len())
                .with_elapsed(plan.computation_time_ms)
                .finished());
        }

        plan
    }

    /// Tries existing shelves first, then a new shelf.
    fn place_on_sheet(&self, sheet: &mut Sheet, piece: &Piece) -> bool {
        self.place_on_existing_shelf(sheet, piece) || self.place_on_new_shelf(sheet, piece)
    }

    fn place_on_existing_shelf(&self, sheet: &mut Sheet, piece: &Piece) -> bool {
        let spacing = self.config.spacing;
        let mut best: Option<ShelfFit> = None;

        for (index, shelf) in sheet.shelves().iter().enumerate() {
            for orientation in ORIENTATIONS {
                let (w, h) = piece.dims(orientation);
                if !shelf.admits(w, h, spacing, sheet.width()) {
                    continue;
                }
                let waste = shelf.height - h;
                if best.map_or(true, |b| waste < b.waste) {
                    best = Some(ShelfFit {
                        shelf: index,
                        orientation,
                        waste,
                    });
                }
            }
        }

        let Some(fit) = best else {
            return false;
        };
        let shelf = &sheet.shelves()[fit.shelf];
        let placement = Placement::of_piece(piece, shelf.current_width, shelf.y, fit.orientation);
        sheet.push_on_shelf(fit.shelf, placement, spacing);
        true
    }

    fn place_on_new_shelf(&self, sheet: &mut Sheet, piece: &Piece) -> bool {
        let spacing = self.config.spacing;
        let y = sheet.next_shelf_y(spacing);

        for orientation in ORIENTATIONS {
            let (w, h) = piece.dims(orientation);
            if y + h <= sheet.height() && w <= sheet.width() {
                let shelf = sheet.open_shelf(y, h);
                sheet.push_on_shelf(shelf, Placement::of_piece(piece, 0.0, y, orientation), spacing);
                return true;
            }
        }
        false
    }
}

impl Packer for ShelfPacker {
    type Spec = PieceSpec2D;
    type Stock = SheetStock;
    type Bin = Sheet;

    fn pack(&self, specs: &[PieceSpec2D], stock: &SheetStock) -> Result<SheetPlan> {
        let pieces = normalize_2d(specs, stock, &self.config)?;
        Ok(self.pack_inner(pieces, stock, None))
    }

    fn pack_with_progress(
        &self,
        specs: &[PieceSpec2D],
        stock: &SheetStock,
        callback: ProgressCallback,
    ) -> Result<SheetPlan> {
        let pieces = normalize_2d(specs, stock, &self.config)?;
        Ok(self.pack_inner(pieces, stock, Some(&callback)))
    }
}
