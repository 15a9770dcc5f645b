//! Utilization and efficiency statistics.
//!
//! Everything here is a pure function of its input and can be called as
//! often as needed, e.g. after every layout edit to refresh a display.

use crate::result::{Bin, PlacementResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bin measured by area (a stock sheet).
pub trait AreaBin: Bin {
    /// Area of the stock sheet.
    fn stock_area(&self) -> f64;

    /// Sum of the areas of the placed pieces.
    fn used_area(&self) -> f64;

    /// Covered share of the sheet, in percent.
    fn utilization_percent(&self) -> f64 {
        utilization_percent(self.used_area(), self.stock_area())
    }
}

/// A bin measured by length (a stock bar).
pub trait LengthBin: Bin {
    /// Length of the stock bar.
    fn stock_length(&self) -> f64;

    /// Sum of the assigned segment lengths.
    fn used_length(&self) -> f64;

    /// Material lost to the saw.
    fn kerf_loss(&self) -> f64;

    /// Offcut left at the end of the bar.
    fn remainder(&self) -> f64;

    /// Useful share of the bar, in percent.
    fn efficiency_percent(&self) -> f64 {
        utilization_percent(self.used_length(), self.stock_length())
    }
}

/// `used / stock * 100`, or 0 for an empty stock.
pub fn utilization_percent(used: f64, stock: f64) -> f64 {
    if stock > 0.0 {
        used / stock * 100.0
    } else {
        0.0
    }
}

/// Area utilization of a set of rectangles `(width, height)` on one sheet.
pub fn area_utilization_percent<I>(rects: I, sheet_width: f64, sheet_height: f64) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let used: f64 = rects.into_iter().map(|(w, h)| w * h).sum();
    utilization_percent(used, sheet_width * sheet_height)
}

/// Summary of a sheet plan.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetSummary {
    /// Sheets needed.
    pub sheet_count: usize,
    /// Pieces placed.
    pub pieces_placed: usize,
    /// Total area of the placed pieces.
    pub piece_area: f64,
    /// Total area of the sheets used.
    pub stock_area: f64,
    /// `stock_area - piece_area`.
    pub waste_area: f64,
    /// `piece_area / stock_area * 100`.
    pub utilization_percent: f64,
}

/// Summary of a bar plan.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BarSummary {
    /// Bars needed.
    pub bars_needed: usize,
    /// Segments placed.
    pub segments_placed: usize,
    /// Sum of all placed segment lengths.
    pub useful_length: f64,
    /// Sum of the end offcuts.
    pub final_waste: f64,
    /// Sum of the kerf losses.
    pub kerf_loss: f64,
    /// `bar_length * bars_needed`.
    pub material_used: f64,
    /// `useful_length / material_used * 100`.
    pub efficiency_percent: f64,
}

/// Aggregates statistics over a list of sheets.
pub fn summarize_sheets<B: AreaBin>(sheets: &[B]) -> SheetSummary {
    let piece_area: f64 = sheets.iter().map(AreaBin::used_area).sum();
    let stock_area: f64 = sheets.iter().map(AreaBin::stock_area).sum();
    SheetSummary {
        sheet_count: sheets.len(),
        pieces_placed: sheets.iter().map(Bin::item_count).sum(),
        piece_area,
        stock_area,
        waste_area: stock_area - piece_area,
        utilization_percent: utilization_percent(piece_area, stock_area),
    }
}

/// Aggregates statistics over a list of bars.
pub fn summarize_bars<B: LengthBin>(bars: &[B]) -> BarSummary {
    let useful_length: f64 = bars.iter().map(LengthBin::used_length).sum();
    let material_used: f64 = bars.iter().map(LengthBin::stock_length).sum();
    BarSummary {
        bars_needed: bars.len(),
        segments_placed: bars.iter().map(Bin::item_count).sum(),
        useful_length,
        final_waste: bars.iter().map(LengthBin::remainder).sum(),
        kerf_loss: bars.iter().map(LengthBin::kerf_loss).sum(),
        material_used,
        efficiency_percent: utilization_percent(useful_length, material_used),
    }
}

impl<B: AreaBin> PlacementResult<B> {
    /// Sheet plan summary.
    pub fn sheet_summary(&self) -> SheetSummary {
        summarize_sheets(&self.bins)
    }
}

impl<B: LengthBin> PlacementResult<B> {
    /// Bar plan summary.
    pub fn bar_summary(&self) -> BarSummary {
        summarize_bars(&self.bins)
    }
}
