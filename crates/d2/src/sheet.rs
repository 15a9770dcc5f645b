//! Sheet, shelf and placement types.
//!
//! A [`Sheet`] owns a flat arena of [`Placement`]s. Shelves refer to their
//! placements by index into that arena, so a placement never has more than
//! one owner and editing it in place needs no bookkeeping on the shelf side.

use std::collections::HashSet;
use stockcut_core::geometry::{collides, out_of_bounds, Rect};
use stockcut_core::{AreaBin, Bin, Error, Orientation, Piece, PieceId, Result, SheetStock, SpecId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A piece unit positioned on a sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The placed unit.
    pub piece_id: PieceId,
    /// Spec the unit came from.
    pub spec_id: SpecId,
    /// Display label.
    pub label: String,
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Width as placed.
    pub width: f64,
    /// Height as placed.
    pub height: f64,
    /// Whether width and height are swapped relative to the spec.
    #[cfg_attr(feature = "serde", serde(default))]
    pub orientation: Orientation,
}

impl Placement {
    /// Creates a placement at `rect` in the original orientation.
    ///
    /// The spec id defaults to `SpecId(0)` and the label to the piece id;
    /// use [`with_spec`](Self::with_spec) and [`with_label`](Self::with_label)
    /// for layouts built outside the packer.
    pub fn new(piece_id: PieceId, rect: Rect) -> Self {
        Self {
            piece_id,
            spec_id: SpecId(0),
            label: piece_id.to_string(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            orientation: Orientation::Original,
        }
    }

    /// Places `piece` at `(x, y)` in the given orientation.
    pub fn of_piece(piece: &Piece, x: f64, y: f64, orientation: Orientation) -> Self {
        let (width, height) = piece.dims(orientation);
        Self {
            piece_id: piece.id,
            spec_id: piece.spec_id,
            label: piece.label.clone(),
            x,
            y,
            width,
            height,
            orientation,
        }
    }

    /// Sets the originating spec.
    pub fn with_spec(mut self, spec_id: SpecId) -> Self {
        self.spec_id = spec_id;
        self
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the orientation flag without touching the dimensions.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// The occupied rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Occupied area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }
}

/// A horizontal row of pieces at a fixed `y`, filled left to right.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shelf {
    /// Bottom edge of the shelf.
    pub y: f64,
    /// Height of the piece that opened the shelf. Never grows.
    pub height: f64,
    /// Horizontal fill, including the spacing after the last piece.
    pub current_width: f64,
    /// Indices into the owning sheet's placements.
    pub placements: Vec<usize>,
}

impl Shelf {
    fn new(y: f64, height: f64) -> Self {
        Self {
            y,
            height,
            current_width: 0.0,
            placements: Vec::new(),
        }
    }

    /// Top edge of the shelf.
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Returns true if a `width x height` piece can join this shelf on a
    /// sheet `sheet_width` wide.
    pub fn admits(&self, width: f64, height: f64, spacing: f64, sheet_width: f64) -> bool {
        height <= self.height && self.current_width + width + spacing <= sheet_width
    }
}

/// Reason a layout breaks one of the two sheet predicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutViolation {
    /// Two placements overlap (indices into the placement arena).
    Overlap(usize, usize),
    /// A placement leaves the sheet.
    OutOfBounds(usize),
}

/// A stock sheet and everything placed on it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    width: f64,
    height: f64,
    shelves: Vec<Shelf>,
    placements: Vec<Placement>,
}

impl Sheet {
    /// Creates an empty sheet of the given stock.
    pub fn new(stock: &SheetStock) -> Self {
        Self {
            width: stock.width,
            height: stock.height,
            shelves: Vec::new(),
            placements: Vec::new(),
        }
    }

    /// Builds a sheet from an existing layout, e.g. one restored by a
    /// collaborator. The layout must be overlap-free and in bounds, with
    /// finite coordinates, positive sizes and unique piece ids.
    ///
    /// The resulting sheet has no shelves.
    pub fn from_layout(stock: &SheetStock, placements: Vec<Placement>) -> Result<Self> {
        stock.validate()?;
        let mut seen = HashSet::with_capacity(placements.len());
        for p in &placements {
            if ![p.x, p.y, p.width, p.height].iter().all(|v| v.is_finite()) {
                return Err(Error::InvalidLayout(format!(
                    "{} has a non-finite coordinate",
                    p.label
                )));
            }
            if p.width <= 0.0 || p.height <= 0.0 {
                return Err(Error::InvalidLayout(format!(
                    "{} has non-positive size {} x {}",
                    p.label, p.width, p.height
                )));
            }
            if !seen.insert(p.piece_id) {
                return Err(Error::InvalidLayout(format!(
                    "{} is placed more than once",
                    p.piece_id
                )));
            }
        }
        let sheet = Self {
            width: stock.width,
            height: stock.height,
            shelves: Vec::new(),
            placements,
        };
        match sheet.find_violation() {
            None => Ok(sheet),
            Some(LayoutViolation::Overlap(a, b)) => Err(Error::InvalidLayout(format!(
                "{} overlaps {}",
                sheet.placements[a].label, sheet.placements[b].label
            ))),
            Some(LayoutViolation::OutOfBounds(i)) => Err(Error::InvalidLayout(format!(
                "{} lies outside the {} x {} sheet",
                sheet.placements[i].label, sheet.width, sheet.height
            ))),
        }
    }

    /// Sheet width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sheet height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The stock this sheet was cut from.
    pub fn stock(&self) -> SheetStock {
        SheetStock::new(self.width, self.height)
    }

    /// Shelves in creation order.
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    /// Placements in arena order (the order they were placed).
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placements belonging to a shelf, left to right.
    pub fn shelf_placements(&self, shelf: usize) -> impl Iterator<Item = &Placement> + '_ {
        self.shelves
            .get(shelf)
            .into_iter()
            .flat_map(|s| s.placements.iter())
            .filter_map(|&i| self.placements.get(i))
    }

    /// Arena index of the placement holding `piece_id`.
    pub fn find(&self, piece_id: PieceId) -> Option<usize> {
        self.placements.iter().position(|p| p.piece_id == piece_id)
    }

    /// Returns true if nothing is placed on the sheet.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// `y` of the next shelf: just above the highest shelf plus `spacing`,
    /// or 0 on an empty sheet.
    pub fn next_shelf_y(&self, spacing: f64) -> f64 {
        self.shelves
            .iter()
            .map(Shelf::top)
            .reduce(f64::max)
            .map_or(0.0, |top| top + spacing)
    }

    /// The first pair of placements that breaks a predicate, if any.
    pub fn find_violation(&self) -> Option<LayoutViolation> {
        for (i, p) in self.placements.iter().enumerate() {
            if out_of_bounds(&p.rect(), self.width, self.height) {
                return Some(LayoutViolation::OutOfBounds(i));
            }
        }
        for (i, a) in self.placements.iter().enumerate() {
            let ra = a.rect();
            for (j, b) in self.placements.iter().enumerate().skip(i + 1) {
                if collides(&ra, &b.rect()) {
                    return Some(LayoutViolation::Overlap(i, j));
                }
            }
        }
        None
    }

    /// Returns true if no placements overlap and all are in bounds.
    pub fn is_valid(&self) -> bool {
        self.find_violation().is_none()
    }

    pub(crate) fn placement_mut(&mut self, index: usize) -> Option<&mut Placement> {
        self.placements.get_mut(index)
    }

    pub(crate) fn open_shelf(&mut self, y: f64, height: f64) -> usize {
        self.shelves.push(Shelf::new(y, height));
        self.shelves.len() - 1
    }

    /// Appends `placement` to the arena and to `shelf`, advancing the
    /// shelf's fill by the placed width plus `spacing`.
    pub(crate) fn push_on_shelf(&mut self, shelf: usize, placement: Placement, spacing: f64) {
        let index = self.placements.len();
        if let Some(s) = self.shelves.get_mut(shelf) {
            s.current_width += placement.width + spacing;
            s.placements.push(index);
        }
        self.placements.push(placement);
    }
}

impl Bin for Sheet {
    fn item_count(&self) -> usize {
        self.placements.len()
    }

    fn piece_ids(&self) -> Vec<PieceId> {
        self.placements.iter().map(|p| p.piece_id).collect()
    }
}

impl AreaBin for Sheet {
    fn stock_area(&self) -> f64 {
        self.width * self.height
    }

    fn used_area(&self) -> f64 {
        self.placements.iter().map(Placement::area).sum()
    }
}
