//! Interactive layout editing on one packed sheet.
//!
//! The editor accepts drag and rotate gestures and keeps the sheet's two
//! predicates (no overlap, in bounds) true after every gesture. A gesture
//! that would break either of them is reverted and reported as an
//! [`EditorRejection`]; the committed layout is never left in a bad state.
//!
//! ```rust
//! use stockcut_d2::{EditOutcome, EditorRejection, LayoutEditor, Placement, Sheet};
//! use stockcut_core::{PieceId, Rect, SheetStock};
//!
//! let sheet = Sheet::from_layout(
//!     &SheetStock::new(200.0, 200.0),
//!     vec![
//!         Placement::new(PieceId(1), Rect::new(0.0, 0.0, 100.0, 100.0)),
//!         Placement::new(PieceId(2), Rect::new(150.0, 0.0, 50.0, 50.0)),
//!     ],
//! )
//! .unwrap();
//!
//! let mut editor = LayoutEditor::new(sheet);
//! assert_eq!(
//!     editor.move_piece(PieceId(1), 160.0, 0.0),
//!     EditOutcome::Reverted(EditorRejection::Collision { with: PieceId(2) })
//! );
//! assert!(editor.move_piece(PieceId(1), 0.0, 100.0).is_committed());
//! ```

use crate::sheet::{Placement, Sheet};
use stockcut_core::geometry::{collides, out_of_bounds, Rect};
use stockcut_core::{AreaBin, PieceId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a gesture was reverted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditorRejection {
    /// The new position overlaps another piece.
    Collision {
        /// The piece that was hit.
        with: PieceId,
    },
    /// The piece would leave the sheet.
    OutOfBounds,
    /// No piece with this id is on the sheet.
    UnknownPiece(PieceId),
    /// A pointer release arrived with no drag in progress.
    NotDragging,
    /// A move or rotate arrived while a drag was in progress.
    DragInProgress,
}

/// Result of a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditOutcome {
    /// The layout now reflects the gesture.
    Committed,
    /// The layout is unchanged.
    Reverted(EditorRejection),
}

impl EditOutcome {
    /// Returns true if the gesture was applied.
    pub fn is_committed(&self) -> bool {
        matches!(self, EditOutcome::Committed)
    }

    /// Why the gesture was reverted, if it was.
    pub fn rejection(&self) -> Option<EditorRejection> {
        match self {
            EditOutcome::Committed => None,
            EditOutcome::Reverted(r) => Some(*r),
        }
    }
}

/// Where a dragged piece would land if released now.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DragPreview {
    /// The dragged piece.
    pub piece_id: PieceId,
    /// Tentative rectangle, already clamped to the sheet.
    pub rect: Rect,
    /// Whether releasing here would commit.
    pub valid: bool,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    index: usize,
    press_x: f64,
    press_y: f64,
    /// Committed rectangle when the drag started.
    origin: Rect,
    tentative: Rect,
}

/// Drag and rotate editor for a single sheet.
///
/// Gestures are validated with the same predicates the packer guarantees,
/// so a layout accepted by the editor is indistinguishable from a packed
/// one. Shelves are left as the packer built them.
#[derive(Debug, Clone)]
pub struct LayoutEditor {
    sheet: Sheet,
    drag: Option<DragSession>,
}

impl LayoutEditor {
    /// Starts an editing session on `sheet`.
    pub fn new(sheet: Sheet) -> Self {
        Self { sheet, drag: None }
    }

    /// The committed sheet.
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Ends the session, returning the edited sheet. An unfinished drag is
    /// discarded.
    pub fn into_sheet(self) -> Sheet {
        self.sheet
    }

    /// Committed placements.
    pub fn placements(&self) -> &[Placement] {
        self.sheet.placements()
    }

    /// Utilization of the committed layout, in percent.
    pub fn utilization_percent(&self) -> f64 {
        self.sheet.utilization_percent()
    }

    /// Returns true while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Index of the topmost placement under the point. Edges count as
    /// inside.
    pub fn piece_at(&self, px: f64, py: f64) -> Option<usize> {
        self.sheet
            .placements()
            .iter()
            .rposition(|p| p.rect().contains_point(px, py))
    }

    /// Starts dragging the topmost piece under the pointer.
    ///
    /// Returns `None` if the pointer hit empty space. An unfinished drag is
    /// abandoned first.
    pub fn pointer_down(&mut self, px: f64, py: f64) -> Option<PieceId> {
        self.drag = None;
        let index = self.piece_at(px, py)?;
        let placement = &self.sheet.placements()[index];
        self.drag = Some(DragSession {
            index,
            press_x: px,
            press_y: py,
            origin: placement.rect(),
            tentative: placement.rect(),
        });
        Some(placement.piece_id)
    }

    /// Moves the dragged piece with the pointer, clamped to the sheet.
    ///
    /// The position is the drag origin plus the pointer's displacement from
    /// the press point, so returning to the press point restores the origin
    /// exactly.
    ///
    /// Returns `None` if no drag is in progress.
    pub fn pointer_move(&mut self, px: f64, py: f64) -> Option<DragPreview> {
        let mut session = self.drag?;
        let origin = session.origin;
        session.tentative = Rect::new(
            origin.x + (px - session.press_x),
            origin.y + (py - session.press_y),
            origin.width,
            origin.height,
        )
        .clamped(self.sheet.width(), self.sheet.height());
        self.drag = Some(session);
        self.drag_preview()
    }

    /// Releases the dragged piece, committing it if it lands on a free
    /// in-bounds spot and reverting it otherwise.
    pub fn pointer_up(&mut self) -> EditOutcome {
        let Some(session) = self.drag.take() else {
            return EditOutcome::Reverted(EditorRejection::NotDragging);
        };
        let rect = session
            .tentative
            .clamped(self.sheet.width(), self.sheet.height());
        self.apply(session.index, rect, false)
    }

    /// Abandons the current drag. Returns true if one was in progress.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// The current drag position and whether it is valid.
    pub fn drag_preview(&self) -> Option<DragPreview> {
        let session = self.drag?;
        let placement = self.sheet.placements().get(session.index)?;
        Some(DragPreview {
            piece_id: placement.piece_id,
            rect: session.tentative,
            valid: self.check(session.index, &session.tentative).is_ok(),
        })
    }

    /// Moves a piece to `(x, y)` as one complete drag.
    pub fn move_piece(&mut self, piece_id: PieceId, x: f64, y: f64) -> EditOutcome {
        let index = match self.target(piece_id) {
            Ok(index) => index,
            Err(rejection) => return EditOutcome::Reverted(rejection),
        };
        let current = self.sheet.placements()[index].rect();
        let rect = Rect::new(x, y, current.width, current.height)
            .clamped(self.sheet.width(), self.sheet.height());
        self.apply(index, rect, false)
    }

    /// Rotates a piece by 90 degrees about its current corner.
    pub fn rotate(&mut self, piece_id: PieceId) -> EditOutcome {
        let index = match self.target(piece_id) {
            Ok(index) => index,
            Err(rejection) => return EditOutcome::Reverted(rejection),
        };
        let rect = self.sheet.placements()[index]
            .rect()
            .transposed()
            .clamped(self.sheet.width(), self.sheet.height());
        self.apply(index, rect, true)
    }

    /// Rotates the topmost piece under the pointer.
    ///
    /// Returns `None` if the pointer hit empty space.
    pub fn rotate_at(&mut self, px: f64, py: f64) -> Option<EditOutcome> {
        let index = self.piece_at(px, py)?;
        let piece_id = self.sheet.placements()[index].piece_id;
        Some(self.rotate(piece_id))
    }

    fn target(&self, piece_id: PieceId) -> Result<usize, EditorRejection> {
        if self.drag.is_some() {
            return Err(EditorRejection::DragInProgress);
        }
        self.sheet
            .find(piece_id)
            .ok_or(EditorRejection::UnknownPiece(piece_id))
    }

    /// Tests `rect` for the placement at `index` against the sheet bounds
    /// and every other placement.
    fn check(&self, index: usize, rect: &Rect) -> Result<(), EditorRejection> {
        if out_of_bounds(rect, self.sheet.width(), self.sheet.height()) {
            return Err(EditorRejection::OutOfBounds);
        }
        match self
            .sheet
            .placements()
            .iter()
            .enumerate()
            .find(|&(i, other)| i != index && collides(rect, &other.rect()))
        {
            Some((_, other)) => Err(EditorRejection::Collision {
                with: other.piece_id,
            }),
            None => Ok(()),
        }
    }

    fn apply(&mut self, index: usize, rect: Rect, rotated: bool) -> EditOutcome {
        if let Err(rejection) = self.check(index, &rect) {
            log::debug!("edit reverted: {:?}", rejection);
            return EditOutcome::Reverted(rejection);
        }
        if let Some(placement) = self.sheet.placement_mut(index) {
            placement.set_rect(rect);
            if rotated {
                placement.orientation = placement.orientation.toggled();
            }
        }
        EditOutcome::Committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcut_core::{Orientation, SheetStock};

    fn editor(rects: &[(f64, f64, f64, f64)]) -> LayoutEditor {
        let placements = rects
            .iter()
            .enumerate()
            .map(|(i, &(x, y, w, h))| Placement::new(PieceId(i), Rect::new(x, y, w, h)))
            .collect();
        LayoutEditor::new(Sheet::from_layout(&SheetStock::new(200.0, 200.0), placements).unwrap())
    }

    fn pos(editor: &LayoutEditor, i: usize) -> (f64, f64, f64, f64) {
        let p = &editor.placements()[i];
        (p.x, p.y, p.width, p.height)
    }

    #[test]
    fn test_drag_into_collision_reverts() {
        let mut ed = editor(&[(0.0, 0.0, 100.0, 100.0), (150.0, 0.0, 50.0, 50.0)]);
        assert_eq!(ed.pointer_down(10.0, 10.0), Some(PieceId(0)));
        let preview = ed.pointer_move(170.0, 10.0).unwrap();
        assert_eq!(preview.rect.x, 100.0);
        assert!(!preview.valid);

        let outcome = ed.pointer_up();
        assert_eq!(
            outcome,
            EditOutcome::Reverted(EditorRejection::Collision { with: PieceId(1) })
        );
        assert_eq!(pos(&ed, 0), (0.0, 0.0, 100.0, 100.0));
        assert!(!ed.is_dragging());
    }

    #[test]
    fn test_drag_to_free_spot_commits() {
        let mut ed = editor(&[(0.0, 0.0, 100.0, 100.0), (150.0, 0.0, 50.0, 50.0)]);
        ed.pointer_down(50.0, 50.0);
        let preview = ed.pointer_move(100.0, 150.0).unwrap();
        assert!(preview.valid);
        assert!(ed.pointer_up().is_committed());
        assert_eq!(pos(&ed, 0), (50.0, 100.0, 100.0, 100.0));
        assert!(ed.sheet().is_valid());
    }

    #[test]
    fn test_drag_is_clamped_to_sheet() {
        let mut ed = editor(&[(0.0, 0.0, 100.0, 100.0)]);
        ed.pointer_down(0.0, 0.0);
        let preview = ed.pointer_move(-50.0, 500.0).unwrap();
        assert_eq!((preview.rect.x, preview.rect.y), (0.0, 100.0));
        assert!(ed.pointer_up().is_committed());
    }

    #[test]
    fn test_layout_untouched_while_dragging() {
        let mut ed = editor(&[(0.0, 0.0, 50.0, 50.0)]);
        ed.pointer_down(10.0, 10.0);
        ed.pointer_move(110.0, 110.0);
        assert_eq!(pos(&ed, 0), (0.0, 0.0, 50.0, 50.0));
        assert!(ed.cancel_drag());
        assert_eq!(pos(&ed, 0), (0.0, 0.0, 50.0, 50.0));
        assert!(!ed.cancel_drag());
    }

    #[test]
    fn test_pointer_events_without_drag() {
        let mut ed = editor(&[(0.0, 0.0, 50.0, 50.0)]);
        assert_eq!(ed.pointer_down(100.0, 100.0), None);
        assert_eq!(ed.pointer_move(10.0, 10.0), None);
        assert_eq!(
            ed.pointer_up(),
            EditOutcome::Reverted(EditorRejection::NotDragging)
        );
    }

    #[test]
    fn test_hit_test_topmost_and_closed_edges() {
        let ed = editor(&[(0.0, 0.0, 50.0, 50.0), (50.0, 0.0, 50.0, 50.0)]);
        // x = 50 lies on both edges; the later placement is on top.
        assert_eq!(ed.piece_at(50.0, 10.0), Some(1));
        assert_eq!(ed.piece_at(0.0, 0.0), Some(0));
        assert_eq!(ed.piece_at(101.0, 10.0), None);
    }

    #[test]
    fn test_rotate_commits_and_toggles_orientation() {
        let mut ed = editor(&[(0.0, 0.0, 100.0, 20.0)]);
        assert!(ed.rotate(PieceId(0)).is_committed());
        assert_eq!(pos(&ed, 0), (0.0, 0.0, 20.0, 100.0));
        assert_eq!(ed.placements()[0].orientation, Orientation::Rotated);

        assert!(ed.rotate(PieceId(0)).is_committed());
        assert_eq!(ed.placements()[0].orientation, Orientation::Original);
    }

    #[test]
    fn test_rotate_near_edge_is_clamped() {
        let mut ed = editor(&[(190.0, 0.0, 10.0, 50.0)]);
        assert!(ed.rotate(PieceId(0)).is_committed());
        assert_eq!(pos(&ed, 0), (150.0, 0.0, 50.0, 10.0));
    }

    #[test]
    fn test_rotate_into_neighbour_reverts() {
        let mut ed = editor(&[(0.0, 0.0, 100.0, 20.0), (0.0, 20.0, 100.0, 20.0)]);
        let outcome = ed.rotate_at(5.0, 5.0).unwrap();
        assert_eq!(
            outcome,
            EditOutcome::Reverted(EditorRejection::Collision { with: PieceId(1) })
        );
        assert_eq!(pos(&ed, 0), (0.0, 0.0, 100.0, 20.0));
        assert_eq!(ed.placements()[0].orientation, Orientation::Original);
    }

    #[test]
    fn test_rotate_too_long_reverts_out_of_bounds() {
        let placements = vec![Placement::new(PieceId(0), Rect::new(0.0, 0.0, 300.0, 10.0))];
        let sheet = Sheet::from_layout(&SheetStock::new(300.0, 100.0), placements).unwrap();
        let mut ed = LayoutEditor::new(sheet);
        assert_eq!(
            ed.rotate(PieceId(0)),
            EditOutcome::Reverted(EditorRejection::OutOfBounds)
        );
        assert_eq!(pos(&ed, 0), (0.0, 0.0, 300.0, 10.0));
    }

    #[test]
    fn test_move_unknown_piece() {
        let mut ed = editor(&[(0.0, 0.0, 50.0, 50.0)]);
        assert_eq!(
            ed.move_piece(PieceId(9), 10.0, 10.0),
            EditOutcome::Reverted(EditorRejection::UnknownPiece(PieceId(9)))
        );
        assert_eq!(ed.rotate_at(150.0, 150.0), None);
    }

    #[test]
    fn test_move_during_drag_rejected() {
        let mut ed = editor(&[(0.0, 0.0, 50.0, 50.0)]);
        ed.pointer_down(1.0, 1.0);
        assert_eq!(
            ed.move_piece(PieceId(0), 100.0, 100.0).rejection(),
            Some(EditorRejection::DragInProgress)
        );
        assert!(ed.is_dragging());
    }

    #[test]
    fn test_drag_back_to_origin_is_identity() {
        let mut ed = editor(&[(25.0, 50.0, 50.0, 50.0), (100.0, 100.0, 50.0, 50.0)]);
        let before = ed.sheet().clone();

        ed.pointer_down(30.0, 60.0);
        ed.pointer_move(130.0, 10.0);
        ed.pointer_move(30.0, 60.0);
        assert!(ed.pointer_up().is_committed());

        assert_eq!(ed.sheet(), &before);
    }

    #[test]
    fn test_drag_back_with_fractional_coordinates_is_identity() {
        let mut ed = editor(&[(1.32, 0.7, 12.25, 3.4), (120.45, 80.15, 30.3, 20.7)]);
        let before = ed.sheet().clone();

        assert_eq!(ed.pointer_down(5.51, 0.9), Some(PieceId(0)));
        ed.pointer_move(50.0, 50.0);
        let preview = ed.pointer_move(5.51, 0.9).unwrap();
        assert_eq!(preview.rect, before.placements()[0].rect());
        assert!(ed.pointer_up().is_committed());

        assert_eq!(ed.sheet(), &before);
    }

    #[test]
    fn test_utilization_tracks_edits() {
        let mut ed = editor(&[(0.0, 0.0, 100.0, 100.0)]);
        let before = ed.utilization_percent();
        ed.move_piece(PieceId(0), 50.0, 50.0);
        assert_eq!(ed.utilization_percent(), before);
        assert_eq!(before, 25.0);
    }
}
