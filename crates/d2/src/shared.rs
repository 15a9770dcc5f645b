//! Layout editors shared between threads.

use crate::editor::{EditOutcome, LayoutEditor};
use crate::packer::SheetPlan;
use crate::sheet::{Placement, Sheet};
use std::sync::{Arc, Mutex};
use stockcut_core::{Error, PieceId, Result};

/// A [`LayoutEditor`] behind a mutex, one per sheet.
///
/// Edits on the same sheet are serialized; edits on different sheets never
/// contend. Clones share the same editor.
#[derive(Debug, Clone)]
pub struct SharedLayoutEditor {
    inner: Arc<Mutex<LayoutEditor>>,
}

impl SharedLayoutEditor {
    /// Wraps an existing editor.
    pub fn new(editor: LayoutEditor) -> Self {
        Self {
            inner: Arc::new(Mutex::new(editor)),
        }
    }

    /// Starts a shared editing session on `sheet`.
    pub fn from_sheet(sheet: Sheet) -> Self {
        Self::new(LayoutEditor::new(sheet))
    }

    /// One editor per sheet of `plan`, in sheet order.
    pub fn for_plan(plan: &SheetPlan) -> Vec<Self> {
        plan.bins.iter().cloned().map(Self::from_sheet).collect()
    }

    /// Runs `f` with exclusive access to the editor.
    pub fn with<R>(&self, f: impl FnOnce(&mut LayoutEditor) -> R) -> Result<R> {
        let mut editor = self
            .inner
            .lock()
            .map_err(|_| Error::Internal("layout editor lock poisoned".into()))?;
        Ok(f(&mut *editor))
    }

    /// See [`LayoutEditor::move_piece`].
    pub fn move_piece(&self, piece_id: PieceId, x: f64, y: f64) -> Result<EditOutcome> {
        self.with(|editor| editor.move_piece(piece_id, x, y))
    }

    /// See [`LayoutEditor::rotate`].
    pub fn rotate(&self, piece_id: PieceId) -> Result<EditOutcome> {
        self.with(|editor| editor.rotate(piece_id))
    }

    /// Copy of the committed placements.
    pub fn snapshot(&self) -> Result<Vec<Placement>> {
        self.with(|editor| editor.placements().to_vec())
    }

    /// Copy of the whole sheet.
    pub fn sheet(&self) -> Result<Sheet> {
        self.with(|editor| editor.sheet().clone())
    }

    /// Utilization of the committed layout, in percent.
    pub fn utilization_percent(&self) -> Result<f64> {
        self.with(|editor| editor.utilization_percent())
    }
}
