//! # stockcut 2D
//!
//! Sheet cutting for the stockcut planner: a greedy shelf packer for
//! rectangular pieces and an interactive editor for the resulting layouts.
//!
//! ## Features
//!
//! - Shelf packing with best-fit shelf choice and 90 degree rotation
//! - Spacing between neighbouring pieces and shelves
//! - Oversized pieces reported as warnings instead of failing the run
//! - Drag/rotate editing that never commits an overlapping or
//!   out-of-bounds layout
//!
//! ## Quick Start
//!
//! ```rust
//! use stockcut_d2::{ShelfPacker, LayoutEditor};
//! use stockcut_core::{Packer, PackingConfig, PieceSpec2D, SheetStock};
//!
//! let specs = vec![
//!     PieceSpec2D::new(1000.0, 200.0),
//!     PieceSpec2D::new(400.0, 300.0).with_quantity(2),
//! ];
//! let stock = SheetStock::new(1000.0, 1000.0);
//!
//! let packer = ShelfPacker::new(PackingConfig::new());
//! let plan = packer.pack(&specs, &stock).unwrap();
//! assert_eq!(plan.bin_count(), 1);
//!
//! let summary = plan.sheet_summary();
//! println!("{} sheets, utilization: {:.1}%", summary.sheet_count, summary.utilization_percent);
//!
//! let mut editor = LayoutEditor::new(plan.bins[0].clone());
//! if editor.pointer_down(10.0, 10.0).is_some() {
//!     editor.pointer_move(10.0, 900.0);
//!     let _ = editor.pointer_up();
//! }
//! assert!(editor.sheet().is_valid());
//! ```

pub mod editor;
pub mod packer;
pub mod shared;
pub mod sheet;

pub use editor::{DragPreview, EditOutcome, EditorRejection, LayoutEditor};
pub use packer::{SheetPlan, ShelfPacker};
pub use shared::SharedLayoutEditor;
pub use sheet::{LayoutViolation, Placement, Sheet, Shelf};

// Re-export core types
pub use stockcut_core::{
    AreaBin, Error, Orientation, Packer, PackingConfig, PieceId, PieceSpec2D, Rect, Result,
    SheetStock,
};
