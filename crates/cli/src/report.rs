//! Serializable plan reports and their console rendering.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stockcut::core::{AreaBin, LengthBin};
use stockcut::d1::BarPlan;
use stockcut::d2::SheetPlan;
use stockcut::{BarSummary, PlacementWarning, SheetSummary};

/// One placed piece.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementReport {
    pub piece_id: usize,
    /// Originating spec, e.g. `P2`.
    pub spec: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

/// One sheet of a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetReport {
    pub index: usize,
    pub utilization_percent: f64,
    pub placements: Vec<PlacementReport>,
}

/// Sheet plan as written by `stockcut sheets --output`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetPlanReport {
    pub summary: SheetSummary,
    pub sheets: Vec<SheetReport>,
    #[serde(default)]
    pub warnings: Vec<PlacementWarning>,
    pub computation_time_ms: u64,
}

impl From<&SheetPlan> for SheetPlanReport {
    fn from(plan: &SheetPlan) -> Self {
        let sheets = plan
            .bins
            .iter()
            .enumerate()
            .map(|(index, sheet)| SheetReport {
                index,
                utilization_percent: sheet.utilization_percent(),
                placements: sheet
                    .placements()
                    .iter()
                    .map(|p| PlacementReport {
                        piece_id: p.piece_id.0,
                        spec: p.spec_id.to_string(),
                        label: p.label.clone(),
                        x: p.x,
                        y: p.y,
                        width: p.width,
                        height: p.height,
                        rotated: p.orientation == stockcut::core::Orientation::Rotated,
                    })
                    .collect(),
            })
            .collect();

        Self {
            summary: plan.sheet_summary(),
            sheets,
            warnings: plan.warnings.clone(),
            computation_time_ms: plan.computation_time_ms,
        }
    }
}

impl SheetPlanReport {
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Prints the plan to stdout.
    pub fn print_summary(&self) {
        println!("\n{:=<72}", "");
        println!("SHEET PLAN");
        println!("{:=<72}", "");
        for sheet in &self.sheets {
            println!(
                "Sheet {:<4} pieces={:<5} utilization={:.1}%",
                sheet.index + 1,
                sheet.placements.len(),
                sheet.utilization_percent
            );
            for p in &sheet.placements {
                println!(
                    "  {:<12} {:>9.1} {:>9.1} {:>9.1} x {:<9.1}{}",
                    p.label,
                    p.x,
                    p.y,
                    p.width,
                    p.height,
                    if p.rotated { " (rotated)" } else { "" }
                );
            }
        }
        println!("{:-<72}", "");
        let s = &self.summary;
        println!("Sheets:       {}", s.sheet_count);
        println!("Pieces:       {}", s.pieces_placed);
        println!("Waste area:   {:.2}", s.waste_area);
        println!("Utilization:  {:.2}%", s.utilization_percent);
        print_warnings(&self.warnings);
        println!("{:=<72}\n", "");
    }
}

/// One bar of a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarReport {
    pub index: usize,
    /// Cut lengths in cutting order.
    pub cuts: Vec<f64>,
    pub labels: Vec<String>,
    pub remainder: f64,
    pub kerf_loss: f64,
    pub efficiency_percent: f64,
}

/// Bar plan as written by `stockcut bars --output`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarPlanReport {
    pub summary: BarSummary,
    pub bars: Vec<BarReport>,
    #[serde(default)]
    pub warnings: Vec<PlacementWarning>,
    pub computation_time_ms: u64,
}

impl From<&BarPlan> for BarPlanReport {
    fn from(plan: &BarPlan) -> Self {
        let bars = plan
            .bins
            .iter()
            .enumerate()
            .map(|(index, bar)| BarReport {
                index,
                cuts: bar.cut_lengths(),
                labels: bar.cuts().iter().map(|c| c.label.clone()).collect(),
                remainder: bar.remainder(),
                kerf_loss: bar.kerf_loss(),
                efficiency_percent: bar.efficiency_percent(),
            })
            .collect();

        Self {
            summary: plan.bar_summary(),
            bars,
            warnings: plan.warnings.clone(),
            computation_time_ms: plan.computation_time_ms,
        }
    }
}

impl BarPlanReport {
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Prints the plan to stdout.
    pub fn print_summary(&self) {
        println!("\n{:=<72}", "");
        println!("BAR PLAN");
        println!("{:=<72}", "");
        for bar in &self.bars {
            let cuts: Vec<String> = bar.cuts.iter().map(|c| format!("{:.1}", c)).collect();
            println!(
                "Bar {:<4} [{}] remainder={:.2} kerf={:.2}",
                bar.index + 1,
                cuts.join(", "),
                bar.remainder,
                bar.kerf_loss
            );
        }
        println!("{:-<72}", "");
        let s = &self.summary;
        println!("Bars needed:  {}", s.bars_needed);
        println!("Useful:       {:.2}", s.useful_length);
        println!("Final waste:  {:.2}", s.final_waste);
        println!("Kerf loss:    {:.2}", s.kerf_loss);
        println!("Material:     {:.2}", s.material_used);
        println!("Efficiency:   {:.2}%", s.efficiency_percent);
        print_warnings(&self.warnings);
        println!("{:=<72}\n", "");
    }
}

fn print_warnings(warnings: &[PlacementWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!("Dropped {} oversized piece(s):", warnings.len());
    for w in warnings {
        println!("  - {}", w.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stockcut::d1::LinearPacker;
    use stockcut::d2::ShelfPacker;
    use stockcut::{BarStock, Packer, PackingConfig, PieceSpec1D, PieceSpec2D, SheetStock};

    #[test]
    fn test_sheet_report() {
        let plan = ShelfPacker::default_config()
            .pack(
                &[PieceSpec2D::new(50.0, 150.0), PieceSpec2D::new(500.0, 500.0)],
                &SheetStock::new(200.0, 100.0),
            )
            .unwrap();
        let report = SheetPlanReport::from(&plan);

        assert_eq!(report.sheets.len(), 1);
        let p = &report.sheets[0].placements[0];
        assert!(p.rotated);
        assert_eq!(p.spec, "P1");
        assert_eq!((p.width, p.height), (150.0, 50.0));
        assert_eq!(report.warnings.len(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["sheet_count"], 1);
    }

    #[test]
    fn test_bar_report() {
        let plan = LinearPacker::new(PackingConfig::new().with_kerf(10.0))
            .pack(
                &[
                    PieceSpec1D::new(600.0),
                    PieceSpec1D::new(500.0),
                    PieceSpec1D::new(300.0),
                ],
                &BarStock::new(1000.0),
            )
            .unwrap();
        let report = BarPlanReport::from(&plan);

        assert_eq!(report.bars[0].cuts, vec![600.0, 300.0]);
        assert_eq!(report.bars[0].labels, vec!["P1", "P3"]);
        assert_relative_eq!(report.bars[0].remainder, 90.0);
        assert_relative_eq!(report.bars[1].efficiency_percent, 50.0);
        assert_relative_eq!(report.summary.efficiency_percent, 70.0);
    }
}
