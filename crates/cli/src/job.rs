//! Job file definitions.
//!
//! A job names the stock, the packing parameters and the pieces to cut.
//! Jobs are read from JSON or TOML, chosen by file extension.

use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stockcut::d1::{BarPlan, LinearPacker};
use stockcut::d2::{SheetPlan, ShelfPacker};
use stockcut::{BarStock, Packer, PackingConfig, PieceSpec1D, PieceSpec2D, SheetStock};

/// Job file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFormat {
    Json,
    Toml,
}

impl JobFormat {
    /// Picks the format from a path's extension.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(JobFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(JobFormat::Toml),
            _ => bail!(
                "cannot tell job format of {}: expected a .json or .toml file",
                path.display()
            ),
        }
    }

    pub fn parse<T: DeserializeOwned>(self, content: &str) -> anyhow::Result<T> {
        Ok(match self {
            JobFormat::Json => serde_json::from_str(content)?,
            JobFormat::Toml => toml::from_str(content)?,
        })
    }

    pub fn render<T: Serialize>(self, value: &T) -> anyhow::Result<String> {
        Ok(match self {
            JobFormat::Json => serde_json::to_string_pretty(value)?,
            JobFormat::Toml => toml::to_string_pretty(value)?,
        })
    }
}

/// Reads a job from a JSON or TOML file.
pub fn load_job<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let format = JobFormat::from_path(path)?;
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    format
        .parse(&content)
        .with_context(|| format!("parsing {}", path.display()))
}

/// Writes a job as JSON or TOML, chosen by extension.
pub fn save_job<T: Serialize>(job: &T, path: &Path) -> anyhow::Result<()> {
    let content = JobFormat::from_path(path)?.render(job)?;
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

/// A sheet cutting job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetJob {
    /// Gap between neighbouring pieces.
    #[serde(default)]
    pub spacing: f64,

    /// Stock sheet dimensions.
    pub sheet: SheetStock,

    /// Pieces to cut.
    pub pieces: Vec<PieceSpec2D>,
}

impl SheetJob {
    pub fn config(&self) -> PackingConfig {
        PackingConfig::new().with_spacing(self.spacing)
    }

    pub fn run(&self) -> stockcut::Result<SheetPlan> {
        ShelfPacker::new(self.config()).pack(&self.pieces, &self.sheet)
    }

    /// Total number of piece units.
    pub fn piece_count(&self) -> usize {
        self.pieces.iter().map(|p| p.quantity).sum()
    }
}

/// A bar cutting job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarJob {
    /// Saw kerf per internal cut.
    #[serde(default)]
    pub kerf: f64,

    /// Stock bar length.
    pub bar: BarStock,

    /// Segments to cut.
    pub pieces: Vec<PieceSpec1D>,
}

impl BarJob {
    pub fn config(&self) -> PackingConfig {
        PackingConfig::new().with_kerf(self.kerf)
    }

    pub fn run(&self) -> stockcut::Result<BarPlan> {
        LinearPacker::new(self.config()).pack(&self.pieces, &self.bar)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.iter().map(|p| p.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            JobFormat::from_path(Path::new("job.json")).unwrap(),
            JobFormat::Json
        );
        assert_eq!(
            JobFormat::from_path(Path::new("a/b/JOB.TOML")).unwrap(),
            JobFormat::Toml
        );
        assert!(JobFormat::from_path(Path::new("job.yaml")).is_err());
        assert!(JobFormat::from_path(Path::new("job")).is_err());
    }

    #[test]
    fn test_parse_sheet_job_json() {
        let json = r#"{
            "sheet": { "width": 1000, "height": 1000 },
            "pieces": [
                { "width": 1000, "height": 200 },
                { "width": 400, "height": 300, "quantity": 2, "label": "door" }
            ]
        }"#;
        let job: SheetJob = JobFormat::Json.parse(json).unwrap();
        assert_eq!(job.spacing, 0.0);
        assert_eq!(job.pieces[0].quantity, 1);
        assert_eq!(job.pieces[1].label.as_deref(), Some("door"));
        assert_eq!(job.piece_count(), 3);

        let plan = job.run().unwrap();
        assert_eq!(plan.bin_count(), 1);
    }

    #[test]
    fn test_parse_bar_job_toml() {
        let toml = r#"
            kerf = 10.0

            [bar]
            length = 1000.0

            [[pieces]]
            length = 600.0

            [[pieces]]
            length = 500.0

            [[pieces]]
            length = 300.0
        "#;
        let job: BarJob = JobFormat::Toml.parse(toml).unwrap();
        let plan = job.run().unwrap();
        assert_eq!(plan.bin_count(), 2);
        assert_eq!(plan.bins[0].cut_lengths(), vec![600.0, 300.0]);
    }

    #[test]
    fn test_invalid_job_is_validation_error() {
        let job = BarJob {
            kerf: -2.0,
            bar: BarStock::new(1000.0),
            pieces: vec![PieceSpec1D::new(10.0)],
        };
        assert!(job.run().unwrap_err().is_validation());
    }

    #[test]
    fn test_save_and_load_both_formats() {
        let job = SheetJob {
            spacing: 4.0,
            sheet: SheetStock::new(2750.0, 1850.0),
            pieces: vec![PieceSpec2D::new(600.0, 400.0).with_quantity(3)],
        };
        let dir = std::env::temp_dir().join(format!("stockcut-job-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        for name in ["job.json", "job.toml"] {
            let path: PathBuf = dir.join(name);
            save_job(&job, &path).unwrap();
            let loaded: SheetJob = load_job(&path).unwrap();
            assert_eq!(loaded, job);
        }
        fs::remove_dir_all(&dir).ok();
    }
}
