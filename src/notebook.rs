//! Notebook document model.
//!
//! A Jupyter notebook is JSON with a top-level `cells` array; each cell has a
//! `cell_type` tag and an ordered `source` list of line strings. Everything
//! else (outputs, metadata, execution counts, nbformat fields) is carried
//! through untouched via flattened maps so a load/save round trip never drops
//! keys it does not model.
//!
//! # Serialization
//!
//! Saved notebooks use 1-space pretty indentation and keep non-ASCII
//! characters as literal characters, matching how the notebook was written
//! before the toolkit touched it.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Cell type tag marking executable source lines
pub const CODE_CELL: &str = "code";

/// An in-memory notebook, mutated in place and written back wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,

    /// Top-level keys other than `cells` (metadata, nbformat, nbformat_minor)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single notebook cell. Only `cell_type == "code"` cells are eligible
/// for mutation; everything else is carried through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: String,

    /// Ordered source lines. Order is significant and never changes.
    #[serde(default)]
    pub source: Vec<String>,

    /// Cell keys other than `cell_type`/`source` (outputs, metadata, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    pub fn is_code(&self) -> bool {
        self.cell_type == CODE_CELL
    }
}

impl Notebook {
    /// Load a notebook from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let notebook: Self = serde_json::from_str(&content)?;
        Ok(notebook)
    }

    /// Save the notebook back to a JSON file.
    ///
    /// Uses 1-space indentation; serde_json leaves non-ASCII characters
    /// unescaped, so emoji and accented text in markdown cells survive.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = fs::File::create(&path)?;

        let mut writer = BufWriter::new(file);
        let formatter = PrettyFormatter::with_indent(b" ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut ser)?;
        writer.flush()?;

        Ok(())
    }

    /// Mutable iterator over code cells only
    pub fn code_cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut().filter(|c| c.is_code())
    }

    /// Iterator over code cells only
    pub fn code_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_code())
    }

    /// Document shape: per-cell line counts, in cell order.
    /// Fixers must leave this identical; tests compare it before/after.
    pub fn shape(&self) -> Vec<usize> {
        self.cells.iter().map(|c| c.source.len()).collect()
    }
}
