//! Path fixers for the reorganized notebook.
//!
//! Two rewrites, same pattern: walk every code cell, replace a literal quoted
//! token in each source line, count what changed, and persist only when
//! something did.
//!
//! # Design
//!
//! - **Pure mutators**: `apply_data_fix` / `apply_image_fix` touch only the
//!   in-memory document and return the replacements made; no I/O
//! - **Runners**: `run_fix_data` / `run_fix_images` load, apply, print one
//!   line per replacement plus a summary, and save only if the count is
//!   nonzero
//! - **Shape invariant**: no lines are added, removed, split, or reordered;
//!   only line content changes

use crate::error::Result;
use crate::layout::{IMAGES_PREFIX, IMAGE_FILES, NEW_DATA_PREFIX, OLD_DATA_PREFIX};
use crate::notebook::Notebook;
use std::path::Path;
use tracing::debug;

/// One performed substitution: the token that was found and what replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub old: String,
    pub new: String,
}

/// Rewrite dataset paths from the pre-move layout to the post-move one.
///
/// Every code-cell line containing `'../data/raw/` has all occurrences
/// replaced with `'../../data/raw/`. One replacement is recorded per changed
/// line, regardless of how many occurrences that line held.
pub fn apply_data_fix(notebook: &mut Notebook) -> Vec<Replacement> {
    let mut replacements = Vec::new();

    for cell in notebook.code_cells_mut() {
        for line in &mut cell.source {
            if line.contains(OLD_DATA_PREFIX) {
                *line = line.replace(OLD_DATA_PREFIX, NEW_DATA_PREFIX);
                debug!(line = line.trim_end(), "rewrote data path");
                replacements.push(Replacement {
                    old: OLD_DATA_PREFIX.to_string(),
                    new: NEW_DATA_PREFIX.to_string(),
                });
            }
        }
    }

    replacements
}

/// Rewrite bare image filenames to carry the `../images/` prefix.
///
/// For each code-cell line and each filename in the image table, the quoted
/// bare token (`'name.png'`) becomes the quoted prefixed token
/// (`'../images/name.png'`). One replacement is recorded per (line, filename)
/// pair, so a line mentioning two table entries counts twice.
pub fn apply_image_fix(notebook: &mut Notebook) -> Vec<Replacement> {
    let mut replacements = Vec::new();

    for cell in notebook.code_cells_mut() {
        for line in &mut cell.source {
            for img_file in IMAGE_FILES {
                let old_token = format!("'{}'", img_file);
                let new_token = format!("'{}{}'", IMAGES_PREFIX, img_file);

                if line.contains(&old_token) {
                    *line = line.replace(&old_token, &new_token);
                    debug!(file = img_file, "rewrote image path");
                    replacements.push(Replacement {
                        old: old_token,
                        new: new_token,
                    });
                }
            }
        }
    }

    replacements
}

/// Load, fix dataset paths, and save only if anything changed.
/// Returns the number of lines changed.
pub fn run_fix_data(notebook_path: &Path) -> Result<usize> {
    let mut notebook = Notebook::load_from_file(notebook_path)?;

    let replacements = apply_data_fix(&mut notebook);
    for _ in &replacements {
        println!(
            "✅ Fixed data path: {} -> {}",
            OLD_DATA_PREFIX.trim_start_matches('\''),
            NEW_DATA_PREFIX.trim_start_matches('\'')
        );
    }

    finish(&notebook, notebook_path, &replacements, "data path")?;
    Ok(replacements.len())
}

/// Load, fix image paths, and save only if anything changed.
/// Returns the number of (line, filename) substitutions.
pub fn run_fix_images(notebook_path: &Path) -> Result<usize> {
    let mut notebook = Notebook::load_from_file(notebook_path)?;

    let replacements = apply_image_fix(&mut notebook);
    for r in &replacements {
        println!("✅ Fixed: {} -> {}", r.old, r.new);
    }

    finish(&notebook, notebook_path, &replacements, "path")?;
    Ok(replacements.len())
}

/// Shared tail of both runners: conditional save plus the summary line.
fn finish(
    notebook: &Notebook,
    notebook_path: &Path,
    replacements: &[Replacement],
    what: &str,
) -> Result<()> {
    if !replacements.is_empty() {
        notebook.save_to_file(notebook_path)?;
        println!(
            "\n🎉 Successfully updated {} {} references in {}",
            replacements.len(),
            what,
            notebook_path.display()
        );
    } else {
        println!(
            "ℹ️  No {} updates needed in {}",
            what,
            notebook_path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::Cell;
    use serde_json::Map;

    fn code_cell(lines: &[&str]) -> Cell {
        Cell {
            cell_type: "code".to_string(),
            source: lines.iter().map(|l| l.to_string()).collect(),
            extra: Map::new(),
        }
    }

    fn markdown_cell(lines: &[&str]) -> Cell {
        Cell {
            cell_type: "markdown".to_string(),
            source: lines.iter().map(|l| l.to_string()).collect(),
            extra: Map::new(),
        }
    }

    fn notebook_with(cells: Vec<Cell>) -> Notebook {
        Notebook {
            cells,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_data_fix_rewrites_read_csv_line() {
        let mut nb = notebook_with(vec![code_cell(&[
            "df = pd.read_csv('../data/raw/dataset_clean.csv')\n",
        ])]);

        let changes = apply_data_fix(&mut nb);

        assert_eq!(changes.len(), 1);
        assert_eq!(
            nb.cells[0].source[0],
            "df = pd.read_csv('../../data/raw/dataset_clean.csv')\n"
        );
    }

    #[test]
    fn test_data_fix_counts_per_line_not_per_occurrence() {
        let mut nb = notebook_with(vec![code_cell(&[
            "a = '../data/raw/x.csv'; b = '../data/raw/y.csv'\n",
        ])]);

        let changes = apply_data_fix(&mut nb);

        // Both occurrences rewritten, one count for the line.
        assert_eq!(changes.len(), 1);
        assert_eq!(
            nb.cells[0].source[0],
            "a = '../../data/raw/x.csv'; b = '../../data/raw/y.csv'\n"
        );
        assert!(!nb.cells[0].source[0].contains("'../data/raw/"));
    }

    #[test]
    fn test_data_fix_skips_non_code_cells() {
        let mut nb = notebook_with(vec![markdown_cell(&[
            "Load with '../data/raw/dataset_clean.csv'\n",
        ])]);

        let changes = apply_data_fix(&mut nb);

        assert!(changes.is_empty());
        assert!(nb.cells[0].source[0].contains("'../data/raw/"));
    }

    #[test]
    fn test_data_fix_is_idempotent() {
        let mut nb = notebook_with(vec![code_cell(&[
            "df.to_csv('../data/raw/out.csv')\n",
        ])]);

        assert_eq!(apply_data_fix(&mut nb).len(), 1);
        assert_eq!(apply_data_fix(&mut nb).len(), 0);
    }

    #[test]
    fn test_image_fix_rewrites_savefig_line() {
        let mut nb = notebook_with(vec![code_cell(&[
            "plt.savefig('clustering_metrics.png')\n",
        ])]);

        let changes = apply_image_fix(&mut nb);

        assert_eq!(changes.len(), 1);
        assert_eq!(
            nb.cells[0].source[0],
            "plt.savefig('../images/clustering_metrics.png')\n"
        );
    }

    #[test]
    fn test_image_fix_counts_per_line_filename_pair() {
        let mut nb = notebook_with(vec![code_cell(&[
            "save('clustering_metrics.png'); save('cluster_distribution.png')\n",
        ])]);

        let changes = apply_image_fix(&mut nb);

        assert_eq!(changes.len(), 2);
        assert!(nb.cells[0].source[0].contains("'../images/clustering_metrics.png'"));
        assert!(nb.cells[0].source[0].contains("'../images/cluster_distribution.png'"));
    }

    #[test]
    fn test_image_fix_ignores_already_prefixed_names() {
        let mut nb = notebook_with(vec![code_cell(&[
            "plt.savefig('../images/clustering_metrics.png')\n",
        ])]);

        let changes = apply_image_fix(&mut nb);

        assert!(changes.is_empty());
        assert_eq!(
            nb.cells[0].source[0],
            "plt.savefig('../images/clustering_metrics.png')\n"
        );
    }

    #[test]
    fn test_image_fix_ignores_unlisted_filenames() {
        let mut nb = notebook_with(vec![code_cell(&[
            "plt.savefig('some_other_plot.png')\n",
        ])]);

        assert!(apply_image_fix(&mut nb).is_empty());
    }

    #[test]
    fn test_fixers_preserve_document_shape() {
        let mut nb = notebook_with(vec![
            markdown_cell(&["# Title\n", "text\n"]),
            code_cell(&[
                "df = pd.read_csv('../data/raw/dataset_clean.csv')\n",
                "plt.savefig('cluster_wordclouds.png')\n",
            ]),
            code_cell(&[]),
        ]);
        let shape_before = nb.shape();

        apply_data_fix(&mut nb);
        apply_image_fix(&mut nb);

        assert_eq!(nb.shape(), shape_before);
        assert_eq!(nb.cells.len(), 3);
    }
}
