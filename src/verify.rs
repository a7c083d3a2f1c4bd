//! Post-reorganization verification.
//!
//! Four independent checks: stale references inside the notebook, the dataset
//! location, the images directory, and the expected folder structure. A check
//! that errors is recorded as failed and the remaining checks still run; the
//! overall result is the AND of all four.

use crate::layout::{
    AUDITED_IMAGE_FILES, DATA_DIR_FROM_NOTEBOOK, DATA_FILE_FROM_NOTEBOOK, EXPECTED_STRUCTURE,
    IMAGES_DIR_FROM_NOTEBOOK, IMAGES_PREFIX, IMAGE_FILES, SAVE_CALL_MARKER,
};
use crate::notebook::Notebook;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of one verifier check
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
}

/// Result of a full verification run
#[derive(Debug)]
pub struct VerifyReport {
    pub checks: Vec<CheckOutcome>,
}

impl VerifyReport {
    /// Returns true if every check passed
    pub fn is_ok(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

/// Check 1: the notebook holds no stale image references.
///
/// A line is stale when it carries a save-call marker and one of the audited
/// filenames without the `../images/` prefix. Lines already carrying the
/// prefix next to a save call are counted as correct (reported, not gating).
/// Unprefixed save calls naming the non-audited filenames are warned about
/// but do not fail the check.
pub fn check_notebook_references(notebook_path: &Path) -> Result<bool> {
    println!("🧪 Testing notebook paths...");

    let notebook = Notebook::load_from_file(notebook_path)?;

    let mut old_paths_found = Vec::new();
    let mut new_paths_found = 0usize;
    let mut unaudited_found = Vec::new();

    for cell in notebook.code_cells() {
        for line in &cell.source {
            if !line.contains(SAVE_CALL_MARKER) {
                continue;
            }
            if line.contains(IMAGES_PREFIX) {
                new_paths_found += 1;
                continue;
            }
            if AUDITED_IMAGE_FILES.iter().any(|img| line.contains(img)) {
                old_paths_found.push(line.trim().to_string());
            } else if IMAGE_FILES.iter().any(|img| line.contains(img)) {
                unaudited_found.push(line.trim().to_string());
            }
        }
    }

    println!("✅ Found {} correct image paths", new_paths_found);
    println!("❌ Found {} old image paths", old_paths_found.len());

    if !old_paths_found.is_empty() {
        println!("Old paths still found:");
        for path in &old_paths_found {
            println!("  - {}", path);
        }
    }

    // The gate only audits two of the five figures; make the gap visible
    // instead of silently passing the rest.
    if !unaudited_found.is_empty() {
        warn!(
            count = unaudited_found.len(),
            "unprefixed save calls outside the audited filename set"
        );
        println!(
            "⚠️  {} unprefixed save call(s) reference figures outside the audited set:",
            unaudited_found.len()
        );
        for path in &unaudited_found {
            println!("  - {}", path);
        }
    }

    Ok(old_paths_found.is_empty())
}

/// Check 2: the dataset file and its directory exist relative to the
/// notebook's own directory.
pub fn check_data_paths(notebook_path: &Path) -> Result<bool> {
    println!("\n🧪 Testing data paths...");

    let notebook_dir = notebook_path
        .parent()
        .context("Notebook path has no parent directory")?;

    let input_path = notebook_dir.join(DATA_FILE_FROM_NOTEBOOK);
    let input_exists = input_path.exists();
    println!(
        "{} Input data: {} {}",
        if input_exists { "✅" } else { "❌" },
        input_path.display(),
        if input_exists { "exists" } else { "NOT FOUND" }
    );

    let output_dir = notebook_dir.join(DATA_DIR_FROM_NOTEBOOK);
    let output_dir_exists = output_dir.exists();
    println!(
        "{} Output directory: {} {}",
        if output_dir_exists { "✅" } else { "❌" },
        output_dir.display(),
        if output_dir_exists { "exists" } else { "NOT FOUND" }
    );

    Ok(input_exists && output_dir_exists)
}

/// Check 3: the images directory exists relative to the notebook's own
/// directory. Lists up to 3 example PNG names plus a remainder count,
/// informational only.
pub fn check_image_paths(notebook_path: &Path) -> Result<bool> {
    println!("\n🧪 Testing image paths...");

    let notebook_dir = notebook_path
        .parent()
        .context("Notebook path has no parent directory")?;

    let images_dir = notebook_dir.join(IMAGES_DIR_FROM_NOTEBOOK);
    let images_exists = images_dir.exists();
    println!(
        "{} Images directory: {} {}",
        if images_exists { "✅" } else { "❌" },
        images_dir.display(),
        if images_exists { "exists" } else { "NOT FOUND" }
    );

    if images_exists {
        let mut png_files: Vec<String> = fs::read_dir(&images_dir)
            .with_context(|| format!("Failed to list {}", images_dir.display()))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
            })
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        png_files.sort();

        println!("✅ Found {} PNG files in images directory", png_files.len());
        for name in png_files.iter().take(3) {
            println!("  - {}", name);
        }
        if png_files.len() > 3 {
            println!("  ... and {} more", png_files.len() - 3);
        }
    }

    Ok(images_exists)
}

/// Check 4: every expected path in the folder-structure table exists.
/// All entries are probed and reported; no short-circuit on the first miss.
pub fn check_folder_structure(root: &Path) -> Result<bool> {
    println!("\n🧪 Testing folder structure...");

    let mut all_exist = true;
    for (rel_path, description) in EXPECTED_STRUCTURE {
        let path = root.join(rel_path);
        let exists = path.exists();
        println!(
            "{} {}: {} {}",
            if exists { "✅" } else { "❌" },
            description,
            rel_path,
            if exists { "exists" } else { "NOT FOUND" }
        );
        if !exists {
            all_exist = false;
        }
    }

    Ok(all_exist)
}

/// Run all four checks and print the pass/fail report.
///
/// A check that returns an error is recorded as failed with a printed
/// message; the remaining checks still run.
pub fn run_verify(root: &Path, notebook_path: &Path) -> VerifyReport {
    let checks: Vec<(&'static str, Box<dyn Fn() -> Result<bool>>)> = vec![
        (
            "Notebook paths",
            Box::new(|| check_notebook_references(notebook_path)),
        ),
        ("Data paths", Box::new(|| check_data_paths(notebook_path))),
        ("Image paths", Box::new(|| check_image_paths(notebook_path))),
        (
            "Folder structure",
            Box::new(|| check_folder_structure(root)),
        ),
    ];

    let mut report = VerifyReport { checks: Vec::new() };
    for (name, check) in checks {
        let passed = match check() {
            Ok(passed) => passed,
            Err(e) => {
                println!("❌ {} check failed to run: {:#}", name, e);
                false
            }
        };
        debug!(check = name, passed, "check finished");
        report.checks.push(CheckOutcome { name, passed });
    }

    print_report(&report);
    report
}

fn print_report(report: &VerifyReport) {
    println!("\n==================================================");
    println!("📋 Verification results");
    println!("==================================================");
    for check in &report.checks {
        println!(
            "  {}  {}",
            if check.passed { "✅ PASS" } else { "❌ FAIL" },
            check.name
        );
    }
    println!("==================================================");
    if report.is_ok() {
        println!("🎉 All checks passed!");
    } else {
        println!("⚠️  Some checks failed - see details above.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_ok_requires_every_check() {
        let all_pass = VerifyReport {
            checks: vec![
                CheckOutcome { name: "a", passed: true },
                CheckOutcome { name: "b", passed: true },
            ],
        };
        assert!(all_pass.is_ok());

        let one_fail = VerifyReport {
            checks: vec![
                CheckOutcome { name: "a", passed: true },
                CheckOutcome { name: "b", passed: false },
            ],
        };
        assert!(!one_fail.is_ok());
    }

    #[test]
    fn test_empty_report_is_ok() {
        let report = VerifyReport { checks: Vec::new() };
        assert!(report.is_ok());
    }
}
