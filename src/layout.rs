//! Shared path tables for the Code_Labelling reorganization.
//!
//! One source of truth for everything the fixers rewrite and the verifier
//! probes. The fixers consume the prefix/filename tables; the verifier
//! consumes those plus the expected folder structure.

/// The notebook every command operates on, relative to the repository root.
pub const NOTEBOOK_PATH: &str = "Code_Labelling/notebooks/code_labeling_dataset_enhanced.ipynb";

/// Dataset path prefix as it appears in code cells before the move.
/// The leading quote is part of the match so bare prose mentions are skipped.
pub const OLD_DATA_PREFIX: &str = "'../data/raw/";

/// Dataset path prefix after the move (notebooks went one level deeper).
pub const NEW_DATA_PREFIX: &str = "'../../data/raw/";

/// Relative subdirectory prepended to image filenames in save calls.
pub const IMAGES_PREFIX: &str = "../images/";

/// Image files whose save paths need the `../images/` prefix.
pub const IMAGE_FILES: &[&str] = &[
    "clustering_metrics.png",
    "cluster_wordclouds.png",
    "cluster_visualization_2d.png",
    "cluster_distribution.png",
    "final_emotion_distribution.png",
];

/// Image files that gate the stale-reference audit. The remaining entries of
/// [`IMAGE_FILES`] are reported as warnings only, not failures; see the
/// audit-coverage note in DESIGN.md.
pub const AUDITED_IMAGE_FILES: &[&str] = &["clustering_metrics.png", "cluster_distribution.png"];

/// Marker identifying an image save call in a source line.
pub const SAVE_CALL_MARKER: &str = "savefig";

/// Dataset file location, relative to the notebook's own directory.
pub const DATA_FILE_FROM_NOTEBOOK: &str = "../../data/raw/dataset_clean.csv";

/// Raw-data directory, relative to the notebook's own directory.
pub const DATA_DIR_FROM_NOTEBOOK: &str = "../../data/raw";

/// Images directory, relative to the notebook's own directory.
pub const IMAGES_DIR_FROM_NOTEBOOK: &str = "../images";

/// Expected folder structure relative to the repository root: (path, description).
pub const EXPECTED_STRUCTURE: &[(&str, &str)] = &[
    ("Code_Labelling/README.md", "Main README"),
    ("Code_Labelling/docs/", "Documentation folder"),
    ("Code_Labelling/images/", "Images folder"),
    ("Code_Labelling/notebooks/", "Notebooks folder"),
    (
        "Code_Labelling/notebooks/code_labeling_dataset_enhanced.ipynb",
        "Main notebook",
    ),
];
