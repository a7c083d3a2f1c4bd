//! nbfix library
//!
//! Path maintenance for the Code_Labelling notebook after the folder
//! reorganization: two literal-substring fixers over the notebook's code
//! cells and a verifier that checks the patched references and the expected
//! on-disk layout.

pub mod cli;
pub mod error;
pub mod fixer;
pub mod layout;
pub mod notebook;
pub mod verify;

// Re-export main types for convenience
pub use error::{NbFixError, Result};
pub use fixer::{apply_data_fix, apply_image_fix, run_fix_data, run_fix_images, Replacement};
pub use notebook::{Cell, Notebook};
pub use verify::{run_verify, CheckOutcome, VerifyReport};
