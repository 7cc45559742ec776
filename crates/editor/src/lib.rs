//! Editor dialog module (the modal add/edit form).
//!
//! This crate contains the confirm contract of the person editor: raw field
//! input, accumulate-all validation, the add-mode duplicate check, and the
//! roster mutation applied on a clean submission. Presentation (prompting,
//! alert rendering, the modal loop) lives with the application shell.

pub mod dialog;
pub mod validate;

pub use dialog::{EditorDialog, EditorError, EditorMode, FieldInput};
pub use validate::Violation;
