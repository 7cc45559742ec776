//! `roster-app`
//!
//! **Responsibility:** the main/list view and its presentation boundary.
//!
//! This crate provides:
//! - `MainView`: roster ownership, selection tracking, and the add/edit/
//!   delete command handlers, including the modal editor loop
//! - `Frontend`: the contract the presentation collaborator fulfils
//! - `TerminalFrontend`: a line-oriented implementation over any
//!   reader/writer pair
//!
//! The application is a **thin shell** around the people and editor crates.

pub mod frontend;
pub mod terminal;
pub mod view;

pub use frontend::{EditorSignal, Frontend, Notice, Severity};
pub use terminal::TerminalFrontend;
pub use view::MainView;
