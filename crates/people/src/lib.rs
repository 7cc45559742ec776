//! People domain module (roster entries and the roster store).
//!
//! This crate contains the `Person` value object and the ordered, in-memory
//! `Roster` backing the table view, implemented purely as deterministic
//! domain logic (no IO, no presentation, no storage).

pub mod person;
pub mod store;

pub use person::Person;
pub use store::Roster;
