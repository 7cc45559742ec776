use crate::person::Person;

/// Ordered, in-memory store backing the visible table.
///
/// Insertion order is preserved. The store itself enforces no uniqueness
/// invariant; the add flow checks [`Roster::contains`] before appending.
/// All lookups use `Person` equality, i.e. `(name, surname)` only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entries: Vec<Person>,
}

impl Roster {
    /// Create an empty roster. Contents live only for the process lifetime.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.entries.iter()
    }

    /// Whether an equal entry (same name and surname, any age) exists.
    pub fn contains(&self, candidate: &Person) -> bool {
        self.entries.contains(candidate)
    }

    /// Append to the end. No validation here; that is the caller's job.
    pub fn append(&mut self, person: Person) {
        tracing::debug!(person = %person, "roster append");
        self.entries.push(person);
    }

    /// Overwrite the first slot equal to `original` with `replacement`.
    ///
    /// Returns `false` when `original` is no longer present, in which case
    /// the roster is left untouched. Callers treat that as a no-op.
    pub fn replace(&mut self, original: &Person, replacement: Person) -> bool {
        match self.entries.iter().position(|entry| entry == original) {
            Some(index) => {
                tracing::debug!(original = %original, replacement = %replacement, "roster replace");
                self.entries[index] = replacement;
                true
            }
            None => {
                tracing::warn!(original = %original, "replace target no longer in roster");
                false
            }
        }
    }

    /// Remove the first entry equal to `person`. Returns `false` if absent.
    pub fn remove(&mut self, person: &Person) -> bool {
        match self.entries.iter().position(|entry| entry == person) {
            Some(index) => {
                tracing::debug!(person = %person, "roster remove");
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }
}
