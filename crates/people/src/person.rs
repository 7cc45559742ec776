use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use roster_core::ValueObject;

/// A roster entry: name, surname, and age.
///
/// `Person` is a value object identified by `(name, surname)` alone. Age is
/// carried data and deliberately excluded from `PartialEq` and `Hash`:
/// duplicate detection treats two entries with the same name and surname as
/// the same person regardless of age.
///
/// Construction does not validate; the editor flow is responsible for
/// rejecting empty fields before a `Person` is built.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    surname: String,
    age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.surname == other.surname
    }
}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.surname.hash(state);
    }
}

impl ValueObject for Person {}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} ({})", self.name, self.surname, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(person: &Person) -> u64 {
        let mut hasher = DefaultHasher::new();
        person.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_age() {
        let a = Person::new("Ana", "Lopez", 30);
        let b = Person::new("Ana", "Lopez", 45);
        assert_eq!(a, b);
    }

    #[test]
    fn equality_requires_exact_name_and_surname() {
        let a = Person::new("Ana", "Lopez", 30);
        assert_ne!(a, Person::new("ana", "Lopez", 30));
        assert_ne!(a, Person::new("Ana", "Perez", 30));
    }

    #[test]
    fn display_shows_all_three_fields() {
        let p = Person::new("Ana", "Lopez", 30);
        assert_eq!(p.to_string(), "Ana Lopez (30)");
    }

    proptest! {
        #[test]
        fn eq_iff_name_and_surname_match(
            name_a in "\\PC{1,12}", surname_a in "\\PC{1,12}", age_a in 0u32..150,
            name_b in "\\PC{1,12}", surname_b in "\\PC{1,12}", age_b in 0u32..150,
        ) {
            let a = Person::new(name_a.clone(), surname_a.clone(), age_a);
            let b = Person::new(name_b.clone(), surname_b.clone(), age_b);
            prop_assert_eq!(a == b, name_a == name_b && surname_a == surname_b);
        }

        #[test]
        fn hash_is_consistent_with_eq(
            name in "\\PC{1,12}", surname in "\\PC{1,12}",
            age_a in 0u32..150, age_b in 0u32..150,
        ) {
            let a = Person::new(name.clone(), surname.clone(), age_a);
            let b = Person::new(name, surname, age_b);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }
}
