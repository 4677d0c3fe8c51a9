pub mod builder;

use serde::Serialize;
use std::collections::HashMap;

/// An individual record. Immutable once its record completes; pruning state
/// lives in [`crate::mark::MarkSet`], not on the entity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Person {
    pub id: String,
    /// Raw name as decoded from the input, surname still wrapped in `/` markers.
    pub name: String,
    /// Family in which this person is a child (`FAMC`).
    pub family_as_child: Option<String>,
    /// Family in which this person is a parent or spouse (`FAMS`).
    pub family_as_parent: Option<String>,
}

/// A family unit linking parents to children.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Family {
    pub id: String,
    /// Parent/spouse ids in encounter order. Missing slots are omitted.
    pub parents: Vec<String>,
    /// Child ids in encounter order.
    pub children: Vec<String>,
}

/// Owning store for all decoded records. Iteration order is input encounter
/// order, so downstream emission is deterministic for a given input.
#[derive(Debug, Default)]
pub struct Store {
    persons: Vec<Person>,
    families: Vec<Family>,
    person_index: HashMap<String, usize>,
    family_index: HashMap<String, usize>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a completed person. A re-declared id overwrites the earlier
    /// record in place, keeping the first occurrence's position.
    pub fn insert_person(&mut self, person: Person) {
        match self.person_index.get(&person.id) {
            Some(&slot) => self.persons[slot] = person,
            None => {
                self.person_index.insert(person.id.clone(), self.persons.len());
                self.persons.push(person);
            }
        }
    }

    pub fn insert_family(&mut self, family: Family) {
        match self.family_index.get(&family.id) {
            Some(&slot) => self.families[slot] = family,
            None => {
                self.family_index.insert(family.id.clone(), self.families.len());
                self.families.push(family);
            }
        }
    }

    #[must_use]
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.person_index.get(id).map(|&slot| &self.persons[slot])
    }

    #[must_use]
    pub fn family(&self, id: &str) -> Option<&Family> {
        self.family_index.get(id).map(|&slot| &self.families[slot])
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.iter()
    }

    #[must_use]
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_inserted_records() {
        let mut store = Store::new();
        store.insert_person(Person { id: "I1".into(), name: "Ann".into(), ..Person::default() });
        store.insert_family(Family { id: "F1".into(), parents: vec!["I1".into()], children: vec![] });
        assert_eq!(store.person("I1").unwrap().name, "Ann");
        assert_eq!(store.family("F1").unwrap().parents, vec!["I1".to_string()]);
        assert!(store.person("I2").is_none());
        assert!(store.family("F9").is_none());
    }

    #[test]
    fn redeclared_id_overwrites_in_place() {
        let mut store = Store::new();
        store.insert_person(Person { id: "I1".into(), name: "First".into(), ..Person::default() });
        store.insert_person(Person { id: "I2".into(), name: "Other".into(), ..Person::default() });
        store.insert_person(Person { id: "I1".into(), name: "Second".into(), ..Person::default() });
        assert_eq!(store.person_count(), 2);
        assert_eq!(store.person("I1").unwrap().name, "Second");
        // First occurrence keeps its slot in iteration order
        let ids: Vec<&str> = store.persons().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["I1", "I2"]);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut store = Store::new();
        for id in ["F3", "F1", "F2"] {
            store.insert_family(Family { id: id.into(), ..Family::default() });
        }
        let ids: Vec<&str> = store.families().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["F3", "F1", "F2"]);
    }
}
