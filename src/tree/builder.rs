use crate::tree::{Family, Person, Store};

/// Decoded field event produced by the record scanner, one per meaningful
/// input line plus explicit record boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    PersonStart(String),
    PersonName(String),
    PersonFamilyAsChild(String),
    PersonFamilyAsParent(String),
    PersonEnd,
    FamilyStart(String),
    FamilyParent(String),
    FamilyChild(String),
    FamilyEnd,
}

#[derive(Debug)]
enum State {
    Idle,
    BuildingPerson(Person),
    BuildingFamily(Family),
}

/// State machine that consumes [`FieldEvent`]s and populates a [`Store`].
///
/// A start event while a record is open completes the open record first, so
/// the builder never loses a record to a missing end event. Field events that
/// do not match the current state are dropped; empty ids are dropped where
/// they appear (an empty link is "no link", an empty header skips the record).
#[derive(Debug)]
pub struct StoreBuilder {
    state: State,
    store: Store,
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self { state: State::Idle, store: Store::new() }
    }

    pub fn on_event(&mut self, event: FieldEvent) {
        match event {
            FieldEvent::PersonStart(id) => {
                self.complete();
                if !id.is_empty() {
                    self.state = State::BuildingPerson(Person { id, ..Person::default() });
                }
            }
            FieldEvent::FamilyStart(id) => {
                self.complete();
                if !id.is_empty() {
                    self.state = State::BuildingFamily(Family { id, ..Family::default() });
                }
            }
            FieldEvent::PersonName(text) => {
                if let State::BuildingPerson(p) = &mut self.state {
                    p.name = text;
                }
            }
            FieldEvent::PersonFamilyAsChild(id) => {
                if let State::BuildingPerson(p) = &mut self.state {
                    if !id.is_empty() {
                        p.family_as_child = Some(id);
                    }
                }
            }
            FieldEvent::PersonFamilyAsParent(id) => {
                if let State::BuildingPerson(p) = &mut self.state {
                    if !id.is_empty() {
                        p.family_as_parent = Some(id);
                    }
                }
            }
            FieldEvent::FamilyParent(id) => {
                if let State::BuildingFamily(f) = &mut self.state {
                    if !id.is_empty() {
                        f.parents.push(id);
                    }
                }
            }
            FieldEvent::FamilyChild(id) => {
                if let State::BuildingFamily(f) = &mut self.state {
                    if !id.is_empty() {
                        f.children.push(id);
                    }
                }
            }
            FieldEvent::PersonEnd | FieldEvent::FamilyEnd => self.complete(),
        }
    }

    /// Complete any open record and return the populated store.
    #[must_use]
    pub fn finish(mut self) -> Store {
        self.complete();
        self.store
    }

    fn complete(&mut self) {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => {}
            State::BuildingPerson(p) => self.store.insert_person(p),
            State::BuildingFamily(f) => self.store.insert_family(f),
        }
    }
}
