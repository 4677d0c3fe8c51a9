//! Relevance marking: decides which persons and families survive pruning.
//!
//! The traversal is an explicit LIFO worklist with the [`MarkSet`] as the
//! visited set. Sub-tasks are pushed in reverse so pops replay a depth-first
//! recursion's order exactly; the final set is order-sensitive because the
//! already-marked guard fires at visit time.

use crate::errors::GedTreeError;
use crate::tree::Store;
use regex::Regex;
use std::collections::HashSet;

/// What relevance is computed from. Parsed from the `--root` option; absent
/// means no pruning at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root {
    None,
    Person(String),
    Family(String),
}

impl Root {
    /// Parse a root spec of the form `F<digits>` or `I<digits>`,
    /// case-insensitive, normalized to upper case.
    ///
    /// # Errors
    /// `Config` when the spec does not match the expected pattern.
    pub fn parse(spec: Option<&str>) -> Result<Self, GedTreeError> {
        let Some(spec) = spec else { return Ok(Root::None) };
        let pattern = Regex::new(r"^[FIfi][0-9]+$").unwrap();
        if !pattern.is_match(spec) {
            return Err(GedTreeError::Config(format!(
                "root '{spec}' does not match F<digits> or I<digits>"
            )));
        }
        let id = spec.to_ascii_uppercase();
        if id.starts_with('F') {
            Ok(Root::Family(id))
        } else {
            Ok(Root::Person(id))
        }
    }
}

/// Sibling inclusion policy at each ancestor family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// No policy flag: siblings are not pulled in at all.
    #[default]
    Default,
    /// `--blood`: siblings and their descendant cones.
    Blood,
    /// `--children`: every child of each ancestor family, with descendants.
    SpousesChildren,
}

impl Policy {
    /// Build the policy from the two mutually exclusive CLI flags. The CLI
    /// already declares the conflict; this re-checks it for library callers.
    ///
    /// # Errors
    /// `Config` when both flags are set.
    pub fn from_flags(blood: bool, children: bool) -> Result<Self, GedTreeError> {
        match (blood, children) {
            (true, true) => Err(GedTreeError::Config(
                "--blood conflicts with --children".into(),
            )),
            (true, false) => Ok(Policy::Blood),
            (false, true) => Ok(Policy::SpousesChildren),
            (false, false) => Ok(Policy::Default),
        }
    }

    /// Both active policies walk the descendant cone of every child of an
    /// ancestor family; the already-marked guard makes "all children" and
    /// "siblings only" traverse identically. Note that the descendant walk
    /// does not exclude spouses met on the way down, so blood-only still
    /// admits them. That asymmetry is preserved, not fixed here.
    fn pulls_in_siblings(self) -> bool {
        !matches!(self, Policy::Default)
    }
}

/// Visited/retained state for a marking run. Entities stay immutable; marking
/// is set insertion, so re-marking is naturally a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkSet {
    persons: HashSet<String>,
    families: HashSet<String>,
}

impl MarkSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the person was already marked (the guard).
    pub fn mark_person(&mut self, id: &str) -> bool {
        self.persons.insert(id.to_string())
    }

    pub fn mark_family(&mut self, id: &str) -> bool {
        self.families.insert(id.to_string())
    }

    pub fn unmark_person(&mut self, id: &str) {
        self.persons.remove(id);
    }

    #[must_use]
    pub fn person_marked(&self, id: &str) -> bool {
        self.persons.contains(id)
    }

    #[must_use]
    pub fn family_marked(&self, id: &str) -> bool {
        self.families.contains(id)
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

#[derive(Debug)]
enum Task {
    Ancestors(String),
    Descendants(String),
}

/// Compute the mark set for `root` under `policy`.
///
/// No root marks everything. A family root marks the family, the ancestors of
/// its parents and the descendants of its children. A person root runs the
/// ancestor pass, unmarks the root, then runs the descendant pass — without
/// the unmark, the guard would stop the descendant pass at the root itself
/// and none of its descendants would be visited. Two-phase on purpose.
///
/// # Errors
/// `UnresolvedRoot` when the root id has no matching entity in the store.
pub fn mark(store: &Store, root: &Root, policy: Policy) -> Result<MarkSet, GedTreeError> {
    let mut marks = MarkSet::new();
    match root {
        Root::None => {
            for p in store.persons() {
                marks.mark_person(&p.id);
            }
            for f in store.families() {
                marks.mark_family(&f.id);
            }
        }
        Root::Family(id) => {
            let family = store
                .family(id)
                .ok_or_else(|| GedTreeError::UnresolvedRoot { id: id.clone() })?;
            marks.mark_family(id);
            let mut stack: Vec<Task> = Vec::new();
            // Reverse pushes: parents' ancestor walks run first, in order
            for child in family.children.iter().rev() {
                stack.push(Task::Descendants(child.clone()));
            }
            for parent in family.parents.iter().rev() {
                stack.push(Task::Ancestors(parent.clone()));
            }
            drain(store, policy, &mut marks, stack);
        }
        Root::Person(id) => {
            if store.person(id).is_none() {
                return Err(GedTreeError::UnresolvedRoot { id: id.clone() });
            }
            drain(store, policy, &mut marks, vec![Task::Ancestors(id.clone())]);
            marks.unmark_person(id);
            drain(store, policy, &mut marks, vec![Task::Descendants(id.clone())]);
        }
    }
    Ok(marks)
}

fn drain(store: &Store, policy: Policy, marks: &mut MarkSet, mut stack: Vec<Task>) {
    while let Some(task) = stack.pop() {
        match task {
            Task::Ancestors(id) => {
                // Dangling id: no link, nothing to do
                let Some(person) = store.person(&id) else { continue };
                if !marks.mark_person(&id) {
                    continue;
                }
                let Some(fid) = person.family_as_child.as_deref() else { continue };
                let Some(family) = store.family(fid) else { continue };
                marks.mark_family(fid);
                if policy.pulls_in_siblings() {
                    for child in family.children.iter().rev() {
                        stack.push(Task::Descendants(child.clone()));
                    }
                }
                for parent in family.parents.iter().rev() {
                    stack.push(Task::Ancestors(parent.clone()));
                }
            }
            Task::Descendants(id) => {
                let Some(person) = store.person(&id) else { continue };
                if !marks.mark_person(&id) {
                    continue;
                }
                // Spouses in this family are not marked; the emitter's
                // non-blood spouse rule makes them visible.
                let Some(fid) = person.family_as_parent.as_deref() else { continue };
                let Some(family) = store.family(fid) else { continue };
                marks.mark_family(fid);
                for child in family.children.iter().rev() {
                    stack.push(Task::Descendants(child.clone()));
                }
            }
        }
    }
}
