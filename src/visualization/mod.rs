//! DOT emission for the pruned graph, plus a JSON export of the same view.

use crate::errors::GedTreeError;
use crate::label::compact;
use crate::mark::{MarkSet, Root};
use crate::tree::Store;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDir {
    TB,
    LR,
}

impl RankDir {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RankDir::TB => "TB",
            RankDir::LR => "LR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DotOptions {
    pub rankdir: RankDir,
    /// Person label font size; family nodes keep the graph default.
    pub fontsize: u32,
    /// Fill color for the root family node.
    pub highlight: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self { rankdir: RankDir::TB, fontsize: 8, highlight: "#fff896".to_string() }
    }
}

#[derive(Debug, Default)]
pub struct DotGenerator;

impl DotGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Serialize the marked part of `store` as DOT. Single pass, no entity
    /// state is mutated; output order is store order throughout, so a given
    /// input always produces the same text.
    #[must_use]
    pub fn generate(
        &self,
        store: &Store,
        marks: &MarkSet,
        root: &Root,
        opts: &DotOptions,
    ) -> String {
        let mut s = String::new();
        s.push_str("digraph gedtree\n{\n");
        let _ = writeln!(s, "  rankdir={};", opts.rankdir.as_str());
        s.push_str("  node [shape=circle];\n");

        if let Root::Family(id) = root {
            let _ = writeln!(s, "  \"{id}\" [style=filled, fillcolor=\"{}\"];", opts.highlight);
        }

        // Family nodes: identifier only, circle shape from the default
        for family in store.families() {
            if marks.family_marked(&family.id) {
                let _ = writeln!(s, "  \"{}\";", family.id);
            }
        }

        // Person nodes with compacted labels
        for person in store.persons() {
            if marks.person_marked(&person.id) {
                self.write_person(&mut s, &person.id, &person.name, opts);
            }
        }

        // person -> family-as-child edges
        for person in store.persons() {
            if !marks.person_marked(&person.id) {
                continue;
            }
            let Some(fid) = person.family_as_child.as_deref() else { continue };
            // Dangling family reference: no link
            if store.family(fid).is_some() {
                let _ = writeln!(s, "  \"{}\" -> \"{fid}\";", person.id);
            }
        }

        // family -> parents edges, surfacing single unmarked spouses
        for family in store.families() {
            if !marks.family_marked(&family.id) {
                continue;
            }
            let parents: Vec<&str> = family
                .parents
                .iter()
                .map(String::as_str)
                .filter(|id| store.person(id).is_some())
                .collect();
            let unmarked: Vec<&str> =
                parents.iter().copied().filter(|id| !marks.person_marked(id)).collect();
            if let [spouse] = unmarked[..] {
                // The only place an unmarked entity becomes visible: a spouse
                // linked by marriage rather than blood still gets a node.
                if let Some(person) = store.person(spouse) {
                    self.write_person(&mut s, &person.id, &person.name, opts);
                }
            }
            match parents[..] {
                [] => {}
                [only] => {
                    let _ = writeln!(s, "  \"{}\" -> \"{only}\";", family.id);
                }
                _ => {
                    let targets = parents
                        .iter()
                        .map(|id| format!("\"{id}\""))
                        .collect::<Vec<_>>()
                        .join("; ");
                    let _ = writeln!(s, "  \"{}\" -> {{ {targets} }};", family.id);
                }
            }
        }

        s.push_str("}\n");
        s
    }

    fn write_person(&self, s: &mut String, id: &str, name: &str, opts: &DotOptions) {
        let _ = writeln!(
            s,
            "  \"{id}\" [shape=box, fontsize={}, label=\"{}\"];",
            opts.fontsize,
            escape_label(&compact(name))
        );
    }
}

fn escape_label(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Pruned-graph view for `--json` output.
#[derive(Debug, Serialize)]
pub struct GraphExport {
    pub persons: Vec<PersonExport>,
    pub families: Vec<FamilyExport>,
}

#[derive(Debug, Serialize)]
pub struct PersonExport {
    pub id: String,
    pub name: String,
    pub label: String,
    pub family_as_child: Option<String>,
    pub family_as_parent: Option<String>,
    pub marked: bool,
}

#[derive(Debug, Serialize)]
pub struct FamilyExport {
    pub id: String,
    pub parents: Vec<String>,
    pub children: Vec<String>,
    pub marked: bool,
}

#[must_use]
pub fn export(store: &Store, marks: &MarkSet) -> GraphExport {
    let persons = store
        .persons()
        .map(|p| PersonExport {
            id: p.id.clone(),
            name: p.name.clone(),
            label: compact(&p.name),
            family_as_child: p.family_as_child.clone(),
            family_as_parent: p.family_as_parent.clone(),
            marked: marks.person_marked(&p.id),
        })
        .collect();
    let families = store
        .families()
        .map(|f| FamilyExport {
            id: f.id.clone(),
            parents: f.parents.clone(),
            children: f.children.clone(),
            marked: marks.family_marked(&f.id),
        })
        .collect();
    GraphExport { persons, families }
}

/// Write the pruned-graph view as pretty JSON.
///
/// # Errors
/// `Io` when the file cannot be written; serialization of these plain
/// structs cannot fail.
pub fn save_json(graph: &GraphExport, path: &Path) -> Result<(), GedTreeError> {
    let data = serde_json::to_string_pretty(graph)
        .map_err(|e| GedTreeError::Io(std::io::Error::other(e)))?;
    std::fs::write(path, data)?;
    Ok(())
}
