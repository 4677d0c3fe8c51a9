//! Line-oriented GEDCOM scanner.
//!
//! Decodes the individual/family subset (`INDI`/`FAM` records with `NAME`,
//! `FAMC`, `FAMS`, `HUSB`, `WIFE`, `CHIL` fields) into [`FieldEvent`]s.
//! Everything else — unknown tags, levels deeper than 1, malformed lines —
//! is skipped without error.

use crate::tree::builder::{FieldEvent, StoreBuilder};
use crate::tree::Store;
use regex::Regex;

#[derive(Debug)]
pub struct RegexPatterns {
    pub record_header: Regex,
    pub level0: Regex,
    pub field: Regex,
}

impl RegexPatterns {
    #[must_use]
    pub fn compile() -> Self {
        // Conservative patterns; anything they reject is skipped, not an error
        let record_header =
            Regex::new(r"^0\s+@(?P<id>[^@]*)@\s+(?P<tag>INDI|FAM)\s*$").unwrap();
        let level0 = Regex::new(r"^0\s").unwrap();
        let field = Regex::new(
            r"^1\s+(?P<tag>NAME|FAMC|FAMS|HUSB|WIFE|CHIL)(?:\s+(?P<value>.*))?$",
        )
        .unwrap();
        Self { record_header, level0, field }
    }
}

impl Default for RegexPatterns {
    fn default() -> Self {
        Self::compile()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenRecord {
    None,
    Person,
    Family,
}

#[derive(Debug, Default)]
pub struct GedcomScanner {
    patterns: RegexPatterns,
}

impl GedcomScanner {
    #[must_use]
    pub fn new() -> Self {
        Self { patterns: RegexPatterns::compile() }
    }

    /// Scan a whole GEDCOM text into a field-event sequence. Any level-0 line
    /// (including `HEAD`/`TRLR`) and end of input close the open record.
    #[must_use]
    pub fn scan(&self, content: &str) -> Vec<FieldEvent> {
        let mut events = Vec::new();
        let mut open = OpenRecord::None;
        for raw in content.lines() {
            let line = raw.trim();
            if let Some(cap) = self.patterns.record_header.captures(line) {
                close(open, &mut events);
                let id = cap["id"].to_string();
                open = match &cap["tag"] {
                    "INDI" => {
                        events.push(FieldEvent::PersonStart(id));
                        OpenRecord::Person
                    }
                    _ => {
                        events.push(FieldEvent::FamilyStart(id));
                        OpenRecord::Family
                    }
                };
                continue;
            }
            if self.patterns.level0.is_match(line) {
                // HEAD, TRLR, NOTE records and the like
                close(open, &mut events);
                open = OpenRecord::None;
                continue;
            }
            let Some(cap) = self.patterns.field.captures(line) else { continue };
            let value = cap.name("value").map_or("", |m| m.as_str().trim());
            match (&cap["tag"], open) {
                ("NAME", OpenRecord::Person) => {
                    events.push(FieldEvent::PersonName(value.to_string()));
                }
                ("FAMC", OpenRecord::Person) => {
                    events.push(FieldEvent::PersonFamilyAsChild(strip_xref(value)));
                }
                ("FAMS", OpenRecord::Person) => {
                    events.push(FieldEvent::PersonFamilyAsParent(strip_xref(value)));
                }
                ("HUSB" | "WIFE", OpenRecord::Family) => {
                    events.push(FieldEvent::FamilyParent(strip_xref(value)));
                }
                ("CHIL", OpenRecord::Family) => {
                    events.push(FieldEvent::FamilyChild(strip_xref(value)));
                }
                // Field tag under the wrong (or no) record: skip
                _ => {}
            }
        }
        close(open, &mut events);
        events
    }
}

fn close(open: OpenRecord, events: &mut Vec<FieldEvent>) {
    match open {
        OpenRecord::None => {}
        OpenRecord::Person => events.push(FieldEvent::PersonEnd),
        OpenRecord::Family => events.push(FieldEvent::FamilyEnd),
    }
}

/// `@F1@` -> `F1`. Values without the xref wrapping pass through unchanged.
fn strip_xref(value: &str) -> String {
    value.trim().trim_matches('@').to_string()
}

/// Scan `content` and build the populated store in one step.
#[must_use]
pub fn parse_str(content: &str) -> Store {
    let scanner = GedcomScanner::new();
    let mut builder = StoreBuilder::new();
    for event in scanner.scan(content) {
        builder.on_event(event);
    }
    builder.finish()
}
