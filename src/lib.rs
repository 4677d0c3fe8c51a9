//! gedtree — GEDCOM family trees to Graphviz DOT
//!
//! Decode the GEDCOM individual/family subset, prune the tree around an
//! optional root person or family, and emit DOT with compacted name labels.
//!
//! # Features
//! - Relevance marking: ancestors, descendants, sibling policies, cycle-safe
//! - Compact line-wrapped person labels (initials, unknown-name placeholder)
//! - Non-blood spouses stay visible without being traversed
//! - DOT to stdout or a file, plus an optional JSON export
//!
//! # Quickstart (Library)
//! ```
//! use gedtree::mark::{mark, Policy, Root};
//! use gedtree::parser::parse_str;
//! use gedtree::visualization::{DotGenerator, DotOptions};
//!
//! let store = parse_str("0 @I1@ INDI\n1 NAME John /Smith/\n");
//! let marks = mark(&store, &Root::None, Policy::Default).expect("mark");
//! let dot = DotGenerator::new().generate(&store, &marks, &Root::None, &DotOptions::default());
//! assert!(dot.contains("\"I1\""));
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! gedtree convert tree.ged --root I32 --blood --out tree.dot
//! gedtree stats tree.ged
//! ```
pub mod app;
pub mod cli;
pub mod errors;
pub mod label;
pub mod mark;
pub mod parser;
pub mod tree;
pub mod utils;
pub mod visualization;
