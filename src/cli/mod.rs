use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "gedtree",
    version,
    about = "Prune a GEDCOM family tree and emit Graphviz DOT",
    long_about = "Decode the GEDCOM individual/family subset, prune the tree around an \
optional root person (I<digits>) or family (F<digits>), and write a Graphviz DOT \
description with compacted name labels. Without a root the whole tree is emitted."
)]
pub struct Cli {
    /// Suppress status messages on stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a GEDCOM file to DOT
    Convert {
        /// GEDCOM input file
        file: Option<PathBuf>,
        /// Root entity to prune around: F<digits> or I<digits>, case-insensitive
        #[arg(long)]
        root: Option<String>,
        /// Include every child of each ancestor family (spouses' children too)
        #[arg(long, conflicts_with = "blood")]
        children: bool,
        /// Include siblings of ancestors and their descendants
        #[arg(long)]
        blood: bool,
        /// Reserved; accepted and currently unused
        #[arg(long)]
        initials: bool,
        /// Write DOT here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Additionally write the pruned graph as pretty JSON
        #[arg(long)]
        json: Option<PathBuf>,
        /// TOML configuration file (default: gedtree.toml next to the input)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Rank direction of the emitted graph
        #[arg(long, value_enum)]
        rankdir: Option<RankDirArg>,
        /// Person label font size
        #[arg(long)]
        fontsize: Option<u32>,
    },
    /// Decode a GEDCOM file and print record/link counts
    Stats {
        /// GEDCOM input file
        file: Option<PathBuf>,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RankDirArg {
    #[value(name = "TB")]
    TB,
    #[value(name = "LR")]
    LR,
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn policy_flags_conflict() {
        let res =
            Cli::try_parse_from(["gedtree", "convert", "t.ged", "--children", "--blood"]);
        assert!(res.is_err());
    }

    #[test]
    fn convert_accepts_full_flag_set() {
        let cli = Cli::try_parse_from([
            "gedtree", "-q", "convert", "t.ged", "--root", "f1", "--blood", "--initials",
            "--out", "o.dot", "--json", "g.json", "--rankdir", "LR", "--fontsize", "10",
        ])
        .unwrap();
        assert!(cli.quiet);
        match cli.command {
            Commands::Convert { root, blood, children, rankdir, fontsize, .. } => {
                assert_eq!(root.as_deref(), Some("f1"));
                assert!(blood);
                assert!(!children);
                assert!(matches!(rankdir, Some(RankDirArg::LR)));
                assert_eq!(fontsize, Some(10));
            }
            _ => panic!("expected convert"),
        }
    }
}
