use crate::cli::{Cli, Commands, RankDirArg};
use crate::errors::GedTreeError;
use crate::mark::{mark, Policy, Root};
use crate::parser::parse_str;
use crate::tree::Store;
use crate::utils::{config, table};
use crate::visualization::{self, DotGenerator, DotOptions, RankDir};
use clap::CommandFactory;
use clap_complete::generate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Run the CLI logic in-process. Returns an exit code (0 = success).
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    let quiet = cli.quiet;
    let result = match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = env!("CARGO_PKG_NAME");
            generate(shell, &mut cmd, bin_name, &mut io::stdout());
            Ok(())
        }
        Commands::Convert {
            file,
            root,
            children,
            blood,
            initials: _,
            out,
            json,
            config,
            rankdir,
            fontsize,
        } => convert(
            &ConvertRequest { file, root, children, blood, out, json, config, rankdir, fontsize },
            quiet,
        ),
        Commands::Stats { file } => stats(file.as_deref(), quiet),
    };
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

struct ConvertRequest {
    file: Option<PathBuf>,
    root: Option<String>,
    children: bool,
    blood: bool,
    out: Option<PathBuf>,
    json: Option<PathBuf>,
    config: Option<PathBuf>,
    rankdir: Option<RankDirArg>,
    fontsize: Option<u32>,
}

fn convert(req: &ConvertRequest, quiet: bool) -> Result<(), GedTreeError> {
    // Configuration problems surface before any input is read
    let root = Root::parse(req.root.as_deref())?;
    let policy = Policy::from_flags(req.blood, req.children)?;
    let file = req.file.as_deref().ok_or(GedTreeError::MissingInput)?;

    let store = read_store(file)?;
    if !quiet {
        eprintln!(
            "Decoded {} persons and {} families from {}",
            store.person_count(),
            store.family_count(),
            file.display()
        );
    }

    let marks = mark(&store, &root, policy)?;
    if !quiet {
        eprintln!(
            "Marked {} persons and {} families",
            marks.person_count(),
            marks.family_count()
        );
    }

    let opts = dot_options(req, file);
    let dot = DotGenerator::new().generate(&store, &marks, &root, &opts);

    if let Some(json_path) = req.json.as_deref() {
        let graph = visualization::export(&store, &marks);
        visualization::save_json(&graph, json_path)?;
    }

    match req.out.as_deref() {
        Some(path) => fs::write(path, dot)?,
        None => print!("{dot}"),
    }
    Ok(())
}

/// Defaults, overridden by the config file, overridden by CLI flags.
fn dot_options(req: &ConvertRequest, input: &Path) -> DotOptions {
    let mut opts = DotOptions::default();
    let cfg = match req.config.as_deref() {
        Some(path) => config::load_config_at(path),
        None => config::load_config_near(input),
    };
    if let Some(dot) = cfg.and_then(|c| c.dot) {
        if let Some(v) = dot.rankdir {
            opts.rankdir = if v == "LR" { RankDir::LR } else { RankDir::TB };
        }
        if let Some(v) = dot.fontsize {
            opts.fontsize = v;
        }
        if let Some(v) = dot.highlight {
            opts.highlight = v;
        }
    }
    if let Some(v) = req.rankdir {
        opts.rankdir = match v {
            RankDirArg::TB => RankDir::TB,
            RankDirArg::LR => RankDir::LR,
        };
    }
    if let Some(v) = req.fontsize {
        opts.fontsize = v;
    }
    opts
}

fn stats(file: Option<&Path>, quiet: bool) -> Result<(), GedTreeError> {
    let file = file.ok_or(GedTreeError::MissingInput)?;
    let store = read_store(file)?;
    if !quiet {
        eprintln!("Decoded {}", file.display());
    }
    let parent_links: usize = store.families().map(|f| f.parents.len()).sum();
    let child_links: usize = store.families().map(|f| f.children.len()).sum();
    let rows = vec![
        vec!["Persons".to_string(), store.person_count().to_string()],
        vec!["Families".to_string(), store.family_count().to_string()],
        vec!["Parent links".to_string(), parent_links.to_string()],
        vec!["Child links".to_string(), child_links.to_string()],
    ];
    println!("{}", table::render(&["Record", "Count"], &rows));
    Ok(())
}

fn read_store(path: &Path) -> Result<Store, GedTreeError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_str(&content))
}
