use anyhow::{Context as _, Result};
use axdoc::catalog::{Category, CategorySet, FileSystemProvider, all_categories};
use axdoc::config::DocConfig;
use axdoc::error::AxDocError;
use axdoc::extract::{Orchestrator, Tally};
use axdoc::logging::Verbosity;
use axdoc::report::OutputSink;
use clap::Parser;
use colored::Colorize as _;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "axdoc",
    version,
    about = "Generate markdown documentation from a metadata catalog"
)]
pub struct Cli {
    /// Metadata root (the packages directory)
    #[arg(short, long, env = "AXDOC_ROOT")]
    pub root: Option<PathBuf>,

    /// Output document, or a directory to write it into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Categories to document, comma separated
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub categories: Vec<Category>,

    /// Document every category
    #[arg(long, conflicts_with = "categories")]
    pub all: bool,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List discovered models and exit
    #[arg(long)]
    pub list_models: bool,

    /// Show per-model and per-object detail
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }
}

/// Resolve configuration and selection, then write the document.
///
/// # Errors
///
/// Fails on unreadable config, a missing or empty metadata root, or when the
/// output document cannot be written.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = DocConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(root) = cli.root {
        config.metadata_root = Some(root);
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    print_banner();

    let root = config.require_root()?.to_path_buf();
    let provider = FileSystemProvider::open(&root)
        .with_context(|| format!("Failed to scan metadata root {}", root.display()))?;

    if cli.list_models {
        for partition in provider.partitions() {
            println!("{} ({})", partition.name, partition.package.dimmed());
        }
        return Ok(());
    }

    if provider.partitions().is_empty() {
        anyhow::bail!("No models found under {}", root.display());
    }
    println!(
        "{}",
        format!("Found {} models", provider.partitions().len()).green()
    );

    let enabled = if cli.all {
        all_categories()
    } else if !cli.categories.is_empty() {
        cli.categories.into_iter().collect()
    } else if !config.categories.is_empty() {
        config.categories.iter().copied().collect()
    } else {
        let stdin = std::io::stdin();
        prompt_selection(&mut stdin.lock(), &mut std::io::stdout())?
    };

    let output = config.output_file();
    let sink = OutputSink::create(&output)?;
    println!(
        "Documenting {} categories into {}",
        enabled.len(),
        output.display()
    );

    let started = Instant::now();
    let orchestrator =
        Orchestrator::new(&provider, provider.partitions(), &config.extraction);
    let report = orchestrator
        .run(&enabled, sink)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("\n{}", summary_table(&report.tally));
    println!(
        "{}",
        format!(
            "Done in {:.1}s, written to {}",
            started.elapsed().as_secs_f64(),
            output.display()
        )
        .bold()
        .green()
    );
    Ok(())
}

fn print_banner() {
    println!("{}", "axdoc - metadata documentation generator".bold().green());
    println!("{}", "=".repeat(42).dimmed());
}

/// Show the category menu and read a selection, asking again on bad input.
///
/// # Errors
///
/// Fails when input ends before a valid selection or the console cannot be
/// written.
pub fn prompt_selection<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<CategorySet> {
    loop {
        writeln!(out, "\nSelect categories to document:")?;
        for category in Category::ALL {
            writeln!(out, "  {:>2}. {}", category.menu_number(), category.title())?;
        }
        writeln!(out, "   A. All categories")?;
        write!(out, "Choice (e.g. 1,3,5-7 or A): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("No category selection given");
        }

        match parse_selection(&line) {
            Ok(selection) => return Ok(selection),
            Err(e) => writeln!(out, "{}", e.to_string().red())?,
        }
    }
}

/// Parse a menu reply: numbers, ranges (`3-5`), category keys, or `A`/`all`.
///
/// # Errors
///
/// Returns [`AxDocError::Selection`] for empty input, unknown keys, or
/// numbers outside the menu.
pub fn parse_selection(input: &str) -> axdoc::error::Result<CategorySet> {
    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(AxDocError::Selection("nothing selected".to_owned()));
    }

    let mut selection = CategorySet::new();
    for token in tokens {
        if token.eq_ignore_ascii_case("a") || token.eq_ignore_ascii_case("all") {
            return Ok(all_categories());
        }

        if let Some((start, end)) = token.split_once('-')
            && let (Ok(start), Ok(end)) = (start.parse::<usize>(), end.parse::<usize>())
        {
            if start > end {
                return Err(AxDocError::Selection(format!("empty range '{token}'")));
            }
            for n in start..=end {
                selection.insert(menu_entry(n)?);
            }
        } else if let Ok(n) = token.parse::<usize>() {
            selection.insert(menu_entry(n)?);
        } else {
            selection.insert(token.parse::<Category>()?);
        }
    }
    Ok(selection)
}

fn menu_entry(n: usize) -> axdoc::error::Result<Category> {
    Category::from_menu_number(n).ok_or_else(|| {
        AxDocError::Selection(format!(
            "{n} is not a menu entry (1-{})",
            Category::ALL.len()
        ))
    })
}

/// Final per-category counts, largest first, with a total row.
pub fn summary_table(tally: &Tally) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Documented", "Skipped"]);

    for (label, count) in tally.sorted() {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count.documented),
            Cell::new(count.skipped),
        ]);
    }

    let total = tally.total();
    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(total.documented),
        Cell::new(total.skipped),
    ]);
    table
}
