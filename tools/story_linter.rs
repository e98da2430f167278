/// Story Linter — checks story templates against the word lists.
///
/// Usage: story_linter <story_dir> [--config <file.ron>]

use madlibs::config::Config;
use madlibs::core::lint::{lint_pools, lint_template, LintIssue, Severity};
use madlibs::core::pool::PoolSet;
use madlibs::core::source::{DirSource, TextSource};
use madlibs::core::template::Template;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: story_linter <story_dir> [--config <file.ron>]");
        process::exit(0);
    }

    let story_dir = &args[1];
    let mut config = Config::default();

    let mut i = 2;
    while i < args.len() {
        if args[i] == "--config" && i + 1 < args.len() {
            i += 1;
            config = Config::load(Path::new(&args[i])).unwrap_or_else(|e| {
                eprintln!("ERROR: Failed to read config: {}", e);
                process::exit(1);
            });
        }
        i += 1;
    }

    let dir = Path::new(story_dir);
    if !dir.is_dir() {
        eprintln!("ERROR: Path '{}' is not a directory", story_dir);
        process::exit(1);
    }

    let source = DirSource::new(dir);
    let pools = PoolSet::load(&source, config.pool_files.as_slice()).unwrap_or_else(|e| {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    });
    println!("Loaded {} word lists", pools.len());

    let mut issues: Vec<LintIssue> = lint_pools(&pools);
    let stories = story_names(source.root());
    for name in &stories {
        match source.read_text(name) {
            Ok(text) => {
                println!("  Checked: {}", name);
                issues.extend(lint_template(name, &Template::parse(&text), &pools));
            }
            Err(e) => eprintln!("  ERROR loading {}: {}", name, e),
        }
    }

    println!("\n=== Story Lint Report ===\n");

    if issues.is_empty() {
        println!("All checks passed!");
    }
    for issue in &issues {
        println!("{}", issue);
    }

    let errors = issues
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .count();
    println!(
        "\nSummary: {} stories, {} errors, {} warnings",
        stories.len(),
        errors,
        issues.len() - errors
    );

    if errors > 0 {
        process::exit(1);
    }
}

/// `story*.txt` files in `dir`, sorted by name.
fn story_names(dir: &Path) -> Vec<String> {
    let mut names = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with("story") && name.ends_with(".txt") && entry.path().is_file() {
                names.push(name);
            }
        }
    }
    names.sort();
    names
}
