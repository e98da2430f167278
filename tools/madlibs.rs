/// Madlibs — interactive story generator.
///
/// Usage: madlibs [--dir <path>] [--seed <n>] [--config <file.ron>]
///
/// Asks for the story folder (unless --dir is given), loads the word lists,
/// then renders story<N>.txt for each number entered until 'q'.

use madlibs::config::Config;
use madlibs::core::render::RandomChooser;
use madlibs::session::Session;
use std::io;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(msg) => {
            eprintln!("Error: {}", msg);
            print_usage();
            process::exit(1);
        }
    };
    let CliArgs {
        dir,
        seed,
        config_path,
    } = cli;

    let mut config = match config_path {
        Some(ref path) => Config::load(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error reading config '{}': {}", path, e);
            process::exit(1);
        }),
        None => Config::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }

    let chooser = match config.seed {
        Some(seed) => RandomChooser::seeded(seed),
        None => RandomChooser::from_entropy(),
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), chooser, config);
    if let Some(dir) = dir {
        session = session.with_dir(dir);
    }

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    dir: Option<String>,
    seed: Option<u64>,
    config_path: Option<String>,
}

/// Parse the flags after the program name. `Ok(None)` means help was asked for.
fn parse_args(args: &[String]) -> Result<Option<CliArgs>, String> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", flag))
        };
        match arg.as_str() {
            "--dir" => cli.dir = Some(value("--dir")?),
            "--seed" => {
                let raw = value("--seed")?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|_| "--seed must be a non-negative integer".to_string())?;
                cli.seed = Some(seed);
            }
            "--config" => cli.config_path = Some(value("--config")?),
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(Some(cli))
}

fn print_usage() {
    println!("Madlibs — fills story templates with random words from your word lists.");
    println!();
    println!("Usage: madlibs [--dir <path>] [--seed <n>] [--config <file.ron>]");
    println!();
    println!("  --dir <path>     Story folder (skips the folder prompt)");
    println!("  --seed <n>       Fixed RNG seed for reproducible stories");
    println!("  --config <file>  RON config with default_dir, pool_files, seed");
}
