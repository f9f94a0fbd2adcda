use clap::{Parser, Subcommand};
use photograde::{config, decode, output, score};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "photograde")]
#[command(version)]
#[command(about = "Deterministic image-quality scoring")]
#[command(long_about = "\
Deterministic image-quality scoring

Scores images on six pixel statistics — sharpness, brightness, contrast,
saturation, resolution adequacy, aspect-ratio conformance — each normalized
to 0-10, averaged into one overall rating, and bucketed into a letter grade:

    >= 8.5  A
    >= 7.0  B
    >= 5.0  C
    >= 3.0  D
    else    F

The score is a pure function of the pixels: no network, no AI service, and
the same image always gets the same rating.

Run 'photograde gen-config' to print a documented threshold config.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rate image files and/or directories of images
    Rate {
        /// Files or directories to score (directories are walked recursively)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Threshold config TOML (stock values if omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the per-metric score breakdown under each rating
        #[arg(long)]
        scores: bool,

        /// Emit results as a JSON array instead of text
        #[arg(long)]
        json: bool,

        /// Worker threads for batch scoring (defaults to all cores)
        #[arg(long)]
        threads: Option<usize>,
    },
    /// Print a stock config TOML with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Rate {
            paths,
            config,
            scores,
            json,
            threads,
        } => match run_rate(&paths, config.as_deref(), scores, json, threads) {
            Ok(failed) if failed == 0 => ExitCode::SUCCESS,
            Ok(_) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            ExitCode::SUCCESS
        }
    }
}

/// Rate all images under the given paths. Returns the number of files that
/// failed to decode; setup problems (bad config, missing path) error out.
fn run_rate(
    paths: &[PathBuf],
    config_path: Option<&Path>,
    show_scores: bool,
    json: bool,
    threads: Option<usize>,
) -> Result<usize, Box<dyn std::error::Error>> {
    let scoring_config = match config_path {
        Some(path) => config::ScoringConfig::load(path)?,
        None => config::ScoringConfig::default(),
    };

    let files = collect_image_files(paths)?;
    if files.is_empty() {
        return Err("no image files found under the given paths".into());
    }

    init_thread_pool(threads);

    // Scored in parallel, reported in input order
    let results: Vec<(PathBuf, Result<score::Rating, decode::DecodeError>)> = files
        .par_iter()
        .map(|path| {
            let result = decode::decode_path(path).map(|img| score::rate(&img, &scoring_config));
            (path.clone(), result)
        })
        .collect();

    let mut failed = 0;
    if json {
        let entries: Vec<serde_json::Value> = results
            .iter()
            .map(|(path, result)| match result {
                Ok(rating) => serde_json::json!({
                    "path": path.display().to_string(),
                    "overallRating": rating.display_rating(),
                    "grade": rating.grade,
                    "scores": rating.scores,
                }),
                Err(e) => {
                    failed += 1;
                    serde_json::json!({
                        "path": path.display().to_string(),
                        "error": e.to_string(),
                    })
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (path, result) in &results {
            let label = path.display().to_string();
            match result {
                Ok(rating) => output::print_rating(&label, rating, show_scores),
                Err(e) => {
                    failed += 1;
                    println!("{}", output::format_failure(&label, &e.to_string()));
                }
            }
        }
        if results.len() > 1 || failed > 0 {
            println!("{}", output::format_summary(results.len() - failed, failed));
        }
    }

    Ok(failed)
}

/// Expand files and directories into the list of decodable image files.
///
/// Explicit file arguments are taken as-is (an unsupported extension there
/// is a user error); directories are walked recursively and filtered to
/// supported extensions, sorted for stable output.
fn collect_image_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = walkdir::WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|p| decode::is_supported_path(p))
                .collect();
            files.append(&mut found);
        } else if path.is_file() {
            if !decode::is_supported_path(path) {
                return Err(format!(
                    "{}: unsupported extension (supported: {})",
                    path.display(),
                    decode::supported_input_extensions().join(", ")
                )
                .into());
            }
            files.push(path.clone());
        } else {
            return Err(format!("{}: no such file or directory", path.display()).into());
        }
    }
    Ok(files)
}

/// Initialize the rayon thread pool if the user constrained it.
///
/// `build_global` fails if a pool already exists; that is fine, the
/// default pool is already sized to all cores.
fn init_thread_pool(threads: Option<usize>) {
    if let Some(n) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n.max(1))
            .build_global()
            .ok();
    }
}
