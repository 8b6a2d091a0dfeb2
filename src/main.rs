use std::{io::IsTerminal, process};

use clap::Parser;
use colored::Colorize;
use kmerhist::{
    cli::Args,
    config::Config,
    histogram::histogram_stats,
    run::run_with_phases,
};

/// Records between progress lines on stderr.
const PROGRESS_INTERVAL: u64 = 100_000;

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    let config = Config::try_from(&args).unwrap_or_else(|e| {
        eprintln!(
            "{}\n {}",
            "Problem parsing arguments:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    });

    let quiet = config.quiet;
    if !quiet {
        println!("{}: {}", "input".bold(), config.input.to_string().underline().bold().blue());
        println!(
            "{}: {}",
            "output".bold(),
            config.output_path().display().to_string().underline().bold().blue()
        );
        println!("{}: {}", "k-length".bold(), config.k.to_string().blue().bold());
        println!();
        if config.input.is_stdin() && std::io::stdin().is_terminal() {
            eprintln!("{}", "Reading FASTQ from the terminal; end with Ctrl-D.".dimmed());
        }
    }

    let result = run_with_phases(
        &config,
        |phase| {
            if !quiet {
                println!("{}", phase.to_string().bold());
            }
        },
        |progress| {
            if !quiet && progress.records_processed % PROGRESS_INTERVAL == 0 {
                eprintln!(
                    "  {} records, {} bases",
                    progress.records_processed, progress.bases_processed
                );
            }
        },
    );

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!(
                "{}\n {}",
                "Application error:".blue().bold(),
                e.to_string().blue()
            );
            process::exit(1);
        }
    };

    if config.stats {
        println!("{}", histogram_stats(&summary.distribution));
    }

    if !quiet {
        println!(
            "{} {}",
            "Done!".green().bold(),
            format!("{} rows written", summary.distribution.len()).dimmed()
        );
    }
}
