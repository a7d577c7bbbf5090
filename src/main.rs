// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: `pi-digits <n>` prints the ten digits of π starting
//! at zero-based position `n`.

use std::io::IsTerminal;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use pi_digits::constants::DEFAULT_MAX_MODULUS;
use pi_digits::format;
use pi_digits::{DigitPosition, ExtractorConfig, PiDigitExtractor, SweepObserver, SweepProgress};

/// Computes ten digits of pi at the specified digit.
#[derive(Debug, Parser)]
#[command(name = "pi-digits", version, about)]
struct Cli {
    /// The 0-based digit of pi to compute
    #[arg(allow_negative_numbers = true)]
    n: DigitPosition,

    /// Worker threads for the prime sweep (default: all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Process primes one at a time on the main thread
    #[arg(long)]
    sequential: bool,

    /// Largest modulus any prime power may reach
    #[arg(long, value_name = "LIMIT", default_value_t = DEFAULT_MAX_MODULUS)]
    max_modulus: u64,

    /// Do not draw the progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ExtractorConfig {
        let mut config = ExtractorConfig::default().with_max_modulus(self.max_modulus);
        if let Some(threads) = self.threads {
            config = config.with_threads(threads);
        }
        if self.sequential {
            config = config.sequential();
        }
        config
    }
}

/// Advances a progress bar once per completed prime.
struct ProgressBarObserver(ProgressBar);

impl SweepObserver for ProgressBarObserver {
    fn on_start(&self, total: usize) {
        self.0.set_length(total as u64);
    }

    fn on_prime(&self, progress: SweepProgress) {
        // Primes may finish out of order on worker threads.
        self.0.inc(1);
        self.0.set_message(format!("prime {}", progress.prime));
    }
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "pi_digits=warn",
        1 => "pi_digits=info",
        _ => "pi_digits=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn progress_bar(quiet: bool) -> Result<ProgressBar> {
    if quiet || !std::io::stderr().is_terminal() {
        return Ok(ProgressBar::hidden());
    }
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:60}] {pos}/{len} primes {msg}")?
            .progress_chars("*. "),
    );
    Ok(bar)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let n = cli.n.get();
    let extractor = PiDigitExtractor::new(cli.config());

    println!("Computing the {} digit of pi...", format::ordinal(n));

    let bar = progress_bar(cli.quiet)?;
    let start = Instant::now();
    let result = extractor.extract_with(n, &ProgressBarObserver(bar.clone()));
    bar.finish_and_clear();
    let digits = result.with_context(|| format!("could not compute digits at position {}", n))?;
    let elapsed = start.elapsed();

    println!("Decimal digits of pi at position {}: {}", n, digits);
    println!("Time to compute: {}", format::elapsed(elapsed));
    println!("Largest prime computed: {}", digits.largest_prime);
    Ok(())
}
