use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use categorical_knn::corpus::load_corpus;
use categorical_knn::evaluate::evaluate;
use categorical_knn::knn::{Classifier, Parallelism, Policy, DEFAULT_K};
use categorical_knn::logging::{self, LogLevel};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    // Class of the single closest training instance
    Closest,
    // Majority vote among the k closest training instances
    Majority,
}

/// Nearest-neighbor classification of categorical data using Hamming distance
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Tab-separated training corpus
    training_file: PathBuf,

    /// Tab-separated test corpus
    test_file: PathBuf,

    /// Turn on debug mode: debug logging and the raw prediction list
    #[arg(short, long)]
    debug: bool,

    /// Log level, overridden by --debug
    #[arg(long, value_enum, default_value_t = LogLevel::Off)]
    log_level: LogLevel,

    /// Prediction policy
    #[arg(short, long, value_enum, default_value_t = PolicyArg::Majority)]
    policy: PolicyArg,

    /// Neighbors consulted by the majority policy
    #[arg(short, long, default_value_t = DEFAULT_K)]
    k: NonZeroUsize,

    /// Classify test instances one at a time on the current thread
    #[arg(long)]
    sequential: bool,
}

impl Args {
    fn log_level(&self) -> LogLevel {
        if self.debug {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }

    fn policy(&self) -> Policy {
        match self.policy {
            PolicyArg::Closest => Policy::Closest,
            PolicyArg::Majority => Policy::Majority { k: self.k },
        }
    }

    // The raw prediction list is only printed in debug mode
    fn print_predictions(&self) -> bool {
        self.log_level() == LogLevel::Debug
    }

    fn parallelism(&self) -> Parallelism {
        if self.sequential {
            Parallelism::Sequential
        } else {
            Parallelism::Parallel
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_level()).map_err(|err| anyhow!(err))?;

    if !args.training_file.is_file() {
        bail!(
            "Training file does not exist\n\t{}",
            args.training_file.display()
        );
    }
    if !args.test_file.is_file() {
        bail!("Test file does not exist\n\t{}", args.test_file.display());
    }
    info!(training = %args.training_file.display(), "training corpus");
    info!(test = %args.test_file.display(), "test corpus");

    // (I) Training: read the reference instances
    let now = Instant::now();
    let training = load_corpus(&args.training_file)
        .with_context(|| format!("reading {}", args.training_file.display()))?;
    debug!(elapsed_ms = now.elapsed().as_millis() as u64, "loaded training data");

    // (II) Testing: read the query instances and classify each against the training set
    let now = Instant::now();
    let test = load_corpus(&args.test_file)
        .with_context(|| format!("reading {}", args.test_file.display()))?;
    debug!(elapsed_ms = now.elapsed().as_millis() as u64, "loaded test data");

    let classifier = Classifier::new(args.policy());
    let evaluation = evaluate(
        &classifier,
        &training.instances,
        &test.instances,
        args.parallelism(),
    )
    .context("evaluating test set")?;

    if args.print_predictions() {
        println!("{:?}", evaluation.predictions);
    }

    println!(
        "Accuracy on test set ({}  instances): {:.2}",
        test.instances.len(),
        evaluation.accuracy
    );
    Ok(())
}
