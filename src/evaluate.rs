use std::time::Instant;

use tracing::{debug, info};

use crate::accuracy::accuracy;
use crate::knn::{Classifier, Parallelism};
use crate::{Instance, Label, Result};

// Outcome of classifying a whole query set
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    // One prediction per query instance, in query order
    pub predictions: Vec<Label>,
    // Percentage of correct predictions
    pub accuracy: f64,
}

// Classify every query instance against the reference set and score the result
pub fn evaluate(
    classifier: &Classifier,
    reference: &[Instance],
    queries: &[Instance],
    parallelism: Parallelism,
) -> Result<Evaluation> {
    let now = Instant::now();
    let predictions = classifier.classify_all(queries, reference, parallelism)?;
    debug!(
        predictions = predictions.len(),
        elapsed_ms = now.elapsed().as_millis() as u64,
        "classified query set"
    );

    let accuracy = accuracy(queries, &predictions)?;
    info!(accuracy, instances = queries.len(), "evaluated query set");

    Ok(Evaluation {
        predictions,
        accuracy,
    })
}
