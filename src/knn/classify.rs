use std::num::NonZeroUsize;

use rayon::prelude::*;
use tracing::debug;

use super::{closest, majority, nearest, CLOSEST_TIE_BREAK};
use crate::error::ClassifyError;
use crate::{Instance, Label};

// Number of neighbors consulted by the majority policy unless configured otherwise
pub const DEFAULT_K: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(k) => k,
    None => unreachable!(),
};

// How a prediction is derived from the reference set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    // 1-NN: class of the single closest instance, ties broken by CLOSEST_TIE_BREAK
    Closest,
    // k-NN: majority vote among the k closest instances
    Majority { k: NonZeroUsize },
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Majority { k: DEFAULT_K }
    }
}

// Whether batch classification fans out across threads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Parallelism {
    Sequential,
    #[default]
    Parallel,
}

// Stateless nearest-neighbor classifier. The reference set is passed on every call
// and only ever read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    policy: Policy,
}

impl Classifier {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    // Predict the class of one query instance
    pub fn classify(
        &self,
        query: &Instance,
        reference: &[Instance],
    ) -> Result<Label, ClassifyError> {
        let prediction = match self.policy {
            Policy::Closest => {
                closest(query, reference, CLOSEST_TIE_BREAK).map(|instance| instance.class())
            }
            Policy::Majority { k } => majority(
                nearest(query, reference, k.get())
                    .into_iter()
                    .map(|neighbor| neighbor.label),
            ),
        };
        prediction.ok_or(ClassifyError::EmptyReferenceSet)
    }

    // Predict every query instance. Output is aligned with `queries` regardless of
    // the order in which parallel workers finish.
    pub fn classify_all(
        &self,
        queries: &[Instance],
        reference: &[Instance],
        parallelism: Parallelism,
    ) -> Result<Vec<Label>, ClassifyError> {
        if reference.is_empty() {
            return Err(ClassifyError::EmptyReferenceSet);
        }
        debug!(
            queries = queries.len(),
            reference = reference.len(),
            policy = ?self.policy,
            ?parallelism,
            "classifying query set"
        );
        match parallelism {
            Parallelism::Sequential => queries
                .iter()
                .map(|query| self.classify(query, reference))
                .collect(),
            Parallelism::Parallel => queries
                .par_iter()
                .map(|query| self.classify(query, reference))
                .collect(),
        }
    }
}
