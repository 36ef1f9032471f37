// The nearest-neighbor engine: distance, ranking, voting and the classifier tying them together

mod hamming;
pub use hamming::hamming;

mod rank;
pub use rank::{closest, nearest, Neighbor, TieBreak, CLOSEST_TIE_BREAK};

mod vote;
pub use vote::majority;

mod classify;
pub use classify::{Classifier, Parallelism, Policy, DEFAULT_K};
