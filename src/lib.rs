pub mod accuracy;
pub mod corpus;
pub mod error;
pub mod evaluate;
pub mod instance;
pub mod knn;
pub mod logging;

pub use error::{Error, Result};
pub use instance::Instance;

// Integer-coded categorical feature value
pub type FeatureValue = i64;
// Class label attached to each instance
pub type Label = i64;
