use crate::error::AccuracyError;
use crate::{Instance, Label};

// Percentage (0-100) of query instances whose true class matches the prediction
// at the same position.
pub fn accuracy(instances: &[Instance], predictions: &[Label]) -> Result<f64, AccuracyError> {
    if instances.len() != predictions.len() {
        return Err(AccuracyError::LengthMismatch {
            instances: instances.len(),
            predictions: predictions.len(),
        });
    }
    if instances.is_empty() {
        return Err(AccuracyError::Empty);
    }
    let correct = instances
        .iter()
        .zip(predictions)
        .filter(|(instance, &predicted)| instance.class() == predicted)
        .count();
    Ok(100.0 * correct as f64 / instances.len() as f64)
}
