use crate::{FeatureValue, Label};

// A single labeled feature vector.
// Fields are private so an instance can't change once it has been loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    values: Vec<FeatureValue>,
    class: Label,
    // Position within the source set, kept for traceability only
    index: usize,
}

impl Instance {
    pub fn new(values: Vec<FeatureValue>, class: Label, index: usize) -> Self {
        Self {
            values,
            class,
            index,
        }
    }

    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    pub fn class(&self) -> Label {
        self.class
    }

    pub fn index(&self) -> usize {
        self.index
    }

    // Number of features
    pub fn arity(&self) -> usize {
        self.values.len()
    }
}
