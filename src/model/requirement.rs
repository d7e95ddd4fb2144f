//! Requirement entity - a stakeholder need with a normalised importance weight.

use serde::{Deserialize, Serialize};

use crate::foundation::CodaError;

/// A stakeholder requirement.
///
/// The weight is the requirement's share of the unity importance budget
/// and must lie in [0, 1]; the model enforces the budget across all
/// requirements, this type enforces the per-requirement bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    name: String,
    weight: f64,
}

impl Requirement {
    /// Creates a requirement, rejecting weights outside [0, 1].
    pub fn new(name: impl Into<String>, weight: f64) -> Result<Self, CodaError> {
        let mut req = Self {
            name: name.into(),
            weight: 0.0,
        };
        req.set_weight(weight)?;
        Ok(req)
    }

    /// Returns the identifier/description.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalised importance weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Reassigns the weight, rejecting values outside [0, 1].
    pub fn set_weight(&mut self, weight: f64) -> Result<(), CodaError> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(CodaError::out_of_range(
                "weight",
                Some(0.0),
                Some(1.0),
                weight,
            ));
        }
        self.weight = weight;
        Ok(())
    }
}
