//! Characteristic entity - a measurable design parameter with optional bounds.

use serde::{Deserialize, Serialize};

use crate::foundation::CodaError;

/// Bounds on a characteristic's parameter value.
///
/// Either side may be `None`, meaning unbounded on that side.
pub type Limits = (Option<f64>, Option<f64>);

/// A measurable design characteristic, e.g. mass.
///
/// The value starts unset so a model template can be built before a
/// concrete design's parameter values are known; reading it before
/// assignment is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    name: String,
    limits: Limits,
    value: Option<f64>,
}

impl Characteristic {
    /// Limits applied when none are given.
    pub const DEFAULT_LIMITS: Limits = (Some(0.0), Some(1.0));

    /// Creates a characteristic with the default [0, 1] limits and no value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limits: Self::DEFAULT_LIMITS,
            value: None,
        }
    }

    /// Creates a characteristic with explicit limits.
    pub fn with_limits(name: impl Into<String>, limits: Limits) -> Result<Self, CodaError> {
        let mut characteristic = Self::new(name);
        characteristic.set_limits(limits)?;
        Ok(characteristic)
    }

    /// Returns the identifier/description.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the (lower, upper) bounds on the value.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Reassigns the bounds, rejecting an inverted pair.
    ///
    /// An already-set value is not re-checked against new limits; bounds
    /// constrain future assignments.
    pub fn set_limits(&mut self, limits: Limits) -> Result<(), CodaError> {
        if let (Some(lower), Some(upper)) = limits {
            if lower > upper {
                return Err(CodaError::invalid_argument(format!(
                    "limits for '{}' are inverted: {} > {}",
                    self.name, lower, upper
                )));
            }
        }
        self.limits = limits;
        Ok(())
    }

    /// Returns the parameter value, or `UnsetValue` if not yet assigned.
    pub fn value(&self) -> Result<f64, CodaError> {
        self.value.ok_or_else(|| CodaError::unset_value(&self.name))
    }

    /// Returns true once a value has been assigned.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Assigns the parameter value, rejecting values outside the limits.
    ///
    /// Values exactly at a bound are accepted.
    pub fn set_value(&mut self, x: f64) -> Result<(), CodaError> {
        let (lower, upper) = self.limits;

        let below = lower.map(|lo| x < lo).unwrap_or(false);
        let above = upper.map(|hi| x > hi).unwrap_or(false);
        if below || above {
            return Err(CodaError::out_of_range(&self.name, lower, upper, x));
        }

        self.value = Some(x);
        Ok(())
    }
}
