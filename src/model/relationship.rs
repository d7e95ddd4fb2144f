//! Relationship variants - merit curves linking a characteristic to a requirement.

use serde::{Deserialize, Serialize};

use crate::foundation::{CodaError, Correlation};

/// Requested relationship curve when installing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Max,
    Min,
    Opt,
}

/// A requirement-characteristic relationship.
///
/// Each variant maps a characteristic parameter value to a merit in
/// [0, 1]. The closed set of curves:
///
/// - `Null` - the characteristic has no bearing on the requirement.
/// - `Maximise` - larger is better; the target is the 50%-satisfaction
///   point, not perfection.
/// - `Minimise` - smaller is better; same neutral-point reading of the
///   target.
/// - `Optimise` - the value should sit at an optimum, with the tolerance
///   giving the 50%-merit distance either side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Relationship {
    #[default]
    Null,
    Maximise {
        correlation: Correlation,
        target: f64,
    },
    Minimise {
        correlation: Correlation,
        target: f64,
    },
    Optimise {
        correlation: Correlation,
        target: f64,
        tolerance: f64,
    },
}

impl Relationship {
    /// Builds a relationship of the requested kind.
    ///
    /// A tolerance is required for `Opt` and rejected for the other
    /// kinds.
    pub fn of_kind(
        kind: RelationshipKind,
        correlation: Correlation,
        target: f64,
        tolerance: Option<f64>,
    ) -> Result<Self, CodaError> {
        match (kind, tolerance) {
            (RelationshipKind::Max, None) => Ok(Relationship::Maximise { correlation, target }),
            (RelationshipKind::Min, None) => Ok(Relationship::Minimise { correlation, target }),
            (RelationshipKind::Opt, Some(tolerance)) => Ok(Relationship::Optimise {
                correlation,
                target,
                tolerance,
            }),
            (RelationshipKind::Opt, None) => Err(CodaError::invalid_argument(
                "optimising relationships require a tolerance",
            )),
            (_, Some(_)) => Err(CodaError::invalid_argument(
                "tolerance is only valid for optimising relationships",
            )),
        }
    }

    /// Returns the merit (fractional satisfaction, 0-1) of a parameter
    /// value under this relationship.
    ///
    /// `Minimise` is not guarded against x <= 0; the non-finite or
    /// out-of-band result propagates to the caller (the aggregation
    /// layer treats non-finite satisfaction as "not modelled").
    pub fn merit(&self, x: f64) -> f64 {
        match *self {
            Relationship::Null => 0.0,
            Relationship::Maximise { target, .. } => 1.0 - (-(x / target)).exp2(),
            Relationship::Minimise { target, .. } => 1.0 - (-(target / x)).exp2(),
            Relationship::Optimise {
                target, tolerance, ..
            } => 1.0 / (1.0 + ((x - target) / tolerance).powi(2)),
        }
    }

    /// Returns the correlation strength (`Correlation::None` for `Null`).
    pub fn correlation(&self) -> Correlation {
        match *self {
            Relationship::Null => Correlation::None,
            Relationship::Maximise { correlation, .. }
            | Relationship::Minimise { correlation, .. }
            | Relationship::Optimise { correlation, .. } => correlation,
        }
    }

    /// Returns the target value (`None` for `Null`).
    pub fn target(&self) -> Option<f64> {
        match *self {
            Relationship::Null => None,
            Relationship::Maximise { target, .. }
            | Relationship::Minimise { target, .. }
            | Relationship::Optimise { target, .. } => Some(target),
        }
    }

    /// Reassigns the correlation strength.
    ///
    /// `Null` has a fixed zero correlation; setting anything else on it
    /// fails with `ImmutableRelationship`.
    pub fn set_correlation(&mut self, value: Correlation) -> Result<(), CodaError> {
        match self {
            Relationship::Null => {
                if value != Correlation::None {
                    return Err(CodaError::ImmutableRelationship {
                        attribute: "correlation",
                    });
                }
                Ok(())
            }
            Relationship::Maximise { correlation, .. }
            | Relationship::Minimise { correlation, .. }
            | Relationship::Optimise { correlation, .. } => {
                *correlation = value;
                Ok(())
            }
        }
    }

    /// Reassigns the target value.
    ///
    /// `Null` has a fixed null target; the other variants require one.
    pub fn set_target(&mut self, value: Option<f64>) -> Result<(), CodaError> {
        match self {
            Relationship::Null => {
                if value.is_some() {
                    return Err(CodaError::ImmutableRelationship {
                        attribute: "target",
                    });
                }
                Ok(())
            }
            Relationship::Maximise { target, .. }
            | Relationship::Minimise { target, .. }
            | Relationship::Optimise { target, .. } => match value {
                Some(t) => {
                    *target = t;
                    Ok(())
                }
                None => Err(CodaError::invalid_argument(
                    "only null relationships may have a null target",
                )),
            },
        }
    }

    /// Returns true for the null sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Relationship::Null)
    }
}
