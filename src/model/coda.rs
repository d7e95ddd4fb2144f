//! CODA model aggregate - ordered requirement/characteristic collections
//! and the relationship grid, with the merit/satisfaction computations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::{CodaError, Correlation};

use super::{
    Characteristic, Limits, Relationship, RelationshipGrid, RelationshipKind, Requirement,
};

/// Slack allowed on the unity weight budget before an addition is rejected.
const WEIGHT_BUDGET_TOLERANCE: f64 = 1e-9;

/// Stable handle to a requirement row.
///
/// Requirements are append-only, so a handle issued by
/// [`CodaModel::add_requirement`] stays valid for the life of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementId(pub(crate) usize);

/// Stable handle to a characteristic column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacteristicId(pub(crate) usize);

/// Reference to a requirement row: positional, by name, or by handle.
#[derive(Debug, Clone, PartialEq)]
pub enum RequirementRef {
    Index(usize),
    Name(String),
    Id(RequirementId),
}

impl From<usize> for RequirementRef {
    fn from(index: usize) -> Self {
        RequirementRef::Index(index)
    }
}

impl From<&str> for RequirementRef {
    fn from(name: &str) -> Self {
        RequirementRef::Name(name.to_string())
    }
}

impl From<String> for RequirementRef {
    fn from(name: String) -> Self {
        RequirementRef::Name(name)
    }
}

impl From<RequirementId> for RequirementRef {
    fn from(id: RequirementId) -> Self {
        RequirementRef::Id(id)
    }
}

/// Reference to a characteristic column: positional, by name, or by handle.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacteristicRef {
    Index(usize),
    Name(String),
    Id(CharacteristicId),
}

impl From<usize> for CharacteristicRef {
    fn from(index: usize) -> Self {
        CharacteristicRef::Index(index)
    }
}

impl From<&str> for CharacteristicRef {
    fn from(name: &str) -> Self {
        CharacteristicRef::Name(name.to_string())
    }
}

impl From<String> for CharacteristicRef {
    fn from(name: String) -> Self {
        CharacteristicRef::Name(name)
    }
}

impl From<CharacteristicId> for CharacteristicRef {
    fn from(id: CharacteristicId) -> Self {
        CharacteristicRef::Id(id)
    }
}

/// The CODA matrix model.
///
/// Owns an ordered sequence of requirements (rows), an ordered sequence
/// of characteristics (columns), and a grid of relationships always
/// sized `(R, C)`. Both collections are append-only; relationship cells
/// are mutable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodaModel {
    requirements: Vec<Requirement>,
    characteristics: Vec<Characteristic>,
    grid: RelationshipGrid,
}

impl CodaModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns (number of requirements, number of characteristics).
    pub fn shape(&self) -> (usize, usize) {
        (self.requirements.len(), self.characteristics.len())
    }

    /// Modelled requirements, in insertion order.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Modelled characteristics, in insertion order.
    pub fn characteristics(&self) -> &[Characteristic] {
        &self.characteristics
    }

    /// The relationship grid, shaped `(R, C)`.
    pub fn relationships(&self) -> &RelationshipGrid {
        &self.grid
    }

    /// Appends a requirement and grows the grid by one row.
    ///
    /// With `normalise` false the addition is rejected with
    /// `WeightBudgetExceeded` when the running weight total would pass
    /// 1.0. With `normalise` true the weight is accepted as-is and all
    /// weights are then rescaled to sum to exactly 1.0, preserving
    /// their proportions.
    pub fn add_requirement(
        &mut self,
        name: impl Into<String>,
        weight: f64,
        normalise: bool,
    ) -> Result<RequirementId, CodaError> {
        let requirement = Requirement::new(name, weight)?;

        if !normalise {
            let total: f64 = self.weight_total() + weight;
            if total > 1.0 + WEIGHT_BUDGET_TOLERANCE {
                return Err(CodaError::WeightBudgetExceeded {
                    name: requirement.name().to_string(),
                    total,
                });
            }
        }

        self.requirements.push(requirement);
        let (rows, cols) = self.shape();
        self.grid.resize(rows, cols);

        if normalise {
            self.normalise_weights()?;
        }

        debug!(rows, cols, normalise, "requirement added");
        Ok(RequirementId(rows - 1))
    }

    /// Appends a characteristic and grows the grid by one column.
    pub fn add_characteristic(
        &mut self,
        name: impl Into<String>,
        limits: Limits,
        value: Option<f64>,
    ) -> Result<CharacteristicId, CodaError> {
        let mut characteristic = Characteristic::with_limits(name, limits)?;
        if let Some(x) = value {
            characteristic.set_value(x)?;
        }

        self.characteristics.push(characteristic);
        let (rows, cols) = self.shape();
        self.grid.resize(rows, cols);

        debug!(rows, cols, "characteristic added");
        Ok(CharacteristicId(cols - 1))
    }

    /// Installs a relationship at the referenced cell, overwriting
    /// whatever was there.
    pub fn add_relationship(
        &mut self,
        requirement: impl Into<RequirementRef>,
        characteristic: impl Into<CharacteristicRef>,
        kind: RelationshipKind,
        correlation: Correlation,
        target: f64,
        tolerance: Option<f64>,
    ) -> Result<(), CodaError> {
        let row = self.resolve_requirement(&requirement.into())?;
        let col = self.resolve_characteristic(&characteristic.into())?;
        let relationship = Relationship::of_kind(kind, correlation, target, tolerance)?;

        // Refs resolved against current collections, so the cell exists.
        self.grid.set(row, col, relationship);
        Ok(())
    }

    /// Returns the relationship at the referenced cell.
    pub fn relationship(
        &self,
        requirement: impl Into<RequirementRef>,
        characteristic: impl Into<CharacteristicRef>,
    ) -> Result<&Relationship, CodaError> {
        let row = self.resolve_requirement(&requirement.into())?;
        let col = self.resolve_characteristic(&characteristic.into())?;
        self.grid
            .get(row, col)
            .ok_or_else(|| CodaError::lookup("relationship", format!("({}, {})", row, col)))
    }

    /// Mutable access to a requirement, e.g. to reassign its weight.
    pub fn requirement_mut(
        &mut self,
        requirement: impl Into<RequirementRef>,
    ) -> Result<&mut Requirement, CodaError> {
        let row = self.resolve_requirement(&requirement.into())?;
        Ok(&mut self.requirements[row])
    }

    /// Mutable access to a characteristic, e.g. to assign its value.
    pub fn characteristic_mut(
        &mut self,
        characteristic: impl Into<CharacteristicRef>,
    ) -> Result<&mut Characteristic, CodaError> {
        let col = self.resolve_characteristic(&characteristic.into())?;
        Ok(&mut self.characteristics[col])
    }

    /// Correlation value of every cell, shape `(R, C)`.
    pub fn correlation(&self) -> Vec<Vec<f64>> {
        let (rows, _) = self.shape();
        (0..rows)
            .map(|row| self.grid.row(row).map(|rel| rel.correlation().value()).collect())
            .collect()
    }

    /// Requirement weights, in row order.
    pub fn weights(&self) -> Vec<f64> {
        self.requirements.iter().map(Requirement::weight).collect()
    }

    /// Characteristic parameter values, in column order.
    ///
    /// Fails with `UnsetValue` if any characteristic has no value yet.
    pub fn parameter_values(&self) -> Result<Vec<f64>, CodaError> {
        self.characteristics
            .iter()
            .map(Characteristic::value)
            .collect()
    }

    /// Assigns all characteristic parameter values element-wise.
    ///
    /// The slice length must equal the characteristic count; each value
    /// is bound-checked against its characteristic's limits.
    pub fn set_parameter_values(&mut self, values: &[f64]) -> Result<(), CodaError> {
        if values.len() != self.characteristics.len() {
            return Err(CodaError::invalid_argument(format!(
                "expected {} parameter values, got {}",
                self.characteristics.len(),
                values.len()
            )));
        }

        for (characteristic, &x) in self.characteristics.iter_mut().zip(values) {
            characteristic.set_value(x)?;
        }
        Ok(())
    }

    /// Cell-wise merit of the current parameter values, shape `(R, C)`.
    pub fn merit_matrix(&self) -> Result<Vec<Vec<f64>>, CodaError> {
        let values = self.parameter_values()?;
        let (rows, _) = self.shape();
        Ok((0..rows)
            .map(|row| {
                self.grid
                    .row(row)
                    .zip(&values)
                    .map(|(rel, &x)| rel.merit(x))
                    .collect()
            })
            .collect())
    }

    /// Per-requirement satisfaction, in row order.
    ///
    /// For row i:
    /// `satisfaction[i] = weight[i] / sum_j(corr[i][j]) * sum_j(corr[i][j] * merit[i][j])`
    ///
    /// A row whose total correlation is zero has no modelled
    /// characteristics; its satisfaction propagates as NaN rather than
    /// raising, and callers should present it as "not modelled".
    pub fn satisfaction(&self) -> Result<Vec<f64>, CodaError> {
        let values = self.parameter_values()?;

        Ok(self
            .requirements
            .iter()
            .enumerate()
            .map(|(row, requirement)| {
                let mut total_correlation = 0.0;
                let mut weighted_merit = 0.0;
                for (rel, &x) in self.grid.row(row).zip(&values) {
                    let correlation = rel.correlation().value();
                    total_correlation += correlation;
                    weighted_merit += correlation * rel.merit(x);
                }
                requirement.weight() / total_correlation * weighted_merit
            })
            .collect())
    }

    /// Overall design merit: the sum of requirement satisfactions.
    ///
    /// Degenerate (non-finite) rows are excluded so an unmodelled
    /// requirement does not poison the scalar; inspect
    /// [`satisfaction`](Self::satisfaction) to see which rows were
    /// skipped.
    pub fn design_merit(&self) -> Result<f64, CodaError> {
        Ok(self
            .satisfaction()?
            .into_iter()
            .filter(|s| s.is_finite())
            .sum())
    }

    /// Rescales all requirement weights to sum to exactly 1.0,
    /// preserving their proportions.
    ///
    /// A no-op while the total weight is zero (nothing to apportion).
    pub fn normalise_weights(&mut self) -> Result<(), CodaError> {
        let total = self.weight_total();
        if total <= 0.0 {
            return Ok(());
        }
        for requirement in &mut self.requirements {
            let share = requirement.weight() / total;
            requirement.set_weight(share)?;
        }
        Ok(())
    }

    fn weight_total(&self) -> f64 {
        self.requirements.iter().map(Requirement::weight).sum()
    }

    fn resolve_requirement(&self, reference: &RequirementRef) -> Result<usize, CodaError> {
        match reference {
            RequirementRef::Index(index) | RequirementRef::Id(RequirementId(index)) => {
                if *index < self.requirements.len() {
                    Ok(*index)
                } else {
                    Err(CodaError::lookup("requirement", index.to_string()))
                }
            }
            RequirementRef::Name(name) => self
                .requirements
                .iter()
                .position(|r| r.name() == name.as_str())
                .ok_or_else(|| CodaError::lookup("requirement", name.as_str())),
        }
    }

    fn resolve_characteristic(&self, reference: &CharacteristicRef) -> Result<usize, CodaError> {
        match reference {
            CharacteristicRef::Index(index) | CharacteristicRef::Id(CharacteristicId(index)) => {
                if *index < self.characteristics.len() {
                    Ok(*index)
                } else {
                    Err(CodaError::lookup("characteristic", index.to_string()))
                }
            }
            CharacteristicRef::Name(name) => self
                .characteristics
                .iter()
                .position(|c| c.name() == name.as_str())
                .ok_or_else(|| CodaError::lookup("characteristic", name.as_str())),
        }
    }
}
