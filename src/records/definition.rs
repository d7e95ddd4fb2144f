//! Record types and model assembly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::{CodaError, Correlation};
use crate::model::{CodaModel, RelationshipKind};

/// A `(name, weight)` requirement row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRecord {
    pub name: String,
    pub weight: f64,
}

/// A `(name, min, max)` characteristic row.
///
/// Absent or non-finite bounds (a spreadsheet's empty cell typically
/// arrives as NaN) mean unbounded on that side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacteristicRecord {
    pub name: String,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
}

/// A correlation as spelled by an external source: either a number from
/// the 0/1/3/9 or 0.0/0.1/0.3/0.9 scales, or a qualitative label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrelationInput {
    Number(f64),
    Text(String),
}

impl CorrelationInput {
    /// Normalises to the canonical correlation.
    pub fn resolve(&self) -> Result<Correlation, CodaError> {
        match self {
            CorrelationInput::Number(value) => Correlation::try_from_numeric(*value),
            CorrelationInput::Text(label) => label.parse(),
        }
    }
}

/// A relationship row linking a requirement and a characteristic by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub requirement: String,
    pub characteristic: String,
    pub kind: RelationshipKind,
    pub correlation: CorrelationInput,
    pub target: f64,
    #[serde(default)]
    pub tolerance: Option<f64>,
}

/// Everything an importer supplies to define a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    #[serde(default)]
    pub requirements: Vec<RequirementRecord>,
    #[serde(default)]
    pub characteristics: Vec<CharacteristicRecord>,
    #[serde(default)]
    pub relationships: Vec<RelationshipRecord>,
}

impl ModelDefinition {
    /// Assembles a validated model from the records.
    ///
    /// Requirements are added unnormalised, so their weights must
    /// respect the unity budget; any model invariant violation surfaces
    /// as the underlying error.
    pub fn build(&self) -> Result<CodaModel, CodaError> {
        let mut model = CodaModel::new();

        for record in &self.requirements {
            model.add_requirement(record.name.clone(), record.weight, false)?;
        }

        for record in &self.characteristics {
            let limits = (finite_bound(record.min), finite_bound(record.max));
            model.add_characteristic(record.name.clone(), limits, record.value)?;
        }

        for record in &self.relationships {
            model.add_relationship(
                record.requirement.as_str(),
                record.characteristic.as_str(),
                record.kind,
                record.correlation.resolve()?,
                record.target,
                record.tolerance,
            )?;
        }

        let (rows, cols) = model.shape();
        debug!(
            rows,
            cols,
            relationships = self.relationships.len(),
            "model assembled from records"
        );
        Ok(model)
    }
}

fn finite_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> ModelDefinition {
        ModelDefinition {
            requirements: vec![
                RequirementRecord {
                    name: "Stiffness".into(),
                    weight: 0.2,
                },
                RequirementRecord {
                    name: "Weight".into(),
                    weight: 0.8,
                },
            ],
            characteristics: vec![CharacteristicRecord {
                name: "Mass".into(),
                min: Some(0.0),
                max: Some(100.0),
                value: Some(5.0),
            }],
            relationships: vec![RelationshipRecord {
                requirement: "Weight".into(),
                characteristic: "Mass".into(),
                kind: RelationshipKind::Min,
                correlation: CorrelationInput::Text("strong".into()),
                target: 5.0,
                tolerance: None,
            }],
        }
    }

    #[test]
    fn builds_a_complete_model() {
        let model = definition().build().unwrap();
        assert_eq!(model.shape(), (2, 1));
        assert_eq!(
            model.relationship("Weight", "Mass").unwrap().correlation(),
            Correlation::Strong
        );
        assert_eq!(model.parameter_values().unwrap(), vec![5.0]);
    }

    #[test]
    fn nan_bounds_mean_unbounded() {
        let mut def = definition();
        def.characteristics[0].min = Some(f64::NAN);
        def.characteristics[0].max = None;
        def.characteristics[0].value = Some(-40.0);

        let model = def.build().unwrap();
        assert_eq!(model.characteristics()[0].limits(), (None, None));
        assert_eq!(model.parameter_values().unwrap(), vec![-40.0]);
    }

    #[test]
    fn weight_budget_violations_surface() {
        let mut def = definition();
        def.requirements[1].weight = 0.9;
        assert!(matches!(
            def.build(),
            Err(CodaError::WeightBudgetExceeded { .. })
        ));
    }

    #[test]
    fn unknown_relationship_names_surface_as_lookup_errors() {
        let mut def = definition();
        def.relationships[0].characteristic = "Span".into();
        assert!(matches!(def.build(), Err(CodaError::Lookup { .. })));
    }

    #[test]
    fn numeric_and_text_correlations_resolve_alike() {
        assert_eq!(
            CorrelationInput::Number(3.0).resolve().unwrap(),
            Correlation::Moderate
        );
        assert_eq!(
            CorrelationInput::Number(0.3).resolve().unwrap(),
            Correlation::Moderate
        );
        assert_eq!(
            CorrelationInput::Text("medium".into()).resolve().unwrap(),
            Correlation::Moderate
        );
        assert!(CorrelationInput::Number(0.25).resolve().is_err());
    }

    #[test]
    fn deserialises_from_json() {
        let json = r#"{
            "requirements": [
                {"name": "Stiffness", "weight": 0.2},
                {"name": "Weight", "weight": 0.8}
            ],
            "characteristics": [
                {"name": "Mass", "min": 0.0, "max": 100.0, "value": 5.0}
            ],
            "relationships": [
                {
                    "requirement": "Weight",
                    "characteristic": "Mass",
                    "kind": "min",
                    "correlation": "strong",
                    "target": 5.0
                }
            ]
        }"#;

        let def: ModelDefinition = serde_json::from_str(json).unwrap();
        let model = def.build().unwrap();
        assert_eq!(model.shape(), (2, 1));
    }

    #[test]
    fn correlation_deserialises_from_number_or_string() {
        let numeric: CorrelationInput = serde_json::from_str("9").unwrap();
        assert_eq!(numeric.resolve().unwrap(), Correlation::Strong);

        let text: CorrelationInput = serde_json::from_str("\"weak\"").unwrap();
        assert_eq!(text.resolve().unwrap(), Correlation::Weak);
    }
}
