//! End-to-end scenarios exercising the full modelling flow:
//! pairwise weighting, record assembly, model growth, and the
//! satisfaction/design-merit aggregation.

use coda_merit::foundation::{CodaError, Correlation};
use coda_merit::model::{CodaModel, Relationship, RelationshipKind};
use coda_merit::records::{
    CharacteristicRecord, CorrelationInput, ModelDefinition, RelationshipRecord,
    RequirementRecord,
};
use coda_merit::weighting::BinaryWeightingMatrix;

const TOL: f64 = 1e-9;

#[test]
fn helmet_concept_from_weighting_to_design_merit() {
    // Derive requirement weights from pairwise comparisons.
    let mut comparisons = BinaryWeightingMatrix::new(vec!["Light weight", "Impact resistance"]);
    comparisons.set_preference(0, 1, false).unwrap();
    let requirements = comparisons.weighted_requirements().unwrap();

    let mut model = CodaModel::new();
    for requirement in &requirements {
        model
            .add_requirement(requirement.name(), requirement.weight(), false)
            .unwrap();
    }

    model
        .add_characteristic("Shell mass", (Some(0.0), Some(2.0)), Some(0.4))
        .unwrap();
    model
        .add_characteristic("Shell thickness", (Some(0.0), Some(20.0)), Some(4.0))
        .unwrap();

    model
        .add_relationship(
            "Light weight",
            "Shell mass",
            RelationshipKind::Min,
            Correlation::Strong,
            0.4,
            None,
        )
        .unwrap();
    model
        .add_relationship(
            "Impact resistance",
            "Shell thickness",
            RelationshipKind::Opt,
            Correlation::Strong,
            4.0,
            Some(1.0),
        )
        .unwrap();

    // Both relationships sit at their neutral/optimum points.
    let satisfaction = model.satisfaction().unwrap();
    assert!((satisfaction[0] - requirements[0].weight() * 0.5).abs() < TOL);
    assert!((satisfaction[1] - requirements[1].weight() * 1.0).abs() < TOL);

    let overall = model.design_merit().unwrap();
    assert!(overall > 0.0 && overall <= 1.0);
    assert!((overall - (satisfaction[0] + satisfaction[1])).abs() < TOL);
}

#[test]
fn template_model_grows_without_disturbing_relationships() {
    let mut model = CodaModel::new();
    model.add_requirement("R0", 0.5, false).unwrap();
    model.add_requirement("R1", 0.5, false).unwrap();
    for name in ["C0", "C1", "C2"] {
        model
            .add_characteristic(name, (Some(0.0), Some(1.0)), None)
            .unwrap();
    }

    model
        .add_relationship(0usize, 1usize, RelationshipKind::Max, Correlation::Weak, 1.0, None)
        .unwrap();

    // Growing a column keeps the set cell and defaults the new one.
    model
        .add_characteristic("C3", (Some(0.0), Some(1.0)), None)
        .unwrap();
    assert_eq!(model.relationships().shape(), (2, 4));
    assert_eq!(
        model.relationship(0usize, 1usize).unwrap(),
        &Relationship::Maximise {
            correlation: Correlation::Weak,
            target: 1.0
        }
    );
    assert!(model.relationship(0usize, 3usize).unwrap().is_null());
    assert!(model.relationship(1usize, 3usize).unwrap().is_null());

    // Values can be bound long after the template was laid out.
    model.set_parameter_values(&[0.2, 0.4, 0.6, 0.8]).unwrap();
    let satisfaction = model.satisfaction().unwrap();
    assert!(satisfaction[0].is_finite());
    assert!(satisfaction[1].is_nan(), "row without relationships is unmodelled");

    let overall = model.design_merit().unwrap();
    assert!((overall - satisfaction[0]).abs() < TOL);
}

#[test]
fn imported_records_round_trip_through_json() {
    let definition = ModelDefinition {
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
            correlation: CorrelationInput::Number(9.0),
            target: 5.0,
            tolerance: None,
        }],
    };

    let json = serde_json::to_string(&definition).unwrap();
    let restored: ModelDefinition = serde_json::from_str(&json).unwrap();
    let model = restored.build().unwrap();

    let satisfaction = model.satisfaction().unwrap();
    assert!(satisfaction[0].is_nan());
    assert!((satisfaction[1] - 0.4).abs() < TOL);
    assert!((model.design_merit().unwrap() - 0.4).abs() < TOL);
}

#[test]
fn invalid_definitions_are_rejected_before_any_computation() {
    // Budget violation.
    let over_budget = ModelDefinition {
        requirements: vec![
            RequirementRecord {
                name: "A".into(),
                weight: 0.7,
            },
            RequirementRecord {
                name: "B".into(),
                weight: 0.5,
            },
        ],
        ..Default::default()
    };
    assert!(matches!(
        over_budget.build(),
        Err(CodaError::WeightBudgetExceeded { .. })
    ));

    // Initial value outside the declared bounds.
    let bad_value = ModelDefinition {
        characteristics: vec![CharacteristicRecord {
            name: "Mass".into(),
            min: Some(0.0),
            max: Some(10.0),
            value: Some(50.0),
        }],
        ..Default::default()
    };
    assert!(matches!(bad_value.build(), Err(CodaError::OutOfRange { .. })));

    // Unknown correlation vocabulary.
    let bad_correlation = ModelDefinition {
        requirements: vec![RequirementRecord {
            name: "A".into(),
            weight: 0.5,
        }],
        characteristics: vec![CharacteristicRecord {
            name: "Mass".into(),
            min: Some(0.0),
            max: Some(10.0),
            value: None,
        }],
        relationships: vec![RelationshipRecord {
            requirement: "A".into(),
            characteristic: "Mass".into(),
            kind: RelationshipKind::Max,
            correlation: CorrelationInput::Number(0.5),
            target: 1.0,
            tolerance: None,
        }],
    };
    assert!(matches!(
        bad_correlation.build(),
        Err(CodaError::InvalidCorrelation { .. })
    ));
}
