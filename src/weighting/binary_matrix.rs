//! Binary weighting matrix - pairwise comparison of requirement importance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::CodaError;
use crate::model::Requirement;

/// Pairwise binary-comparison weighting of requirements.
///
/// Each requirement is judged more or less important than every other
/// requirement in turn; `matrix[i][j] = true` (for `i < j`) records
/// that requirement `i` was preferred over requirement `j`. The derived
/// score gives every requirement one biasing "win" so that no weight is
/// ever zero, then normalises the totals to sum to 1.0, which satisfies
/// the model's unity weight budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryWeightingMatrix {
    requirements: Vec<String>,
    prefer: Vec<bool>,
}

impl BinaryWeightingMatrix {
    /// Creates a matrix for the given requirement names with no
    /// preferences stated yet.
    pub fn new(requirements: Vec<impl Into<String>>) -> Self {
        let requirements: Vec<String> = requirements.into_iter().map(Into::into).collect();
        let n = requirements.len();
        Self {
            requirements,
            prefer: vec![false; n * n],
        }
    }

    /// Creates a matrix from pre-recorded comparison rows.
    ///
    /// The matrix must be square with one row per requirement.
    pub fn with_matrix(
        requirements: Vec<impl Into<String>>,
        rows: Vec<Vec<bool>>,
    ) -> Result<Self, CodaError> {
        let requirements: Vec<String> = requirements.into_iter().map(Into::into).collect();
        let n = requirements.len();

        if rows.len() != n || rows.iter().any(|row| row.len() != n) {
            return Err(CodaError::invalid_argument(format!(
                "comparison matrix must be {n}x{n}"
            )));
        }

        Ok(Self {
            requirements,
            prefer: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of requirements being compared.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Returns true when there are no requirements.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// The requirement names, in comparison order.
    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    /// Records whether requirement `i` is preferred over requirement `j`.
    ///
    /// Comparisons live in the upper triangle, so `i < j` is required.
    pub fn set_preference(&mut self, i: usize, j: usize, preferred: bool) -> Result<(), CodaError> {
        let n = self.len();
        if i >= n || j >= n {
            return Err(CodaError::lookup("requirement", format!("({i}, {j})")));
        }
        if i >= j {
            return Err(CodaError::invalid_argument(
                "comparisons are recorded in the upper triangle (i < j)",
            ));
        }
        self.prefer[i * n + j] = preferred;
        Ok(())
    }

    /// Relative importance scores, normalised to sum to 1.0.
    ///
    /// A requirement's raw score is the number of comparisons it won:
    /// stated wins in its row plus, for every earlier requirement that
    /// did not claim the pair, an implied win. One bias win is added
    /// per requirement before normalising.
    pub fn scores(&self) -> Vec<f64> {
        let n = self.len();
        if n == 0 {
            return Vec::new();
        }

        let mut biased: Vec<f64> = (0..n)
            .map(|i| {
                let stated: usize = (0..n).filter(|&j| self.prefer[i * n + j]).count();
                let implied: usize = (0..i).filter(|&j| !self.prefer[j * n + i]).count();
                (stated + implied + 1) as f64
            })
            .collect();

        let total: f64 = biased.iter().sum();
        for score in &mut biased {
            *score /= total;
        }
        biased
    }

    /// Builds weighted requirements ready to seed a CODA model.
    ///
    /// The weights sum to 1.0, so adding them without normalisation
    /// stays within the model's weight budget.
    pub fn weighted_requirements(&self) -> Result<Vec<Requirement>, CodaError> {
        let scores = self.scores();
        debug!(count = self.len(), "derived requirement weights");
        self.requirements
            .iter()
            .zip(scores)
            .map(|(name, weight)| Requirement::new(name.clone(), weight))
            .collect()
    }
}
