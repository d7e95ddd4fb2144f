//! Requirement weighting from pairwise binary comparisons.
//!
//! Derives a normalised importance weight per requirement from a matrix
//! of "is A more important than B" judgements, without prescribing how
//! those judgements are collected.

mod binary_matrix;

pub use binary_matrix::BinaryWeightingMatrix;
