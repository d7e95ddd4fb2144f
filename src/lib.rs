//! CODA Merit - Design-merit modelling for conceptual engineering design
//!
//! Implements the CODA (Characteristics of Design Attributes) method:
//! stakeholder requirements are related to measurable design
//! characteristics through a matrix of merit curves, yielding a
//! per-requirement satisfaction score and an overall design merit.
//!
//! # References
//!
//! - M.H. Eres et al, 2014. Mapping Customer Needs to Engineering
//!   Characteristics: An Aerospace Perspective for Conceptual Design -
//!   Journal of Engineering Design pp. 1-24

pub mod foundation;
pub mod model;
pub mod records;
pub mod weighting;
