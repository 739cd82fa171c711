//! # Engine Module
//!
//! This module turns raw analysis output into the construct-level judgment: the blueprint of
//! the design and the scored, flagged, explainable gate result.
//!
//! ## Overview
//!
//! The engine is stateless across calls. Every invocation receives its inputs explicitly
//! (normalized sequence, constraints, findings, reference tables) and produces a fresh value;
//! nothing is cached or shared, which is what makes determinism testable.
//!
//! ## Architecture
//!
//! - **Scoring Policy** ([`policy`]) - Named constant tables (severity penalties, sub-score
//!   weights, format thresholds) so the scoring policy can be audited without reading
//!   algorithm code
//! - **Blueprint Mapping** ([`blueprint`]) - Modality to chain/domain topology with span
//!   estimation
//! - **Scoring** ([`scoring`]) - Sub-score aggregation, flag ordering, and suggestions
//! - **Error Handling** ([`error`]) - The gate's error taxonomy

pub mod blueprint;
pub mod error;
pub mod policy;
pub mod scoring;
pub(crate) mod suggestions;
