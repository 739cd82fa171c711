//! # Core Module
//!
//! This module provides the fundamental building blocks for manufacturability assessment,
//! serving as the computational core of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and leaf algorithms required to evaluate a
//! biologic construct design before it is committed to physical synthesis. All entities here
//! are request-scoped value objects: they are created once per assessment, never mutated
//! afterwards, and never outlive the call that produced them.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Candidate specifications, normalized sequences, findings,
//!   constraints, blueprints, and results
//! - **Normalization** ([`normalize`]) - FASTA/raw-input parsing and IUPAC alphabet validation
//! - **Sequence Analysis** ([`analysis`]) - Localized scans for synthesis and stability risks
//! - **Reference Tables** ([`tables`]) - Static restriction-site and expression-liability data,
//!   passed into the engine as explicit read-only lookups

pub mod analysis;
pub mod models;
pub mod normalize;
pub mod tables;
