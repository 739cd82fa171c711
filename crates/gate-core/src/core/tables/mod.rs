//! # Reference Tables Module
//!
//! Static reference data consumed by the analysis scans and the scoring engine.
//!
//! ## Overview
//!
//! The tables are modeled as explicitly-constructed immutable lookups that callers pass into
//! the engine, never as ambient global state; the built-in defaults are compile-time `phf`
//! maps. This keeps the core a pure, independently testable function: swapping a table swaps
//! behavior with no hidden coupling.

pub mod expression;
pub mod restriction;

use expression::ExpressionLiabilityTable;
use restriction::RestrictionSiteTable;

/// Read-only reference data for one assessment. Construct once, pass by reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTables {
    pub restriction_sites: RestrictionSiteTable,
    pub expression: ExpressionLiabilityTable,
}
