//! # Core Models Module
//!
//! This module contains the request-scoped value objects that flow through an assessment.
//!
//! ## Key Components
//!
//! - [`candidate`] - Input specification of a construct candidate (modality, targets, sequence)
//! - [`sequence`] - Canonical, alphabet-validated sequence record
//! - [`finding`] - Localized, kind-tagged observations produced by sequence analysis
//! - [`constraints`] - User-declared manufacturing thresholds
//! - [`blueprint`] - Abstract chain/domain decomposition of a construct
//! - [`result`] - Sub-scores, flags, and suggestions returned to the caller
//!
//! All models are immutable once constructed; determinism of the gate depends on it.

pub mod blueprint;
pub mod candidate;
pub mod constraints;
pub mod finding;
pub mod result;
pub mod sequence;
