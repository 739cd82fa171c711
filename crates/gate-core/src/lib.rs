//! # Biogate Core Library
//!
//! A deterministic manufacturability gate for biologic construct designs: it evaluates a
//! protein or DNA sequence plus construct metadata and produces an auditable score, a set of
//! explainable flags, improvement suggestions, and an abstract chain/domain blueprint.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation
//! of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`NormalizedSequence`,
//!   `Finding`, `Blueprint`), the pure sequence-analysis scans (GC windows, homopolymers,
//!   k-mer repeats, hairpin proxies, motif search), and the static reference tables
//!   (restriction-site recognition sequences, expression-system liability weights).
//!
//! - **[`engine`]: The Logic Core.** Maps a construct modality to its chain/domain blueprint
//!   and aggregates analysis findings into sub-scores through named, auditable penalty tables.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer. It ties
//!   the `engine` and `core` together to execute a complete assessment: validate, normalize,
//!   analyze, map, and score. It provides a simple and powerful entry point for end-users of
//!   the library.
//!
//! Every entry point is a pure function of its inputs: identical input produces a
//! byte-identical result, which is the property that makes the gate trustworthy for audit.

pub mod core;
pub mod engine;
pub mod workflows;
