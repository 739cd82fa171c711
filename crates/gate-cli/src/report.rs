//! Report rendering for scoring results and blueprints.
//!
//! Rendering lives in the CLI, not the core: the core guarantees the structured result and
//! the byte-exact normalized FASTA record, and everything presentational happens here.

use crate::cli::ReportFormat;
use crate::error::{CliError, Result};
use biogate::core::models::blueprint::Blueprint;
use biogate::core::models::candidate::CandidateSpec;
use biogate::core::models::finding::Severity;
use biogate::core::models::result::GateResult;
use biogate::core::normalize;
use serde_json::json;
use std::fmt::Write;

pub fn render_score(
    spec: &CandidateSpec,
    result: &GateResult,
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Markdown => Ok(score_markdown(spec, result)),
        ReportFormat::Json => score_json(spec, result),
        ReportFormat::Fasta => normalized_fasta(spec),
    }
}

pub fn render_blueprint(
    spec: &CandidateSpec,
    blueprint: &Blueprint,
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Markdown => Ok(blueprint_markdown(spec, blueprint)),
        ReportFormat::Json => {
            let value = json!({
                "project": spec.project_name,
                "modality": spec.modality,
                "chains": blueprint.chains,
                "domains": blueprint.domains,
                "warnings": blueprint.warnings,
            });
            serde_json::to_string_pretty(&value)
                .map_err(|e| CliError::Other(e.into()))
                .map(|mut s| {
                    s.push('\n');
                    s
                })
        }
        ReportFormat::Fasta => Err(CliError::Argument(
            "the fasta format only applies to the score command".to_string(),
        )),
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ️",
        Severity::Warning => "⚠️",
        Severity::Error => "❌",
    }
}

fn score_markdown(spec: &CandidateSpec, result: &GateResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Manufacturability Gate Report");
    let _ = writeln!(out, "\n**Project:** {}", spec.project_name);
    let _ = writeln!(out, "\n## Scoring Summary\n");
    let _ = writeln!(out, "| Metric | Score |");
    let _ = writeln!(out, "|--------|-------|");
    let _ = writeln!(
        out,
        "| **Overall Score** | **{}/100** |",
        result.overall_score
    );
    let _ = writeln!(
        out,
        "| Sequence Synthesis | {}/100 |",
        result.sub_scores.sequence_synth
    );
    let _ = writeln!(
        out,
        "| Assembly Risk | {}/100 |",
        result.sub_scores.assembly_risk
    );
    let _ = writeln!(
        out,
        "| Developability | {}/100 |",
        result.sub_scores.developability
    );
    let _ = writeln!(
        out,
        "| Expression Risk | {}/100 |",
        result.sub_scores.expression_risk
    );

    let _ = writeln!(out, "\n## Design Details\n");
    let _ = writeln!(out, "- **Modality:** {}", spec.modality);
    let _ = writeln!(out, "- **Expression System:** {}", spec.expression_system);
    let targets = if spec.targets.is_empty() {
        "(None)".to_string()
    } else {
        spec.targets.join(", ")
    };
    let _ = writeln!(out, "- **Targets:** {}", targets);
    let _ = writeln!(out, "- **Sequence Type:** {}", spec.sequence_type);
    if let Some(notes) = &spec.notes {
        let _ = writeln!(out, "- **Notes:** {}", notes);
    }

    let _ = writeln!(out, "\n## Flags\n");
    if result.flags.is_empty() {
        let _ = writeln!(out, "No issues detected.");
    } else {
        let _ = writeln!(out, "| Severity | Kind | Span | Detail |");
        let _ = writeln!(out, "|----------|------|------|--------|");
        for flag in &result.flags {
            let span = flag
                .span
                .map_or_else(|| "-".to_string(), |(s, e)| format!("{}..{}", s, e));
            let _ = writeln!(
                out,
                "| {} {} | {} | {} | {} |",
                severity_icon(flag.severity),
                flag.severity,
                flag.kind,
                span,
                flag.detail
            );
        }
    }

    let _ = writeln!(out, "\n## Recommendations\n");
    for (i, suggestion) in result.suggestions.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, suggestion);
    }
    out
}

fn score_json(spec: &CandidateSpec, result: &GateResult) -> Result<String> {
    let value = json!({
        "project": spec.project_name,
        "overall_score": result.overall_score,
        "sub_scores": result.sub_scores,
        "flags": result.flags,
        "suggestions": result.suggestions,
        "summary": {
            "modality": spec.modality,
            "expression_system": spec.expression_system,
            "targets": spec.targets,
            "sequence_type": spec.sequence_type,
        },
    });
    serde_json::to_string_pretty(&value)
        .map_err(|e| CliError::Other(e.into()))
        .map(|mut s| {
            s.push('\n');
            s
        })
}

/// The byte-exact normalized record: `>{project_name}\n{sequence}\n`.
fn normalized_fasta(spec: &CandidateSpec) -> Result<String> {
    let sequence = normalize::normalize(
        &spec.sequence,
        spec.sequence_type.residue_type(),
        &spec.project_name,
    )
    .map_err(biogate::engine::error::GateError::from)?;
    Ok(normalize::normalized_fasta(&spec.project_name, &sequence))
}

fn blueprint_markdown(spec: &CandidateSpec, blueprint: &Blueprint) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Construct Blueprint");
    let _ = writeln!(out, "\n**Project:** {}", spec.project_name);
    let _ = writeln!(out, "**Modality:** {}", spec.modality);
    let _ = writeln!(out, "\n## Chains and Domains\n");
    let _ = writeln!(out, "| Chain | Domain | Span |");
    let _ = writeln!(out, "|-------|--------|------|");
    for domain in &blueprint.domains {
        let span = domain
            .span
            .map_or_else(|| "-".to_string(), |(s, e)| format!("{}..{}", s, e));
        let _ = writeln!(out, "| {} | {} | {} |", domain.chain, domain.name, span);
    }
    if !blueprint.warnings.is_empty() {
        let _ = writeln!(out, "\n## Warnings\n");
        for warning in &blueprint.warnings {
            let _ = writeln!(out, "- {}", warning);
        }
    }
    out
}
