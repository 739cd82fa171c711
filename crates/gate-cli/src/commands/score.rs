use crate::cli::ScoreArgs;
use crate::error::Result;
use crate::{input, report};
use biogate::core::tables::ReferenceTables;
use biogate::workflows;
use tracing::info;

pub fn run(args: ScoreArgs) -> Result<()> {
    let spec = input::load_candidate(&args.input)?;
    let constraints = input::load_constraints(args.constraints.as_deref())?;
    let tables = ReferenceTables::default();

    info!("Invoking the core scoring workflow...");
    let result = workflows::score(&spec, &constraints, &tables)?;
    info!(
        overall_score = result.overall_score,
        flags = result.flags.len(),
        "Scoring workflow finished."
    );

    let rendered = report::render_score(&spec, &result, args.format)?;
    crate::commands::emit(&rendered, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ReportFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn candidate_file() -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(
            br#"
            project_name = "her2-lead"
            modality = "VHH_bispecific"
            targets = ["HER2", "CD3"]
            expression_system = "mammalian"
            sequence_type = "protein"
            sequence = "MVHLTPEEKSAVTALWGKVNVDEVGGEALGRLLVVYPWTQR"
            "#,
        )
        .unwrap();
        file
    }

    #[test]
    fn markdown_report_lands_in_the_output_file() {
        let input = candidate_file();
        let output = NamedTempFile::new().unwrap();
        run(ScoreArgs {
            input: input.path().to_path_buf(),
            constraints: None,
            format: ReportFormat::Markdown,
            output: Some(output.path().to_path_buf()),
        })
        .unwrap();

        let report = std::fs::read_to_string(output.path()).unwrap();
        assert!(report.contains("# Manufacturability Gate Report"));
        assert!(report.contains("**Project:** her2-lead"));
        assert!(report.contains("## Scoring Summary"));
    }

    #[test]
    fn json_report_round_trips_through_the_output_file() {
        let input = candidate_file();
        let output = NamedTempFile::new().unwrap();
        run(ScoreArgs {
            input: input.path().to_path_buf(),
            constraints: None,
            format: ReportFormat::Json,
            output: Some(output.path().to_path_buf()),
        })
        .unwrap();

        let report = std::fs::read_to_string(output.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["project"], "her2-lead");
        assert!(value["overall_score"].is_number());
        assert!(value["flags"].is_array());
    }

    #[test]
    fn missing_input_file_fails_with_an_io_error() {
        let output = NamedTempFile::new().unwrap();
        let err = run(ScoreArgs {
            input: "/nonexistent/candidate.toml".into(),
            constraints: None,
            format: ReportFormat::Markdown,
            output: Some(output.path().to_path_buf()),
        })
        .unwrap_err();
        assert!(matches!(err, crate::error::CliError::Io(_)));
    }
}
