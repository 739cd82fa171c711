pub mod blueprint;
pub mod score;

use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Writes a rendered report to `output`, or prints it to stdout when no path is given.
pub(crate) fn emit(report: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, report)?;
            info!("Report written to {:?}.", path);
            println!("Report written to: {}", path.display());
        }
        None => print!("{}", report),
    }
    Ok(())
}
