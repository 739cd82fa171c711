use crate::cli::BlueprintArgs;
use crate::error::Result;
use crate::{input, report};
use biogate::workflows;
use tracing::info;

pub fn run(args: BlueprintArgs) -> Result<()> {
    let spec = input::load_candidate(&args.input)?;

    info!("Invoking the core blueprint workflow...");
    let blueprint = workflows::blueprint(&spec)?;
    info!(
        chains = blueprint.chains.len(),
        domains = blueprint.total_domains(),
        "Blueprint workflow finished."
    );

    let rendered = report::render_blueprint(&spec, &blueprint, args.format)?;
    crate::commands::emit(&rendered, args.output.as_deref())
}
