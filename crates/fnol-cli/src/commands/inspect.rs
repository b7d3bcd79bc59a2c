//! Inspect command implementation.

use crate::cli::InspectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use fnol_processor::FnolProcessor;

/// Execute the inspect command.
pub async fn execute_inspect(args: InspectArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let processor = FnolProcessor::new(config.processing.clone())?;
    let result = processor.process_document(&args.file).await?;

    let name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    println!("{}", formatter.format_result(&name, &result)?);
    Ok(())
}
