//! Process command implementation.

use crate::cli::ProcessArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use fnol_processor::{BatchRunner, FnolProcessor};
use tracing::debug;

/// Execute the process command.
pub async fn execute_process(args: ProcessArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if !args.input_dir.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "Input directory '{}' does not exist",
            args.input_dir.display()
        )));
    }

    debug!(
        input = %args.input_dir.display(),
        output = %args.output_dir.display(),
        "running batch"
    );

    let processor = FnolProcessor::new(config.processing.clone())?;
    let runner = BatchRunner::new(processor);
    let summary = runner.run(&args.input_dir, &args.output_dir).await?;

    println!("{}", formatter.format_batch(&summary)?);

    if formatter.format() == OutputFormat::Table {
        println!(
            "{}",
            formatter.success(&format!("Results saved to {}", args.output_dir.display()))
        );
    }

    Ok(())
}
