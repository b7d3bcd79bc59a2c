//! Summary command implementation.

use crate::cli::SummaryArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the summary command.
pub async fn execute_summary(args: SummaryArgs, formatter: &Formatter) -> Result<()> {
    let entries = fnol_processor::load_summary(&args.output_dir).await?;
    println!("{}", formatter.format_summary(&entries)?);
    Ok(())
}
