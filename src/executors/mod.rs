//! Command executors that handle the actual logic for each command

pub mod query;
pub mod render;
pub mod theme;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Write `content` to the output file, or to stdout when there is none
fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    let mut output_writer: Box<dyn Write> = if let Some(output_path) = output {
        Box::new(BufWriter::new(
            File::create(output_path)
                .into_diagnostic()
                .wrap_err_with(|| {
                    format!("Failed to create output file '{}'", output_path.display())
                })?,
        ))
    } else {
        Box::new(io::stdout())
    };

    output_writer
        .write_all(content.as_bytes())
        .and_then(|()| output_writer.flush())
        .into_diagnostic()
        .wrap_err("Failed to write output")?;

    if let Some(output_path) = output {
        eprintln!(
            "{} Written to {}",
            style("✓").green(),
            style(output_path.display()).bold()
        );
    }

    Ok(())
}
