//! Command-line interface for the `spmat` binary

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use spmat_core::Operation;
use tracing::info;

use crate::prompt::Prompter;
use crate::{read_matrix, write_matrix, OutputFormat, RenderConfig};

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(
    about = "Add, subtract or multiply two sparse matrices stored as coordinate lists"
)]
pub struct Cli {
    /// Operation to perform: add, subtract or multiply (prompted if omitted)
    pub operation: Option<String>,

    /// Path to the first matrix file (prompted if omitted)
    pub lhs: Option<PathBuf>,

    /// Path to the second matrix file (prompted if omitted)
    pub rhs: Option<PathBuf>,

    /// Output format for the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Dense)]
    pub format: OutputFormat,

    /// Write a space after the last value of each row
    #[arg(long)]
    pub trailing_space: bool,

    /// Omit the `Result:` line
    #[arg(long)]
    pub no_header: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Rendering options selected by the flags
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::with_format(self.format)
            .with_header(!self.no_header)
            .with_trailing_separator(self.trailing_space)
    }
}

/// Load both operands, apply the operation and write the result to `output`
///
/// Values missing from the command line are prompted for on `output` and read
/// from `input`. Both files are loaded before the operation name is checked.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, output: W) -> anyhow::Result<()> {
    let mut prompter = Prompter::new(input, output);

    let operation = match &cli.operation {
        Some(op) => op.clone(),
        None => prompter
            .ask("Enter the operation (add/subtract/multiply): ")
            .context("Failed to read operation")?,
    };
    let lhs_path = match &cli.lhs {
        Some(path) => path.clone(),
        None => prompter
            .ask("Enter the path for the first matrix file: ")
            .context("Failed to read first matrix path")?
            .into(),
    };
    let rhs_path = match &cli.rhs {
        Some(path) => path.clone(),
        None => prompter
            .ask("Enter the path for the second matrix file: ")
            .context("Failed to read second matrix path")?
            .into(),
    };

    let lhs = read_matrix(&lhs_path)?;
    let rhs = read_matrix(&rhs_path)?;

    let operation: Operation = operation.parse()?;
    info!(
        "Computing {operation} of {:?} and {:?}",
        lhs.dimensions(),
        rhs.dimensions()
    );
    let result = operation.apply(&lhs, &rhs)?;

    let output = prompter.into_output();
    write_matrix(output, &result, &cli.render_config()).context("Failed to write result")?;

    Ok(())
}
