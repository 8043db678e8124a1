//! Output configuration for rendered results

use clap::builder::PossibleValue;
use clap::ValueEnum;

/// Rendering used for a result matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Dense grid, one row per line, values separated by spaces
    #[default]
    Dense,
    /// JSON object with dimensions and the stored in-range entries
    #[cfg(feature = "serde")]
    Json,
}

// Written by hand so `json` is only offered when it can be rendered
impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        #[cfg(feature = "serde")]
        const VARIANTS: &[OutputFormat] = &[OutputFormat::Dense, OutputFormat::Json];
        #[cfg(not(feature = "serde"))]
        const VARIANTS: &[OutputFormat] = &[OutputFormat::Dense];
        VARIANTS
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            OutputFormat::Dense => PossibleValue::new("dense")
                .help("Dense grid, one row per line, values separated by spaces"),
            #[cfg(feature = "serde")]
            OutputFormat::Json => PossibleValue::new("json")
                .help("JSON object with dimensions and the stored in-range entries"),
        })
    }
}

/// Configuration for writing a result matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Output format
    pub format: OutputFormat,
    /// Print a `Result:` line before the matrix
    pub header: bool,
    /// Write a separator after the last value of each dense row
    pub trailing_separator: bool,
}

impl RenderConfig {
    /// Create config for the given format with default options
    pub fn with_format(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Enable or disable the `Result:` header line
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Enable or disable the trailing separator on dense rows
    pub fn with_trailing_separator(mut self, trailing: bool) -> Self {
        self.trailing_separator = trailing;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Dense,
            header: true,
            trailing_separator: false,
        }
    }
}
