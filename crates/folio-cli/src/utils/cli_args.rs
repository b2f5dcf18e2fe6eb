use clap::Args;
use is_terminal::IsTerminal;

use crate::output::OutputFormat;

/// Shared clap argument for commands that accept an output format.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatArg {
    /// Output format (`--format` / `-f`)
    #[arg(short = 'f', long = "format", value_enum, env = "FOLIO_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,
}

impl FormatArg {
    /// Returns the effective output format. If output is piped and no format
    /// is specified, defaults to JSON for machine readability.
    #[must_use]
    pub fn resolve(&self) -> OutputFormat {
        self.resolve_for(std::io::stdout().is_terminal())
    }

    /// Same as [`FormatArg::resolve`] with the terminal check supplied.
    #[must_use]
    pub fn resolve_for(&self, stdout_is_terminal: bool) -> OutputFormat {
        match self.format {
            Some(format) => format,
            None if stdout_is_terminal => OutputFormat::Text,
            None => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_format_wins() {
        let arg = FormatArg {
            format: Some(OutputFormat::Jsonl),
        };
        assert_eq!(arg.resolve_for(true), OutputFormat::Jsonl);
        assert_eq!(arg.resolve_for(false), OutputFormat::Jsonl);
    }

    #[test]
    fn test_default_depends_on_terminal() {
        let arg = FormatArg::default();
        assert_eq!(arg.resolve_for(true), OutputFormat::Text);
        assert_eq!(arg.resolve_for(false), OutputFormat::Json);
    }
}
