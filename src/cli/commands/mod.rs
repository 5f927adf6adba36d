pub mod bidi;
pub mod codeowners;
pub mod dashes;
pub mod ligatures;
pub mod macro_expand;
pub mod smartquotes;
pub mod spaces;

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Stdout;

use texthooks::config::Config;
use texthooks::discovery::FileSet;
use texthooks::encoding::TextEncoding;
use texthooks::render::{Printer, ReportOptions};
use texthooks::transform::{Checker, Fixer};
use texthooks::TexthooksError;

use super::OutputArgs;

/// Everything a command needs besides its own arguments: the merged
/// configuration, the run's encoding and where to print.
pub struct Session {
    pub config: Config,
    encoding: TextEncoding,
    color: bool,
    printer: Printer<Stdout>,
}

impl Session {
    pub fn load(output: &OutputArgs) -> Result<Self> {
        let config = Config::load_or_default(".").context("Failed to load configuration")?;
        let encoding = config.encoding()?;
        let color = config.color(output.color());
        colored::control::set_override(color);
        tracing::debug!(encoding = encoding.name(), color, "session ready");

        Ok(Self {
            config,
            encoding,
            color,
            printer: Printer::stdout(output.verbosity()),
        })
    }

    pub fn fix(&mut self, fixer: &Fixer, files: FileSet, show_changes: bool) -> Result<i32> {
        let options = ReportOptions {
            show_changes,
            color: self.color,
        };
        let summary =
            texthooks::run_fixer(fixer, files, self.encoding, options, &mut self.printer)?;
        Ok(summary.exit_code())
    }

    pub fn check(&mut self, checker: &Checker, files: FileSet) -> Result<i32> {
        let options = ReportOptions {
            show_changes: false,
            color: self.color,
        };
        let summary =
            texthooks::run_checker(checker, files, self.encoding, options, &mut self.printer)?;
        Ok(summary.exit_code())
    }
}

/// Exit status for a failed command: 2 for usage errors, else 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<TexthooksError>())
        .map_or(1, TexthooksError::exit_code)
}

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!("{} {}", "✗".bright_red().bold(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    match err.chain().find_map(|cause| cause.downcast_ref::<TexthooksError>()) {
        Some(TexthooksError::Usage(_)) => {
            eprintln!("  {} Run with {} for usage", "└".bright_cyan(), "--help".bright_cyan());
        }
        Some(TexthooksError::Encoding { .. }) => {
            eprintln!(
                "  {} Set {} or {} in .texthooks.toml",
                "└".bright_cyan(),
                "LANG".bright_cyan(),
                "encoding".bright_cyan()
            );
        }
        _ => {
            eprintln!(
                "  {} Set {} for more details",
                "└".bright_black(),
                "RUST_LOG=debug".bright_cyan()
            );
        }
    }
}
