//! One complete tool run: every file through the runner, then the report.

use std::io::Write;
use std::path::PathBuf;

use crate::encoding::TextEncoding;
use crate::error::{TexthooksError, TexthooksResult};
use crate::ledger::{ChangeLedger, CheckLedger};
use crate::render::{CharWidth, DiffRenderer, Printer, ReportOptions};
use crate::runner::FileRunner;
use crate::transform::{Checker, Fixer};

/// What a run found, for choosing the exit status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Some file was changed, or some line failed a check.
    pub findings: bool,
    pub missing_files: Vec<PathBuf>,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        !self.findings && self.missing_files.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }
}

/// Fix every file in `files`, then report the changes.
pub fn run_fixer<I, W>(
    fixer: &Fixer,
    files: I,
    encoding: TextEncoding,
    options: ReportOptions,
    printer: &mut Printer<W>,
) -> TexthooksResult<RunSummary>
where
    I: IntoIterator<Item = PathBuf>,
    W: Write,
{
    let mut ledger = ChangeLedger::new();
    let mut missing_files = Vec::new();

    let mut runner = FileRunner::new(encoding, printer);
    for path in files {
        match runner.run_line_fixer(&mut ledger, |line| fixer.fix_line(line), &path) {
            Ok(_) => {}
            Err(TexthooksError::FileNotFound { path }) => missing_files.push(path),
            Err(err) => return Err(err),
        }
    }

    if !ledger.is_empty() {
        DiffRenderer::new(options, fixer.char_width()).render_changes(printer, &ledger)?;
    }
    tracing::debug!(
        changed = ledger.len(),
        missing = missing_files.len(),
        "fixer run finished"
    );

    Ok(RunSummary {
        findings: !ledger.is_empty(),
        missing_files,
    })
}

/// Check every file in `files`, then report the failing lines.
pub fn run_checker<I, W>(
    checker: &Checker,
    files: I,
    encoding: TextEncoding,
    options: ReportOptions,
    printer: &mut Printer<W>,
) -> TexthooksResult<RunSummary>
where
    I: IntoIterator<Item = PathBuf>,
    W: Write,
{
    let mut ledger = CheckLedger::new();
    let mut missing_files = Vec::new();

    let mut runner = FileRunner::new(encoding, printer);
    for path in files {
        match runner.run_line_checker(&mut ledger, |line| checker.check_line(line), &path) {
            Ok(_) => {}
            Err(TexthooksError::FileNotFound { path }) => missing_files.push(path),
            Err(err) => return Err(err),
        }
    }

    if !ledger.is_empty() {
        DiffRenderer::new(options, CharWidth::Unit).render_failures(
            printer,
            &ledger,
            checker.name(),
        )?;
    }
    tracing::debug!(
        failed = ledger.len(),
        missing = missing_files.len(),
        "checker run finished"
    );

    Ok(RunSummary {
        findings: !ledger.is_empty(),
        missing_files,
    })
}
