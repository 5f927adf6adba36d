//! Per-file execution of a line fixer or a line checker.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::atomic::AtomicFile;
use crate::encoding::TextEncoding;
use crate::error::{ErrorContext, TexthooksError, TexthooksResult};
use crate::ledger::{ChangeLedger, CheckLedger};
use crate::render::Printer;

/// Runs one transform over one file at a time, with the encoding chosen for
/// the whole run.
pub struct FileRunner<'p, W: Write> {
    encoding: TextEncoding,
    printer: &'p mut Printer<W>,
}

impl<'p, W: Write> FileRunner<'p, W> {
    pub fn new(encoding: TextEncoding, printer: &'p mut Printer<W>) -> Self {
        Self { encoding, printer }
    }

    /// Apply `fixer` to every line of `path`, recording each changed line.
    /// The file is rewritten only when at least one line changed; the
    /// return value says whether it was.
    pub fn run_line_fixer<F>(
        &mut self,
        ledger: &mut ChangeLedger,
        fixer: F,
        path: &Path,
    ) -> TexthooksResult<bool>
    where
        F: Fn(&str) -> String,
    {
        self.printer
            .partial(2, format!("checking {}...", path.display()))?;
        let content = self.read(path)?;

        let mut fixed = String::with_capacity(content.len());
        let mut changed = false;
        for (idx, line) in content.split_inclusive('\n').enumerate() {
            let updated = restore_terminator(line, fixer(line));
            if updated != line {
                ledger.add(path, line, updated.as_str(), idx + 1);
                changed = true;
            }
            fixed.push_str(&updated);
        }

        if changed {
            let written = self
                .encoding
                .encode(&fixed, path)
                .and_then(|bytes| AtomicFile::new(path)?.write(&bytes));
            self.end_line_on_error(written)?;
            tracing::debug!(path = %path.display(), "rewrote file");
            self.printer.line(2, "fail")?;
        } else {
            tracing::debug!(path = %path.display(), "no changes");
            self.printer.line(2, "ok")?;
        }
        Ok(changed)
    }

    /// Evaluate `check` on every line of `path` and record the failing line
    /// numbers. Never writes. Returns whether any line failed.
    pub fn run_line_checker<P>(
        &mut self,
        ledger: &mut CheckLedger,
        check: P,
        path: &Path,
    ) -> TexthooksResult<bool>
    where
        P: Fn(&str) -> bool,
    {
        self.printer
            .partial(2, format!("checking {}...", path.display()))?;
        let content = self.read(path)?;

        let mut failed = false;
        for (idx, line) in content.split_inclusive('\n').enumerate() {
            if !check(line) {
                ledger.add(path, idx + 1);
                failed = true;
            }
        }

        tracing::debug!(path = %path.display(), failed, "checked file");
        self.printer.line(2, if failed { "fail" } else { "ok" })?;
        Ok(failed)
    }

    fn read(&mut self, path: &Path) -> TexthooksResult<String> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.printer
                    .line(1, format!("fail, FileNotFound: {}", path.display()))?;
                return Err(TexthooksError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(err) => {
                let result: TexthooksResult<String> =
                    Err(err).with_path_context(|| format!("Failed to read {}", path.display()));
                return self.end_line_on_error(result);
            }
        };
        let decoded = self.encoding.decode(bytes, path);
        self.end_line_on_error(decoded)
    }

    /// Close the pending `checking ...` progress line before an error leaves
    /// the file.
    fn end_line_on_error<T>(&mut self, result: TexthooksResult<T>) -> TexthooksResult<T> {
        if result.is_err() {
            self.printer.line(2, "fail")?;
        }
        result
    }
}

/// Put back the terminator of `original` if the fixer dropped it.
fn restore_terminator(original: &str, mut updated: String) -> String {
    if !original.ends_with('\n') || updated.ends_with('\n') {
        return updated;
    }
    if original.ends_with("\r\n") && !updated.ends_with('\r') {
        updated.push('\r');
    }
    updated.push('\n');
    updated
}
