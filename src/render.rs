//! Human-readable reports for a finished run.
//!
//! A fixer report lists every changed file and, with `show_changes`, each
//! changed line as a removal, an addition and a caret line marking the
//! columns that differ:
//!
//! ```text
//! Changes were made in these files:
//!   notes.txt
//!   line 2:
//!     -don＇t write like this
//!     +don't write like this
//!         ^
//! ```
//!
//! When a replacement is wider than the character it replaces (ligatures,
//! em dashes), the original and the updated line each get their own caret
//! line.

use colored::{ColoredString, Colorize};
use std::fmt::Display;
use std::io::{self, Write};

use crate::ledger::{ChangeLedger, CheckLedger};

/// Width of the text a replaced character turns into.
pub enum CharWidth<'a> {
    /// Every replacement is one character wide.
    Unit,
    Measured(Box<dyn Fn(char) -> usize + 'a>),
}

impl Default for CharWidth<'_> {
    fn default() -> Self {
        CharWidth::Unit
    }
}

impl CharWidth<'_> {
    pub fn of(&self, c: char) -> usize {
        match self {
            CharWidth::Unit => 1,
            CharWidth::Measured(width) => width(c),
        }
    }
}

/// Column positions that differ, in original and in updated coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaretMarks {
    pub original: Vec<usize>,
    pub updated: Vec<usize>,
}

impl CaretMarks {
    pub fn is_one_to_one(&self) -> bool {
        self.original == self.updated
    }
}

pub fn caret_marks(original: &str, updated: &str, width: &CharWidth<'_>) -> CaretMarks {
    let updated: Vec<char> = updated.chars().collect();
    let mut marks = CaretMarks::default();
    let mut shift: isize = 0;

    for (idx, c) in original.chars().enumerate() {
        let pos = (idx as isize + shift).max(0) as usize;
        if updated.get(pos) == Some(&c) {
            continue;
        }
        marks.original.push(idx);

        let replaced_width = width.of(c);
        marks
            .updated
            .extend((pos..pos + replaced_width).take_while(|p| *p < updated.len()));
        shift += replaced_width as isize - 1;
    }

    marks
}

/// Render positions (ascending) as `^` marks separated by spaces.
pub fn caret_line(positions: &[usize]) -> String {
    let mut line = String::new();
    let mut cursor = 0;
    for &pos in positions {
        if pos < cursor {
            continue;
        }
        line.extend(std::iter::repeat(' ').take(pos - cursor));
        line.push('^');
        cursor = pos + 1;
    }
    line
}

/// Verbosity-gated writer for everything the tools print.
pub struct Printer<W: Write> {
    out: W,
    verbosity: u8,
}

impl Printer<io::Stdout> {
    pub fn stdout(verbosity: u8) -> Self {
        Self::new(io::stdout(), verbosity)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, verbosity: u8) -> Self {
        Self { out, verbosity }
    }

    pub fn line(&mut self, level: u8, message: impl Display) -> io::Result<()> {
        if self.verbosity < level {
            return Ok(());
        }
        writeln!(self.out, "{}", message)
    }

    /// Print without a newline, for `checking <file>...` style progress.
    pub fn partial(&mut self, level: u8, message: impl Display) -> io::Result<()> {
        if self.verbosity < level {
            return Ok(());
        }
        write!(self.out, "{}", message)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub show_changes: bool,
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_changes: false,
            color: true,
        }
    }
}

pub struct DiffRenderer<'a> {
    options: ReportOptions,
    width: CharWidth<'a>,
}

impl<'a> DiffRenderer<'a> {
    pub fn new(options: ReportOptions, width: CharWidth<'a>) -> Self {
        Self { options, width }
    }

    fn paint(&self, text: String, style: impl Fn(&str) -> ColoredString) -> String {
        if self.options.color {
            style(&text).to_string()
        } else {
            text
        }
    }

    pub fn render_changes<W: Write>(
        &self,
        printer: &mut Printer<W>,
        ledger: &ChangeLedger,
    ) -> io::Result<()> {
        printer.line(1, "Changes were made in these files:")?;
        for (file, changes) in ledger.entries() {
            let name = self.paint(file.display().to_string(), |s| s.yellow());
            printer.line(1, format!("  {}", name))?;
            if !self.options.show_changes {
                continue;
            }

            for change in changes {
                let original = change.original.trim_end();
                let updated = change.updated.trim_end();
                let marks = caret_marks(original, updated, &self.width);

                let removed = self.paint(format!("-{}", original), |s| s.bright_red());
                let added = self.paint(format!("+{}", updated), |s| s.bright_green());
                let original_carets = format!(" {}", caret_line(&marks.original));
                let original_carets = self.paint(original_carets, |s| s.bright_cyan());

                printer.line(1, format!("  line {}:", change.lineno))?;
                printer.line(1, format!("    {}", removed))?;
                if marks.is_one_to_one() {
                    printer.line(1, format!("    {}", added))?;
                    printer.line(1, format!("    {}", original_carets))?;
                } else {
                    let updated_carets = format!(" {}", caret_line(&marks.updated));
                    let updated_carets = self.paint(updated_carets, |s| s.bright_cyan());
                    printer.line(1, format!("    {}", original_carets))?;
                    printer.line(1, format!("    {}", added))?;
                    printer.line(1, format!("    {}", updated_carets))?;
                }
            }
        }
        Ok(())
    }

    pub fn render_failures<W: Write>(
        &self,
        printer: &mut Printer<W>,
        ledger: &CheckLedger,
        check_name: &str,
    ) -> io::Result<()> {
        printer.line(1, format!("These files failed the {} check:", check_name))?;
        for (file, linenos) in ledger.entries() {
            let name = self.paint(file.display().to_string(), |s| s.yellow());
            printer.line(1, format!("  {}", name))?;

            let label = if linenos.len() == 1 { "lineno" } else { "line numbers" };
            let joined = linenos
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(",");
            printer.line(1, format!("  {}: {}", label, joined))?;
        }
        Ok(())
    }
}
