//! Per-line rules: fixers rewrite a line, checkers accept or reject it.

pub mod codeowners;
pub mod macro_expand;
pub mod substitute;

pub use codeowners::{CodeownersDialect, CodeownersSorter};
pub use macro_expand::{Macro, MacroExpander};
pub use substitute::Substitution;

use crate::error::{TexthooksError, TexthooksResult};
use crate::registry::{Category, CharacterClass};
use crate::render::CharWidth;

/// A line fixer. Never sees more than one line and never manages line
/// terminators; the runner restores a terminator the fixer dropped.
#[derive(Debug, Clone)]
pub enum Fixer {
    Substitute(Substitution),
    MacroExpand(MacroExpander),
    Codeowners(CodeownersSorter),
}

impl Fixer {
    pub fn ligatures() -> TexthooksResult<Self> {
        Ok(Fixer::Substitute(Substitution::new(vec![
            CharacterClass::defaults(Category::Ligature),
        ])?))
    }

    pub fn smartquotes(double: CharacterClass, single: CharacterClass) -> TexthooksResult<Self> {
        Ok(Fixer::Substitute(Substitution::new(vec![double, single])?))
    }

    pub fn spaces(separators: CharacterClass) -> TexthooksResult<Self> {
        Ok(Fixer::Substitute(Substitution::new(vec![separators])?))
    }

    /// Em dashes become `--`, other dashes `-`. At least one of the two
    /// classes must be enabled.
    pub fn unicode_dashes(
        hyphens: CharacterClass,
        emdashes: CharacterClass,
    ) -> TexthooksResult<Self> {
        if hyphens.is_empty() && emdashes.is_empty() {
            return Err(TexthooksError::usage(
                "--hyphen-codepoints and --emdash-codepoints cannot both be empty",
            ));
        }
        Ok(Fixer::Substitute(Substitution::new(vec![emdashes, hyphens])?))
    }

    pub fn macro_expand(macros: Vec<Macro>) -> Self {
        Fixer::MacroExpand(MacroExpander::new(macros))
    }

    pub fn codeowners(dialect: CodeownersDialect) -> Self {
        Fixer::Codeowners(CodeownersSorter::new(dialect))
    }

    pub fn fix_line(&self, line: &str) -> String {
        match self {
            Fixer::Substitute(sub) => sub.apply(line).into_owned(),
            Fixer::MacroExpand(expander) => expander.apply(line),
            Fixer::Codeowners(sorter) => sorter.sort_line(line),
        }
    }

    /// How wide each replaced character becomes, for caret alignment.
    pub fn char_width(&self) -> CharWidth<'_> {
        match self {
            Fixer::Substitute(sub) => CharWidth::Measured(Box::new(move |c| sub.width(c))),
            Fixer::MacroExpand(_) | Fixer::Codeowners(_) => CharWidth::Unit,
        }
    }
}

/// A line predicate; `check_line` returns true when the line passes.
#[derive(Debug, Clone)]
pub enum Checker {
    Forbid {
        check_name: &'static str,
        class: CharacterClass,
    },
}

impl Checker {
    pub fn bidi_controls() -> Self {
        Checker::Forbid {
            check_name: "forbid-bidi-controls",
            class: CharacterClass::defaults(Category::BidiControl),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Checker::Forbid { check_name, .. } => *check_name,
        }
    }

    pub fn check_line(&self, line: &str) -> bool {
        match self {
            Checker::Forbid { class, .. } => !line.chars().any(|c| class.contains(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashes_need_one_class() {
        let empty = || CharacterClass::from_override(Category::Hyphen, Some("")).unwrap();
        let no_emdash = || CharacterClass::from_override(Category::EmDash, Some("")).unwrap();

        let err = Fixer::unicode_dashes(empty(), no_emdash()).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let fixer =
            Fixer::unicode_dashes(empty(), CharacterClass::defaults(Category::EmDash)).unwrap();
        assert_eq!(fixer.fix_line("a\u{2013}b\u{2014}c"), "a\u{2013}b--c");
    }

    #[test]
    fn test_fixers_are_idempotent() {
        let line = "\u{201C}con\u{FB01}g\u{201D}\u{00A0}foo\u{2013}bar\u{2014}baz\n";
        let fixers = vec![
            Fixer::ligatures().unwrap(),
            Fixer::smartquotes(
                CharacterClass::defaults(Category::DoubleQuote),
                CharacterClass::defaults(Category::SingleQuote),
            )
            .unwrap(),
            Fixer::spaces(CharacterClass::defaults(Category::SpaceSeparator)).unwrap(),
            Fixer::unicode_dashes(
                CharacterClass::defaults(Category::Hyphen),
                CharacterClass::defaults(Category::EmDash),
            )
            .unwrap(),
            Fixer::codeowners(CodeownersDialect::Standard),
        ];
        for fixer in fixers {
            let once = fixer.fix_line(line);
            assert_eq!(fixer.fix_line(&once), once, "{:?}", fixer);
        }
    }

    #[test]
    fn test_char_width() {
        let fixer = Fixer::ligatures().unwrap();
        let width = fixer.char_width();
        assert_eq!(width.of('\u{FB04}'), 3);
        assert_eq!(width.of('a'), 1);

        let fixer = Fixer::codeowners(CodeownersDialect::Standard);
        assert_eq!(fixer.char_width().of('\u{FB04}'), 1);
    }

    #[test]
    fn test_bidi_checker() {
        let checker = Checker::bidi_controls();
        assert_eq!(checker.name(), "forbid-bidi-controls");
        assert!(checker.check_line("plain text\n"));
        assert!(!checker.check_line("s = \"x\u{200F}\" * 100\n"));
        assert!(!checker.check_line("\u{061C}"));
    }
}
