use anyhow::Result;

use texthooks::discovery::FileSet;
use texthooks::registry::{Category, CharacterClass};
use texthooks::transform::Fixer;

use super::Session;
use crate::cli::FixArgs;

pub fn handle(
    session: &mut Session,
    fix: FixArgs,
    double_quote_codepoints: Option<String>,
    single_quote_codepoints: Option<String>,
) -> Result<i32> {
    let configured = &session.config.data.fix_smartquotes;
    let double = CharacterClass::from_override(
        Category::DoubleQuote,
        double_quote_codepoints
            .as_deref()
            .or(configured.double_quote_codepoints.as_deref()),
    )?;
    let single = CharacterClass::from_override(
        Category::SingleQuote,
        single_quote_codepoints
            .as_deref()
            .or(configured.single_quote_codepoints.as_deref()),
    )?;

    let fixer = Fixer::smartquotes(double, single)?;
    session.fix(&fixer, FileSet::from_args(fix.files), fix.show_changes)
}
