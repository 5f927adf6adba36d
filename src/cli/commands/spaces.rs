use anyhow::Result;

use texthooks::discovery::FileSet;
use texthooks::registry::{Category, CharacterClass};
use texthooks::transform::Fixer;

use super::Session;
use crate::cli::FixArgs;

pub fn handle(
    session: &mut Session,
    fix: FixArgs,
    separator_codepoints: Option<String>,
) -> Result<i32> {
    let separators = CharacterClass::from_override(
        Category::SpaceSeparator,
        separator_codepoints
            .as_deref()
            .or(session.config.data.fix_spaces.separator_codepoints.as_deref()),
    )?;

    let fixer = Fixer::spaces(separators)?;
    session.fix(&fixer, FileSet::from_args(fix.files), fix.show_changes)
}
