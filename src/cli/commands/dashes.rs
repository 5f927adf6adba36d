use anyhow::Result;

use texthooks::discovery::FileSet;
use texthooks::registry::{Category, CharacterClass};
use texthooks::transform::Fixer;

use super::Session;
use crate::cli::FixArgs;

pub fn handle(
    session: &mut Session,
    fix: FixArgs,
    hyphen_codepoints: Option<String>,
    emdash_codepoints: Option<String>,
) -> Result<i32> {
    let configured = &session.config.data.fix_unicode_dashes;
    let hyphens = CharacterClass::from_override(
        Category::Hyphen,
        hyphen_codepoints
            .as_deref()
            .or(configured.hyphen_codepoints.as_deref()),
    )?;
    let emdashes = CharacterClass::from_override(
        Category::EmDash,
        emdash_codepoints
            .as_deref()
            .or(configured.emdash_codepoints.as_deref()),
    )?;

    // Fails with a usage error before any file is read when both are empty.
    let fixer = Fixer::unicode_dashes(hyphens, emdashes)?;
    session.fix(&fixer, FileSet::from_args(fix.files), fix.show_changes)
}
