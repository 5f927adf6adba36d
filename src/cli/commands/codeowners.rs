use anyhow::Result;
use std::path::PathBuf;

use texthooks::discovery::FileSet;
use texthooks::transform::{CodeownersDialect, Fixer};

use super::Session;
use crate::cli::DialectArg;

pub const DEFAULT_CODEOWNERS: &str = ".github/CODEOWNERS";

pub fn handle(
    session: &mut Session,
    files: Vec<PathBuf>,
    show_changes: bool,
    dialect: Option<DialectArg>,
) -> Result<i32> {
    let dialect = dialect
        .map(CodeownersDialect::from)
        .or(session.config.data.alphabetize_codeowners.dialect)
        .unwrap_or_default();

    let fixer = Fixer::codeowners(dialect);
    session.fix(
        &fixer,
        FileSet::or_default(files, DEFAULT_CODEOWNERS),
        show_changes,
    )
}
