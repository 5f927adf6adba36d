use anyhow::Result;

use texthooks::discovery::FileSet;
use texthooks::transform::Fixer;

use super::Session;
use crate::cli::FixArgs;

pub fn handle(session: &mut Session, fix: FixArgs) -> Result<i32> {
    let fixer = Fixer::ligatures()?;
    session.fix(&fixer, FileSet::from_args(fix.files), fix.show_changes)
}
