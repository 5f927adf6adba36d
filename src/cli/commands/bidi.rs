use anyhow::Result;
use std::path::PathBuf;

use texthooks::discovery::FileSet;
use texthooks::transform::Checker;

use super::Session;

pub fn handle(session: &mut Session, files: Vec<PathBuf>) -> Result<i32> {
    session.check(&Checker::bidi_controls(), FileSet::from_args(files))
}
