use anyhow::Result;

use texthooks::discovery::FileSet;
use texthooks::transform::{Fixer, Macro};

use super::Session;
use crate::cli::FixArgs;

/// `--macro` pairs from the command line replace the configured list.
pub fn handle(session: &mut Session, fix: FixArgs, macros: Vec<String>) -> Result<i32> {
    let macros = if macros.is_empty() {
        session
            .config
            .data
            .macro_expand
            .macros
            .iter()
            .map(|m| Macro::new(m.prefix.as_str(), m.format.as_str()))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        macros
            .chunks(2)
            .map(|pair| Macro::new(pair[0].as_str(), pair.get(1).map_or("", String::as_str)))
            .collect::<Result<Vec<_>, _>>()?
    };

    let fixer = Fixer::macro_expand(macros);
    session.fix(&fixer, FileSet::from_args(fix.files), fix.show_changes)
}
