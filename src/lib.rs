pub mod atomic;
pub mod config;
pub mod discovery;
pub mod encoding;
pub mod error;
pub mod hook;
pub mod ledger;
pub mod registry;
pub mod render;
pub mod runner;
pub mod transform;

pub use error::{TexthooksError, TexthooksResult};
pub use hook::{run_checker, run_fixer, RunSummary};
