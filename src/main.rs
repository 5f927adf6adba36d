mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands::{self, Session};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries the reports
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match run_command(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            commands::display_error(&err);
            std::process::exit(commands::exit_code(&err));
        }
    }
}

fn run_command(cli: cli::Cli) -> Result<i32> {
    use cli::Commands;

    let mut session = Session::load(&cli.output)?;

    match cli.command {
        Commands::FixSmartquotes {
            fix,
            double_quote_codepoints,
            single_quote_codepoints,
        } => commands::smartquotes::handle(
            &mut session,
            fix,
            double_quote_codepoints,
            single_quote_codepoints,
        ),
        Commands::FixLigatures { fix } => commands::ligatures::handle(&mut session, fix),
        Commands::FixSpaces {
            fix,
            separator_codepoints,
        } => commands::spaces::handle(&mut session, fix, separator_codepoints),
        Commands::FixUnicodeDashes {
            fix,
            hyphen_codepoints,
            emdash_codepoints,
        } => commands::dashes::handle(&mut session, fix, hyphen_codepoints, emdash_codepoints),
        Commands::ForbidBidiControls { files } => commands::bidi::handle(&mut session, files),
        Commands::MacroExpand { fix, macros } => {
            commands::macro_expand::handle(&mut session, fix, macros)
        }
        Commands::AlphabetizeCodeowners {
            files,
            show_changes,
            dialect,
        } => commands::codeowners::handle(&mut session, files, show_changes, dialect),
    }
}
