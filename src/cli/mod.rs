pub mod commands;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use texthooks::transform::CodeownersDialect;

#[derive(Parser)]
#[command(name = "texthooks")]
#[command(
    about = "Fixers and checkers for cosmetic Unicode characters in text files",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub output: OutputArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    #[arg(long, global = true, value_enum, help = "Colorize output [default: on]")]
    pub color: Option<ColorChoice>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Print more; repeatable")]
    pub verbose: u8,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Print less; repeatable")]
    pub quiet: u8,
}

impl OutputArgs {
    /// Net verbosity: 1, plus one per `-v`, minus one per `-q`.
    pub fn verbosity(&self) -> u8 {
        (1 + i16::from(self.verbose) - i16::from(self.quiet)).clamp(0, i16::from(u8::MAX)) as u8
    }

    pub fn color(&self) -> Option<bool> {
        self.color.map(|choice| choice == ColorChoice::On)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    On,
    Off,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectArg {
    Standard,
    Gitlab,
}

impl From<DialectArg> for CodeownersDialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Standard => CodeownersDialect::Standard,
            DialectArg::Gitlab => CodeownersDialect::Gitlab,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct FixArgs {
    #[arg(help = "Files to fix (defaults to all text files under the current directory)")]
    pub files: Vec<PathBuf>,

    #[arg(long, help = "Show each changed line, not just the file names")]
    pub show_changes: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Replace smart quotes with straight ASCII quotes")]
    FixSmartquotes {
        #[command(flatten)]
        fix: FixArgs,
        #[arg(
            long,
            value_name = "CODEPOINTS",
            help = "Comma-separated hex codepoints to treat as double quotes; empty disables"
        )]
        double_quote_codepoints: Option<String>,
        #[arg(
            long,
            value_name = "CODEPOINTS",
            help = "Comma-separated hex codepoints to treat as single quotes; empty disables"
        )]
        single_quote_codepoints: Option<String>,
    },

    #[command(about = "Expand typographic ligatures into their letters")]
    FixLigatures {
        #[command(flatten)]
        fix: FixArgs,
    },

    #[command(about = "Replace exotic space separators with a plain space")]
    FixSpaces {
        #[command(flatten)]
        fix: FixArgs,
        #[arg(
            long,
            value_name = "CODEPOINTS",
            help = "Comma-separated hex codepoints to treat as spaces; empty disables"
        )]
        separator_codepoints: Option<String>,
    },

    #[command(about = "Replace Unicode dashes with '-' and em dashes with '--'")]
    FixUnicodeDashes {
        #[command(flatten)]
        fix: FixArgs,
        #[arg(
            long,
            value_name = "CODEPOINTS",
            help = "Comma-separated hex codepoints to replace with '-'; empty disables"
        )]
        hyphen_codepoints: Option<String>,
        #[arg(
            long,
            value_name = "CODEPOINTS",
            help = "Comma-separated hex codepoints to replace with '--'; empty disables"
        )]
        emdash_codepoints: Option<String>,
    },

    #[command(about = "Fail on lines containing bidirectional control characters")]
    ForbidBidiControls {
        #[arg(help = "Files to check (defaults to all text files under the current directory)")]
        files: Vec<PathBuf>,
    },

    #[command(about = "Expand PREFIX<word> macros using a format string with $VALUE")]
    MacroExpand {
        #[command(flatten)]
        fix: FixArgs,
        #[arg(
            long = "macro",
            num_args = 2,
            value_names = ["PREFIX", "FORMAT"],
            action = ArgAction::Append,
            help = "A macro prefix and its format string; repeatable"
        )]
        macros: Vec<String>,
    },

    #[command(about = "Alphabetize the owners of each rule in a CODEOWNERS file")]
    AlphabetizeCodeowners {
        #[arg(help = "CODEOWNERS files [default: .github/CODEOWNERS]")]
        files: Vec<PathBuf>,
        #[arg(long, help = "Show each changed line, not just the file names")]
        show_changes: bool,
        #[arg(long, value_enum, help = "CODEOWNERS syntax [default: standard]")]
        dialect: Option<DialectArg>,
    },
}
