// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser, ValueHint};
use inspect_engine::options::Target;

use super::value_enum::{CliLogLevel, CliOutputFormat, ColorChoice};

const USAGE: &str = "\
inspect -i <file_path> [-h] [-f format] [-l log_file] [-v]
       inspect -a [directory_path] [-r] [-h] [-f format] [-l log_file] [-v]
       inspect -? | --help";

/// Top-level CLI arguments parsed via clap.
///
/// `-h` means `--human`, so clap's own help flag is replaced by `-?/--help`.
#[derive(Parser, Debug)]
#[command(
    name = "inspect",
    version = crate::VERSION,
    about = "Display inode metadata for a file or for every entry of a directory",
    override_usage = USAGE,
    disable_help_flag = true,
    group(
        ArgGroup::new("mode")
            .args(["inode", "all"])
            .multiple(false)
    )
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Display detailed inode information for the specified file.
    #[arg(short = 'i', long = "inode", value_name = "FILE_PATH", value_hint = ValueHint::FilePath)]
    pub inode: Option<PathBuf>,

    /// Display inode information for all files within the specified directory (default: .).
    #[arg(
        short = 'a',
        long = "all",
        value_name = "DIRECTORY_PATH",
        num_args = 0..=1,
        default_missing_value = ".",
        value_hint = ValueHint::DirPath
    )]
    pub all: Option<PathBuf>,

    /// Recursively list all files in directories.
    #[arg(short = 'r', long, requires = "all")]
    pub recursive: bool,

    /// Output sizes in KB/MB/GB and dates in human-readable form.
    #[arg(short = 'h', long)]
    pub human: bool,

    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: CliOutputFormat,

    /// Log operations to the specified file (appended, created if absent).
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE", value_hint = ValueHint::FilePath)]
    pub log: Option<PathBuf>,

    /// Minimum severity written to the log file [default: info, debug with -v].
    #[arg(short = 'L', long = "log-level", value_enum)]
    pub log_level: Option<CliLogLevel>,

    /// Enable verbose output.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Visit directory entries in file-name order.
    #[arg(short = 's', long)]
    pub sort: bool,

    /// When to color text output.
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Display this help and exit.
    #[arg(short = '?', long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Args {
    /// The selected mode, or `None` when neither `-i` nor `-a` was given.
    pub fn target(&self) -> Option<Target> {
        self.inode
            .clone()
            .map(Target::File)
            .or_else(|| self.all.clone().map(Target::Directory))
    }
}
