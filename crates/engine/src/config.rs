use crate::options::{OutputFormat, Target};
use derive_builder::Builder;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub target: Target,

    #[builder(default)]
    pub recursive: bool,
    #[builder(default)]
    pub human: bool,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub verbose: bool,
    /// ANSI colors in text output; already resolved against the terminal.
    #[builder(default)]
    pub color: bool,
    /// Visit siblings in file-name order instead of filesystem order.
    #[builder(default)]
    pub sort_entries: bool,

    #[builder(default)]
    pub log_path: Option<PathBuf>,
    #[builder(default = "LevelFilter::Info")]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: Target::default(),
            recursive: false,
            human: false,
            format: OutputFormat::Text,
            verbose: false,
            color: false,
            sort_entries: false,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}
