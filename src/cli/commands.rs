use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::MergeConfig;
use crate::merger::merge;

#[derive(Parser, Debug)]
#[command(name = "compdb-merge")]
#[command(version = "0.1.0")]
#[command(
    about = "Merge every compile_commands.json under a directory into build/compile_commands.json",
    long_about = None
)]
pub struct Cli {
    /// Directory to scan (build/ is created under it)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Output file [default: <ROOT>/build/compile_commands.json]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not merge the existing output file back in when the scan reaches it
    #[arg(long)]
    pub exclude_output: bool,
}

impl Cli {
    pub fn into_config(self) -> MergeConfig {
        let config = MergeConfig::for_root(self.root).with_exclude_output(self.exclude_output);
        match self.output {
            Some(output) => config.with_output(output),
            None => config,
        }
    }
}

/// Parse arguments and run the merge
///
/// Problems during the merge are printed and do not produce an error, so a
/// run that got as far as scanning always exits successfully.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    merge(&cli.into_config());
    Ok(())
}
