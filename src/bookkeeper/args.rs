use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookkeeper", version)]
#[command(about = "Interactive assistant for contacts and notes", long_about = None)]
pub struct Cli {
    /// Directory holding data.json and config.json
    #[arg(long, env = "BOOKKEEPER_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Start empty instead of generating starter data on first run
    #[arg(long)]
    pub no_seed: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
