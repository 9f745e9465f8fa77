use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vocab", bin_name = "vocab", version)]
#[command(about = "Browse vocabulary notebooks from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Serve the built-in sample notebooks instead of calling the backend
    #[arg(long, global = true, help_heading = "Options")]
    pub mock: bool,

    /// Backend origin, overrides the configured server-url
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub server: Option<String>,

    /// Directory holding config.json
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "VOCAB_CONFIG_DIR",
        help_heading = "Options"
    )]
    pub config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all vocabulary notebooks
    #[command(alias = "ls")]
    List,

    /// Show a notebook and its words
    #[command(alias = "s")]
    Show {
        /// Notebook name, as shown by `vocab list`
        notebook: String,
    },

    /// Print the words of a notebook, one per line
    Words {
        notebook: String,
    },

    /// Open a client route, e.g. /vocabulary-notebooks/English%20Vocabulary
    Open {
        path: String,
    },

    /// Show or set configuration
    Config {
        /// One of: server-url, base-path, mock, mock-delay-ms, timeout-secs, stale-after-secs
        key: Option<String>,
        value: Option<String>,
    },
}
