pub mod config {
    use crate::{protocol::Target, state::Selection};
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    /// Command-line interface configuration
    #[derive(Debug, Parser)]
    #[command(name = "stylus")]
    #[command(author, version, about = "Highlighting code editor core", long_about = None)]
    pub struct Cli {
        /// Config file, overriding `.stylus/config.toml`
        #[arg(long, global = true)]
        pub config: Option<PathBuf>,

        /// Log file or directory
        #[arg(long, global = true, env = "STYLUS_LOG_FILE")]
        pub log_file: Option<PathBuf>,

        /// Subcommand to run
        #[command(subcommand)]
        pub command: Command,
    }

    /// Available CLI commands
    #[derive(Debug, Subcommand)]
    pub enum Command {
        /// Render a file as highlighted markup
        Highlight {
            /// Source file, stdin when absent
            file: Option<PathBuf>,

            /// Emit a standalone page with gutter and stylesheet
            #[arg(long)]
            page: bool,
        },

        /// Replay a key sequence such as `if(x){<Enter>y;`
        Keys {
            /// Keys to press; special keys go in angle brackets
            sequence: String,

            /// Starting document, the default program when absent
            #[arg(short, long)]
            file: Option<PathBuf>,

            /// Starting selection, `N` or `A..B` in UTF-16 units
            #[arg(short, long, default_value = "0")]
            caret: Selection,
        },

        /// Print the analysis request for a file
        Request {
            /// Source file, stdin when absent
            file: Option<PathBuf>,

            /// Model selector value: `npu` or `cortexa`
            #[arg(short, long, default_value = "cortexa")]
            target: Target,
        },
    }
}
