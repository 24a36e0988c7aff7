use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "binder-gen")]
#[command(about = "Generate Binder specializations for native yalp functions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand that needs a generator configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// TOML file with a [generator] table
    #[arg(long)]
    pub config: Option<String>,
    /// Largest parameter count to specialize (overrides the config file)
    #[arg(long)]
    pub max_param: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit the binder unit
    Generate {
        #[command(flatten)]
        config: ConfigArgs,
        /// Output file, e.g. binder.inc (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Fail if an existing file differs from freshly generated output
    Check {
        /// Previously generated file
        path: String,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the substitution table for one arity
    Inspect {
        /// Parameter count to inspect
        arity: usize,
        #[command(flatten)]
        config: ConfigArgs,
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}
