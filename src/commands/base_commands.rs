use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Logging verbosity (RUST_LOG takes precedence)
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch issues from Bugzilla and save them as a YAML snapshot
    GetIssues {
        /// Path to Bugzilla config YAML
        #[arg(short, long)]
        config: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Compute burndown counts from an issue snapshot into a CSV table
    Burndown {
        /// Issue snapshot YAML file
        #[arg(short, long)]
        input: String,
        /// Output CSV file
        #[arg(short, long)]
        output: String,
        /// Priority to count, may be repeated
        #[arg(short, long = "priority", default_values_t = default_priorities())]
        priorities: Vec<String>,
        /// First day counted (YYYY-MM-DD)
        #[arg(short, long, default_value = "2018-01-01")]
        start_date: String,
        /// Day the count stops before (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_end_date())]
        end_date: String,
    },
    /// Fetch issues from Bugzilla and compute burndown counts into a CSV table
    GetBurndown {
        /// Path to Bugzilla config YAML
        #[arg(short, long)]
        config: String,
        /// Output CSV file
        #[arg(short, long)]
        output: String,
        /// Day the count stops before (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_end_date())]
        end_date: String,
    },
    /// Plot burndown counts from a CSV table into a PNG chart
    PlotBurndown {
        /// Burndown CSV file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    None,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn init_logging(self) {
        let level = match self {
            LogLevel::None => return,
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);
        env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .init();
    }
}

fn default_priorities() -> Vec<String> {
    vec!["P1".to_string(), "P2".to_string(), "P3".to_string()]
}

fn default_end_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
