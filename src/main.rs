use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use strplus::cli::output::{self, OutputFormat};
use strplus::{cli, logging, Case, Config};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "strplus")]
#[command(version, about = "Split strings into words, detect separators and convert identifier cases", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Read inputs from a file, one per line
    #[arg(short, long, value_name = "PATH", global = true)]
    file: Option<PathBuf>,

    /// Configuration file
    #[arg(long, env = "STRPLUS_CONFIG", value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Split each input into words
    Tokens {
        /// Inputs (read from stdin when empty)
        #[arg(value_name = "TEXT")]
        texts: Vec<String>,
    },
    /// Detect the most frequent separator of each input
    Separator {
        /// Inputs (read from stdin when empty)
        #[arg(value_name = "TEXT")]
        texts: Vec<String>,

        /// Separator to consider, highest priority first (replaces the built-in list)
        #[arg(short, long = "priority", value_name = "CHAR")]
        priority: Vec<char>,

        /// Also print how often each separator occurs
        #[arg(long)]
        counts: bool,

        /// Also print the fields split on the detected separator
        #[arg(long)]
        split: bool,
    },
    /// Convert each input to an identifier case
    Convert {
        /// Inputs (read from stdin when empty)
        #[arg(value_name = "TEXT")]
        texts: Vec<String>,

        /// Target case (camel, pascal, snake, constant, kebab, train, title)
        #[arg(short, long)]
        case: Option<Case>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "strplus", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let (case, priority) = match &command {
        Commands::Convert { case, .. } => (*case, Vec::new()),
        Commands::Separator { priority, .. } => (None, priority.clone()),
        Commands::Tokens { .. } => (None, Vec::new()),
    };
    let config = Config::load(cli.config.as_deref(), case, priority, cli.no_color)?;

    match command {
        Commands::Tokens { texts } => {
            let inputs = cli::collect_inputs(texts, cli.file.as_deref())?;
            log::debug!("tokenizing {} inputs", inputs.len());
            output::print_tokens(&cli::tokens_reports(&inputs), config.color, &cli.format)?;
        }
        Commands::Separator {
            texts,
            counts,
            split,
            ..
        } => {
            let inputs = cli::collect_inputs(texts, cli.file.as_deref())?;
            log::debug!("analyzing separators of {} inputs", inputs.len());
            let reports = cli::separator_reports(&inputs, config.priority(), counts, split);
            output::print_separators(&reports, config.color, &cli.format)?;
        }
        Commands::Convert { texts, .. } => {
            let inputs = cli::collect_inputs(texts, cli.file.as_deref())?;
            log::debug!("converting {} inputs to {}", inputs.len(), config.case);
            let reports = cli::conversion_reports(&inputs, config.case);
            output::print_conversions(&reports, config.color, &cli.format)?;
        }
    }

    Ok(())
}
