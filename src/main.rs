// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use docsrt::app_config::{self, Config};
use docsrt::app_controller::{Controller, RunOutcome};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a document (or every document in a directory) to SRT (default command)
    Convert(ConvertArgs),

    /// Generate shell completions for docsrt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct ConvertArgs {
    /// Input document (.json or plain text) or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Directory for the generated .srt (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Seconds per subtitle with enough words
    #[arg(long)]
    base_duration: Option<u64>,

    /// Seconds per short subtitle
    #[arg(long)]
    short_duration: Option<u64>,

    /// Sentences longer than this many words are split
    #[arg(long)]
    max_words: Option<usize>,

    /// Extra words tolerated before a split is forced
    #[arg(long)]
    flex_words: Option<usize>,

    /// Words per display line before wrapping onto two lines
    #[arg(long)]
    max_words_per_line: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// docsrt - turn structured documents into timed subtitle tracks
#[derive(Parser, Debug)]
#[command(name = "docsrt")]
#[command(version)]
#[command(about = "Generate SRT subtitles from structured documents")]
#[command(long_about = "docsrt splits document prose into sentences and subtitle-sized segments,
wraps them onto display lines and lays them out on a timeline.

EXAMPLES:
    docsrt book.json                          # Convert using default config
    docsrt -f book.txt                        # Force overwrite existing .srt
    docsrt --max-words 18 book.json           # Split sentences above 18 words
    docsrt convert -o out/ book.json          # Write the .srt into out/
    docsrt --log-level debug /books/          # Convert a whole directory
    docsrt completions bash > docsrt.bash     # Generate bash completions

INPUT:
    .json  array of {\"kind\": \"heading\"|\"normal\", \"text\": \"...\"}
    other  plain text, one paragraph per line; the first two lines are
           skipped as the title block

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input document (.json or plain text) or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Directory for the generated .srt (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Seconds per subtitle with enough words
    #[arg(long)]
    base_duration: Option<u64>,

    /// Seconds per short subtitle
    #[arg(long)]
    short_duration: Option<u64>,

    /// Sentences longer than this many words are split
    #[arg(long)]
    max_words: Option<usize>,

    /// Extra words tolerated before a split is forced
    #[arg(long)]
    flex_words: Option<usize>,

    /// Words per display line before wrapping onto two lines
    #[arg(long)]
    max_words_per_line: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn decoration(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::decoration(record.level());

            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Level is refined once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "docsrt", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args),
        None => {
            // Top-level args behave like the convert subcommand
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            run_convert(ConvertArgs {
                input_path,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                base_duration: cli.base_duration,
                short_duration: cli.short_duration,
                max_words: cli.max_words,
                flex_words: cli.flex_words,
                max_words_per_line: cli.max_words_per_line,
                config_path: cli.config_path,
                log_level: cli.log_level,
            })
        }
    }
}

fn load_config(options: &ConvertArgs) -> Result<Config> {
    let config_path = &options.config_path;

    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        serde_json::from_reader(BufReader::new(file))
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(secs) = options.base_duration {
        config.subtitle.base_duration_secs = secs;
    }
    if let Some(secs) = options.short_duration {
        config.subtitle.short_duration_secs = secs;
    }
    if let Some(words) = options.max_words {
        config.subtitle.max_words = words;
    }
    if let Some(words) = options.flex_words {
        config.subtitle.flex_words = words;
    }
    if let Some(words) = options.max_words_per_line {
        config.subtitle.max_words_per_line = words;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    // Apply the command line level before the config is read
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config = load_config(&options)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?.with_config_file(&options.config_path);

    if options.input_path.is_file() {
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            options
                .input_path
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf()
        });

        match controller.run(options.input_path.clone(), output_dir, options.force_overwrite)? {
            RunOutcome::Converted(path) => info!("Success: {:?}", path),
            RunOutcome::Skipped(path) => info!("Skipped: {:?}", path),
        }
    } else if options.input_path.is_dir() {
        if options.output_dir.is_some() {
            warn!("--output-dir is ignored for directories; subtitles are written next to each document");
        }
        let summary = controller.run_folder(options.input_path.clone(), options.force_overwrite)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} document(s) failed to convert", summary.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}
