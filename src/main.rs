// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, RenderStyle};
use crate::app_controller::Controller;
use crate::file_utils::FileManager;
use crate::zotero::ZoteroClient;

mod app_config;
mod app_controller;
mod file_utils;
mod publication;
mod renderer;
mod zotero;
mod errors;

/// CLI Wrapper for RenderStyle to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliRenderStyle {
    Plain,
    PdfIcon,
}

impl From<CliRenderStyle> for RenderStyle {
    fn from(cli_style: CliRenderStyle) -> Self {
        match cli_style {
            CliRenderStyle::Plain => RenderStyle::Plain,
            CliRenderStyle::PdfIcon => RenderStyle::PdfIcon,
        }
    }
}

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
    /// Fetch the publication list and write the citation file (default command)
    Render(RenderArgs),

    /// Generate shell completions for zotpub
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Zotero user id to fetch publications for
    #[arg(short, long)]
    user_id: Option<String>,

    /// Output file path for the HTML fragment
    #[arg(short, long)]
    output: Option<String>,

    /// Citation line style
    #[arg(long, value_enum)]
    style: Option<CliRenderStyle>,

    /// Author name to highlight in bold
    #[arg(long)]
    highlight_author: Option<String>,

    /// Re-sort records by parsed date instead of keeping API order
    #[arg(long)]
    sort_by_date: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// zotpub - Zotero publications to HTML
///
/// Fetches a user's public publications library from the Zotero web API and
/// writes an HTML citation list for inclusion in a static site.
#[derive(Parser, Debug)]
#[command(name = "zotpub")]
#[command(version = "1.0.0")]
#[command(about = "Render a Zotero publications library as an HTML citation list")]
#[command(long_about = "zotpub fetches a user's public publications library from the Zotero web API,
keeps the conference-proceedings entries and writes one HTML list item per
record to an output file, fully overwriting it on each run.

EXAMPLES:
    zotpub                                  # Render using default config
    zotpub -u 4797004 -o publications.html  # Explicit user and output file
    zotpub --style pdf-icon                 # Append a PDF icon link per record
    zotpub --highlight-author 'Jane Doe'    # Bold a different author name
    zotpub --sort-by-date                   # Re-sort records by parsed date
    zotpub completions bash > zotpub.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Zotero user id to fetch publications for
    #[arg(short, long)]
    user_id: Option<String>,

    /// Output file path for the HTML fragment
    #[arg(short, long)]
    output: Option<String>,

    /// Citation line style
    #[arg(long, value_enum)]
    style: Option<CliRenderStyle>,

    /// Author name to highlight in bold
    #[arg(long)]
    highlight_author: Option<String>,

    /// Re-sort records by parsed date instead of keeping API order
    #[arg(long)]
    sort_by_date: bool,

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
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {}\x1B[0m",
                color, now, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "zotpub", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Render(args)) => {
            // Use the explicit render subcommand args
            run_render(args).await
        }
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let render_args = RenderArgs {
                user_id: cli.user_id,
                output: cli.output,
                style: cli.style,
                highlight_author: cli.highlight_author,
                sort_by_date: cli.sort_by_date,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_render(render_args).await
        }
    }
}

async fn run_render(options: RenderArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if FileManager::file_exists(config_path) {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(user_id) = &options.user_id {
            config.zotero.user_id = user_id.clone();
        }

        if let Some(output) = &options.output {
            config.render.output_path = output.clone();
        }

        if let Some(style) = &options.style {
            config.render.style = style.clone().into();
        }

        if let Some(author) = &options.highlight_author {
            config.render.highlight_author = author.clone();
        }

        if options.sort_by_date {
            config.render.sort_by_date = true;
        }

        // Update log level in config if specified via command line
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        if let Some(user_id) = &options.user_id {
            config.zotero.user_id = user_id.clone();
        }

        if let Some(output) = &options.output {
            config.render.output_path = output.clone();
        }

        if let Some(style) = &options.style {
            config.render.style = style.clone().into();
        }

        if let Some(author) = &options.highlight_author {
            config.render.highlight_author = author.clone();
        }

        if options.sort_by_date {
            config.render.sort_by_date = true;
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        FileManager::write_to_file(config_path, &config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // Create the API client and controller, then run the pipeline
    let client = ZoteroClient::from_config(&config.zotero);
    let controller = Controller::with_config(config)?;

    controller.run(&client).await
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
