use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use inputbox::core::config::{self, CliOverrides, HostArgs, InputBoxConfig};
use inputbox::host::JsonLinesSink;
use inputbox::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "inputbox",
    about = "Multi-line input box with tab indentation and command history"
)]
struct Args {
    /// Minimum number of visible lines
    #[arg(long)]
    min_lines: Option<u16>,

    /// Maximum number of visible lines before the box scrolls
    #[arg(long)]
    max_lines: Option<u16>,

    /// Host arguments as JSON, e.g. '{"min_lines":2,"theme":{"primaryColor":"#ff4b4b"}}'
    #[arg(long)]
    args: Option<String>,

    /// Append submitted values (JSON lines) to this file instead of printing them on exit
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log file path
    #[arg(long, default_value = "inputbox.log")]
    log_file: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Log to a file; the terminal belongs to the widget
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    log::info!("inputbox starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        InputBoxConfig::default()
    });

    let host_args = args
        .args
        .as_deref()
        .map(HostArgs::from_json)
        .transpose()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let resolved = config::resolve(
        &file_config,
        host_args.as_ref(),
        CliOverrides {
            min_lines: args.min_lines,
            max_lines: args.max_lines,
        },
    );

    match args.output {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            log::info!("Writing submissions to {}", path.display());
            tui::run(resolved, JsonLinesSink::new(file))?;
        }
        None => {
            // stdout is the terminal while the widget runs; print once it is restored
            let sink = tui::run(resolved, JsonLinesSink::new(Vec::new()))?;
            io::stdout().write_all(&sink.into_inner())?;
        }
    }

    Ok(())
}
