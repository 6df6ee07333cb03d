use crate::config;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;

pub fn setup_logger() -> Result<(), log::SetLoggerError> {
    let config = config::get_config_or_panic();
    let log_level = match config.logging().level().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to Info for any other value
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log_level)
        .chain(std::io::stderr());

    // Mirror output into a log file when one is configured.
    if let Some(file_path) = config.logging().file() {
        match OpenOptions::new().create(true).append(true).open(file_path) {
            Ok(file) => {
                base_config.chain(file).apply()?;
            }
            Err(e) => {
                eprintln!("Warning: Failed to open log file '{file_path}': {e}");
                eprintln!("Continuing without file logging.");
                base_config.apply()?;
            }
        }
    } else {
        base_config.apply()?;
    }

    log::info!(
        "Logger initialized with level: {}",
        config.logging().level()
    );
    Ok(())
}
