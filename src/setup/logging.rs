use colored::Colorize;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Sets up the logging configuration for the server.
///
/// Configures the logger to use colored output based on the log level.
/// Defaults to `Info` and honors `RUST_LOG` overrides from the environment.
pub fn setup_log() {
    let default_log_level = LevelFilter::Info;
    let mut builder = Builder::from_default_env();

    builder
        .format(|buf, record| {
            let l = record.level();
            let colored_level = match l {
                log::Level::Error => l.to_string().red().bold(),
                log::Level::Warn => l.to_string().yellow().bold(),
                log::Level::Info => l.to_string().green().bold(),
                log::Level::Debug => l.to_string().blue().bold(),
                log::Level::Trace => l.to_string().purple().bold(),
            };
            writeln!(
                buf,
                "{} {} {}",
                colored_level,
                record.target().dimmed(),
                record.args()
            )
        })
        .filter(None, default_log_level)
        .parse_default_env()
        .init();
}
