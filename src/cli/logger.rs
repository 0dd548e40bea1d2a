//! Provides configuration of a logger.
use env_logger::Builder;
use log::trace;
use log::LevelFilter;
use std::io::Write;
use time::OffsetDateTime;

/// Configures the log with the specified verbosity.
///
/// Higher verbosity results in additional log messages
/// up to a maximum verbosity level.
pub fn configure(verbosity: u8) -> Result<(), String> {
    let log_level = level_for(verbosity)?;

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{} {:?}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                OffsetDateTime::now_utc(),
                record.args()
            )
        })
        .filter_level(log_level)
        .try_init()
        .map_err(|e| e.to_string())?;

    trace!("Logger verbosity {log_level}");
    Ok(())
}

fn level_for(verbosity: u8) -> Result<LevelFilter, String> {
    match verbosity {
        0 => Ok(LevelFilter::Error),
        1 => Ok(LevelFilter::Warn),
        2 => Ok(LevelFilter::Info),
        3 => Ok(LevelFilter::Debug),
        4 => Ok(LevelFilter::Trace),
        _ => Err(String::from("Don't be crazy with verbose")),
    }
}
