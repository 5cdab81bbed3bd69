// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Log module provides the file logger, reference
//! https://docs.rs/log4rs

use crate::{
    error::{FontError, FontResult},
    util::get_abs_path,
};
use log::LevelFilter;

use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// init logs system
pub fn init_log(level: LevelFilter, file_path: &str) -> FontResult<()> {
    let fpstr = get_abs_path(file_path);
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(&fpstr)
        .map_err(|e| FontError::Config(format!("log file {}: {}", fpstr, e)))?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| FontError::Config(e.to_string()))?;
    let _handle = log4rs::init_config(config).map_err(|e| FontError::Config(e.to_string()))?;
    Ok(())
}

/// Parse a level name from config ("info", "debug", ...), case-insensitive.
pub fn parse_level(name: &str) -> FontResult<LevelFilter> {
    name.parse::<LevelFilter>()
        .map_err(|_| FontError::Config(format!("unknown log level: {}", name)))
}
