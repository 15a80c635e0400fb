//! Writing of statistics as `{prefix} {name}={value}` lines, optionally closed by a fixed line.
//!
//! Nothing is written until [`configure_statistic_logging`] has been called; the configuration
//! is global and can only be set once per process.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// How statistics are written: the prefix of every statistic line, the (optional) line closing a
/// block of statistics, the (optional) casing applied to statistic names and the destination.
pub struct StatisticOptions<'a> {
    statistic_prefix: &'a str,
    after_statistics: Option<&'a str>,
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send + Sync>,
}

impl StatisticOptions<'_> {
    fn format_statistic(&self, name: impl Display, value: impl Display) -> String {
        let name = match self.statistics_casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };

        format!("{} {name}={value}", self.statistic_prefix)
    }

    fn write_line(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.statistics_writer, "{line}") {
            debug!("Could not write statistic: {e}");
        }
    }
}

impl Debug for StatisticOptions<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("statistic_prefix", &self.statistic_prefix)
            .field("after_statistics", &self.after_statistics)
            .field("statistics_casing", &self.statistics_casing)
            .finish_non_exhaustive()
    }
}

static STATISTIC_OPTIONS: OnceLock<Mutex<StatisticOptions<'static>>> = OnceLock::new();

/// Runs `action` on the configured options; does nothing if statistic logging is not configured.
fn with_options(action: impl FnOnce(&mut StatisticOptions<'static>)) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if let Ok(mut options) = options.lock() {
            action(&mut options);
        }
    }
}

/// Enables the logging of statistics.
///
/// Every statistic is written as `{prefix} {name}={value}`, with `name` converted to `casing` if
/// one is given. `after` is written by [`log_statistic_postfix`] to close a block of statistics.
/// Statistics go to `writer`, or to stdout if no writer is given. Only the first call has an
/// effect.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        Mutex::new(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Writes the statistic `name` with `value`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_options(|options| {
        let line = options.format_statistic(name, value);
        options.write_line(line);
    });
}

/// Writes the line closing a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    with_options(|options| {
        if let Some(after_statistics) = options.after_statistics {
            options.write_line(after_statistics);
        }
    });
}

/// Whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(casing: Option<Case>) -> StatisticOptions<'static> {
        StatisticOptions {
            statistic_prefix: "%%stat:",
            after_statistics: None,
            statistics_casing: casing,
            statistics_writer: Box::new(std::io::sink()),
        }
    }

    #[test]
    fn names_keep_their_casing_by_default() {
        assert_eq!(
            options(None).format_statistic("num_backtracks", 12),
            "%%stat: num_backtracks=12"
        );
    }

    #[test]
    fn names_are_converted_to_the_configured_casing() {
        assert_eq!(
            options(Some(Case::Camel)).format_statistic("arc_consistency_num_revisions", 3),
            "%%stat: arcConsistencyNumRevisions=3"
        );
    }
}
