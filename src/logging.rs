/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Logger setup for applications built on this crate.
//!
//! The library crates only emit records through the `log` facade; nothing is
//! printed unless an application installs a logger, e.g.
//!
//! ```no_run
//! isda::logging::GlobalLogger::default()
//!     .path("isda.log")
//!     .verbosity(1)
//!     .apply()
//!     .unwrap();
//! ```

use isda_config::FailResult;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;
use log::{Level, LevelFilter};

/// Builder-style setup for logging
#[derive(Debug, Clone)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
    color: bool,
}

impl Default for GlobalLogger {
    fn default() -> Self {
        GlobalLogger { path: None, verbosity: Verbosity::Default, color: true }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Quiet, Default, Loud }

impl GlobalLogger {
    /// Also append the log to this file.
    ///
    /// NOTE: Relative paths will not be resolved until `apply()` is called.
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    /// Any integer will be accepted; the level will be truncated
    /// to the most extreme value supported.
    pub fn verbosity(&mut self, level: i32) -> &mut Self
    {
        self.verbosity = match level {
            level if level < 0 => Verbosity::Quiet,
            0 => Verbosity::Default,
            _ => Verbosity::Loud,
        };
        self
    }

    /// Whether to colorize the level of each message.
    pub fn color(&mut self, color: bool) -> &mut Self
    { self.color = color; self }

    /// Build the dispatcher without installing it or attaching any outputs.
    pub fn dispatch(&self) -> fern::Dispatch
    {
        let start = Instant::now();
        let color = self.color;

        let (base, kernel) = match self.verbosity {
            Verbosity::Quiet => (LevelFilter::Warn, LevelFilter::Warn),
            Verbosity::Default => (LevelFilter::Info, LevelFilter::Info),
            Verbosity::Loud => (LevelFilter::Debug, LevelFilter::Trace),
        };

        fern::Dispatch::new()
            .format(move |out, message, record| {
                let t = start.elapsed();
                out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                    t.as_secs(),
                    t.subsec_millis(),
                    record.target(),
                    ColorizedLevel { level: record.level(), color },
                    message))
            })
            .level(base)
            .level_for("isda_linalg", kernel)
    }

    /// Install the logger, writing to stdout and the file from `path`.
    ///
    /// NOTE: This can only succeed once per process.
    pub fn apply(&mut self) -> FailResult<()>
    {
        let mut fern = self.dispatch().chain(std::io::stdout());

        if let Some(path) = self.path.as_ref() {
            let file = fern::log_file(path)
                .map_err(|e| failure::format_err!("could not open log file '{}': {}", path.display(), e))?;
            fern = fern.chain(file);
        }

        fern.apply().map_err(|e| failure::format_err!("{}", e))?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel {
    pub level: Level,
    pub color: bool,
}

impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.color {
            return write!(f, "{}", self.level);
        }
        let style = match self.level {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.level.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use std::sync::mpsc;

    fn capture(logger: &GlobalLogger, target: &str, level: Level) -> Option<String> {
        let (tx, rx) = mpsc::channel();
        let (_, log) = logger.dispatch().chain(tx).into_log();
        log.log(&log::Record::builder()
            .args(format_args!("hello"))
            .level(level)
            .target(target)
            .build());
        rx.try_recv().ok()
    }

    #[test]
    fn format() {
        let line = capture(GlobalLogger::default().color(false), "isda_linalg", Level::Info).unwrap();
        assert!(line.starts_with("["), "{:?}", line);
        assert!(line.contains("s][isda_linalg][INFO] hello"), "{:?}", line);
    }

    #[test]
    fn verbosity_controls_kernel_trace() {
        let mut logger = GlobalLogger::default();
        logger.color(false);
        assert!(capture(&logger, "isda_linalg", Level::Trace).is_none());
        assert!(capture(&logger, "isda_linalg", Level::Info).is_some());

        logger.verbosity(2);
        assert!(capture(&logger, "isda_linalg", Level::Trace).is_some());
        assert!(capture(&logger, "other_crate", Level::Trace).is_none());

        logger.verbosity(-1);
        assert!(capture(&logger, "isda_linalg", Level::Info).is_none());
        assert!(capture(&logger, "isda_linalg", Level::Warn).is_some());
    }

    #[test]
    fn colored_level() {
        let plain = ColorizedLevel { level: Level::Warn, color: false }.to_string();
        let fancy = ColorizedLevel { level: Level::Warn, color: true }.to_string();
        assert_eq!(plain, "WARN");
        assert!(fancy.contains("WARN"));
        assert_ne!(plain, fancy);
    }
}
