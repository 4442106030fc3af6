//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities. A `Logger` can
//! also be handed to commands directly as an operations record.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata};

use crate::extractor::BandLayout;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level this logger lets through
    level: Level,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: Level::Info,
        })
    }

    /// Sets the most verbose level this logger records
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs the boundaries, extent and band rectangles found on one screenshot
    ///
    /// # Arguments
    ///
    /// * `source` - Screenshot the layout was detected on
    /// * `layout` - Detected layout
    pub fn log_layout(&self, source: &str, layout: &BandLayout) -> io::Result<()> {
        self.log(&format!("Layout of {}:", source))?;
        self.log(&format!("  Boundary rows: {:?}", layout.boundaries.rows()))?;
        self.log(&format!("  Extent: {}..{}", layout.extent.left, layout.extent.right))?;

        for (i, region) in layout.regions().iter().enumerate() {
            let (left, top, right, bottom) = region.edges();
            self.log(&format!("  Band {}: ({}, {}, {}, {})", i + 1, left, top, right, bottom))?;
        }

        Ok(())
    }

    /// Static method to initialize the global logger
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `verbose` - Record debug messages as well
    pub fn init_global_logger(log_file: impl AsRef<Path>, verbose: bool) -> io::Result<()> {
        let level = if verbose { Level::Debug } else { Level::Info };
        let global_logger = Logger::new(log_file)?.with_level(level);

        // Only called once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level.to_level_filter());
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also print to console
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
