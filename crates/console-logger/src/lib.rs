//! Console Logger
//!
//! `log` backend for the browser: every record goes to the devtools console
//! and the most recent lines are kept in a circular buffer so the UI can show
//! them without devtools open.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Logger settings
#[derive(Clone, Copy, Debug)]
pub struct LoggerConfig {
    pub max_level: LevelFilter,
    /// Number of formatted lines kept in memory
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_level: LevelFilter::Debug,
            capacity: 200,
        }
    }
}

type Ring = Arc<Mutex<VecDeque<String>>>;

/// Read access to the buffered lines
#[derive(Clone)]
pub struct LogHandle {
    ring: Ring,
}

impl LogHandle {
    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.ring.lock() {
            Ok(ring) => ring.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

pub struct ConsoleLogger {
    config: LoggerConfig,
    ring: Ring,
}

impl ConsoleLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            ring: Arc::new(Mutex::new(VecDeque::with_capacity(config.capacity))),
        }
    }

    pub fn handle(&self) -> LogHandle {
        LogHandle { ring: self.ring.clone() }
    }

    fn push(&self, line: String) {
        if self.config.capacity == 0 {
            return;
        }
        if let Ok(mut ring) = self.ring.lock() {
            while ring.len() >= self.config.capacity {
                ring.pop_front();
            }
            ring.push_back(line);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_console(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// Install the logger as the global `log` backend
pub fn init(config: LoggerConfig) -> Result<LogHandle, String> {
    let logger = ConsoleLogger::new(config);
    let handle = logger.handle();
    log::set_boxed_logger(Box::new(logger)).map_err(|e| e.to_string())?;
    log::set_max_level(config.max_level);
    Ok(handle)
}
