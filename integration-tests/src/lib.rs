//! Shared fixtures for the soilmix integration tests.

use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};
use soilmix_core::ColumnParams;

/// Four 10 cm layers, all of the solute in the top layer, uniform activity.
#[must_use]
pub fn surface_pulse() -> ColumnParams {
    ColumnParams::new(4, 0.1, vec![4e-9, 0.0, 0.0, 0.0], vec![20.0; 4], 1e-8)
}

/// Ten 5 cm layers with a declining gradient and activity thinning with depth.
#[must_use]
pub fn declining_gradient() -> ColumnParams {
    ColumnParams::new(
        10,
        0.05,
        vec![10e-9, 5e-9, 3e-9, 1e-9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        vec![20.0, 20.0, 20.0, 10.0, 10.0, 10.0, 5.0, 5.0, 5.0, 5.0],
        1e-8,
    )
}

/// A logger that keeps every warning so tests can assert on it.
pub struct CapturedWarnings {
    messages: Mutex<Vec<String>>,
}

impl CapturedWarnings {
    /// Installs the capturing logger once per test binary and returns it.
    pub fn install() -> &'static Self {
        static LOGGER: OnceLock<CapturedWarnings> = OnceLock::new();

        let mut first = false;
        let logger = LOGGER.get_or_init(|| {
            first = true;
            CapturedWarnings {
                messages: Mutex::new(Vec::new()),
            }
        });
        if first {
            // Fails only if another logger is already set, in which case
            // warnings simply go there.
            let _ = log::set_logger(logger);
            log::set_max_level(LevelFilter::Warn);
        }
        logger
    }

    /// Returns `true` if any captured warning contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages
            .lock()
            .map(|messages| messages.iter().any(|m| m.contains(needle)))
            .unwrap_or(false)
    }
}

impl Log for CapturedWarnings {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            if let Ok(mut messages) = self.messages.lock() {
                messages.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}
