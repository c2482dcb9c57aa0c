use std::{fmt, path::PathBuf, sync::Arc};

use anyhow::Result;
use serde_json::Value;
use shared_logging::{JsonLogger, LogLevel, LogRecord};

/// Builder for gateway telemetry sinks.
pub struct OpsTelemetryBuilder {
    module: String,
    log_path: Option<PathBuf>,
    min_level: LogLevel,
}

impl OpsTelemetryBuilder {
    /// Creates the builder.
    #[must_use]
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            log_path: None,
            min_level: LogLevel::Info,
        }
    }

    /// Sets the JSONL log path.
    #[must_use]
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Drops records below the provided level.
    #[must_use]
    pub const fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Builds the telemetry handle.
    pub fn build(self) -> Result<OpsTelemetry> {
        let logger = match self.log_path {
            Some(path) => Some(JsonLogger::with_min_level(path, self.min_level)?),
            None => None,
        };
        Ok(OpsTelemetry {
            inner: Arc::new(TelemetryInner {
                module: self.module,
                logger,
            }),
        })
    }
}

/// Cheap, cloneable logging handle for gateway request events.
#[derive(Clone)]
pub struct OpsTelemetry {
    inner: Arc<TelemetryInner>,
}

struct TelemetryInner {
    module: String,
    logger: Option<JsonLogger>,
}

impl fmt::Debug for OpsTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpsTelemetry")
            .field("module", &self.inner.module)
            .finish()
    }
}

impl OpsTelemetry {
    /// Returns a builder.
    #[must_use]
    pub fn builder(module: impl Into<String>) -> OpsTelemetryBuilder {
        OpsTelemetryBuilder::new(module)
    }

    /// Logs structured metadata; a handle without a sink is a no-op.
    pub fn log(&self, level: LogLevel, message: &str, metadata: Value) -> Result<()> {
        if let Some(logger) = &self.inner.logger {
            let record =
                LogRecord::new(&self.inner.module, level, message).with_metadata(metadata);
            logger.log(&record)?;
        }
        Ok(())
    }

    /// Logs an informational event by name.
    pub fn event(&self, name: &str, metadata: Value) -> Result<()> {
        self.log(LogLevel::Info, name, metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinkless_handle_is_a_no_op() {
        let telemetry = OpsTelemetry::builder("gateway").build().unwrap();
        telemetry
            .event("gateway.started", serde_json::json!({ "bind": "127.0.0.1:8080" }))
            .unwrap();
    }
}
