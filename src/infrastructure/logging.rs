use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};
use crate::domain::DomainError;

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Logs go to stderr in every format; stdout carries
/// command output only.
pub fn init_logging(config: &LoggingConfig) -> Result<(), DomainError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing::subscriber::set_global_default(build_subscriber(
        filter,
        &config.format,
        std::io::stderr,
    ))
    .map_err(|e| DomainError::configuration(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!("Logging initialized with level: {}", config.level);
    Ok(())
}

fn build_subscriber<W>(
    filter: EnvFilter,
    format: &LogFormat,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => Box::new(
            tracing_subscriber::registry().with(filter).with(
                fmt::layer()
                    .json()
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(writer),
            ),
        ),
        LogFormat::Pretty => Box::new(
            tracing_subscriber::registry().with(filter).with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_writer(writer),
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

    impl CapturedWriter {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedWriter {
        type Writer = CapturedWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn emit(format: LogFormat) -> String {
        let writer = CapturedWriter::default();
        let subscriber = build_subscriber(EnvFilter::new("info"), &format, writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Connecting to PostgreSQL...");
            tracing::debug!("filtered out");
        });

        writer.contents()
    }

    #[test]
    fn test_json_logs_go_to_given_writer() {
        let output = emit(LogFormat::Json);

        let line: serde_json::Value =
            serde_json::from_str(output.lines().next().unwrap()).unwrap();
        assert_eq!(line["fields"]["message"], "Connecting to PostgreSQL...");
        assert!(!output.contains("filtered out"));
    }

    #[test]
    fn test_pretty_logs_go_to_given_writer() {
        let output = emit(LogFormat::Pretty);

        assert!(output.contains("Connecting to PostgreSQL..."));
        assert!(!output.contains("filtered out"));
    }
}
