//! `tracing` subscriber setup shared by the binaries.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where log lines go.
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Install the global subscriber. Calling it a second time is a no-op.
pub fn initialize_logging(level: LevelFilter, target: LogTarget<'_>) -> std::io::Result<()> {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .event_format(format)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .event_format(format)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(filter)
                .try_init()
        }
    };

    // A subscriber may already be installed by the embedding program.
    let _ = result;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logging_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.log");
        initialize_logging(LevelFilter::DEBUG, LogTarget::File(&path)).unwrap();
        assert!(path.exists());

        // A second call must not panic.
        initialize_logging(LevelFilter::INFO, LogTarget::Stderr).unwrap();
    }
}
