use std::fs::OpenOptions;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{CorniceError, Result};

const DEFAULT_FILTER: &str = "cornice=info";

/// Install a file-backed tracing subscriber. Stdout belongs to the form, so
/// nothing is logged unless a file is given. The returned guard flushes the
/// background writer when dropped and must outlive the event loop.
pub fn init(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let mut opts = OpenOptions::new();
    opts.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    let file = opts
        .open(path)
        .map_err(|e| CorniceError::Log(format!("{}: {e}", path.display())))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .with_filter(filter);

    // A subscriber may already be set (tests); keep the existing one.
    let _ = tracing_subscriber::registry().with(layer).try_init();
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_installs_nothing() {
        assert!(init(None).unwrap().is_none());
    }

    #[test]
    fn creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cornice.log");
        let guard = init(Some(path.as_path())).unwrap();
        assert!(guard.is_some());
        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_is_a_log_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cornice.log");
        assert!(matches!(init(Some(path.as_path())), Err(CorniceError::Log(_))));
    }
}
