// src/health/file.rs
use super::HealthCheckError;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Fails when `path` cannot be stat-ed or was last modified more than
/// `max_age_secs` ago.
pub fn check_file(path: &Path, max_age_secs: i64) -> Result<(), HealthCheckError> {
    let access = |source| HealthCheckError::Access {
        path: path.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(path).map_err(access)?;
    let modified = metadata.modified().map_err(access)?;

    // mtime in the future counts as fresh
    let age = SystemTime::now()
        .duration_since(modified)
        .unwrap_or(Duration::ZERO);

    debug!(
        "{} last modified at {} ({}s ago)",
        path.display(),
        format_mtime(modified),
        age.as_secs()
    );

    if is_stale(age, max_age_secs) {
        return Err(HealthCheckError::Stale {
            max_age_secs,
            age_secs: age.as_secs(),
        });
    }

    Ok(())
}

/// RFC 3339 rendering of `modified`, falling back to the raw value when it is
/// outside chrono's range.
fn format_mtime(modified: SystemTime) -> String {
    modified
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|since| {
            let secs = i64::try_from(since.as_secs()).ok()?;
            DateTime::<Utc>::from_timestamp(secs, since.subsec_nanos())
        })
        .map(|at| at.to_rfc3339())
        .unwrap_or_else(|| format!("{:?}", modified))
}

fn is_stale(age: Duration, max_age_secs: i64) -> bool {
    match u64::try_from(max_age_secs) {
        Ok(max_age) => age > Duration::from_secs(max_age),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::NamedTempFile;

    fn file_modified_ago(secs: u64) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        file.as_file()
            .set_modified(SystemTime::now() - Duration::from_secs(secs))
            .unwrap();
        file
    }

    #[test]
    fn test_fresh_file_succeeds() {
        let file = NamedTempFile::new().unwrap();
        assert!(check_file(file.path(), 60).is_ok());
    }

    #[test]
    fn test_stale_file_fails() {
        let file = file_modified_ago(120);

        let err = check_file(file.path(), 60).unwrap_err();
        assert!(matches!(err, HealthCheckError::Stale { max_age_secs: 60, .. }));
        assert!(err.to_string().contains("60"));
    }

    #[test]
    fn test_file_within_max_age_succeeds() {
        let file = file_modified_ago(30);
        assert!(check_file(file.path(), 60).is_ok());
    }

    #[test]
    fn test_missing_file_is_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");

        match check_file(&path, 60).unwrap_err() {
            HealthCheckError::Access { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("expected access error, got {:?}", other),
        }
    }

    #[test]
    fn test_future_mtime_is_fresh() {
        let file = NamedTempFile::new().unwrap();
        file.as_file()
            .set_modified(SystemTime::now() + Duration::from_secs(3600))
            .unwrap();

        assert!(check_file(file.path(), 0).is_ok());
    }

    #[test]
    fn test_far_future_mtime_is_fresh_with_debug_logging() {
        let file = NamedTempFile::new().unwrap();
        file.as_file()
            .set_modified(UNIX_EPOCH + Duration::from_secs(9_000_000_000_000))
            .unwrap();

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || check_file(file.path(), 60));

        assert!(result.is_ok());
    }

    #[test]
    fn test_format_mtime() {
        assert_eq!(format_mtime(UNIX_EPOCH), "1970-01-01T00:00:00+00:00");

        let far_future = UNIX_EPOCH + Duration::from_secs(9_000_000_000_000);
        assert_eq!(format_mtime(far_future), format!("{:?}", far_future));

        let before_epoch = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(format_mtime(before_epoch), format!("{:?}", before_epoch));
    }

    #[test]
    fn test_directory_is_checked_like_a_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_file(dir.path(), 60).is_ok());
    }

    #[test]
    fn test_is_stale() {
        assert!(!is_stale(Duration::from_secs(60), 60));
        assert!(is_stale(Duration::from_millis(60_001), 60));
        assert!(!is_stale(Duration::ZERO, 0));
        assert!(is_stale(Duration::ZERO, -1));
    }

    #[test]
    fn test_repeated_checks_agree() {
        let file = file_modified_ago(120);
        for _ in 0..3 {
            assert!(matches!(
                check_file(file.path(), 60),
                Err(HealthCheckError::Stale { .. })
            ));
        }
    }
}
