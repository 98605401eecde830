//! Failure logging for compress and decompress.
//!
//! The test logger is process-global, so every assertion lives in a single
//! test.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use log::Level;
use logtest::Logger;
use std::fs;
use svyio_core::CompressConfig;
use svyio_core::DecompressConfig;
use svyio_core::compress;
use svyio_core::decompress;
use tempfile::TempDir;

fn drain_errors(logger: &mut Logger) -> Vec<String> {
    let mut errors = Vec::new();
    while let Some(record) = logger.pop() {
        if record.level() == Level::Error {
            errors.push(record.args().to_string());
        }
    }
    errors
}

#[test]
fn failures_are_logged_once_with_the_input_path() {
    let mut logger = Logger::start();
    let temp = TempDir::new().unwrap();

    // A corrupt archive yields None and exactly one error record.
    let corrupt = temp.path().join("corrupt.zip");
    fs::write(&corrupt, b"this is not a zip file").unwrap();
    let result = decompress(&corrupt, &DecompressConfig::default()).unwrap();
    assert!(result.is_none());

    let errors = drain_errors(&mut logger);
    assert_eq!(errors.len(), 1, "expected one error, got {errors:?}");
    assert!(errors[0].starts_with("Failed to unzip file"));
    assert!(errors[0].contains("corrupt.zip"));

    // A missing archive is reported to the caller without logging.
    let missing = decompress(temp.path().join("missing.zip"), &DecompressConfig::default());
    assert!(missing.unwrap_err().is_not_found());
    assert!(drain_errors(&mut logger).is_empty());

    // A compress failure is logged and still returned.
    let source = temp.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.txt"), b"a").unwrap();
    let blocked = temp.path().join("blocked.zip");
    fs::create_dir_all(blocked.join("occupied")).unwrap();

    let err = compress(&source, &CompressConfig::default().with_target(&blocked)).unwrap_err();
    assert!(err.is_io_failure());

    let errors = drain_errors(&mut logger);
    assert_eq!(errors.len(), 1, "expected one error, got {errors:?}");
    assert!(errors[0].starts_with("Error zipping file"));
    assert!(errors[0].contains("source"));

    // A failure partway through the walk is logged once and propagated.
    #[cfg(unix)]
    {
        let broken = temp.path().join("broken");
        fs::create_dir_all(&broken).unwrap();
        fs::write(broken.join("a.txt"), b"a").unwrap();
        std::os::unix::fs::symlink(broken.join("missing"), broken.join("z_dangling")).unwrap();

        let err = compress(&broken, &CompressConfig::default()).unwrap_err();
        assert!(err.is_io_failure());

        let errors = drain_errors(&mut logger);
        assert_eq!(errors.len(), 1, "expected one error, got {errors:?}");
        assert!(errors[0].starts_with("Error zipping file"));
        assert!(errors[0].contains("broken"));
    }
}
