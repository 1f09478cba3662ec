use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_reads_small_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "print 1;\n").unwrap();
    let path = file.path().to_str().unwrap();
    assert_eq!(read_file(path).unwrap(), "print 1;\n");
}

#[test]
fn test_oversized_file_is_refused_before_reading() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let len = u64::from(u32::MAX) + 1;
    // Sparse: no data blocks are written.
    file.as_file().set_len(len).unwrap();
    let path = file.path().to_str().unwrap();

    let err = read_file(path).unwrap_err();
    assert!(matches!(err, DriverError::SourceTooLarge { len: l, .. } if l == len));
    assert_eq!(err.exit_code(), crate::EXIT_IO_ERROR);
    assert_eq!(
        err.to_string(),
        format!("'{path}' is 4294967296 bytes; sources are limited to 4294967295 bytes")
    );
}

#[test]
fn test_missing_file_maps_to_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.lox");
    let err = read_file(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, DriverError::NotFound { .. }));
    assert_eq!(err.exit_code(), crate::EXIT_IO_ERROR);
}
