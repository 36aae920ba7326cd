//! Error formatting tests.

use std::io;
use std::path::PathBuf;

use memsim_core::common::{FrameId, PageNumber, SimError};

#[test]
fn store_read_mentions_page_and_count() {
    let err = SimError::StoreRead {
        page: PageNumber(7),
        read: 12,
    };
    assert_eq!(
        err.to_string(),
        "short read from backing store for page 7: got 12 bytes"
    );
}

#[test]
fn resource_unavailable_mentions_path() {
    let err = SimError::ResourceUnavailable {
        path: PathBuf::from("missing.bin"),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };
    let msg = err.to_string();
    assert!(msg.contains("missing.bin"));
    assert!(msg.contains("not found"));
}

#[test]
fn io_errors_convert_to_output() {
    let err: SimError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
    assert!(matches!(err, SimError::Output(_)));
}

#[test]
fn frame_directory_error_names_frame() {
    assert!(SimError::FrameDirectory(FrameId(3)).to_string().contains('3'));
}
