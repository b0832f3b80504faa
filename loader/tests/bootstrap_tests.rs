//! Bootstrap step tests.

#![cfg(target_os = "linux")]

use std::fs;

use loader::bootstrap::create_device_node;
use loader::{EEXIST, S_IFREG, mknod};

fn temp_node(tag: &str) -> (std::path::PathBuf, Vec<u8>) {
    let path = std::env::temp_dir().join(format!("proteus-node-{}-{}", tag, std::process::id()));
    let mut nul = path.as_os_str().as_encoded_bytes().to_vec();
    nul.push(0);
    (path, nul)
}

// A regular-file node needs no privilege, so the idempotence rule can be
// exercised as-is; only the mode differs from the real char-special create.
#[test]
fn test_device_node_create_is_idempotent() {
    let (path, path_nul) = temp_node("idempotent");
    let _ = fs::remove_file(&path);

    assert_eq!(create_device_node(path_nul.as_ptr(), S_IFREG | 0o644, 0), 0);
    assert!(path.exists());
    // Second create finds the node already there and still succeeds.
    assert_eq!(create_device_node(path_nul.as_ptr(), S_IFREG | 0o644, 0), 0);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_raw_mknod_reports_existing_node() {
    let (path, path_nul) = temp_node("raw");
    let _ = fs::remove_file(&path);

    assert_eq!(mknod(path_nul.as_ptr(), S_IFREG | 0o644, 0), 0);
    assert_eq!(mknod(path_nul.as_ptr(), S_IFREG | 0o644, 0), -EEXIST);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_other_failures_pass_through() {
    // A path under a missing directory fails with something other than
    // EEXIST, which the step must not swallow.
    let status = create_device_node(
        b"/nonexistent-proteus-dir/node\0".as_ptr(),
        S_IFREG | 0o644,
        0,
    );
    assert!(status < 0);
    assert_ne!(status, -EEXIST);
}
