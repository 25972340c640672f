use fs_handles::{Error, FileBuilder};

fn open_file(path: &std::path::Path) -> fs_handles::File {
    FileBuilder::from_path(path)
        .expect("builder")
        .open()
        .expect("open")
}

#[test]
fn regular_file_metadata_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("f");
    std::fs::write(&path, "content").expect("write");

    let meta = open_file(&path).metadata().expect("metadata");
    assert!(meta.is_regular_file());
    assert_eq!(meta.symlink_target_path(), None);
    assert!(matches!(meta.symlink_target(), Ok(None)));
    assert!(
        meta.last_modified_at().is_some(),
        "a freshly written file must have a modification time"
    );
}

#[test]
fn the_snapshot_does_not_recheck_the_filesystem() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("f");
    std::fs::write(&path, "content").expect("write");

    let file = open_file(&path);
    let meta = file.metadata().expect("metadata");
    file.delete().expect("delete");

    // The record is a detached value; only its accessors that open new
    // handles touch the filesystem again.
    assert!(meta.is_regular_file());
    assert!(meta.last_modified_at().is_some());
}

#[cfg(unix)]
#[test]
fn symlink_metadata_records_and_reopens_the_target() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("t");
    let link = dir.path().join("l");
    std::fs::write(&target, "pointed at").expect("write");
    std::os::unix::fs::symlink(&target, &link).expect("symlink");

    let meta = open_file(&link).metadata().expect("metadata");
    assert!(!meta.is_regular_file(), "snapshot must not follow the link");
    assert_eq!(meta.symlink_target_path(), Some(target.as_path()));

    let reopened = meta
        .symlink_target()
        .expect("target open")
        .expect("target present");
    assert_eq!(reopened.path(), target.as_path());
    assert_eq!(reopened.size().expect("size"), 10);
}

#[cfg(unix)]
#[test]
fn a_vanished_symlink_target_surfaces_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("t");
    let link = dir.path().join("l");
    std::fs::write(&target, "short lived").expect("write");
    std::os::unix::fs::symlink(&target, &link).expect("symlink");

    let meta = open_file(&link).metadata().expect("metadata");
    std::fs::remove_file(&target).expect("remove target");

    assert!(matches!(meta.symlink_target(), Err(Error::NotFound(_))));
}
