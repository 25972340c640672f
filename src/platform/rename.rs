use std::path::Path;

#[cfg(unix)]
fn sync_parent_directory(path: &Path) -> std::io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    let parent_dir = std::fs::File::open(parent)?;
    parent_dir.sync_all()
}

#[cfg(unix)]
fn sync_rename_parents(src_path: &Path, dest_path: &Path) -> std::io::Result<()> {
    sync_parent_directory(dest_path)?;
    if src_path.parent() != dest_path.parent() {
        sync_parent_directory(src_path)?;
    }
    Ok(())
}

#[cfg(all(not(unix), not(windows)))]
fn sync_rename_parents(_src_path: &Path, _dest_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Renames `src_path` to `dest_path`, replacing any existing destination.
///
/// The replacement is atomic where the platform offers it: POSIX rename(2)
/// already has both properties; Windows needs `MoveFileExW` with
/// `MOVEFILE_REPLACE_EXISTING` since std exposes no replace-atomic rename.
/// Elsewhere the two guarantees are whatever `std::fs::rename` provides.
#[cfg(windows)]
pub(crate) fn rename_replace(src_path: &Path, dest_path: &Path) -> std::io::Result<()> {
    use std::os::windows::ffi::OsStrExt;

    use windows_sys::Win32::Storage::FileSystem::{
        MOVEFILE_REPLACE_EXISTING, MOVEFILE_WRITE_THROUGH, MoveFileExW,
    };

    fn to_wide_null(p: &Path) -> Vec<u16> {
        let mut wide: Vec<u16> = p.as_os_str().encode_wide().collect();
        wide.push(0);
        wide
    }

    let src_w = to_wide_null(src_path);
    let dest_w = to_wide_null(dest_path);

    // SAFETY: both buffers are owned, NUL-terminated UTF-16 strings that
    // stay valid for this synchronous call; Win32 does not retain them.
    let moved = unsafe {
        MoveFileExW(
            src_w.as_ptr(),
            dest_w.as_ptr(),
            MOVEFILE_REPLACE_EXISTING | MOVEFILE_WRITE_THROUGH,
        )
    };
    if moved == 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(windows))]
pub(crate) fn rename_replace(src_path: &Path, dest_path: &Path) -> std::io::Result<()> {
    std::fs::rename(src_path, dest_path)?;
    sync_rename_parents(src_path, dest_path).map_err(|err| {
        std::io::Error::new(
            err.kind(),
            format!("rename already applied, but failed to sync parent directories: {err}"),
        )
    })
}
