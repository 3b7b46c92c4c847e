use std::{fs, io::Write, path::Path};

use tempfile::NamedTempFile;

use crate::{errors::AppError, models::admin::AdminStore};

pub fn ensure_store(path: &Path) -> Result<bool, AppError> {
    if path.exists() {
        return Ok(false);
    }
    save_store(path, &AdminStore::default())?;
    tracing::debug!("ensure_store: created {}", path.display());
    Ok(true)
}

pub fn load_store(path: &Path) -> Result<AdminStore, AppError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        tracing::error!("load_store: {:?}", e);
        AppError::StoreRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        tracing::error!("load_store: {:?}", e);
        AppError::StoreRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })
}

pub fn save_store(path: &Path, store: &AdminStore) -> Result<(), AppError> {
    let mut data = serde_json::to_string_pretty(store)?;
    data.push('\n');

    let write_err = |source: std::io::Error| AppError::StoreWrite {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    // dropped on any early return, which removes the temp file
    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(data.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| {
        tracing::error!("save_store: {:?}", e.error);
        write_err(e.error)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Local;
    use tempfile::tempdir;

    use super::*;
    use crate::models::admin::AdminRecord;

    #[test]
    fn test_ensure_store_creates_empty_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("admins.json");

        assert!(ensure_store(&path).expect("store created"));
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "admins": [] }));

        // second call leaves the file alone
        assert!(!ensure_store(&path).expect("store exists"));
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/admins.json");
        let mut store = AdminStore::default();
        store
            .push(&AdminRecord::migrated("zed".into(), "h1".into(), Local::now()))
            .unwrap();
        store
            .push(&AdminRecord::migrated("amy".into(), "h2".into(), Local::now()))
            .unwrap();

        save_store(&path, &store).expect("store saved");
        let loaded = load_store(&path).expect("store loaded");
        assert_eq!(loaded, store);
        assert_eq!(loaded.admins[0]["username"], "zed");
        assert_eq!(loaded.admins[1]["role"], "super_admin");
        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("admins.json")]);
    }

    #[test]
    fn test_saved_store_is_indented_and_unescaped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("admins.json");
        let mut store = AdminStore::default();
        store
            .push(&AdminRecord::migrated(
                "администратор".into(),
                "abc123".into(),
                Local::now(),
            ))
            .unwrap();

        save_store(&path, &store).expect("store saved");
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"username\": \"администратор\""));
        assert!(raw.starts_with("{\n  \"admins\": ["));
    }

    #[test]
    fn test_load_invalid_json_is_store_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("admins.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_store(&path).unwrap_err();
        assert_eq!(err.code(), "StoreReadError");
    }

    #[test]
    fn test_load_directory_is_store_read_error() {
        let dir = tempdir().unwrap();
        let err = load_store(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::StoreRead { .. }));
    }

    #[test]
    fn test_save_leaves_unrelated_tmp_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("admins.json");
        let backup = dir.path().join("admins.json.tmp");
        fs::write(&backup, "operator backup").unwrap();

        save_store(&path, &AdminStore::default()).expect("store saved");
        save_store(&path, &AdminStore::default()).expect("store overwritten");

        assert_eq!(fs::read_to_string(&backup).unwrap(), "operator backup");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_save_into_missing_parent_fails_cleanly() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("admins.json");

        let err = save_store(&path, &AdminStore::default()).unwrap_err();
        assert_eq!(err.code(), "UnexpectedError");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
