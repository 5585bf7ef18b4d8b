//! Key/value metadata describing the capture session.

use super::TraceStore;
use crate::engine::{SqlValue, StorageEngine};
use crate::error::{Result, StoreError};
use crate::records::SessionEntry;
use std::fmt;

/// Well-known session keys written by the capture tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// Whether the capture targeted a supported device ("1"/"0").
    TargetDevice,
    Platform,
    Hardware,
    /// Data-collection API the capture used.
    DcApi,
    RemoteAgent,
    HardwareId,
    /// Size in bytes of each sample blob.
    BlobSize,
}

impl SessionKey {
    pub const ALL: [SessionKey; 7] = [
        SessionKey::TargetDevice,
        SessionKey::Platform,
        SessionKey::Hardware,
        SessionKey::DcApi,
        SessionKey::RemoteAgent,
        SessionKey::HardwareId,
        SessionKey::BlobSize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::TargetDevice => "target_device",
            SessionKey::Platform => "platform",
            SessionKey::Hardware => "hardware",
            SessionKey::DcApi => "dc_api",
            SessionKey::RemoteAgent => "remote_agent",
            SessionKey::HardwareId => "hardware_id",
            SessionKey::BlobSize => "blob_size",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<E: StorageEngine> TraceStore<E> {
    /// Set a session value, replacing any previous value for `key`.
    pub fn set_session_value(&mut self, key: &str, value: &str) -> Result<()> {
        self.engine.execute(
            "INSERT INTO session_info (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            &[
                SqlValue::Text(key.to_string()),
                SqlValue::Text(value.to_string()),
            ],
        )?;
        Ok(())
    }

    pub fn session_value(&self, key: &str) -> Result<Option<String>> {
        let entry: Option<SessionEntry> = self
            .fetch_where("WHERE key = ?1", &[SqlValue::Text(key.to_string())])?
            .into_iter()
            .next();
        Ok(entry.map(|e| e.value))
    }

    pub fn session_entries(&self) -> Result<Vec<SessionEntry>> {
        self.fetch_where("ORDER BY key", &[])
    }

    pub fn set_session_key(&mut self, key: SessionKey, value: &str) -> Result<()> {
        self.set_session_value(key.as_str(), value)
    }

    pub fn session_key(&self, key: SessionKey) -> Result<Option<String>> {
        self.session_value(key.as_str())
    }

    pub fn set_target_device(&mut self, targeted: bool) -> Result<()> {
        self.set_session_key(SessionKey::TargetDevice, if targeted { "1" } else { "0" })
    }

    /// False when the flag was never written.
    pub fn is_target_device(&self) -> Result<bool> {
        Ok(self
            .session_key(SessionKey::TargetDevice)?
            .is_some_and(|v| v.trim() == "1"))
    }

    pub fn set_blob_size(&mut self, size: u32) -> Result<()> {
        self.set_session_key(SessionKey::BlobSize, &size.to_string())
    }

    pub fn blob_size(&self) -> Result<Option<u32>> {
        match self.session_key(SessionKey::BlobSize)? {
            Some(raw) => raw.trim().parse().map(Some).map_err(|e| StoreError::Decode {
                column: SessionKey::BlobSize.to_string(),
                message: format!("{raw:?} is not a blob size: {e}"),
            }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::create_test_store;
    use super::*;

    #[test]
    fn test_set_replaces_value() {
        let mut store = create_test_store();
        assert_eq!(store.session_value("platform").unwrap(), None);
        store.set_session_key(SessionKey::Platform, "Android").unwrap();
        store.set_session_key(SessionKey::Platform, "Linux").unwrap();
        assert_eq!(
            store.session_key(SessionKey::Platform).unwrap().as_deref(),
            Some("Linux")
        );
        assert_eq!(store.session_entries().unwrap().len(), 1);
    }

    #[test]
    fn test_target_device_flag() {
        let mut store = create_test_store();
        assert!(!store.is_target_device().unwrap());
        store.set_target_device(true).unwrap();
        assert!(store.is_target_device().unwrap());
        store.set_target_device(false).unwrap();
        assert!(!store.is_target_device().unwrap());
    }

    #[test]
    fn test_blob_size() {
        let mut store = create_test_store();
        assert_eq!(store.blob_size().unwrap(), None);
        store.set_blob_size(512).unwrap();
        assert_eq!(store.blob_size().unwrap(), Some(512));

        store.set_session_value("blob_size", "big").unwrap();
        assert!(matches!(store.blob_size(), Err(StoreError::Decode { .. })));
    }

    #[test]
    fn test_key_names_are_distinct() {
        let mut names: Vec<&str> = SessionKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SessionKey::ALL.len());
    }
}
