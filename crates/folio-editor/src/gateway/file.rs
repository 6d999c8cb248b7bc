//! JSON file gateway
//!
//! The layout lives in one JSON array. Replace writes a sibling temp file,
//! syncs it and renames it over the original, so readers see either the old
//! or the new layout, never a truncated one.

use super::{sort_records, PersistenceGateway};
use crate::error::GatewayError;
use async_trait::async_trait;
use folio_layout::PersistedSection;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Gateway backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    /// Create gateway for `path`; the file need not exist yet
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl PersistenceGateway for JsonFileGateway {
    async fn load(&self) -> Result<Vec<PersistedSection>, GatewayError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no layout file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(GatewayError::io(&self.path, e)),
        };

        let mut records: Vec<PersistedSection> = serde_json::from_slice(&bytes)?;
        sort_records(&mut records);
        Ok(records)
    }

    async fn replace(&self, entries: Vec<PersistedSection>) -> Result<(), GatewayError> {
        let bytes = serde_json::to_vec_pretty(&entries)?;
        let staging = self.staging_path();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| GatewayError::io(parent, e))?;
        }

        let mut file = tokio::fs::File::create(&staging)
            .await
            .map_err(|e| GatewayError::io(&staging, e))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| GatewayError::io(&staging, e))?;
        file.sync_all()
            .await
            .map_err(|e| GatewayError::io(&staging, e))?;
        drop(file);

        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| GatewayError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), entries = entries.len(), "layout file replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_section::Content;
    use serde_json::json;

    #[tokio::test]
    async fn missing_file_is_empty_layout() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = JsonFileGateway::new(dir.path().join("layout.json"));
        assert!(gateway.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = JsonFileGateway::new(dir.path().join("nested").join("layout.json"));
        let records = vec![
            PersistedSection::new("header", 0, Content::new()),
            PersistedSection::new(
                "hero_centered",
                1,
                json!({ "headline": "Hi" }).as_object().cloned().unwrap(),
            ),
        ];

        gateway.replace(records.clone()).await.unwrap();
        assert_eq!(gateway.load().await.unwrap(), records);
        assert!(!gateway.staging_path().exists());
    }

    #[tokio::test]
    async fn load_sorts_hand_edited_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(
            &path,
            r#"[{"section_id":"blog","sort_order":1,"content":null},
               {"section_id":"header","sort_order":0,"content":{}}]"#,
        )
        .unwrap();

        let loaded = JsonFileGateway::new(&path).load().await.unwrap();
        assert_eq!(loaded[0].section_type_id, "header");
        assert_eq!(loaded[1].section_type_id, "blog");
    }

    #[tokio::test]
    async fn corrupt_file_is_codec_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonFileGateway::new(&path).load().await.unwrap_err();
        assert!(matches!(err, GatewayError::Codec(_)));
    }
}
