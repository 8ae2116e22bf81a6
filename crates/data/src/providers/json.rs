use crate::PositionSource;
use crate::position::OnChainPosition;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads positions from a JSON snapshot on disk.
///
/// The file holds either a single position object or an array of them, in
/// the shape produced by dumping position-manager `positions(tokenId)` calls.
#[derive(Debug, Clone)]
pub struct JsonPositionSource {
    path: PathBuf,
}

impl JsonPositionSource {
    /// Creates a source backed by `path`. The file is read on every lookup.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// Liquidity is a u128, which serde cannot buffer through untagged enums or
// `serde_json::Value`, so the shape is picked from the leading token.
fn parse_snapshot(raw: &str) -> serde_json::Result<Vec<OnChainPosition>> {
    if raw.trim_start().starts_with('[') {
        serde_json::from_str(raw)
    } else {
        serde_json::from_str::<OnChainPosition>(raw).map(|position| vec![position])
    }
}

#[async_trait]
impl PositionSource for JsonPositionSource {
    async fn list_positions(&self) -> Result<Vec<OnChainPosition>> {
        debug!(path = %self.path.display(), "Reading position snapshot");
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        let positions = parse_snapshot(&raw)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;

        info!(path = %self.path.display(), count = positions.len(), "Loaded positions");
        Ok(positions)
    }

    async fn fetch_position(&self, token_id: u64) -> Result<OnChainPosition> {
        self.list_positions()
            .await?
            .into_iter()
            .find(|p| p.token_id == token_id)
            .ok_or_else(|| anyhow!("position {token_id} not found in {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn snapshot(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_array_snapshot() {
        let file = snapshot(
            r#"[
                {"token_id": 1, "tickLower": 60000, "tickUpper": 70000, "liquidity": 1000},
                {"token_id": 2, "tickLower": 61000, "tickUpper": 65000, "liquidity": 2000}
            ]"#,
        );
        let source = JsonPositionSource::new(file.path());

        assert_eq!(source.list_positions().await.unwrap().len(), 2);
        let second = source.fetch_position(2).await.unwrap();
        assert_eq!(second.liquidity, 2000);
        assert_eq!(second.tick_lower, 61_000);
    }

    #[tokio::test]
    async fn test_reads_single_object_snapshot() {
        let file =
            snapshot(r#"{"token_id": 9, "tick_lower": -10, "tick_upper": 10, "liquidity": 5}"#);
        let source = JsonPositionSource::new(file.path());
        assert_eq!(source.fetch_position(9).await.unwrap().tick_upper, 10);
    }

    #[tokio::test]
    async fn test_reads_liquidity_beyond_u64() {
        let file = snapshot(
            r#"[
                {"token_id": 1, "tickLower": 60000, "tickUpper": 70000, "liquidity": 18446744073709551616},
                {"token_id": 2, "tickLower": 60000, "tickUpper": 70000, "liquidity": 7}
            ]"#,
        );
        let source = JsonPositionSource::new(file.path());

        let positions = source.list_positions().await.unwrap();
        assert_eq!(positions[0].liquidity, u128::from(u64::MAX) + 1);
        assert_eq!(positions[1].liquidity, 7);
    }

    #[tokio::test]
    async fn test_reads_single_object_with_max_liquidity() {
        let file = snapshot(&format!(
            r#"{{"tokenId": 4, "tickLower": 99040, "tickUpper": 105972, "liquidity": {}}}"#,
            u128::MAX
        ));
        let source = JsonPositionSource::new(file.path());

        let position = source.fetch_position(4).await.unwrap();
        assert_eq!(position.liquidity, u128::MAX);
        assert_eq!(position.tick_lower, 99_040);
    }

    #[tokio::test]
    async fn test_missing_id_is_an_error() {
        let file = snapshot("[]");
        let source = JsonPositionSource::new(file.path());
        let err = source.fetch_position(3).await.unwrap_err();
        assert!(err.to_string().contains("position 3 not found"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let file = snapshot("{ not json");
        let source = JsonPositionSource::new(file.path());
        let err = source.list_positions().await.unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let source = JsonPositionSource::new("/definitely/not/here.json");
        let err = source.list_positions().await.unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
