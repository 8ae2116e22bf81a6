use crate::PositionSource;
use crate::position::OnChainPosition;
use anyhow::Result;
use async_trait::async_trait;

/// Positions held in memory. Useful for tests and for callers that already
/// decoded position data elsewhere.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPositionSource {
    positions: Vec<OnChainPosition>,
}

impl InMemoryPositionSource {
    #[must_use]
    pub fn new(positions: Vec<OnChainPosition>) -> Self {
        Self { positions }
    }
}

#[async_trait]
impl PositionSource for InMemoryPositionSource {
    async fn list_positions(&self) -> Result<Vec<OnChainPosition>> {
        Ok(self.positions.clone())
    }
}
