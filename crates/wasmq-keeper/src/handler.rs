//! Top-level query dispatch.

use crate::error::QueryError;
use crate::plugins::QueryPlugins;
use crate::request::{QueryRequest, WireQueryRequest};

/// Routes each query to the plugin registered for its domain.
///
/// The handler never touches a store itself; everything it knows about
/// chain state comes through [`QueryPlugins`].
#[derive(Debug, Clone)]
pub struct QueryHandler {
    plugins: QueryPlugins,
}

impl QueryHandler {
    pub fn new(plugins: QueryPlugins) -> Self {
        Self { plugins }
    }

    pub fn plugins(&self) -> &QueryPlugins {
        &self.plugins
    }

    /// Decodes a JSON query envelope and dispatches it.
    pub fn query_json(&self, bytes: &[u8]) -> Result<Vec<u8>, QueryError> {
        let request: WireQueryRequest =
            serde_json::from_slice(bytes).map_err(QueryError::Envelope)?;
        self.query(request)
    }

    /// Dispatches a wire request. If several domains are set, the first of
    /// ledger, custom, staking, contract wins.
    pub fn query(&self, request: WireQueryRequest) -> Result<Vec<u8>, QueryError> {
        let request = QueryRequest::try_from(request)?;
        self.query_request(&request)
    }

    /// Forwards a request to its domain handler and returns the handler's
    /// result unchanged.
    pub fn query_request(&self, request: &QueryRequest) -> Result<Vec<u8>, QueryError> {
        tracing::debug!("Dispatching {} query", request.domain());

        let missing =
            || QueryError::unsupported(format!("{} queries are not configured", request.domain()));

        match request {
            QueryRequest::Ledger(q) => {
                let handler = self.plugins.ledger.as_ref().ok_or_else(missing)?;
                handler(q)
            }
            QueryRequest::Custom(q) => {
                let handler = self.plugins.custom.as_ref().ok_or_else(missing)?;
                handler(q)
            }
            QueryRequest::Staking(q) => {
                let handler = self.plugins.staking.as_ref().ok_or_else(missing)?;
                handler(q)
            }
            QueryRequest::Contract(q) => {
                let handler = self.plugins.contract.as_ref().ok_or_else(missing)?;
                handler(q)
            }
        }
    }
}
