//! Budget API
//!
//! The remote persistence API seen through one trait, so pages and tests can
//! share the same calling code.

mod http;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Budget, BudgetPayload, User};

pub use http::HttpBudgetApi;

/// Server-rendered PDF documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Budget,
    Contract,
}

impl DocumentKind {
    /// API path of the document for a budget id
    pub fn path(&self, budget_id: &str) -> String {
        match self {
            DocumentKind::Budget => format!("/budget/{}/print", budget_id),
            DocumentKind::Contract => format!("/contract/from-budget/{}/print", budget_id),
        }
    }
}

/// Remote budget API.
///
/// Futures are not `Send`: in the browser they run on the single wasm thread.
#[async_trait(?Send)]
pub trait BudgetApi {
    /// Exchange credentials for a session token
    async fn login(&self, username: &str, password: &str) -> ApiResult<String>;

    /// Current user for the attached token
    async fn me(&self) -> ApiResult<User>;

    async fn list_budgets(&self) -> ApiResult<Vec<Budget>>;

    async fn get_budget(&self, id: &str) -> ApiResult<Budget>;

    /// Any 2xx counts as saved; the stored budget comes back when the
    /// response body carries one.
    async fn create_budget(&self, payload: &BudgetPayload) -> ApiResult<Option<Budget>>;

    async fn update_budget(&self, id: &str, payload: &BudgetPayload) -> ApiResult<Option<Budget>>;

    /// Raw bytes of a server-rendered PDF
    async fn document(&self, kind: DocumentKind, budget_id: &str) -> ApiResult<Vec<u8>>;
}
