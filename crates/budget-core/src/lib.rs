//! Budget Admin Core
//!
//! Platform-independent half of the budget admin front end:
//! - models: wire types shared with the budget API
//! - validation / form: the budget form working state and its schema
//! - listing: rows and PDF downloads for the budgets table
//! - session / routes / lifecycle: guard decisions and one-shot requests
//! - api: the `BudgetApi` seam and its reqwest implementation

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod lifecycle;
pub mod listing;
pub mod models;
pub mod money;
pub mod routes;
pub mod session;
pub mod validation;

pub use api::{BudgetApi, DocumentKind, HttpBudgetApi};
pub use auth::LoginForm;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, SubmitError};
pub use form::{BudgetForm, BudgetItemDraft, FormMode};
pub use lifecycle::{RequestState, RequestStatus};
pub use listing::BudgetRow;
pub use models::{Budget, BudgetItem, BudgetPayload, User, Vendor};
pub use money::{format_brl, total_value};
pub use routes::{AppRoute, GuardDecision, RouteArea};
pub use session::Session;
pub use validation::{FieldPath, ValidationErrors};
