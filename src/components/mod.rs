//! UI Components
//!
//! Route guards, the app shell and form pieces.

pub mod auth_layout;
mod protected;
mod app_layout;
mod field_error;
mod budget_item_row;

pub use auth_layout::AuthLayout;
pub use protected::Protected;
pub use app_layout::AppLayout;
pub use field_error::FieldError;
pub use budget_item_row::BudgetItemRow;
