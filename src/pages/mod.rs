//! Pages
//!
//! One component per route.

mod budget_form;
mod budgets;
mod home;
mod login;

pub use budget_form::{CreateBudgetPage, UpdateBudgetPage};
pub use budgets::BudgetsPage;
pub use home::HomePage;
pub use login::LoginPage;
