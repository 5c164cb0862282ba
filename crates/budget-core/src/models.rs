//! Budget Models
//!
//! Wire types matching the budget API (camelCase JSON).

use serde::{Deserialize, Serialize};

/// Seller attached to a budget by the server
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(default)]
    pub full_name: String,
}

/// One priced row within a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub description: String,
    pub unit_value: f64,
    pub quantity: f64,
}

impl BudgetItem {
    /// Line subtotal (`quantity * unit_value`)
    pub fn subtotal(&self) -> f64 {
        self.quantity * self.unit_value
    }
}

/// Budget (quote) as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub client_name: String,
    #[serde(default)]
    pub vendor: Vendor,
    #[serde(default)]
    pub budget_items: Vec<BudgetItem>,
}

/// Request body for create and update.
///
/// Server-owned fields (`id`, `vendor`) are never sent back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPayload {
    pub client_name: String,
    pub budget_items: Vec<BudgetItem>,
}

impl From<&Budget> for BudgetPayload {
    fn from(budget: &Budget) -> Self {
        Self {
            client_name: budget.client_name.clone(),
            budget_items: budget.budget_items.clone(),
        }
    }
}

/// Signed-in user profile from `GET /me`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl User {
    /// Best label for the sidebar
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub user: User,
}
