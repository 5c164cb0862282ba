//! Budget List
//!
//! Rows for the budgets table and the PDF downloads behind its buttons.

use log::{error, info};

use crate::api::{BudgetApi, DocumentKind};
use crate::error::ApiResult;
use crate::models::Budget;
use crate::money::{format_brl, total_value};

pub const LIST_FAILED: &str = "Não foi possível carregar os orçamentos.";

/// One table row; the total is derived, never stored
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    pub id: String,
    pub client_name: String,
    pub vendor_name: String,
    pub total: f64,
}

impl BudgetRow {
    pub fn total_label(&self) -> String {
        format_brl(self.total)
    }
}

impl From<&Budget> for BudgetRow {
    fn from(budget: &Budget) -> Self {
        Self {
            id: budget.id.clone(),
            client_name: budget.client_name.clone(),
            vendor_name: budget.vendor.full_name.clone(),
            total: total_value(&budget.budget_items),
        }
    }
}

/// Load every budget, in server order
pub async fn fetch_rows<A: BudgetApi + ?Sized>(api: &A) -> ApiResult<Vec<BudgetRow>> {
    match api.list_budgets().await {
        Ok(budgets) => {
            info!("[budgets] Loaded {} budgets", budgets.len());
            Ok(budgets.iter().map(BudgetRow::from).collect())
        }
        Err(e) => {
            error!("[budgets] Error fetching budgets: {}", e);
            Err(e)
        }
    }
}

/// PDF bytes for the budget or its contract
pub async fn fetch_document<A: BudgetApi + ?Sized>(
    api: &A,
    kind: DocumentKind,
    budget_id: &str,
) -> ApiResult<Vec<u8>> {
    api.document(kind, budget_id).await.map_err(|e| {
        error!("[budgets] Error printing {:?} for {}: {}", kind, budget_id, e);
        e
    })
}
