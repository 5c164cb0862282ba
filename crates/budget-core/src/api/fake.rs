//! In-memory `BudgetApi` for tests. Records every call.

use std::cell::RefCell;

use async_trait::async_trait;

use super::{BudgetApi, DocumentKind};
use crate::error::{ApiError, ApiResult};
use crate::models::{Budget, BudgetItem, BudgetPayload, User, Vendor};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Login(String),
    Me,
    List,
    Get(String),
    Create(BudgetPayload),
    Update(String, BudgetPayload),
    Document(DocumentKind, String),
}

pub fn sample_budget(id: &str) -> Budget {
    Budget {
        id: id.to_string(),
        client_name: "Maria Souza".to_string(),
        vendor: Vendor { full_name: "Carlos Lima".to_string() },
        budget_items: vec![
            BudgetItem { description: "Bolo de chocolate".to_string(), unit_value: 12.5, quantity: 3.0 },
            BudgetItem { description: "Docinhos".to_string(), unit_value: 0.75, quantity: 100.0 },
        ],
    }
}

#[derive(Default)]
pub struct FakeApi {
    budgets: RefCell<Vec<Budget>>,
    calls: RefCell<Vec<ApiCall>>,
    next_failure: RefCell<Option<ApiError>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, budget: Budget) {
        self.budgets.borrow_mut().push(budget);
    }

    /// Make the next call fail with `err`
    pub fn fail_next(&self, err: ApiError) {
        *self.next_failure.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        match self.next_failure.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found(id: &str) -> ApiError {
        ApiError::Status { status: 404, message: format!("budget {} not found", id) }
    }
}

#[async_trait(?Send)]
impl BudgetApi for FakeApi {
    async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        self.record(ApiCall::Login(username.to_string()))?;
        if password == "secret" {
            Ok(format!("token-{}", username))
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    async fn me(&self) -> ApiResult<User> {
        self.record(ApiCall::Me)?;
        Ok(User {
            id: Some("1".to_string()),
            username: Some("maria".to_string()),
            full_name: Some("Maria Souza".to_string()),
        })
    }

    async fn list_budgets(&self) -> ApiResult<Vec<Budget>> {
        self.record(ApiCall::List)?;
        Ok(self.budgets.borrow().clone())
    }

    async fn get_budget(&self, id: &str) -> ApiResult<Budget> {
        self.record(ApiCall::Get(id.to_string()))?;
        self.budgets
            .borrow()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create_budget(&self, payload: &BudgetPayload) -> ApiResult<Option<Budget>> {
        self.record(ApiCall::Create(payload.clone()))?;
        let mut budgets = self.budgets.borrow_mut();
        let budget = Budget {
            id: (budgets.len() + 1).to_string(),
            client_name: payload.client_name.clone(),
            vendor: Vendor::default(),
            budget_items: payload.budget_items.clone(),
        };
        budgets.push(budget.clone());
        Ok(Some(budget))
    }

    async fn update_budget(&self, id: &str, payload: &BudgetPayload) -> ApiResult<Option<Budget>> {
        self.record(ApiCall::Update(id.to_string(), payload.clone()))?;
        let mut budgets = self.budgets.borrow_mut();
        let budget = budgets.iter_mut().find(|b| b.id == id).ok_or_else(|| Self::not_found(id))?;
        budget.client_name = payload.client_name.clone();
        budget.budget_items = payload.budget_items.clone();
        Ok(Some(budget.clone()))
    }

    async fn document(&self, kind: DocumentKind, budget_id: &str) -> ApiResult<Vec<u8>> {
        self.record(ApiCall::Document(kind, budget_id.to_string()))?;
        Ok(b"%PDF-1.4".to_vec())
    }
}
