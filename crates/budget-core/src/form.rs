//! Budget Form State
//!
//! Working state behind the create and update pages: a client name and an
//! ordered, editable list of line items.

use log::{error, info};

use crate::api::BudgetApi;
use crate::error::{ApiResult, SubmitError};
use crate::models::{Budget, BudgetItem, BudgetPayload};
use crate::routes::AppRoute;
use crate::validation::{self, FieldPath, ValidationErrors};

pub const CREATE_FAILED: &str = "Houve um erro ao enviar os dados do orçamento.";
pub const UPDATE_FAILED: &str = "Houve um erro ao salvar o orçamento.";
pub const LOAD_FAILED: &str = "Houve um erro ao carregar os dados do orçamento.";

/// Whether the form creates a new budget or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(String),
}

impl FormMode {
    /// Message shown when the submit request fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            FormMode::Create => CREATE_FAILED,
            FormMode::Update(_) => UPDATE_FAILED,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Criar Orçamento",
            FormMode::Update(_) => "Editar Orçamento",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Enviar Orçamento",
            FormMode::Update(_) => "Salvar Orçamento",
        }
    }
}

/// One line item as typed; numbers stay raw until validation
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetItemDraft {
    pub description: String,
    pub unit_value: String,
    pub quantity: String,
}

impl Default for BudgetItemDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            unit_value: "0".to_string(),
            quantity: "1".to_string(),
        }
    }
}

impl From<&BudgetItem> for BudgetItemDraft {
    fn from(item: &BudgetItem) -> Self {
        Self {
            description: item.description.clone(),
            unit_value: item.unit_value.to_string(),
            quantity: item.quantity.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetForm {
    pub mode: FormMode,
    pub client_name: String,
    pub items: Vec<BudgetItemDraft>,
    pub errors: ValidationErrors,
    submitting: bool,
}

impl BudgetForm {
    /// Default state: empty client name and a single default item
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            client_name: String::new(),
            items: vec![BudgetItemDraft::default()],
            errors: ValidationErrors::new(),
            submitting: false,
        }
    }

    pub fn create() -> Self {
        Self::new(FormMode::Create)
    }

    pub fn update(id: impl Into<String>) -> Self {
        Self::new(FormMode::Update(id.into()))
    }

    /// Replace the entire working state with a fetched budget, keeping the mode
    pub fn load(&mut self, budget: &Budget) {
        self.client_name = budget.client_name.clone();
        self.items = budget.budget_items.iter().map(BudgetItemDraft::from).collect();
        self.errors = ValidationErrors::new();
    }

    /// Fetch a budget by id and build an update form from it
    pub async fn fetch<A: BudgetApi + ?Sized>(api: &A, id: &str) -> ApiResult<BudgetForm> {
        match api.get_budget(id).await {
            Ok(budget) => {
                let mut form = Self::update(id);
                form.load(&budget);
                info!("[BudgetForm] Loaded budget {} with {} items", id, form.items.len());
                Ok(form)
            }
            Err(e) => {
                error!("[BudgetForm] Failed to load budget {}: {}", id, e);
                Err(e)
            }
        }
    }

    pub fn add_item(&mut self) {
        self.items.push(BudgetItemDraft::default());
        self.errors.clear(FieldPath::BudgetItems);
    }

    /// Remove the item at `index`. Out-of-range indices are ignored.
    pub fn remove_item(&mut self, index: usize) -> Option<BudgetItemDraft> {
        if index >= self.items.len() {
            return None;
        }
        self.errors.clear_items();
        Some(self.items.remove(index))
    }

    pub fn set_client_name(&mut self, value: String) {
        self.client_name = value;
        self.errors.clear(FieldPath::ClientName);
    }

    pub fn set_item_description(&mut self, index: usize, value: String) {
        if let Some(item) = self.items.get_mut(index) {
            item.description = value;
            self.errors.clear(FieldPath::ItemDescription(index));
        }
    }

    pub fn set_item_unit_value(&mut self, index: usize, value: String) {
        if let Some(item) = self.items.get_mut(index) {
            item.unit_value = value;
            self.errors.clear(FieldPath::ItemUnitValue(index));
        }
    }

    pub fn set_item_quantity(&mut self, index: usize, value: String) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = value;
            self.errors.clear(FieldPath::ItemQuantity(index));
        }
    }

    pub fn error(&self, field: FieldPath) -> Option<&str> {
        self.errors.get(field)
    }

    /// Validate, remembering the field errors for display
    pub fn prepare(&mut self) -> Result<BudgetPayload, ValidationErrors> {
        let result = validation::validate_budget(&self.client_name, &self.items);
        self.errors = match &result {
            Ok(_) => ValidationErrors::new(),
            Err(errors) => errors.clone(),
        };
        result
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and mark the form as submitting.
    ///
    /// Refused while an earlier submission is still in flight, so one click
    /// never turns into two requests.
    pub fn begin_submit(&mut self) -> Result<BudgetPayload, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let payload = self.prepare().map_err(SubmitError::Invalid)?;
        self.submitting = true;
        Ok(payload)
    }

    /// Settle a submission; yields the route to navigate to on success
    pub fn finish_submit(&mut self, outcome: ApiResult<Option<Budget>>) -> Result<AppRoute, SubmitError> {
        self.submitting = false;
        outcome?;
        Ok(AppRoute::Budgets)
    }

    /// Validate and send in one go
    pub async fn submit<A: BudgetApi + ?Sized>(&mut self, api: &A) -> Result<AppRoute, SubmitError> {
        let payload = self.begin_submit()?;
        let outcome = send(api, &self.mode, &payload).await;
        self.finish_submit(outcome)
    }
}

/// Issue the create (POST) or update (PUT) request for a validated payload
pub async fn send<A: BudgetApi + ?Sized>(
    api: &A,
    mode: &FormMode,
    payload: &BudgetPayload,
) -> ApiResult<Option<Budget>> {
    let result = match mode {
        FormMode::Create => api.create_budget(payload).await,
        FormMode::Update(id) => api.update_budget(id, payload).await,
    };
    match &result {
        Ok(Some(budget)) => info!("[BudgetForm] Saved budget {}", budget.id),
        Ok(None) => info!("[BudgetForm] Saved budget"),
        Err(e) => error!("[BudgetForm] Error saving budget: {}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{sample_budget, ApiCall, FakeApi};
    use crate::error::ApiError;
    use crate::validation::CLIENT_NAME_REQUIRED;

    fn filled_form(mode: FormMode) -> BudgetForm {
        let mut form = BudgetForm::new(mode);
        form.set_client_name("Maria".to_string());
        form.set_item_description(0, "Bolo".to_string());
        form.set_item_unit_value(0, "10".to_string());
        form.set_item_quantity(0, "2".to_string());
        form
    }

    #[test]
    fn test_default_state() {
        let form = BudgetForm::create();
        assert_eq!(form.client_name, "");
        assert_eq!(form.items, vec![BudgetItemDraft::default()]);
        assert_eq!(form.items[0].unit_value, "0");
        assert_eq!(form.items[0].quantity, "1");
    }

    #[test]
    fn test_add_item_appends_default() {
        let mut form = filled_form(FormMode::Create);
        form.add_item();
        assert_eq!(form.items.len(), 2);
        assert_eq!(form.items[0].description, "Bolo");
        assert_eq!(form.items[1], BudgetItemDraft::default());
    }

    #[test]
    fn test_remove_item_preserves_order() {
        let mut form = BudgetForm::create();
        form.items = ["a", "b", "c", "d"]
            .iter()
            .map(|d| BudgetItemDraft { description: d.to_string(), ..Default::default() })
            .collect();

        let removed = form.remove_item(1).expect("in range");
        assert_eq!(removed.description, "b");
        let left: Vec<_> = form.items.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(left, vec!["a", "c", "d"]);

        assert!(form.remove_item(10).is_none());
        assert_eq!(form.items.len(), 3);
    }

    #[test]
    fn test_remove_last_item_empties_list() {
        let mut form = BudgetForm::create();
        form.remove_item(0);
        assert!(form.items.is_empty());
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = BudgetForm::create();
        assert!(form.prepare().is_err());
        assert!(form.error(FieldPath::ClientName).is_some());

        form.set_client_name("Ana".to_string());
        assert!(form.error(FieldPath::ClientName).is_none());
        assert!(form.error(FieldPath::ItemDescription(0)).is_some());
    }

    #[tokio::test]
    async fn test_create_issues_single_post() {
        let api = FakeApi::new();
        let mut form = filled_form(FormMode::Create);

        let route = form.submit(&api).await.expect("submit succeeds");

        assert_eq!(route, AppRoute::Budgets);
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            ApiCall::Create(payload) => {
                assert_eq!(payload.client_name, "Maria");
                assert_eq!(payload.budget_items[0].quantity, 2.0);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_issues_single_put() {
        let api = FakeApi::new();
        api.insert(sample_budget("42"));
        let mut form = filled_form(FormMode::Update("42".to_string()));

        form.submit(&api).await.expect("submit succeeds");

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(&calls[0], ApiCall::Update(id, _) if id == "42"));
    }

    #[tokio::test]
    async fn test_empty_client_name_blocks_request() {
        let api = FakeApi::new();
        let mut form = filled_form(FormMode::Create);
        form.set_client_name(String::new());

        let err = form.submit(&api).await.unwrap_err();

        let errors = err.validation().expect("validation error");
        assert_eq!(errors.get(FieldPath::ClientName), Some(CLIENT_NAME_REQUIRED));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_request_failure_is_returned() {
        let api = FakeApi::new();
        api.fail_next(ApiError::Status { status: 500, message: "boom".to_string() });
        let mut form = filled_form(FormMode::Create);

        let err = form.submit(&api).await.unwrap_err();

        assert!(matches!(err, SubmitError::Request(ApiError::Status { status: 500, .. })));
        assert_eq!(form.client_name, "Maria");
    }

    #[tokio::test]
    async fn test_load_then_noop_save_round_trips() {
        let api = FakeApi::new();
        let original = sample_budget("42");
        api.insert(original.clone());

        let mut form = BudgetForm::fetch(&api, "42").await.expect("loads");
        assert_eq!(form.mode, FormMode::Update("42".to_string()));
        assert_eq!(form.client_name, original.client_name);
        assert_eq!(form.items.len(), original.budget_items.len());
        assert_eq!(form.items[0].unit_value, "12.5");
        assert_eq!(form.items[0].quantity, "3");

        form.submit(&api).await.expect("saves");

        match api.calls().last() {
            Some(ApiCall::Update(id, payload)) => {
                assert_eq!(id, "42");
                assert_eq!(*payload, BudgetPayload::from(&original));
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_issues_no_request() {
        let api = FakeApi::new();
        let mut form = filled_form(FormMode::Create);

        let payload = form.begin_submit().expect("first submit starts");
        assert!(form.is_submitting());

        let err = form.submit(&api).await.unwrap_err();
        assert_eq!(err, SubmitError::InFlight);
        assert!(api.calls().is_empty());

        let outcome = send(&api, &form.mode, &payload).await;
        assert_eq!(form.finish_submit(outcome), Ok(AppRoute::Budgets));
        assert!(!form.is_submitting());
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_submit_can_be_retried() {
        let api = FakeApi::new();
        api.fail_next(ApiError::Network("offline".to_string()));
        let mut form = filled_form(FormMode::Create);

        assert!(form.submit(&api).await.is_err());
        assert!(!form.is_submitting());

        form.submit(&api).await.expect("retry succeeds");
        assert_eq!(api.calls().len(), 2);
    }

    #[test]
    fn test_invalid_form_does_not_start_submitting() {
        let mut form = BudgetForm::create();
        let err = form.begin_submit().unwrap_err();
        assert!(err.validation().is_some());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_failed_load_returns_error() {
        let api = FakeApi::new();
        let err = BudgetForm::fetch(&api, "missing").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }
}
