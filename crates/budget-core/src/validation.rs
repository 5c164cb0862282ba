//! Form Validation
//!
//! Schema for the budget and login forms. Numeric inputs stay as raw text in
//! the form and are coerced here.

use std::collections::BTreeMap;
use std::fmt;

use crate::form::BudgetItemDraft;
use crate::models::{BudgetItem, BudgetPayload};

pub const CLIENT_NAME_REQUIRED: &str = "O nome do cliente é obrigatório";
pub const DESCRIPTION_REQUIRED: &str = "A descrição é obrigatória";
pub const UNIT_VALUE_POSITIVE: &str = "O valor unitário deve ser maior que zero";
pub const QUANTITY_AT_LEAST_ONE: &str = "A quantidade deve ser pelo menos 1";
pub const NOT_A_NUMBER: &str = "Informe um número válido";
pub const ITEMS_REQUIRED: &str = "Adicione pelo menos um item ao orçamento";
pub const USERNAME_REQUIRED: &str = "O usuário é obrigatório";
pub const PASSWORD_REQUIRED: &str = "A senha é obrigatória";

/// Addressable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    ClientName,
    /// The item list as a whole
    BudgetItems,
    ItemDescription(usize),
    ItemUnitValue(usize),
    ItemQuantity(usize),
    Username,
    Password,
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::ClientName => write!(f, "clientName"),
            FieldPath::BudgetItems => write!(f, "budgetItems"),
            FieldPath::ItemDescription(i) => write!(f, "budgetItems.{}.description", i),
            FieldPath::ItemUnitValue(i) => write!(f, "budgetItems.{}.unitValue", i),
            FieldPath::ItemQuantity(i) => write!(f, "budgetItems.{}.quantity", i),
            FieldPath::Username => write!(f, "username"),
            FieldPath::Password => write!(f, "password"),
        }
    }
}

/// Field-level messages, first failure per field
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors {
    fields: BTreeMap<FieldPath, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: FieldPath, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: FieldPath) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self, field: FieldPath) {
        self.fields.remove(&field);
    }

    /// Drop every error attached to item rows (indices shift on removal)
    pub fn clear_items(&mut self) {
        self.fields.retain(|field, _| {
            !matches!(
                field,
                FieldPath::ItemDescription(_) | FieldPath::ItemUnitValue(_) | FieldPath::ItemQuantity(_)
            )
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldPath, &str)> {
        self.fields.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Number coercion for text inputs.
///
/// Surrounding whitespace is ignored and blank text reads as `0`. Unsigned
/// `0x`/`0o`/`0b` integer literals are read in their radix, like a browser
/// number input coercion does. Anything else that is not a finite decimal
/// number yields `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some(n) = coerce_radix_literal(trimmed) {
        return n;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// `Some(result)` when `text` carries a radix prefix, `None` otherwise
fn coerce_radix_literal(text: &str) -> Option<Option<f64>> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    Some(u128::from_str_radix(digits, radix).ok().map(|n| n as f64))
}

fn check_number(
    errors: &mut ValidationErrors,
    field: FieldPath,
    raw: &str,
    valid: impl Fn(f64) -> bool,
    message: &str,
) -> f64 {
    match coerce_number(raw) {
        Some(n) if valid(n) => n,
        Some(n) => {
            errors.add(field, message);
            n
        }
        None => {
            errors.add(field, NOT_A_NUMBER);
            0.0
        }
    }
}

/// Validate the budget form and coerce it into a request payload
pub fn validate_budget(
    client_name: &str,
    items: &[BudgetItemDraft],
) -> Result<BudgetPayload, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if client_name.is_empty() {
        errors.add(FieldPath::ClientName, CLIENT_NAME_REQUIRED);
    }
    if items.is_empty() {
        errors.add(FieldPath::BudgetItems, ITEMS_REQUIRED);
    }

    let budget_items = items
        .iter()
        .enumerate()
        .map(|(i, draft)| {
            if draft.description.is_empty() {
                errors.add(FieldPath::ItemDescription(i), DESCRIPTION_REQUIRED);
            }
            let unit_value = check_number(
                &mut errors,
                FieldPath::ItemUnitValue(i),
                &draft.unit_value,
                |n| n > 0.0,
                UNIT_VALUE_POSITIVE,
            );
            let quantity = check_number(
                &mut errors,
                FieldPath::ItemQuantity(i),
                &draft.quantity,
                |n| n >= 1.0,
                QUANTITY_AT_LEAST_ONE,
            );
            BudgetItem { description: draft.description.clone(), unit_value, quantity }
        })
        .collect();

    errors.into_result(BudgetPayload { client_name: client_name.to_string(), budget_items })
}

/// Validate sign-in credentials
pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if username.is_empty() {
        errors.add(FieldPath::Username, USERNAME_REQUIRED);
    }
    if password.is_empty() {
        errors.add(FieldPath::Password, PASSWORD_REQUIRED);
    }
    errors.into_result(())
}
