//! Sign-in form

use log::{error, info};

use crate::api::BudgetApi;
use crate::error::{ApiError, SubmitError};
use crate::validation::{self, FieldPath, ValidationErrors};

pub const INVALID_CREDENTIALS: &str = "Usuário ou senha inválidos.";
pub const LOGIN_FAILED: &str = "Não foi possível entrar. Tente novamente.";
pub const SESSION_EXPIRED: &str = "Sua sessão expirou. Entre novamente.";
pub const USER_LOAD_FAILED: &str = "Houve um erro ao carregar os dados do usuário.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub errors: ValidationErrors,
    submitting: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, value: String) {
        self.username = value;
        self.errors.clear(FieldPath::Username);
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.errors.clear(FieldPath::Password);
    }

    pub fn error(&self, field: FieldPath) -> Option<&str> {
        self.errors.get(field)
    }

    /// Validate, remembering the field errors for display
    pub fn prepare(&mut self) -> Result<(String, String), ValidationErrors> {
        match validation::validate_login(&self.username, &self.password) {
            Ok(()) => {
                self.errors = ValidationErrors::new();
                Ok((self.username.clone(), self.password.clone()))
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and mark the form as submitting; refused while one is in flight
    pub fn begin_submit(&mut self) -> Result<(String, String), SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let credentials = self.prepare().map_err(SubmitError::Invalid)?;
        self.submitting = true;
        Ok(credentials)
    }

    pub fn finish_submit(&mut self, outcome: Result<String, ApiError>) -> Result<String, SubmitError> {
        self.submitting = false;
        Ok(outcome?)
    }

    /// Validate and exchange the credentials for a token
    pub async fn submit<A: BudgetApi + ?Sized>(&mut self, api: &A) -> Result<String, SubmitError> {
        let (username, password) = self.begin_submit()?;
        let outcome = sign_in(api, &username, &password).await;
        self.finish_submit(outcome)
    }
}

pub async fn sign_in<A: BudgetApi + ?Sized>(
    api: &A,
    username: &str,
    password: &str,
) -> Result<String, ApiError> {
    match api.login(username, password).await {
        Ok(token) => {
            info!("[auth] Signed in as {}", username);
            Ok(token)
        }
        Err(e) => {
            error!("[auth] Sign-in failed for {}: {}", username, e);
            Err(e)
        }
    }
}

/// Message shown for a failed sign-in request
pub fn failure_message(err: &ApiError) -> &'static str {
    if err.is_unauthorized() {
        INVALID_CREDENTIALS
    } else {
        LOGIN_FAILED
    }
}

/// Message shown when the current user cannot be loaded
pub fn current_user_failure_message(err: &ApiError) -> &'static str {
    if err.is_unauthorized() {
        SESSION_EXPIRED
    } else {
        USER_LOAD_FAILED
    }
}
