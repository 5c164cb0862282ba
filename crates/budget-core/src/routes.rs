//! Client-side Routes and Guard Decisions

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    SignIn,
    Home,
    Budgets,
    CreateBudget,
    UpdateBudget(String),
}

/// Which guard a route sits behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteArea {
    /// Only reachable while signed out (`AuthLayout`)
    Public,
    /// Only reachable while signed in (`Protected`)
    Protected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(AppRoute),
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::SignIn => "/sign-in".to_string(),
            AppRoute::Home => "/".to_string(),
            AppRoute::Budgets => "/budgets".to_string(),
            AppRoute::CreateBudget => "/create-budget".to_string(),
            AppRoute::UpdateBudget(id) => format!("/update-budget/{}", id),
        }
    }
}

/// Route guard: signed-out users go to sign-in, signed-in users skip it
pub fn decide(area: RouteArea, session: &Session) -> GuardDecision {
    match (area, session.is_authenticated()) {
        (RouteArea::Public, true) => GuardDecision::Redirect(AppRoute::Home),
        (RouteArea::Protected, false) => GuardDecision::Redirect(AppRoute::SignIn),
        _ => GuardDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(AppRoute::SignIn.path(), "/sign-in");
        assert_eq!(AppRoute::Home.path(), "/");
        assert_eq!(AppRoute::Budgets.path(), "/budgets");
        assert_eq!(AppRoute::CreateBudget.path(), "/create-budget");
        assert_eq!(AppRoute::UpdateBudget("42".to_string()).path(), "/update-budget/42");
    }

    #[test]
    fn test_signed_out_protected_redirects_to_sign_in() {
        let session = Session::new();
        assert_eq!(decide(RouteArea::Protected, &session), GuardDecision::Redirect(AppRoute::SignIn));
        assert_eq!(decide(RouteArea::Public, &session), GuardDecision::Render);
    }

    #[test]
    fn test_signed_in_sign_in_redirects_home() {
        let session = Session::with_token("abc");
        assert_eq!(decide(RouteArea::Public, &session), GuardDecision::Redirect(AppRoute::Home));
        assert_eq!(decide(RouteArea::Protected, &session), GuardDecision::Render);
    }
}
