//! Budget Admin App
//!
//! Router with two guarded areas: sign-in for signed-out users and the
//! sidebar pages for signed-in ones.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use budget_core::ApiConfig;

use crate::components::{AppLayout, AuthLayout, Protected};
use crate::context::AppContext;
use crate::pages::{BudgetsPage, CreateBudgetPage, HomePage, LoginPage, UpdateBudgetPage};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env_value(option_env!("BUDGET_API_URL"));

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <ParentRoute path=path!("") view=AuthLayout>
                    <Route path=path!("sign-in") view=LoginPage />
                </ParentRoute>
                <ParentRoute path=path!("") view=Protected>
                    <ParentRoute path=path!("") view=AppLayout>
                        <Route path=path!("") view=HomePage />
                        <Route path=path!("budgets") view=BudgetsPage />
                        <Route path=path!("create-budget") view=CreateBudgetPage />
                        <Route path=path!("update-budget/:id") view=UpdateBudgetPage />
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Página não encontrada"</p>
            <a href="/">"Voltar ao início"</a>
        </div>
    }
}
