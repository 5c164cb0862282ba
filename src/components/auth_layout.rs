//! Auth Layout
//!
//! Wraps the sign-in page; signed-in users are sent home.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::NavigateOptions;

use budget_core::routes::{self, GuardDecision, RouteArea};

use crate::context::use_app_context;

/// Navigation options for guard redirects (no history entry)
pub fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

#[component]
pub fn AuthLayout() -> impl IntoView {
    let ctx = use_app_context();
    let decision = Memo::new(move |_| ctx.session.with(|s| routes::decide(RouteArea::Public, s)));

    move || match decision.get() {
        GuardDecision::Redirect(route) => view! {
            <Redirect path=route.path() options=replace() />
        }.into_any(),
        GuardDecision::Render => view! {
            <div class="auth-layout">
                <Outlet />
            </div>
        }.into_any(),
    }
}
