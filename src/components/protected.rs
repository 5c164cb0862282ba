//! Protected Layout
//!
//! Gates every signed-in page: no token redirects to sign-in, otherwise the
//! current user is fetched once per token before the pages render.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Outlet, Redirect};

use budget_core::auth::current_user_failure_message;
use budget_core::routes::{self, AppRoute, GuardDecision, RouteArea};
use budget_core::{BudgetApi, RequestState, RequestStatus, User};

use crate::components::auth_layout::replace;
use crate::context::use_app_context;

/// What the gate shows
#[derive(Clone, PartialEq)]
enum Gate {
    Redirect(AppRoute),
    Pending,
    Failed(&'static str),
    Ready,
}

#[component]
pub fn Protected() -> impl IntoView {
    let ctx = use_app_context();
    let (user_request, set_user_request) = signal(RequestState::<String, User>::new());

    // Fetch /me once per token
    Effect::new(move |_| {
        let Some(token) = ctx.token() else { return };
        let mut ticket = None;
        set_user_request.update(|state| ticket = state.begin(token));
        let Some(ticket) = ticket else { return };

        let api = ctx.api();
        spawn_local(async move {
            let result = api.me().await;
            let current = set_user_request
                .try_update(|state| state.resolve(ticket, result.clone()))
                .unwrap_or(false);
            if !current {
                return;
            }
            match result {
                Ok(user) => {
                    log::info!("[Protected] Loaded current user");
                    ctx.set_user(user);
                }
                Err(e) if e.is_unauthorized() => {
                    log::warn!("[Protected] Token rejected, signing out");
                    ctx.sign_out();
                }
                Err(e) => log::error!("[Protected] Error loading current user: {}", e),
            }
        });
    });

    let gate = Memo::new(move |_| {
        if let GuardDecision::Redirect(route) =
            ctx.session.with(|s| routes::decide(RouteArea::Protected, s))
        {
            return Gate::Redirect(route);
        }
        user_request.with(|state| match state.status() {
            RequestStatus::Loaded(_) => Gate::Ready,
            RequestStatus::Failed(err) => Gate::Failed(current_user_failure_message(err)),
            RequestStatus::Idle | RequestStatus::Loading => Gate::Pending,
        })
    });

    move || match gate.get() {
        Gate::Redirect(route) => view! {
            <Redirect path=route.path() options=replace() />
        }.into_any(),
        Gate::Ready => view! { <Outlet /> }.into_any(),
        Gate::Pending => view! { <div class="guard-placeholder"></div> }.into_any(),
        Gate::Failed(message) => view! {
            <div class="guard-placeholder">
                <span class="error-text">{message}</span>
            </div>
        }.into_any(),
    }
}
