//! App Layout
//!
//! Sidebar navigation frame around the signed-in pages.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use budget_core::AppRoute;

use crate::context::use_app_context;

/// Sidebar links (label, route)
fn nav_links() -> [(&'static str, AppRoute); 2] {
    [("Home", AppRoute::Home), ("Orçamentos", AppRoute::Budgets)]
}

#[component]
pub fn AppLayout() -> impl IntoView {
    let ctx = use_app_context();

    let user_name = move || {
        ctx.session.with(|s| {
            s.user
                .as_ref()
                .and_then(|user| user.display_name())
                .map(str::to_string)
        })
    };

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <div class="sidebar-top">
                    <a class="brand" href="/">
                        <span class="brand-name">"Mocha App"</span>
                    </a>

                    <nav class="sidebar-nav">
                        {nav_links().into_iter().map(|(label, route)| view! {
                            <a class="nav-link" href=route.path()>{label}</a>
                        }).collect_view()}
                    </nav>
                </div>

                <hr class="separator" />

                <div class="sidebar-bottom">
                    {move || user_name().map(|name| view! { <span class="user-name">{name}</span> })}
                    <button
                        class="sign-out-btn"
                        title="Sair"
                        on:click=move |_| ctx.sign_out()
                    >
                        "Sair"
                    </button>
                </div>
            </aside>

            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}
