//! Budgets Page
//!
//! Table of all budgets with their derived totals, plus print and edit actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use budget_core::listing::{self, BudgetRow};
use budget_core::{AppRoute, DocumentKind};

use crate::commands;
use crate::context::use_app_context;

#[component]
pub fn BudgetsPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (rows, set_rows) = signal(Vec::<BudgetRow>::new());
    let (load_error, set_load_error) = signal::<Option<&'static str>>(None);

    // Load budgets on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match listing::fetch_rows(&api).await {
                Ok(loaded) => {
                    let _ = set_rows.try_set(loaded);
                }
                Err(_) => {
                    let _ = set_load_error.try_set(Some(listing::LIST_FAILED));
                }
            }
        });
    });

    let print = move |kind: DocumentKind, budget_id: String| {
        spawn_local(commands::print_document(ctx.api(), kind, budget_id));
    };

    let create_new = {
        let navigate = navigate.clone();
        move |_| navigate(&AppRoute::CreateBudget.path(), Default::default())
    };

    view! {
        <div class="budgets-page">
            <div class="card">
                <h2 class="card-title">"Lista de Orçamentos"</h2>

                <div class="card-actions">
                    <button on:click=create_new>"Criar Novo Orçamento"</button>
                </div>

                {move || load_error.get().map(|msg| view! { <p class="error-text">{msg}</p> })}

                <table class="budgets-table">
                    <thead>
                        <tr>
                            <th>"Cliente"</th>
                            <th>"Vendedor"</th>
                            <th>"Valor Total"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.id.clone()
                            children=move |row| {
                                let print_id = row.id.clone();
                                let contract_id = row.id.clone();
                                let edit_route = AppRoute::UpdateBudget(row.id.clone());
                                let navigate = navigate.clone();
                                view! {
                                    <tr>
                                        <td>{row.client_name.clone()}</td>
                                        <td>{row.vendor_name.clone()}</td>
                                        <td>{row.total_label()}</td>
                                        <td class="row-actions">
                                            <button
                                                class="outline"
                                                on:click=move |_| print(DocumentKind::Budget, print_id.clone())
                                            >
                                                "Imprimir"
                                            </button>
                                            <button on:click=move |_| navigate(&edit_route.path(), Default::default())>
                                                "Editar"
                                            </button>
                                            <button on:click=move |_| print(DocumentKind::Contract, contract_id.clone())>
                                                "Imprimir Contrato"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
