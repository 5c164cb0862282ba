//! Budget Form Pages
//!
//! Create and update share one editor; update mode first loads the budget
//! named by the `:id` route parameter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use budget_core::form::{send as send_budget, LOAD_FAILED};
use budget_core::{BudgetForm, FieldPath, FormMode, RequestState};

use crate::components::{BudgetItemRow, FieldError};
use crate::context::use_app_context;

#[component]
pub fn CreateBudgetPage() -> impl IntoView {
    view! { <BudgetEditor mode=FormMode::Create /> }
}

#[component]
pub fn UpdateBudgetPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id")));

    move || match id.get() {
        Some(id) => view! { <BudgetEditor mode=FormMode::Update(id) /> }.into_any(),
        None => view! { <p class="error-text">{LOAD_FAILED}</p> }.into_any(),
    }
}

/// Budget editor with a dynamic list of line items
#[component]
fn BudgetEditor(mode: FormMode) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let form = RwSignal::new(BudgetForm::new(mode.clone()));
    let (load_request, set_load_request) = signal(RequestState::<String, ()>::new());
    let (failure, set_failure) = signal::<Option<&'static str>>(None);

    // Update mode: replace the form with the stored budget, once per id
    if let FormMode::Update(id) = mode.clone() {
        Effect::new(move |_| {
            let mut ticket = None;
            set_load_request.update(|state| ticket = state.begin(id.clone()));
            let Some(ticket) = ticket else { return };

            let api = ctx.api();
            let id = id.clone();
            spawn_local(async move {
                let (loaded, outcome) = match BudgetForm::fetch(&api, &id).await {
                    Ok(loaded) => (Some(loaded), Ok(())),
                    Err(e) => (None, Err(e)),
                };
                let current = set_load_request
                    .try_update(|state| state.resolve(ticket, outcome))
                    .unwrap_or(false);
                if !current {
                    return;
                }
                match loaded {
                    Some(loaded) => {
                        let _ = form.try_set(loaded);
                    }
                    None => {
                        let _ = set_failure.try_set(Some(LOAD_FAILED));
                    }
                }
            });
        });
    }

    let on_submit = {
        let mode = mode.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let payload = match form.try_update(BudgetForm::begin_submit) {
                Some(Ok(payload)) => payload,
                Some(Err(e)) => {
                    match e.validation() {
                        Some(errors) => log::info!("[BudgetForm] Submission blocked by {} invalid field(s)", errors.len()),
                        None => log::debug!("[BudgetForm] Submission ignored: {}", e),
                    }
                    return;
                }
                None => return,
            };

            set_failure.set(None);
            let api = ctx.api();
            let mode = mode.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let outcome = send_budget(&api, &mode, &payload).await;
                match form.try_update(|f| f.finish_submit(outcome)) {
                    Some(Ok(route)) => navigate(&route.path(), Default::default()),
                    Some(Err(_)) => {
                        let _ = set_failure.try_set(Some(mode.failure_message()));
                    }
                    None => {}
                }
            });
        }
    };

    let item_count = Memo::new(move |_| form.with(|f| f.items.len()));
    let client_name_error =
        Signal::derive(move || form.with(|f| f.error(FieldPath::ClientName).map(str::to_string)));
    let items_error =
        Signal::derive(move || form.with(|f| f.error(FieldPath::BudgetItems).map(str::to_string)));
    let loading = move || load_request.with(|state| state.is_loading());

    view! {
        <div class="budget-form-page">
            <div class="card">
                <h2 class="card-title">{mode.title()}</h2>

                <Show when=loading>
                    <div class="loading">"Carregando..."</div>
                </Show>

                {move || failure.get().map(|msg| view! { <p class="error-text">{msg}</p> })}

                <form class="budget-form" on:submit=on_submit>
                    <label class="form-item">
                        <span class="form-label">"Nome do Cliente"</span>
                        <input
                            type="text"
                            placeholder="Digite o nome do cliente"
                            prop:value=move || form.with(|f| f.client_name.clone())
                            on:input=move |ev| form.update(|f| f.set_client_name(event_target_value(&ev)))
                        />
                        <FieldError message=client_name_error />
                    </label>

                    <span class="section-label">"Itens do orçamento"</span>
                    <div class="budget-items">
                        {move || {
                            (0..item_count.get())
                                .map(|index| view! { <BudgetItemRow form=form index=index /> })
                                .collect_view()
                        }}
                    </div>
                    <FieldError message=items_error />

                    <div class="form-actions">
                        <button type="button" on:click=move |_| form.update(BudgetForm::add_item)>
                            "Adicionar Item"
                        </button>
                        <button type="submit" disabled=move || form.with(BudgetForm::is_submitting)>
                            {mode.submit_label()}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
