//! Login Page
//!
//! Exchanges username and password for a session token.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use budget_core::auth;
use budget_core::{AppRoute, FieldPath, LoginForm, SubmitError};

use crate::components::FieldError;
use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::new());
    let (failure, set_failure) = signal::<Option<&'static str>>(None);

    let sign_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (username, password) = match form.try_update(LoginForm::begin_submit) {
            Some(Ok(credentials)) => credentials,
            Some(Err(e)) => {
                log::debug!("[LoginPage] Sign-in not sent: {}", e);
                return;
            }
            None => return,
        };

        set_failure.set(None);
        let api = ctx.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = auth::sign_in(&api, &username, &password).await;
            match form.try_update(|f| f.finish_submit(outcome)) {
                Some(Ok(token)) => {
                    ctx.set_token(token);
                    navigate(&AppRoute::Home.path(), Default::default());
                }
                Some(Err(SubmitError::Request(e))) => {
                    let _ = set_failure.try_set(Some(auth::failure_message(&e)));
                }
                Some(Err(_)) | None => {}
            }
        });
    };

    let loading = move || form.with(LoginForm::is_submitting);

    let error = move |field: FieldPath| {
        Signal::derive(move || form.with(|f| f.error(field).map(str::to_string)))
    };

    view! {
        <div class="login-page">
            <h1 class="login-title">"Sign in"</h1>

            <form class="login-form" on:submit=sign_in>
                <label class="form-item">
                    <span class="form-label">"Usuário"</span>
                    <input
                        id="username"
                        type="text"
                        placeholder="Email"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
                    />
                    <FieldError message=error(FieldPath::Username) />
                </label>

                <label class="form-item">
                    <span class="form-label">"Senha"</span>
                    <input
                        id="password"
                        type="password"
                        placeholder="Senha"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                    />
                    <FieldError message=error(FieldPath::Password) />
                </label>

                {move || failure.get().map(|msg| view! { <p class="error-text">{msg}</p> })}

                <button type="submit" disabled=loading>
                    {move || if loading() { "Entrando..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
