use leptos::prelude::*;

/// Inline validation message under a field; renders nothing when valid
#[component]
pub fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|m| view! { <span class="field-error">{m}</span> })
}
