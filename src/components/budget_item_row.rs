//! Budget Item Row Component
//!
//! One editable line item of the budget form, addressed by index.

use leptos::prelude::*;

use budget_core::{BudgetForm, BudgetItemDraft, FieldPath};

use crate::components::FieldError;

#[component]
pub fn BudgetItemRow(form: RwSignal<BudgetForm>, index: usize) -> impl IntoView {
    let value = move |pick: fn(&BudgetItemDraft) -> String| {
        move || form.with(|f| f.items.get(index).map(pick).unwrap_or_default())
    };
    let error = move |field: FieldPath| {
        Signal::derive(move || form.with(|f| f.error(field).map(str::to_string)))
    };

    view! {
        <div class="budget-item-row">
            <label class="form-item">
                <span class="form-label">"Descrição"</span>
                <input
                    type="text"
                    placeholder="Descrição do item"
                    prop:value=value(|item| item.description.clone())
                    on:input=move |ev| form.update(|f| f.set_item_description(index, event_target_value(&ev)))
                />
                <FieldError message=error(FieldPath::ItemDescription(index)) />
            </label>

            <label class="form-item">
                <span class="form-label">"Valor Unitário"</span>
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Valor unitário"
                    prop:value=value(|item| item.unit_value.clone())
                    on:input=move |ev| form.update(|f| f.set_item_unit_value(index, event_target_value(&ev)))
                />
                <FieldError message=error(FieldPath::ItemUnitValue(index)) />
            </label>

            <label class="form-item">
                <span class="form-label">"Quantidade"</span>
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="Quantidade"
                    prop:value=value(|item| item.quantity.clone())
                    on:input=move |ev| form.update(|f| f.set_item_quantity(index, event_target_value(&ev)))
                />
                <FieldError message=error(FieldPath::ItemQuantity(index)) />
            </label>

            <button
                type="button"
                class="remove-item-btn"
                on:click=move |_| form.update(|f| {
                    f.remove_item(index);
                })
            >
                "Remover"
            </button>
        </div>
    }
}
