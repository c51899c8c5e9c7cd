// =============================================================================
// Folio Web - Inline Editable Text
// =============================================================================
// Renders plain text normally; in edit mode, an input committing on change.
// =============================================================================

use leptos::prelude::*;

use crate::state::ContentStore;

/// Inline-editable text span. One commit fires per completed edit
/// (change event on blur/enter), not per keystroke.
#[component]
pub fn EditableText(
    /// The current value to display.
    #[prop(into)] value: Signal<String>,
    /// Called with the new value when an edit completes.
    #[prop(into)] on_commit: Callback<String>,
    /// Render a textarea instead of a single-line input.
    #[prop(optional)] multiline: bool,
    /// Emitted as `data-storage-key` for the surrounding editor tooling.
    #[prop(optional, into)] storage_key: String,
) -> impl IntoView {
    let store = expect_context::<ContentStore>();
    let storage_key = (!storage_key.is_empty()).then_some(storage_key);

    move || {
        if !store.is_edit_mode() {
            return view! { <span class="editable-text">{value}</span> }.into_any();
        }

        if multiline {
            view! {
                <textarea
                    class="editable-text editing"
                    data-storage-key=storage_key.clone()
                    prop:value=move || value.get()
                    on:change=move |e| on_commit.run(event_target_value(&e))
                />
            }
            .into_any()
        } else {
            view! {
                <input
                    type="text"
                    class="editable-text editing"
                    data-storage-key=storage_key.clone()
                    prop:value=move || value.get()
                    on:change=move |e| on_commit.run(event_target_value(&e))
                />
            }
            .into_any()
        }
    }
}
