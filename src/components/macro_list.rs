use leptos::prelude::*;
use macrolingo_core::analyzer::MacroRow;

/// One labelled row per tracked macro, values exactly as the model wrote them.
#[component]
pub fn MacroList(rows: ReadSignal<Vec<MacroRow>>) -> impl IntoView {
    view! {
        <div class="macro-list">
            {move || {
                rows.get()
                    .into_iter()
                    .map(|row| view! {
                        <div class="macro-row">
                            <span>{row.label}</span>
                            <strong>{row.value}</strong>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}
