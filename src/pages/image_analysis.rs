//! Meal photo upload and macronutrient breakdown.

use std::rc::Rc;

use leptos::html::Input;
use leptos::prelude::*;
use macrolingo_core::analyzer::flow::MSG_FAILED;
use macrolingo_core::analyzer::{ImageAnalysisFlow, ImageUpload, MacroRow, PieChart};
use macrolingo_core::HttpBackend;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::components::macro_chart::MacroChart;
use crate::components::macro_list::MacroList;
use crate::runtime_config::client_config;
use crate::surface::AnalysisSignals;

#[component]
pub fn ImageAnalysisPage() -> impl IntoView {
    let (status, set_status) = signal(String::new());
    let (trigger_enabled, set_trigger_enabled) = signal(true);
    let (rows, set_rows) = signal::<Vec<MacroRow>>(vec![]);
    let (raw, set_raw) = signal::<Option<String>>(None);
    let (chart, set_chart) = signal::<Option<PieChart>>(None);

    let surface = AnalysisSignals {
        set_status,
        set_trigger_enabled,
        set_rows,
        set_raw,
        set_chart,
    };

    // The flow owns the chart state, so it lives as long as the page.
    let flow = StoredValue::new_local(Rc::new(ImageAnalysisFlow::new(HttpBackend::new(
        client_config(),
    ))));
    let file_input = NodeRef::<Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let flow = flow.get_value();
        let mut surface = surface;
        let selected = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        spawn_local(async move {
            let upload = match selected {
                None => None,
                Some(file) => match read_upload(file).await {
                    Ok(upload) => Some(upload),
                    Err(e) => {
                        tracing::error!("Reading the selected image failed: {}", e);
                        flow.reset_display(&mut surface, MSG_FAILED);
                        return;
                    }
                },
            };
            flow.submit(&mut surface, upload).await;
        });
    };

    view! {
        <div class="page image-analysis-page">
            <h2>"Image Analysis"</h2>
            <p class="page-description">
                "Upload a meal photo to estimate its protein, carbs and fat."
            </p>

            <form class="image-form" on:submit=on_submit>
                <input node_ref=file_input type="file" accept="image/*" class="input" />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || !trigger_enabled.get()
                >
                    "Analyze"
                </button>
            </form>

            <p class="status-text">{move || status.get()}</p>

            <div class="analysis-results">
                <MacroList rows=rows />
                <MacroChart chart=chart />
            </div>

            <pre class="analysis-output">{move || raw.get().unwrap_or_default()}</pre>
        </div>
    }
}

/// Read the selected file into memory for upload.
async fn read_upload(file: web_sys::File) -> Result<ImageUpload, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Failed to convert to ArrayBuffer")?;

    let bytes = Uint8Array::new(&array_buffer).to_vec();
    Ok(ImageUpload::new(file.name(), bytes).with_mime_type(file.type_()))
}
