use std::rc::Rc;

use leptos::prelude::*;
use macrolingo_core::translator::styles::{DEFAULT_STYLE, STYLE_LABELS};
use macrolingo_core::translator::{TranslationForm, TranslatorFlow, LANGUAGES};
use macrolingo_core::HttpBackend;
use wasm_bindgen_futures::spawn_local;

use crate::runtime_config::client_config;
use crate::surface::TranslatorSignals;

#[component]
pub fn TranslatorPage() -> impl IntoView {
    let (input_language, set_input_language) = signal(String::from("English"));
    let (output_language, set_output_language) = signal(String::from("German"));
    let (style, set_style) = signal(String::from(DEFAULT_STYLE));
    let (input_text, set_input_text) = signal(String::new());
    let (output_text, set_output_text) = signal(String::new());
    let (status, set_status) = signal(String::new());
    let (trigger_enabled, set_trigger_enabled) = signal(true);

    let surface = TranslatorSignals {
        set_status,
        set_trigger_enabled,
        set_output: set_output_text,
    };
    let flow = StoredValue::new_local(Rc::new(TranslatorFlow::new(HttpBackend::new(client_config()))));

    let on_translate = move |_| {
        let flow = flow.get_value();
        let mut surface = surface;
        let form = TranslationForm {
            input_language: input_language.get(),
            output_language: output_language.get(),
            text: input_text.get(),
            style: style.get(),
        };
        spawn_local(async move {
            flow.submit(&mut surface, &form).await;
        });
    };

    view! {
        <div class="page translator-page">
            <h2>"Translator"</h2>

            <div class="language-row">
                <LanguageSelect label="From" value=input_language set_value=set_input_language />
                <LanguageSelect label="To" value=output_language set_value=set_output_language />
                <div class="form-group">
                    <label for="style-select">"Style"</label>
                    <select
                        id="style-select"
                        class="input"
                        on:change=move |ev| set_style.set(event_target_value(&ev))
                    >
                        {STYLE_LABELS
                            .iter()
                            .map(|(tag, label)| {
                                let tag = *tag;
                                view! {
                                    <option value=tag selected=move || style.get() == tag>{*label}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <textarea
                class="input text-input"
                placeholder="Type something to translate"
                prop:value=move || input_text.get()
                on:input=move |ev| set_input_text.set(event_target_value(&ev))
            ></textarea>

            <button
                class="btn btn-primary"
                on:click=on_translate
                disabled=move || !trigger_enabled.get()
            >
                "Translate"
            </button>

            <p class="status-text">{move || status.get()}</p>

            <textarea class="input text-output" readonly=true prop:value=move || output_text.get()></textarea>
        </div>
    }
}

#[component]
fn LanguageSelect(
    #[prop(into)] label: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select class="input" on:change=move |ev| set_value.set(event_target_value(&ev))>
                {LANGUAGES
                    .iter()
                    .map(|language| {
                        let language = *language;
                        view! {
                            <option value=language selected=move || value.get() == language>{language}</option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
