//! Labeled text input with an inline validation slot. When an error lands on
//! the field it gains invalid styling, renders exactly one message element,
//! takes focus, and plays a short shake. Editing the field clears its error.

use crate::app_lib::theme::Theme;
use gloo_timers::callback::Timeout;
use leptos::html::Input;
use leptos::prelude::*;

/// How long the shake animation class stays applied.
const SHAKE_MS: u32 = 300;

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] autofocus: bool,
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let autocomplete = autocomplete.unwrap_or("off");
    let node_ref = NodeRef::<Input>::new();
    let (shaking, set_shaking) = signal(false);

    // Focus and nudge the field whenever a new error lands on it.
    Effect::new(move |_| {
        if error.get().is_some() {
            if let Some(input) = node_ref.get_untracked() {
                let _ = input.focus();
            }
            set_shaking.set(true);
            Timeout::new(SHAKE_MS, move || set_shaking.set(false)).forget();
        }
    });

    view! {
        <div class="mb-5">
            <label class=Theme::LABEL for=id>{label}</label>
            <input
                id=id
                type=input_type
                autocomplete=autocomplete
                autofocus=autofocus
                class=Theme::INPUT
                class=("border-red-400", move || error.get().is_some())
                class=("bg-red-50", move || error.get().is_some())
                class=("animate-shake", move || shaking.get())
                node_ref=node_ref
                prop:value=move || value.get()
                on:input=move |event| {
                    value.set(event_target_value(&event));
                    error.set(None);
                }
            />
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })
            }}
        </div>
    }
}
