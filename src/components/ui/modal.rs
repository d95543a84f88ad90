//! Overlay dialog. Rendering is gated on the `open` signal, so a closed
//! modal has no DOM footprint and reopening rebuilds its children fresh.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn Modal(
    id: &'static str,
    title: &'static str,
    #[prop(into)] open: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                id=id
                class="fixed inset-0 z-50 flex items-center justify-center bg-slate-900/50 px-4"
                role="dialog"
                aria-modal="true"
            >
                <div class=Theme::CARD>
                    <h2 class="text-xl font-semibold text-slate-900 mb-4">{title}</h2>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
