//! Shared layout wrapper with the brand header and content container. It
//! centralizes page chrome so routes can focus on content.

use crate::app_lib::{GIT_COMMIT_HASH, config::AppConfig};
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let brand = AppConfig::load().brand_name;
    let commit = &GIT_COMMIT_HASH[..GIT_COMMIT_HASH.len().min(7)];

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-slate-200 bg-white">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-2">
                        <span class="text-xl" aria-hidden="true">{"\u{2708}\u{fe0f}"}</span>
                        <span class="font-semibold text-rose-600 whitespace-nowrap">
                            {brand}
                        </span>
                    </A>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="p-4 text-center text-xs text-slate-400">
                {format!("build {commit}")}
            </footer>
        </div>
    }
}
