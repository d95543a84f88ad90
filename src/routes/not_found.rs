//! Minimalistic 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders a minimal not-found page for top-level route fallbacks.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <div class="relative">
                    <h1 class="text-9xl font-black text-slate-200 select-none">"404"</h1>
                    <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-slate-900 whitespace-nowrap">
                        "Page not found"
                    </p>
                </div>
                <p class="mt-4 text-slate-500 max-w-sm mx-auto">
                    "The page you requested does not exist. The journey starts at the sign-in desk."
                </p>
                <A
                    href="/"
                    {..}
                    class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-rose-600 rounded-lg hover:bg-rose-700 transition-all"
                >
                    "Back to sign in"
                </A>
            </div>
        </AppShell>
    }
}
