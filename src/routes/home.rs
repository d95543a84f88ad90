//! Post-login destination page. Intentionally minimal: every successful
//! authentication path (demo credential, stored user, guest) lands here.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto text-center space-y-4 py-12">
                <h1 class="text-3xl font-semibold text-slate-900">"Where to next?"</h1>
                <p class="text-slate-500">
                    "You're in. Browse flights, hotels, and day trips — this demo stops at the door."
                </p>
                <A
                    href=paths::LOGIN
                    {..}
                    class="inline-block text-sm font-medium text-rose-600 hover:underline"
                >
                    "Back to sign in"
                </A>
            </div>
        </AppShell>
    }
}
