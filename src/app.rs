use crate::features::auth::state::UserStoreProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <UserStoreProvider>
            <Router>
                <AppRoutes />
            </Router>
        </UserStoreProvider>
    }
}
