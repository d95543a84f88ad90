mod home;
mod login;
mod not_found;

pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths shared by navigation and links. Every successful
/// authentication path lands on `HOME`.
pub(crate) mod paths {
    pub const LOGIN: &str = "/";
    pub const HOME: &str = "/home";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/home") view=HomePage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
