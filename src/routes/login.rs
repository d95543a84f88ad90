//! Login route. Validates the form locally, checks the hardcoded demo
//! credential first, then falls back to the localStorage user store. The
//! guest button skips all of it.
//!
//! Flow Overview: submit clears prior inline errors, re-validates (username
//! before password), and navigates to the fixed destination on success. A
//! failed attempt marks both fields and raises a blocking notice naming the
//! demo credential.

use crate::app_lib::{config::AppConfig, dialog, theme::Theme};
use crate::components::{AppShell, Button, ForgotPasswordDialog, TextField};
use crate::features::auth::login::{self, LoginOutcome};
use crate::features::auth::state::use_user_store;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = StoredValue::new(use_user_store());
    let navigate = use_navigate();
    let brand = AppConfig::load().brand_name;

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let forgot_open = RwSignal::new(false);

    let navigate_for_login = navigate.clone();
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        username_error.set(None);
        password_error.set(None);

        let outcome = store.with_value(|store| {
            login::authenticate(store, &username.get_untracked(), &password.get_untracked())
        });

        let failed = || {
            let message = LoginOutcome::InvalidCredentials.message().map(String::from);
            username_error.set(message.clone());
            password_error.set(message);
            dialog::notify(login::MSG_LOGIN_FAILED_NOTICE);
        };

        match outcome {
            Ok(LoginOutcome::Authenticated) => {
                navigate_for_login(paths::HOME, Default::default());
            }
            Ok(outcome @ LoginOutcome::MissingUsername) => {
                username_error.set(outcome.message().map(String::from));
            }
            Ok(outcome @ LoginOutcome::MissingPassword) => {
                password_error.set(outcome.message().map(String::from));
            }
            Ok(LoginOutcome::InvalidCredentials) => failed(),
            Err(err) => {
                // A broken store slot reads as a failed attempt, not a crash.
                leptos::logging::error!("login lookup failed: {err}");
                failed();
            }
        }
    };

    let navigate_for_guest = navigate.clone();
    let on_guest = move |_| {
        navigate_for_guest(paths::HOME, Default::default());
    };

    view! {
        <AppShell>
            <div class="min-h-[70vh] flex items-center justify-center px-6 py-10">
                <form id="loginForm" class=Theme::CARD on:submit=on_submit>
                    <div class="space-y-2">
                        <p class="text-[11px] font-semibold uppercase tracking-[0.2em] text-slate-400">
                            "Welcome back"
                        </p>
                        <h1 class="text-2xl font-semibold text-slate-900">
                            {format!("Sign in to {brand}")}
                        </h1>
                        <p class="text-sm text-slate-500">
                            "Book flights, hotels, and day trips from one place."
                        </p>
                    </div>

                    <div class="mt-6">
                        <TextField
                            id="username"
                            label="Username"
                            autocomplete="username"
                            autofocus=true
                            value=username
                            error=username_error
                        />
                        <TextField
                            id="password"
                            label="Password"
                            input_type="password"
                            autocomplete="current-password"
                            value=password
                            error=password_error
                        />
                    </div>

                    <div class="mt-2 flex flex-col gap-3">
                        <Button button_type="submit">"Sign in"</Button>
                        <button
                            id="guestBtn"
                            type="button"
                            class=Theme::BUTTON_SECONDARY
                            on:click=on_guest
                        >
                            "Continue as guest"
                        </button>
                    </div>

                    <div class="mt-4 text-center">
                        <a
                            href="#"
                            id="forgotLink"
                            class="text-sm font-medium text-rose-600 hover:underline"
                            on:click=move |event| {
                                event.prevent_default();
                                forgot_open.set(true);
                            }
                        >
                            "Forgot password?"
                        </a>
                    </div>
                </form>
            </div>

            <ForgotPasswordDialog
                open=forgot_open
                login_username=username
                login_password=password
            />
        </AppShell>
    }
}
