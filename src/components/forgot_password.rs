//! Two-step password-reset dialog. Step rendering follows the `ResetFlow`
//! state machine in `features::auth::reset`; this component only wires
//! signals, storage, and notices around it.
//!
//! Flow Overview: opening the dialog always starts from a clean step 1.
//! A verified username advances to step 2; a successful reset notifies,
//! closes the dialog, and prefills the login form's username while clearing
//! its password.

use crate::app_lib::{dialog, theme::Theme};
use crate::components::ui::{Modal, TextField};
use crate::features::auth::reset::{
    self, ResetError, ResetField, ResetFlow, ResetStep,
};
use crate::features::auth::state::use_user_store;
use leptos::prelude::*;

#[component]
pub fn ForgotPasswordDialog(
    open: RwSignal<bool>,
    /// Login form's username field, prefilled after a successful reset.
    login_username: RwSignal<String>,
    /// Login form's password field, cleared after a successful reset.
    login_password: RwSignal<String>,
) -> impl IntoView {
    let store = StoredValue::new(use_user_store());
    let flow = RwSignal::new(ResetFlow::new());

    let username = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let username_error = RwSignal::new(None::<String>);
    let new_password_error = RwSignal::new(None::<String>);
    let confirm_password_error = RwSignal::new(None::<String>);

    let clear_all = move || {
        flow.set(ResetFlow::new());
        username.set(String::new());
        new_password.set(String::new());
        confirm_password.set(String::new());
        username_error.set(None);
        new_password_error.set(None);
        confirm_password_error.set(None);
    };

    // Every open starts from a clean step 1.
    Effect::new(move |_| {
        if open.get() {
            clear_all();
        }
    });

    let report = move |err: ResetError| {
        if let ResetError::Store(inner) = &err {
            leptos::logging::error!("password reset failed: {inner}");
            dialog::notify(err.message());
            return;
        }
        let message = Some(err.message().to_string());
        match err.field() {
            Some(ResetField::Username) => username_error.set(message),
            Some(ResetField::NewPassword) => new_password_error.set(message),
            Some(ResetField::ConfirmPassword) => confirm_password_error.set(message),
            None => {}
        }
    };

    let on_check = move |_| {
        username_error.set(None);
        let mut current = flow.get_untracked();
        let result =
            store.with_value(|store| current.check_username(store, &username.get_untracked()));
        match result {
            Ok(()) => flow.set(current),
            Err(err) => report(err),
        }
    };

    let on_reset = move |_| {
        new_password_error.set(None);
        confirm_password_error.set(None);
        let mut current = flow.get_untracked();
        let result = store.with_value(|store| {
            current.reset_password(
                store,
                &new_password.get_untracked(),
                &confirm_password.get_untracked(),
            )
        });
        match result {
            Ok(reset_username) => {
                flow.set(current);
                dialog::notify(reset::MSG_RESET_SUCCESS);
                login_username.set(reset_username);
                login_password.set(String::new());
                open.set(false);
            }
            Err(err) => report(err),
        }
    };

    let on_cancel = move |_| {
        clear_all();
        open.set(false);
    };

    let verified_username = move || match flow.get().step() {
        ResetStep::SetPassword { username } => username.clone(),
        ResetStep::VerifyUsername => String::new(),
    };

    view! {
        <Modal id="forgotModal" title="Reset password" open=open>
            <Show
                when=move || matches!(flow.get().step(), ResetStep::VerifyUsername)
                fallback=move || {
                    view! {
                        <div id="fp-step2">
                            <p class="text-sm text-slate-500 mb-4">
                                "Choose a new password for "
                                <span class="font-medium text-slate-900">
                                    {verified_username}
                                </span>
                            </p>
                            <TextField
                                id="fp-newpass"
                                label="New password"
                                input_type="password"
                                autocomplete="new-password"
                                autofocus=true
                                value=new_password
                                error=new_password_error
                            />
                            <TextField
                                id="fp-confpass"
                                label="Confirm password"
                                input_type="password"
                                autocomplete="new-password"
                                value=confirm_password
                                error=confirm_password_error
                            />
                            <div class="flex items-center justify-end gap-3 mt-6">
                                <button
                                    id="fp-cancel"
                                    type="button"
                                    class=Theme::BUTTON_SECONDARY
                                    on:click=on_cancel
                                >
                                    "Cancel"
                                </button>
                                <button
                                    id="fp-reset"
                                    type="button"
                                    class=Theme::BUTTON_PRIMARY
                                    on:click=on_reset
                                >
                                    "Reset password"
                                </button>
                            </div>
                        </div>
                    }
                }
            >
                <div id="fp-step1">
                    <p class="text-sm text-slate-500 mb-4">
                        "Enter your username and we will check it against this browser's saved accounts."
                    </p>
                    <TextField
                        id="fp-username"
                        label="Username"
                        autocomplete="username"
                        autofocus=true
                        value=username
                        error=username_error
                    />
                    <div class="flex items-center justify-end gap-3 mt-6">
                        <button
                            id="fp-cancel"
                            type="button"
                            class=Theme::BUTTON_SECONDARY
                            on:click=on_cancel
                        >
                            "Cancel"
                        </button>
                        <button
                            id="fp-check"
                            type="button"
                            class=Theme::BUTTON_PRIMARY
                            on:click=on_check
                        >
                            "Check username"
                        </button>
                    </div>
                </div>
            </Show>
        </Modal>
    }
}
