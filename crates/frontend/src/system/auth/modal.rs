use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::system::auth::{api, context::use_auth};

/// Какой поток открыт в модальном окне.
#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

/// Authentication modal owning the sign-in and sign-up flows.
///
/// The header only controls visibility; a successful submit fires
/// `on_success` and then `on_close`.
#[component]
pub fn AuthModal(
    /// Whether the modal is visible
    #[prop(into)]
    open: Signal<bool>,
    /// Callback when the modal should close
    on_close: Callback<()>,
    /// Callback after a successful sign-in or sign-up
    on_success: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let lang = use_language();

    let (mode, set_mode) = signal(AuthMode::SignIn);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let result = match mode.get_untracked() {
                AuthMode::SignIn => api::sign_in(email_val, password_val).await,
                AuthMode::SignUp => api::sign_up(email_val, password_val).await,
            };
            match result {
                Ok(session) => {
                    auth.set_session(session.access_token, session.user);
                    set_is_loading.set(false);
                    set_email.set(String::new());
                    set_password.set(String::new());
                    on_success.run(());
                    on_close.run(());
                }
                Err(err) => {
                    set_error_message.set(Some(err));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let toggle_mode = move |_| {
        set_mode.update(|m| {
            *m = match m {
                AuthMode::SignIn => AuthMode::SignUp,
                AuthMode::SignUp => AuthMode::SignIn,
            }
        });
        set_error_message.set(None);
    };

    let title = move || match mode.get() {
        AuthMode::SignIn => lang.t("auth.signInTitle"),
        AuthMode::SignUp => lang.t("auth.signUpTitle"),
    };
    let submit_label = move || {
        if is_loading.get() {
            lang.t("auth.loading")
        } else {
            match mode.get() {
                AuthMode::SignIn => lang.t("auth.submitSignIn"),
                AuthMode::SignUp => lang.t("auth.submitSignUp"),
            }
        }
    };
    let switch_label = move || match mode.get() {
        AuthMode::SignIn => lang.t("auth.switchToSignUp"),
        AuthMode::SignUp => lang.t("auth.switchToSignIn"),
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal auth-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{title}</h2>
                        <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">
                        <Show when=move || error_message.get().is_some()>
                            <div class="error-message">
                                {move || error_message.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <form on:submit=on_submit>
                            <div class="form-group">
                                <label for="auth-email">{move || lang.t("auth.email")}</label>
                                <input
                                    type="email"
                                    id="auth-email"
                                    value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    required
                                    disabled=move || is_loading.get()
                                />
                            </div>

                            <div class="form-group">
                                <label for="auth-password">{move || lang.t("auth.password")}</label>
                                <input
                                    type="password"
                                    id="auth-password"
                                    value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    required
                                    disabled=move || is_loading.get()
                                />
                            </div>

                            <button
                                type="submit"
                                class="btn-primary"
                                disabled=move || is_loading.get()
                            >
                                {submit_label}
                            </button>
                        </form>

                        <button class="auth-modal__switch" on:click=toggle_mode>
                            {switch_label}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
