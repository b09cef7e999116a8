//! Sign-in page (email + password).
//!
//! Wrapped in `AuthRoute`: once login succeeds the session write flips the
//! gate and the user is redirected home without an explicit navigate here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::net::types::LoginRequest;
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Enter both email and password.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Trim the email and require both fields; the password is sent as typed.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = expect_context::<HttpApi>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::components::toast_stack::show_toast;
            use crate::state::toast::ToastKind;

            match crate::state::session::login(&api, &request).await {
                Ok(next) if next.is_authenticated() => {
                    info.set(String::new());
                    session.replace(next);
                }
                Ok(next) => {
                    info.set(LOGIN_FAILED_MESSAGE.to_owned());
                    show_toast(toasts, ToastKind::Error, LOGIN_FAILED_MESSAGE);
                    session.replace(next);
                }
                Err(e) => {
                    info.set(format!("{LOGIN_FAILED_MESSAGE}: {e}"));
                    show_toast(toasts, ToastKind::Error, LOGIN_FAILED_MESSAGE);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, api, session, toasts);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"WasteNest"</h1>
                <p class="auth-card__subtitle">"Sign in to report, collect, and earn rewards"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "submitting..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
