//! Top bar: menu toggle, brand, notifications, balance, and login/logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is mounted on every laid-out page, so it also owns the
//! periodic session refresh. The poll starts when the header mounts and is
//! cancelled when it unmounts.
//!
//! Balance and notifications are kept in local signals re-synced from the
//! session on every write; read notifications are removed locally once the
//! server confirms.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toast_stack::show_toast;
use crate::net::api::HttpApi;
use crate::net::types::Notification;
use crate::state::notifications::{badge_label, shows_mark_all};
#[cfg(feature = "hydrate")]
use crate::state::notifications::{
    ALL_MARKED_MESSAGE, MARK_READ_FAILED_MESSAGE, mark_all_notifications_read, mark_notification_read,
};
#[cfg(feature = "hydrate")]
use crate::state::session::{LOGOUT_SUCCESS_MESSAGE, logout, logout_failure_message, refresh_session};
use crate::state::session::{SessionState, SessionStore};
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::format::format_quantity;
#[cfg(feature = "hydrate")]
use crate::util::refresher::{REFRESH_INTERVAL, spawn_owned_poll};

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<HttpApi>();

    let balance = RwSignal::new(0.0_f64);
    let notifications = RwSignal::new(Vec::<Notification>::new());
    let submitting = RwSignal::new(false);

    Effect::new(move || {
        session.with(|state| {
            balance.set(state.balance());
            notifications.set(state.notifications().to_vec());
        });
    });

    #[cfg(feature = "hydrate")]
    spawn_owned_poll(REFRESH_INTERVAL, move || async move {
        if let Some(next) = refresh_session(&api).await {
            session.replace(next);
        }
    });

    let on_notification_click = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let current = notifications.get_untracked();
            match mark_notification_read(&api, &current, &id).await {
                Ok(next) => notifications.set(next),
                Err(_) => show_toast(toasts, ToastKind::Error, MARK_READ_FAILED_MESSAGE),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, api, toasts);
        }
    };

    let on_mark_all = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match mark_all_notifications_read(&api).await {
                Ok(next) => {
                    notifications.set(next);
                    show_toast(toasts, ToastKind::Success, ALL_MARKED_MESSAGE);
                }
                Err(_) => show_toast(toasts, ToastKind::Error, MARK_READ_FAILED_MESSAGE),
            }
        });
    };

    let on_logout = move |_| {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match logout(&api).await {
                Ok(next) => {
                    show_toast(toasts, ToastKind::Success, LOGOUT_SUCCESS_MESSAGE);
                    session.replace(next);
                }
                Err(e) => show_toast(toasts, ToastKind::Error, logout_failure_message(&e)),
            }
            submitting.set(false);
        });
    };

    let unread = move || notifications.with(Vec::len);

    view! {
        <header class="site-header">
            <div class="site-header__left">
                <button
                    class="btn btn--ghost site-header__menu"
                    title="Menu"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    <span class="icon icon--menu" aria-hidden="true"></span>
                </button>
                <a href="/" class="site-header__brand">
                    <span class="icon icon--leaf" aria-hidden="true"></span>
                    <span class="site-header__titles">
                        <span class="site-header__name">"WasteNest"</span>
                        <span class="site-header__tagline">"@Garbage Management System"</span>
                    </span>
                </a>
            </div>
            <div class="site-header__right">
                <div class="notifications">
                    <button
                        class="btn btn--ghost notifications__bell"
                        title="Notifications"
                        on:click=move |_| ui.update(UiState::toggle_notifications)
                    >
                        <span class="icon icon--bell" aria-hidden="true"></span>
                        {move || badge_label(unread()).map(|label| view! { <span class="badge">{label}</span> })}
                    </button>
                    <Show when=move || ui.get().notifications_open>
                        <div class="notifications__menu">
                            <Show
                                when=move || { unread() > 0 }
                                fallback=|| view! { <p class="notifications__empty">"No new notifications"</p> }
                            >
                                <div class="notifications__list">
                                    <Show when=move || shows_mark_all(unread())>
                                        <div class="notifications__actions">
                                            <button class="notifications__mark-all" on:click=on_mark_all>
                                                "Mark all as read"
                                            </button>
                                        </div>
                                    </Show>
                                    <For
                                        each=move || notifications.get()
                                        key=|notification| notification.id.clone()
                                        children=move |notification: Notification| {
                                            let id = notification.id.clone();
                                            view! {
                                                <button
                                                    class="notifications__item"
                                                    on:click=move |_| on_notification_click(id.clone())
                                                >
                                                    <span class="notifications__message">{notification.message}</span>
                                                </button>
                                            }
                                        }
                                    />
                                </div>
                            </Show>
                        </div>
                    </Show>
                </div>
                <div class="balance">
                    <span class="icon icon--coins" aria-hidden="true"></span>
                    <span class="balance__value">{move || format_quantity(balance.get())}</span>
                </div>
                <Show
                    when=move || session.with(SessionState::is_authenticated)
                    fallback=|| {
                        view! {
                            <a href="/auth" class="btn btn--login">
                                "Login"
                                <span class="icon icon--login" aria-hidden="true"></span>
                            </a>
                        }
                    }
                >
                    <button class="btn btn--logout" on:click=on_logout disabled=move || submitting.get()>
                        {move || if submitting.get() { "submitting..." } else { "Logout" }}
                        <span class="icon icon--logout" aria-hidden="true"></span>
                    </button>
                </Show>
            </div>
        </header>
    }
}
