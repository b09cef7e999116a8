//! Route wrappers that gate content on the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each wrapper renders from a memoized `GateOutcome`, not from the session
//! itself. A refresh that writes a new `Authenticated` payload leaves the
//! outcome unchanged, so the wrapped page stays mounted. A `Loading` outcome
//! is not terminal, it just waits for the boot fetch to settle.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loading::LoadingScreen;
use crate::state::session::{SessionState, SessionStore};
use crate::util::route_gate::{GateOutcome, auth_gate, fallback_gate, private_gate};

/// Outcome of `gate` for the current session; only changes notify readers.
pub(crate) fn gate_outcome(session: SessionStore, gate: fn(&SessionState) -> GateOutcome) -> Memo<GateOutcome> {
    Memo::new(move |_| session.with(gate))
}

fn outcome_view(outcome: GateOutcome, render: impl FnOnce() -> AnyView) -> AnyView {
    match outcome {
        GateOutcome::Loading => view! { <LoadingScreen/> }.into_any(),
        GateOutcome::Render => render(),
        GateOutcome::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}

/// Renders children only for signed-in users; anonymous users go to `/auth`.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let outcome = gate_outcome(expect_context::<SessionStore>(), private_gate);
    move || outcome_view(outcome.get(), || children())
}

/// Renders children only for anonymous users; signed-in users go to `/`.
#[component]
pub fn AuthRoute(children: ChildrenFn) -> impl IntoView {
    let outcome = gate_outcome(expect_context::<SessionStore>(), auth_gate);
    move || outcome_view(outcome.get(), || children())
}

/// Router fallback for paths outside the route table.
#[component]
pub fn CatchAll() -> impl IntoView {
    let outcome = gate_outcome(expect_context::<SessionStore>(), fallback_gate);
    move || outcome_view(outcome.get(), || ().into_any())
}
