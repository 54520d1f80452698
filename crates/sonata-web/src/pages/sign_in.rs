//! Sign-in page.

use leptos::prelude::*;

use crate::api::HttpTransport;
use crate::auth::{self, Navigator, SignInForm, SubmitState};
use crate::components::AuthPanel;
use crate::config::Config;
use crate::pages::app_capabilities;
use crate::routes;
use crate::session::SessionState;

/// Sign-in form — username-or-email and password.
#[component]
pub fn SignInPage() -> impl IntoView {
    let caps = app_capabilities();
    let transport = HttpTransport::new(expect_context::<Config>());
    let form = RwSignal::new(SignInForm::default());
    let state = RwSignal::new(SubmitState::Idle);

    // Already signed in: nothing to do here.
    let session = expect_context::<SessionState>();
    let navigator = caps.navigator;
    Effect::new(move |_| {
        if session.is_authenticated() {
            navigator.go_to(routes::HOME);
        }
    });

    let on_submit = move || {
        if !state.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        let current = form.get_untracked();
        let transport = transport.clone();
        let caps = caps.clone();
        leptos::task::spawn_local(async move {
            let outcome = auth::sign_in(&current, &transport, &caps).await;
            let _ = state.try_set(SubmitState::settle(&outcome));
        });
    };

    view! { <AuthPanel form=form state=state on_submit=on_submit /> }
}
