//! Sign-up page.

use leptos::prelude::*;

use crate::api::HttpTransport;
use crate::auth::{self, SignUpForm, SubmitState};
use crate::components::AuthPanel;
use crate::config::Config;
use crate::pages::app_capabilities;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let caps = app_capabilities();
    let transport = HttpTransport::new(expect_context::<Config>());
    let form = RwSignal::new(SignUpForm::default());
    let state = RwSignal::new(SubmitState::Idle);

    let on_submit = move || {
        if !state.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }
        let current = form.get_untracked();
        let transport = transport.clone();
        let caps = caps.clone();
        leptos::task::spawn_local(async move {
            let outcome = auth::sign_up(&current, &transport, &caps).await;
            let _ = state.try_set(SubmitState::settle(&outcome));
        });
    };

    view! { <AuthPanel form=form state=state on_submit=on_submit /> }
}
