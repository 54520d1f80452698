//! Shared sign-in / sign-up form renderer.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth::{AuthForm, SubmitState};

/// Renders one labeled input per field of `F`, in order.
///
/// Each keystroke replaces exactly the field it came from. Submitting is a
/// no-op for the browser (default prevented) and calls `on_submit`; the
/// button is disabled while `state` is `Submitting`.
#[component]
pub fn AuthPanel<F, S>(
    form: RwSignal<F>,
    state: RwSignal<SubmitState>,
    on_submit: S,
) -> impl IntoView
where
    F: AuthForm,
    S: Fn() + 'static,
{
    let format = F::FORMAT;
    let (prompt, link_label, link_href) = format.switch_to();

    let inputs = form
        .with_untracked(|f| f.fields())
        .into_iter()
        .map(|field| {
            let name = field.name;
            view! {
                <fieldset class="form-group">
                    <label class="form-label" for=name>{field.label}</label>
                    <input
                        id=name
                        name=name
                        class="form-input"
                        type=field.kind.as_str()
                        placeholder=field.placeholder
                        autocomplete="on"
                        prop:value=move || {
                            form.with(|f| f.field(name).unwrap_or_default().to_string())
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.set_field(name, value);
                            });
                        }
                    />
                </fieldset>
            }
        })
        .collect_view();

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit();
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">{format.title()}</h1>
                <form class="auth-form" on:submit=submit>
                    {inputs}
                    <button
                        class="btn btn-primary auth-submit"
                        type="submit"
                        disabled=move || state.get().is_submitting()
                    >
                        {move || {
                            if state.get().is_submitting() {
                                format.busy_label()
                            } else {
                                format.submit_label()
                            }
                        }}
                    </button>
                </form>
                <p class="auth-switch">
                    {prompt} " " <A href=link_href>{link_label}</A>
                </p>
            </div>
        </div>
    }
}
