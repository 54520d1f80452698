//! Sonata Web — Leptos CSR WASM application.
//!
//! Single-page client for the Sonata music backend: sign in / sign up
//! against the REST API and browse songs once authenticated.

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod session;
pub mod toast;
pub mod types;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use config::Config;
use pages::home::HomePage;
use pages::sign_in::SignInPage;
use pages::sign_up::SignUpPage;
use session::SessionState;
use toast::{ToastHost, Toaster};

// ── App Root ────────────────────────────────────────────────────────

/// Leptos application root.
#[component]
pub fn App() -> impl IntoView {
    let config = Config::from_env();
    log::info!("API base: {}", config.api_base());

    provide_context(config);
    provide_context(SessionState::new());
    provide_context(Toaster::new());

    view! {
        <Router>
            <main class="main-content">
                <Routes fallback=|| view! { <HomePage /> }>
                    // Same paths as `routes::{HOME, SIGN_IN, SIGN_UP}`.
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/sign-in") view=SignInPage />
                    <Route path=path!("/sign-up") view=SignUpPage />
                </Routes>
            </main>
            <ToastHost />
        </Router>
    }
}

// ── WASM entry point ────────────────────────────────────────────────

/// Called from the Trunk-built binary to mount the app.
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Sonata web starting");
    leptos::mount::mount_to_body(App);
}
