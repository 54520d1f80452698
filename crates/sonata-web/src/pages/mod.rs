//! Routed pages.

pub mod home;
pub mod sign_in;
pub mod sign_up;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::{Capabilities, Navigator};
use crate::session::SessionState;
use crate::toast::Toaster;

/// [`Navigator`] backed by the router. Must be created inside a routed view.
#[derive(Clone, Copy)]
pub struct RouterNavigator(StoredValue<Box<dyn Fn(&str)>, LocalStorage>);

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        let go: Box<dyn Fn(&str)> =
            Box::new(move |path: &str| navigate(path, Default::default()));
        Self(StoredValue::new_local(go))
    }
}

impl Navigator for RouterNavigator {
    fn go_to(&self, path: &str) {
        // Disposed once the page unmounts; a late response then stays put.
        if self.0.try_with_value(|go| go(path)).is_none() {
            log::debug!("navigation to {path} dropped: page unmounted");
        }
    }
}

/// Production capabilities for the auth flows.
pub type AppCapabilities = Capabilities<SessionState, RouterNavigator, Toaster>;

/// Gather the auth flow capabilities from context.
pub fn app_capabilities() -> AppCapabilities {
    Capabilities {
        session: expect_context::<SessionState>(),
        navigator: RouterNavigator::new(),
        notifier: expect_context::<Toaster>(),
    }
}
