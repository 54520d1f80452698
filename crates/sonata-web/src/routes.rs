//! Client-side route paths.
//!
//! `App` matches these with `path!` literals, which cannot take constants;
//! keep both in step (checked below).

pub const HOME: &str = "/";
pub const SIGN_IN: &str = "/sign-in";
pub const SIGN_UP: &str = "/sign-up";
