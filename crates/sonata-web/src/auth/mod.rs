//! Sign-in and sign-up flows.
//!
//! The flows never touch globals. They receive the transport and the few
//! side-effect capabilities they need, so each outcome is a plain function
//! of its inputs:
//!
//! - invalid form: one error toast, no request
//! - request fails for any reason: one generic error toast, nothing else
//! - sign-in succeeds: session stored, redirect home, one success toast

mod form;

pub use form::{
    AuthForm, AuthFormat, FieldSpec, InputField, InputKind, SignInForm, SignUpForm, SubmitState,
};

use crate::api::{decode_json, ApiResult, AuthTransport};
use crate::error::AuthError;
use crate::routes;
use crate::types::{Envelope, Session};

pub const MSG_MISSING_FIELDS: &str = "Please fill all the fields!";
pub const MSG_REQUEST_FAILED: &str = "Something went wrong!";
pub const MSG_SIGNED_IN: &str = "Logged In!";
pub const MSG_SIGNED_UP: &str = "Account created! Please sign in.";

/// Receives the session produced by a successful sign-in.
pub trait SessionSink {
    fn log_in(&self, token: String, username: String);
}

pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// Fire-and-forget user notifications.
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Bundles one implementation of each capability.
#[derive(Clone)]
pub struct Capabilities<S, N, T> {
    pub session: S,
    pub navigator: N,
    pub notifier: T,
}

impl<S: SessionSink, N, T> SessionSink for Capabilities<S, N, T> {
    fn log_in(&self, token: String, username: String) {
        self.session.log_in(token, username);
    }
}

impl<S, N: Navigator, T> Navigator for Capabilities<S, N, T> {
    fn go_to(&self, path: &str) {
        self.navigator.go_to(path);
    }
}

impl<S, N, T: Notifier> Notifier for Capabilities<S, N, T> {
    fn notify_success(&self, message: &str) {
        self.notifier.notify_success(message);
    }

    fn notify_error(&self, message: &str) {
        self.notifier.notify_error(message);
    }
}

/// Validate `form`, post it to its endpoint and turn the 2xx body into `R`
/// with `decode`. Failures, including an undecodable body, are reported to
/// the user here; callers only handle success.
async fn post_form<F, T, N, R>(
    form: &F,
    transport: &T,
    notifier: &N,
    decode: fn(&str) -> ApiResult<R>,
) -> Result<R, AuthError>
where
    F: AuthForm,
    T: AuthTransport,
    N: Notifier,
{
    if let Err(e) = form.validate() {
        notifier.notify_error(MSG_MISSING_FIELDS);
        return Err(e);
    }

    let outcome = transport
        .post(F::ENDPOINT, form)
        .await
        .and_then(|body| decode(&body));
    match outcome {
        Ok(resp) => Ok(resp),
        Err(e) => {
            log::debug!("{} rejected: {e}", F::ENDPOINT);
            notifier.notify_error(MSG_REQUEST_FAILED);
            Err(e.into())
        }
    }
}

/// Authenticate with the backend and start a session.
pub async fn sign_in<T, C>(form: &SignInForm, transport: &T, caps: &C) -> Result<Session, AuthError>
where
    T: AuthTransport,
    C: SessionSink + Navigator + Notifier,
{
    let resp: Envelope<Session> = post_form(form, transport, caps, decode_json).await?;
    let session = resp.data;

    caps.log_in(session.token.clone(), session.username.clone());
    caps.go_to(routes::HOME);
    caps.notify_success(MSG_SIGNED_IN);
    Ok(session)
}

/// Register a new account, then send the user to the sign-in page.
pub async fn sign_up<T, C>(form: &SignUpForm, transport: &T, caps: &C) -> Result<(), AuthError>
where
    T: AuthTransport,
    C: Navigator + Notifier,
{
    // Any 2xx means the account exists; the body is not inspected.
    post_form(form, transport, caps, |_| Ok(())).await?;

    caps.go_to(routes::SIGN_IN);
    caps.notify_success(MSG_SIGNED_UP);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde::Serialize;
    use serde_json::{json, Value};

    use super::*;
    use crate::api::{SIGN_IN_PATH, SIGN_UP_PATH};
    use crate::error::ApiError;

    /// Records every request and answers with a canned 2xx body or error.
    struct FakeTransport {
        reply: Result<String, ApiError>,
        calls: RefCell<Vec<(String, Value)>>,
    }

    impl FakeTransport {
        fn replying(reply: Result<String, ApiError>) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, Value)> {
            self.calls.borrow().clone()
        }
    }

    impl AuthTransport for FakeTransport {
        async fn post<B>(&self, path: &str, body: &B) -> ApiResult<String>
        where
            B: Serialize + ?Sized,
        {
            let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
            self.calls.borrow_mut().push((path.to_string(), body));
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct Recorder {
        session: RefCell<Option<Session>>,
        visited: RefCell<Vec<String>>,
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl SessionSink for Recorder {
        fn log_in(&self, token: String, username: String) {
            *self.session.borrow_mut() = Some(Session { token, username });
        }
    }

    impl Navigator for Recorder {
        fn go_to(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    impl Notifier for Recorder {
        fn notify_success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn notify_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    fn form(creds: &str, password: &str) -> SignInForm {
        SignInForm {
            creds: creds.into(),
            password: password.into(),
        }
    }

    fn ok_reply() -> Result<String, ApiError> {
        Ok(json!({ "message": "Logged in", "data": { "token": "abc", "username": "alice" } })
            .to_string())
    }

    #[tokio::test]
    async fn empty_field_skips_network() {
        for f in [form("", "x"), form("alice", ""), form("", "")] {
            let transport = FakeTransport::replying(ok_reply());
            let rec = Recorder::default();

            let result = sign_in(&f, &transport, &rec).await;

            assert_eq!(result, Err(AuthError::Validation));
            assert!(transport.calls().is_empty());
            assert_eq!(*rec.errors.borrow(), vec![MSG_MISSING_FIELDS]);
            assert!(rec.successes.borrow().is_empty());
            assert!(rec.session.borrow().is_none());
            assert!(rec.visited.borrow().is_empty());
        }
    }

    #[tokio::test]
    async fn valid_form_posts_once_with_form_body() {
        let transport = FakeTransport::replying(ok_reply());
        let rec = Recorder::default();

        sign_in(&form("a@b.com", "x"), &transport, &rec).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SIGN_IN_PATH);
        assert_eq!(calls[0].1, json!({ "creds": "a@b.com", "password": "x" }));
    }

    #[tokio::test]
    async fn success_stores_session_and_redirects_home() {
        let transport = FakeTransport::replying(ok_reply());
        let rec = Recorder::default();

        let session = sign_in(&form("alice", "pw"), &transport, &rec).await.unwrap();

        let expected = Session {
            token: "abc".into(),
            username: "alice".into(),
        };
        assert_eq!(session, expected);
        assert_eq!(*rec.session.borrow(), Some(expected));
        assert_eq!(*rec.visited.borrow(), vec![routes::HOME]);
        assert_eq!(*rec.successes.borrow(), vec![MSG_SIGNED_IN]);
        assert!(rec.errors.borrow().is_empty());
    }

    #[tokio::test]
    async fn failures_notify_once_and_leave_session_alone() {
        let failures = [
            Err(ApiError::Status(401)),
            Err(ApiError::Status(500)),
            Err(ApiError::Network("timed out".into())),
            Ok(json!({ "data": { "username": "alice" } }).to_string()),
            Ok(json!({ "token": "abc", "username": "alice" }).to_string()),
            Ok(String::new()),
        ];

        for reply in failures {
            let transport = FakeTransport::replying(reply);
            let rec = Recorder::default();

            let result = sign_in(&form("a@b.com", "x"), &transport, &rec).await;

            assert!(matches!(result, Err(AuthError::Request(_))));
            assert_eq!(transport.calls().len(), 1);
            assert!(rec.session.borrow().is_none());
            assert!(rec.visited.borrow().is_empty());
            assert!(rec.successes.borrow().is_empty());
            assert_eq!(*rec.errors.borrow(), vec![MSG_REQUEST_FAILED]);
        }
    }

    #[tokio::test]
    async fn server_error_reports_request_error() {
        let transport = FakeTransport::replying(Err(ApiError::Status(500)));
        let rec = Recorder::default();

        let result = sign_in(&form("a@b.com", "x"), &transport, &rec).await;

        assert_eq!(result, Err(AuthError::Request(ApiError::Status(500))));
        assert!(rec.session.borrow().is_none());
    }

    #[tokio::test]
    async fn form_is_left_intact_after_failure() {
        let transport = FakeTransport::replying(Err(ApiError::Status(401)));
        let rec = Recorder::default();
        let f = form("alice", "pw");

        let _ = sign_in(&f, &transport, &rec).await;

        assert_eq!(f, form("alice", "pw"));
    }

    #[tokio::test]
    async fn capabilities_bundle_delegates() {
        let transport = FakeTransport::replying(ok_reply());
        let caps = Capabilities {
            session: Recorder::default(),
            navigator: Recorder::default(),
            notifier: Recorder::default(),
        };

        sign_in(&form("alice", "pw"), &transport, &caps).await.unwrap();

        assert!(caps.session.session.borrow().is_some());
        assert_eq!(*caps.navigator.visited.borrow(), vec![routes::HOME]);
        assert_eq!(*caps.notifier.successes.borrow(), vec![MSG_SIGNED_IN]);
    }

    fn sign_up_form() -> SignUpForm {
        SignUpForm {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "pw".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn sign_up_redirects_to_sign_in() {
        let body = json!({ "message": "User Created Successfully!" }).to_string();
        let transport = FakeTransport::replying(Ok(body));
        let rec = Recorder::default();

        sign_up(&sign_up_form(), &transport, &rec).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SIGN_UP_PATH);
        assert_eq!(calls[0].1["role"], "common");
        assert_eq!(*rec.visited.borrow(), vec![routes::SIGN_IN]);
        assert_eq!(*rec.successes.borrow(), vec![MSG_SIGNED_UP]);
        assert!(rec.session.borrow().is_none());
    }

    #[tokio::test]
    async fn sign_up_accepts_empty_or_plain_text_body() {
        for body in ["", "Created"] {
            let transport = FakeTransport::replying(Ok(body.to_string()));
            let rec = Recorder::default();

            assert_eq!(sign_up(&sign_up_form(), &transport, &rec).await, Ok(()));

            assert_eq!(transport.calls().len(), 1);
            assert_eq!(*rec.visited.borrow(), vec![routes::SIGN_IN]);
            assert_eq!(*rec.successes.borrow(), vec![MSG_SIGNED_UP]);
            assert!(rec.errors.borrow().is_empty());
        }
    }

    #[tokio::test]
    async fn sign_in_rejects_empty_body() {
        let transport = FakeTransport::replying(Ok(String::new()));
        let rec = Recorder::default();

        let result = sign_in(&form("alice", "pw"), &transport, &rec).await;

        assert!(matches!(result, Err(AuthError::Request(ApiError::Decode(_)))));
        assert!(rec.session.borrow().is_none());
        assert_eq!(*rec.errors.borrow(), vec![MSG_REQUEST_FAILED]);
    }

    #[tokio::test]
    async fn sign_up_validation_and_failure() {
        let transport = FakeTransport::replying(Err(ApiError::Status(409)));
        let rec = Recorder::default();
        let mut incomplete = sign_up_form();
        incomplete.email.clear();

        assert_eq!(
            sign_up(&incomplete, &transport, &rec).await,
            Err(AuthError::Validation)
        );
        assert!(transport.calls().is_empty());

        assert!(sign_up(&sign_up_form(), &transport, &rec).await.is_err());
        assert_eq!(transport.calls().len(), 1);
        assert_eq!(
            *rec.errors.borrow(),
            vec![MSG_MISSING_FIELDS, MSG_REQUEST_FAILED]
        );
        assert!(rec.visited.borrow().is_empty());
    }
}
