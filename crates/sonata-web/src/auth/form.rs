//! Auth form models and the field table that drives the shared renderer.

use serde::Serialize;

use crate::api::{SIGN_IN_PATH, SIGN_UP_PATH};
use crate::error::AuthError;
use crate::routes;
use crate::types::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
}

impl InputKind {
    /// HTML `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
        }
    }
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub placeholder: &'static str,
}

/// One labeled input, as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub name: &'static str,
    pub value: String,
    pub label: &'static str,
    pub kind: InputKind,
    pub placeholder: &'static str,
}

/// Which presentation the shared auth renderer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFormat {
    In,
    Up,
}

impl AuthFormat {
    pub fn title(self) -> &'static str {
        match self {
            AuthFormat::In => "Sign In",
            AuthFormat::Up => "Create Account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthFormat::In => "Sign In",
            AuthFormat::Up => "Sign Up",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            AuthFormat::In => "Signing in…",
            AuthFormat::Up => "Creating account…",
        }
    }

    /// Prompt, link text and target for switching to the other format.
    pub fn switch_to(self) -> (&'static str, &'static str, &'static str) {
        match self {
            AuthFormat::In => ("Don't have an account?", "Sign up", routes::SIGN_UP),
            AuthFormat::Up => ("Already have an account?", "Sign in", routes::SIGN_IN),
        }
    }
}

/// A form rendered by the auth panel and posted as-is to its endpoint.
///
/// Implementors only map field names to their storage; listing, updating
/// and validation all come from [`AuthForm::SPECS`].
pub trait AuthForm: Clone + Default + Serialize + Send + Sync + 'static {
    const FORMAT: AuthFormat;
    const ENDPOINT: &'static str;
    /// Rendered fields, in display order. All are required.
    const SPECS: &'static [FieldSpec];

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    fn fields(&self) -> Vec<InputField> {
        Self::SPECS
            .iter()
            .map(|spec| InputField {
                name: spec.name,
                value: self.field(spec.name).unwrap_or_default().to_string(),
                label: spec.label,
                kind: spec.kind,
                placeholder: spec.placeholder,
            })
            .collect()
    }

    /// Replace the value of the field called `name`, leaving the others
    /// untouched. Returns `false` for unknown names.
    fn set_field(&mut self, name: &str, value: String) -> bool {
        match self.field_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn validate(&self) -> Result<(), AuthError> {
        let complete = Self::SPECS
            .iter()
            .all(|spec| self.field(spec.name).is_some_and(|v| !v.is_empty()));
        if complete {
            Ok(())
        } else {
            Err(AuthError::Validation)
        }
    }
}

// ── Sign in ─────────────────────────────────────────────────────────

/// `creds` is either a username or an e-mail; the backend tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignInForm {
    pub creds: String,
    pub password: String,
}

impl AuthForm for SignInForm {
    const FORMAT: AuthFormat = AuthFormat::In;
    const ENDPOINT: &'static str = SIGN_IN_PATH;
    const SPECS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "creds",
            label: "Username or E-mail",
            kind: InputKind::Text,
            placeholder: "example@mail.com",
        },
        FieldSpec {
            name: "password",
            label: "Password",
            kind: InputKind::Password,
            placeholder: "********",
        },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "creds" => Some(&self.creds),
            "password" => Some(&self.password),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "creds" => Some(&mut self.creds),
            "password" => Some(&mut self.password),
            _ => None,
        }
    }
}

// ── Sign up ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Not rendered; always `common` for self-registration.
    pub role: UserRole,
}

impl AuthForm for SignUpForm {
    const FORMAT: AuthFormat = AuthFormat::Up;
    const ENDPOINT: &'static str = SIGN_UP_PATH;
    const SPECS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "username",
            label: "Username",
            kind: InputKind::Text,
            placeholder: "username",
        },
        FieldSpec {
            name: "email",
            label: "E-mail",
            kind: InputKind::Email,
            placeholder: "example@mail.com",
        },
        FieldSpec {
            name: "password",
            label: "Password",
            kind: InputKind::Password,
            placeholder: "********",
        },
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "username" => Some(&self.username),
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "username" => Some(&mut self.username),
            "email" => Some(&mut self.email),
            "password" => Some(&mut self.password),
            _ => None,
        }
    }
}

// ── Submission state ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Done,
}

impl SubmitState {
    /// Enter `Submitting`. Returns `false` if a submission is already in
    /// flight, in which case the new one must be dropped.
    pub fn begin(&mut self) -> bool {
        if *self == SubmitState::Submitting {
            return false;
        }
        *self = SubmitState::Submitting;
        true
    }

    /// State after an attempt resolves: failures fall back to editing.
    pub fn settle<T, E>(outcome: &Result<T, E>) -> Self {
        match outcome {
            Ok(_) => SubmitState::Done,
            Err(_) => SubmitState::Idle,
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmitState::Submitting
    }
}
