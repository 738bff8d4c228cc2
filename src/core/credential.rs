use std::borrow::Cow;
use std::fmt;

pub enum Credential<'a> {
    Password(Password<'a>),
}

pub struct Password<'a> {
    // Username or email.
    pub identifier: Cow<'a, str>,
    pub password: Cow<'a, str>,
}

impl fmt::Debug for Password<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

pub trait Provider {
    fn credential(&self) -> Credential<'_>;
}

// LoginForm is what the login view submits.
#[derive(Clone, PartialEq)]
pub struct LoginForm {
    identifier: String,
    password: String,
}

impl LoginForm {
    pub fn new<S1, S2>(identifier: S1, password: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

impl Provider for LoginForm {
    fn credential(&self) -> Credential<'_> {
        Credential::Password(Password {
            identifier: Cow::Borrowed(self.identifier.trim()),
            password: Cow::Borrowed(&self.password),
        })
    }
}
