use std::fmt;
use std::str::FromStr;

use crate::core::Capability;
use crate::IagateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Welcome,
    Chat,
    BulkMessage,
    Pricing,
}

/// What a session needs before a route is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Capability(Capability),
}

impl Route {
    pub const ALL: &'static [Route] = &[
        Route::Login,
        Route::Welcome,
        Route::Chat,
        Route::BulkMessage,
        Route::Pricing,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Welcome => "/welcome",
            Route::Chat => "/chat",
            Route::BulkMessage => "/bulk-message",
            Route::Pricing => "/pricing",
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Login | Route::Pricing => Access::Public,
            Route::Welcome | Route::Chat => Access::Authenticated,
            Route::BulkMessage => Access::Capability(Capability::BulkMessaging),
        }
    }

    pub fn after_login() -> Route {
        Route::Welcome
    }

    pub fn after_logout() -> Route {
        Route::Login
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = IagateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let path = match path.trim_end_matches('/') {
            "" => return Ok(Route::Login),
            trimmed => trimmed,
        };
        Route::ALL
            .iter()
            .find(|route| route.path() == path)
            .copied()
            .ok_or_else(|| IagateError::UnknownRoute(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_paths() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Login);
        assert_eq!("/login".parse::<Route>().unwrap(), Route::Login);
        assert_eq!("/bulk-message".parse::<Route>().unwrap(), Route::BulkMessage);
        assert_eq!("/chat/".parse::<Route>().unwrap(), Route::Chat);
        assert!(matches!(
            "/admin".parse::<Route>(),
            Err(IagateError::UnknownRoute(_))
        ));
    }

    #[test]
    fn path_round_trips() {
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>().unwrap(), *route);
        }
    }
}
