use crate::core::{has_permission, Identity};
use crate::navigation::{Access, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// User visible message shown alongside a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect { to: Route, notice: Option<Notice> },
}

impl Navigation {
    /// Route that ends up on screen.
    pub fn route(&self) -> Route {
        match self {
            Navigation::Render(route) => *route,
            Navigation::Redirect { to, .. } => *to,
        }
    }
}

/// Decide what to show when `identity` asks for `route`.
pub fn resolve(identity: Option<&Identity>, route: Route) -> Navigation {
    match (route.access(), identity) {
        (Access::Public, _) => Navigation::Render(route),
        (_, None) => Navigation::Redirect {
            to: Route::Login,
            notice: Some(Notice::info("please log in to continue")),
        },
        (Access::Authenticated, Some(_)) => Navigation::Render(route),
        (Access::Capability(capability), Some(identity)) => {
            if has_permission(Some(identity.username.as_str()), capability) {
                Navigation::Render(route)
            } else {
                Navigation::Redirect {
                    to: Route::Welcome,
                    notice: Some(Notice::error(
                        "you do not have permission to access this feature",
                    )),
                }
            }
        }
    }
}

/// Destinations offered on the welcome view.
pub fn menu(identity: &Identity) -> Vec<Route> {
    [Route::Chat, Route::BulkMessage, Route::Pricing]
        .into_iter()
        .filter(|route| matches!(resolve(Some(identity), *route), Navigation::Render(_)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(username: &str) -> Identity {
        Identity {
            username: username.into(),
            email: format!("{}@ia.com", username),
        }
    }

    #[test]
    fn public_routes_render_for_anyone() {
        assert_eq!(resolve(None, Route::Login), Navigation::Render(Route::Login));
        assert_eq!(
            resolve(None, Route::Pricing),
            Navigation::Render(Route::Pricing)
        );
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        for route in [Route::Welcome, Route::Chat, Route::BulkMessage] {
            assert_eq!(resolve(None, route).route(), Route::Login);
        }
    }

    #[test]
    fn bulk_message_requires_capability() {
        let kenneth = identity("kenneth");
        assert_eq!(
            resolve(Some(&kenneth), Route::BulkMessage),
            Navigation::Render(Route::BulkMessage)
        );

        let joser = identity("joser");
        match resolve(Some(&joser), Route::BulkMessage) {
            Navigation::Redirect {
                to: Route::Welcome,
                notice: Some(notice),
            } => assert_eq!(notice.level, NoticeLevel::Error),
            other => panic!("unexpected navigation {:?}", other),
        }
    }

    #[test]
    fn menu_hides_denied_destinations() {
        assert_eq!(
            menu(&identity("bolt")),
            vec![Route::Chat, Route::BulkMessage, Route::Pricing]
        );
        assert_eq!(menu(&identity("demo")), vec![Route::Chat, Route::Pricing]);
    }
}
