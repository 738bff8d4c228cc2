//! Route guard consulted before a view is rendered.

mod route;
pub use self::route::{Access, Route};

mod guard;
pub use self::guard::{menu, resolve, Navigation, Notice, NoticeLevel};
