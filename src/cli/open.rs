use clap::Args;

use crate::common::info;
use crate::lead::Plan;
use crate::navigation::{menu, Access, Navigation, NoticeLevel, Route};
use crate::{App, IagateError, Result};

/// Open a view
#[derive(Args, Debug)]
pub struct OpenCommand {
    /// View path (e.g. /welcome, /bulk-message)
    #[arg(default_value = "/")]
    path: String,
}

impl OpenCommand {
    pub async fn run(self, app: &App) -> Result<()> {
        let route = self.path.parse::<Route>()?;

        match app.navigate(route) {
            Navigation::Render(Route::Chat) => {
                render(app, Route::Chat);
                match app.chat_history().await? {
                    Some(messages) => println!("{} messages", messages.len()),
                    None => eprintln!("chat history is unavailable, try again later"),
                }
            }
            Navigation::Render(route) => render(app, route),
            Navigation::Redirect { to, notice } => {
                if let Some(notice) = notice {
                    print_notice(notice.level, &notice.message);
                }
                render(app, to);
            }
        }

        Ok(())
    }
}

pub(crate) fn render(app: &App, route: Route) {
    info!(%route, "Render");
    println!("{}", route);

    if route == Route::Welcome {
        if let Some(identity) = app.session().current_identity() {
            println!("Welcome {} <{}>", identity.username, identity.email);
            for destination in menu(identity) {
                println!("  {}", destination);
            }
        }
    }
    if route == Route::Pricing {
        for plan in Plan::ALL {
            let marker = if plan.recommended() { " (recommended)" } else { "" };
            println!("  {} [{}]{}", plan.display_name(), plan, marker);
        }
        println!("Leave your details with `iagate lead` and we will contact you.");
    }
}

pub(crate) fn print_notice(level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Info => eprintln!("{}", message),
        NoticeLevel::Error => eprintln!("error: {}", message),
    }
}

// Map a guard redirect to the error the caller reports.
pub(crate) fn require(app: &App, route: Route) -> Result<()> {
    match app.navigate(route) {
        Navigation::Render(_) => Ok(()),
        Navigation::Redirect { to, notice } => {
            if let Some(notice) = notice {
                print_notice(notice.level, &notice.message);
            }
            match route.access() {
                Access::Capability(capability) if to != Route::Login => {
                    Err(IagateError::PermissionDenied { capability })
                }
                _ => Err(IagateError::Unauthenticated),
            }
        }
    }
}
