use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::bulk::{Attachment, BulkRequest, DeliveryStatus};
use crate::cli::open::require;
use crate::navigation::Route;
use crate::{App, Result};

/// Simulated campaigns
#[derive(Args, Debug)]
pub struct BulkCommand {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a simulated campaign
    Send(SendArgs),
    /// Print previous campaigns, newest first
    Log,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Message text
    #[arg(long, short = 'm', default_value = "")]
    message: String,
    /// Recipient phone number, repeat for more
    #[arg(long = "number", short = 'n')]
    numbers: Vec<String>,
    /// Schedule (free form, informational only)
    #[arg(long)]
    schedule: Option<String>,
    /// Attachment path (png, jpg, jpeg, gif, pdf, mp4, mov)
    #[arg(long = "attach", short = 'a')]
    attachments: Vec<PathBuf>,
}

impl BulkCommand {
    pub async fn run(self, app: &mut App) -> Result<()> {
        require(app, Route::BulkMessage)?;

        match self.command {
            Command::Send(args) => send(app, args).await,
            Command::Log => {
                let logs = app.bulk_logs()?;
                if logs.is_empty() {
                    println!("no campaigns sent yet");
                }
                for log in logs {
                    println!("{}", log);
                }
                Ok(())
            }
        }
    }
}

async fn send(app: &mut App, args: SendArgs) -> Result<()> {
    let SendArgs {
        message,
        numbers,
        schedule,
        attachments,
    } = args;

    let mut request = BulkRequest::new(message, numbers.join("\n"));
    if let Some(schedule) = schedule {
        request = request.with_schedule(schedule);
    }
    for path in attachments {
        request = request.with_attachment(Attachment::from_path(path)?);
    }

    let log = app.send_bulk(&request).await?;

    println!("{}", log);
    if log.status == DeliveryStatus::Error {
        eprintln!("some messages could not be delivered, try again");
    }

    Ok(())
}
