use clap::{Args, Subcommand};

use crate::chat::ChatMessage;
use crate::cli::open::require;
use crate::navigation::Route;
use crate::{App, Result};

/// Chat history
#[derive(Args, Debug)]
pub struct ChatCommand {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the saved conversation
    Show,
    /// Append a message to the conversation
    Say {
        /// Message text
        message: String,
    },
    /// Remove every message of the conversation
    Clear,
}

const UNAVAILABLE: &str = "chat history is unavailable, try again later";

impl ChatCommand {
    pub async fn run(self, app: &App) -> Result<()> {
        require(app, Route::Chat)?;

        match self.command {
            Command::Show => match app.chat_history().await? {
                Some(messages) => print_messages(&messages),
                None => println!("no saved conversation"),
            },
            Command::Say { message } => match app.chat_say(&message).await? {
                Some(messages) => print_messages(&messages),
                None => eprintln!("{}", UNAVAILABLE),
            },
            Command::Clear => match app.chat_clear().await? {
                Some(()) => println!("conversation cleared"),
                None => eprintln!("{}", UNAVAILABLE),
            },
        }

        Ok(())
    }
}

fn print_messages(messages: &[ChatMessage]) {
    for message in messages {
        println!(
            "{} {:?}: {}",
            message.timestamp.to_rfc3339(),
            message.role,
            message.content
        );
    }
}
