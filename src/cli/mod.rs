mod root;
pub use root::{initialize, parse, Command, GlobalOptions, IagateCommand};

pub mod bulk;
pub mod can;
pub mod chat;
pub mod lead;
pub mod login;
pub mod logout;
pub mod open;
pub mod whoami;
