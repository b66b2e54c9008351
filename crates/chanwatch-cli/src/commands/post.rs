//! Channel post commands
//!
//! Usage: chanwatch post check --link <LINK> <TEXT>

use chanwatch_engine::Monitor;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct PostArgs {
    #[command(subcommand)]
    pub command: PostCommand,
}

#[derive(Debug, Subcommand)]
pub enum PostCommand {
    /// Print the notification a post would trigger
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Link to the post, appended to the notification
    #[arg(long, default_value = "")]
    pub link: String,

    /// Post text
    pub text: String,
}

/// Execute post command
pub fn execute(args: PostArgs, monitor: &Monitor) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        PostCommand::Check(check) => {
            match monitor.on_channel_post(&check.text, &check.link) {
                Some(notification) => println!("{}", notification),
                None => println!("no match"),
            }
            Ok(())
        }
    }
}
