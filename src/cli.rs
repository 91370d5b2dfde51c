mod connection;
mod poll;

use clap::{Parser, Subcommand};

pub use self::{connection::ConnectionArgs, poll::PollArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the plant and its devices.
    #[clap(name = "discover")]
    Discover,

    /// List the channels which currently report a value.
    #[clap(name = "channels")]
    Channels,

    /// Periodically fetch the selected channels.
    #[clap(name = "poll")]
    Poll(Box<PollArgs>),
}
