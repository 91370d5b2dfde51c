#![allow(clippy::doc_markdown)]

mod cli;
mod tables;

use clap::{Parser, crate_version};
use sma_data_manager::{api::sma::Client, prelude::*};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command},
    tables::{build_channels_table, build_components_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().without_time().compact().with_env_filter(filter).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let mut client = args.connection.new_client()?;

    match args.command {
        Command::Discover => {
            let result = discover(&mut client).await;
            logout(&mut client).await;
            result?;
        }
        Command::Channels => {
            let result = channels(&mut client).await;
            logout(&mut client).await;
            result?;
        }
        Command::Poll(args) => {
            args.run(client).await?;
        }
    }

    info!("done!");
    Ok(())
}

async fn discover(client: &mut Client) -> Result {
    let components = client.discover_components().await.context("failed to discover")?;
    println!("{}", build_components_table(&components));
    Ok(())
}

async fn channels(client: &mut Client) -> Result {
    let channels =
        client.available_channels().await.context("failed to list the available channels")?;
    println!("{}", build_channels_table(&channels));
    Ok(())
}

async fn logout(client: &mut Client) {
    if client.session().is_authenticated()
        && let Err(error) = client.logout().await
    {
        warn!("failed to log out: {error:#}");
    }
}
