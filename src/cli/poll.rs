use clap::Parser;
use itertools::Itertools;
use reqwest::Url;
use sma_data_manager::{
    api::{
        heartbeat,
        sma::{Client, LiveMeasurementQueryItem},
    },
    poller::{PollError, Poller},
    prelude::*,
};
use tokio::{
    signal,
    time::{MissedTickBehavior, interval},
};

use crate::tables::build_values_table;

#[derive(Parser)]
pub struct PollArgs {
    /// Channel to poll as `channel@component`, may be repeated.
    #[clap(
        long = "channel",
        env = "SMA_CHANNELS",
        value_delimiter = ',',
        required = true,
        num_args = 1..,
    )]
    pub channels: Vec<LiveMeasurementQueryItem>,

    #[clap(long, env = "POLLING_INTERVAL", default_value = "1min")]
    pub interval: humantime::Duration,

    /// Poll once and exit.
    #[clap(long)]
    pub once: bool,

    #[clap(long = "heartbeat-url", env = "HEARTBEAT_URL")]
    pub heartbeat_url: Option<Url>,
}

impl PollArgs {
    /// Poll until interrupted or until the credentials get rejected.
    pub async fn run(self, client: Client) -> Result {
        info!(channels = %self.channels.iter().join(", "), "polling…");
        let heartbeat = heartbeat::Client::new(self.heartbeat_url)?;
        let mut poller = Poller::new(client, self.channels);
        let mut interval = interval(self.interval.into());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let result = loop {
            let is_interrupted = tokio::select! {
                _ = interval.tick() => false,
                _ = signal::ctrl_c() => true,
            };
            if is_interrupted {
                info!("interrupted");
                break Ok(());
            }
            match poller.poll().await {
                Ok(values) => {
                    println!("{}", build_values_table(values));
                    heartbeat.send().await;
                }
                Err(error @ PollError::NeedsReauthentication(_)) => {
                    break Err(error).context("stopped polling");
                }
                Err(PollError::Unavailable(_)) => {
                    warn!("keeping the last known values");
                }
            }
            if self.once {
                break Ok(());
            }
        };

        let mut client = poller.into_client();
        if client.session().is_authenticated() {
            client.logout().await?;
        }
        result
    }
}
