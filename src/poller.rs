//! Periodic polling of the configured channels on behalf of a host application.

use crate::{
    api::sma::{self, ChannelValues, Client, LiveMeasurementQueryItem, Transport},
    prelude::{info, instrument, warn},
};

/// What the host should do about a failed poll cycle.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// Credentials got rejected: the host should ask the user to re-authenticate.
    #[error("re-authentication is required")]
    NeedsReauthentication(#[source] sma::Error),

    /// Anything else: the host keeps the last known values and tries again later.
    #[error("the appliance is temporarily unavailable")]
    Unavailable(#[source] sma::Error),
}

impl From<sma::Error> for PollError {
    fn from(error: sma::Error) -> Self {
        if error.is_authentication() {
            Self::NeedsReauthentication(error)
        } else {
            Self::Unavailable(error)
        }
    }
}

pub struct Poller<T> {
    client: Client<T>,
    query: Vec<LiveMeasurementQueryItem>,

    /// Result of the last successful cycle.
    last_values: Vec<ChannelValues>,
}

impl<T: Transport> Poller<T> {
    pub const fn new(client: Client<T>, query: Vec<LiveMeasurementQueryItem>) -> Self {
        Self { client, query, last_values: Vec::new() }
    }

    /// Run a single cycle: fetch the channels, logging in or refreshing the token first if needed.
    ///
    /// The last known values survive failed cycles.
    #[instrument(skip_all, fields(n_items = self.query.len()))]
    pub async fn poll(&mut self) -> Result<&[ChannelValues], PollError> {
        match self.client.fetch_live(&self.query).await {
            Ok(values) => {
                info!(n_channels = values.len(), "polled");
                self.last_values = values;
                Ok(&self.last_values)
            }
            Err(error) => {
                warn!("poll failed: {error:#}");
                Err(error.into())
            }
        }
    }

    #[must_use]
    pub fn last_values(&self) -> &[ChannelValues] {
        &self.last_values
    }

    /// Give the client back, for example to log out.
    pub fn into_client(self) -> Client<T> {
        self.client
    }
}
