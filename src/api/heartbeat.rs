use std::time::Duration;

use reqwest::Url;

use crate::prelude::*;

/// Dead man's switch: pings the URL after every successful cycle.
pub struct Client {
    client: reqwest::Client,
    url: Option<Url>,
}

impl Client {
    pub fn new(url: Option<Url>) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(3)).build()?;
        Ok(Self { client, url })
    }

    /// Failures are logged and ignored: a missed heartbeat must not stop the polling.
    pub async fn send(&self) {
        if let Some(url) = &self.url
            && let Err(error) = self.send_fallible(url.clone()).await
        {
            warn!("failed to send the heartbeat: {error:#}");
        }
    }

    #[instrument(skip_all)]
    async fn send_fallible(&self, url: Url) -> Result {
        info!("sending a heartbeat…");
        self.client.post(url).send().await?.error_for_status()?;
        Ok(())
    }
}
