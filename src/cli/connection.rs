use clap::{ArgAction, Parser};
use sma_data_manager::{
    api::sma::{Client, ClientConfig},
    prelude::*,
};

#[derive(Parser)]
pub struct ConnectionArgs {
    /// Data Manager host name or URL.
    #[clap(long, env = "SMA_HOST")]
    pub host: String,

    #[clap(long, env = "SMA_USERNAME")]
    pub username: Option<String>,

    #[clap(long, env = "SMA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[clap(long, env = "SMA_USE_SSL", default_value_t = true, action = ArgAction::Set)]
    pub use_ssl: bool,

    /// Set to `false` for the self-signed certificate the appliance ships with.
    #[clap(long, env = "SMA_VERIFY_SSL", default_value_t = true, action = ArgAction::Set)]
    pub verify_ssl: bool,

    #[clap(long, env = "SMA_REQUEST_TIMEOUT", default_value = "10s")]
    pub request_timeout: humantime::Duration,

    #[clap(long, env = "SMA_REQUEST_RETRIES", default_value_t = 3)]
    pub request_retries: u32,
}

impl ConnectionArgs {
    pub fn new_client(&self) -> Result<Client> {
        let config = ClientConfig::builder()
            .host(self.host.as_str())
            .maybe_username(self.username.clone())
            .maybe_password(self.password.clone())
            .use_ssl(self.use_ssl)
            .verify_ssl(self.verify_ssl)
            .request_timeout(self.request_timeout.into())
            .request_retries(self.request_retries)
            .build();
        Client::new(config).context("failed to create the client")
    }
}
