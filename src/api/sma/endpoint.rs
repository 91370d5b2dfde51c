use derive_more::Display;
use reqwest::Url;

use crate::api::sma::error::{Error, Result};

/// Data Manager REST endpoints, relative to `/api/v1`.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// Password and refresh-token grants.
    #[display("token")]
    Token,

    /// Refresh token revocation (logout).
    #[display("refreshtoken")]
    RevokeRefreshToken { refresh_token: &'a str },

    /// Component tree, optionally below the parent.
    #[display("navigation")]
    Navigation { parent_id: Option<&'a str> },

    /// Serial number and firmware version of a device.
    #[display("widgets/deviceinfo")]
    DeviceInfo { device_id: &'a str },

    #[display("measurements/live")]
    LiveMeasurements,
}

impl Endpoint<'_> {
    /// Token endpoints must never trigger re-authentication: that would loop.
    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self, Self::Token | Self::RevokeRefreshToken { .. })
    }

    pub fn url(&self, base_url: &Url) -> Result<Url> {
        let mut url = base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Client(format!("`{base_url}` cannot be a base URL")))?
            .pop_if_empty()
            .extend(self.to_string().split('/'));
        match self {
            Self::RevokeRefreshToken { refresh_token } => {
                url.query_pairs_mut().append_pair("refreshToken", refresh_token);
            }
            Self::Navigation { parent_id: Some(parent_id) } => {
                url.query_pairs_mut().append_pair("parentId", parent_id);
            }
            Self::DeviceInfo { device_id } => {
                url.query_pairs_mut().append_pair("deviceId", device_id);
            }
            Self::Token | Self::Navigation { parent_id: None } | Self::LiveMeasurements => {}
        }
        Ok(url)
    }
}
