mod config;
mod endpoint;
mod error;
mod executor;
mod models;
mod session;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

use http::{HeaderMap, HeaderValue, header};
use reqwest::{Method, Url};
use serde::Serialize;

pub use self::{
    config::ClientConfig,
    endpoint::Endpoint,
    error::{Error, Result},
    models::{
        AuthTokenInfo,
        ChannelValues,
        ComponentInfo,
        LiveMeasurementQueryItem,
        TimeValuePair,
        Value,
    },
    session::{LoginOutcome, Session},
    transport::{Body, HttpTransport, Request, Response, SESSION_COOKIE, Transport},
};
use crate::prelude::{debug, info, instrument};

/// Data Manager client holding a single session.
///
/// Every operation logs in first when needed, so calling [`Client::login`] explicitly is optional.
pub struct Client<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
    base_url: Url,

    /// `Origin` and `Host`, sent with every request.
    origin_headers: HeaderMap,

    session: Session,
}

impl Client<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.request_timeout, config.verify_ssl)?;
        Self::with_transport(config, transport)
    }
}

/// A channel which currently has a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailableChannel {
    pub component_id: String,

    /// `None` when the component did not show up in the discovery.
    pub component_name: Option<String>,

    pub channel_id: String,
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        let base_url = config.base_url()?;
        let mut origin_headers = HeaderMap::new();
        origin_headers.insert(
            header::ORIGIN,
            HeaderValue::from_str(base_url.as_str())
                .map_err(|error| Error::Client(format!("invalid origin `{base_url}`: {error}")))?,
        );
        origin_headers.insert(
            header::HOST,
            HeaderValue::from_str(config.authority())
                .map_err(|error| Error::Client(format!("invalid host: {error}")))?,
        );
        Ok(Self { transport, config, base_url, origin_headers, session: Session::NoSession })
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch the plant and its devices.
    ///
    /// The plant comes first, followed by the devices in the navigation order.
    /// Devices are enriched with their serial numbers and firmware versions one by one.
    #[instrument(skip_all, fields(host = self.config.authority()))]
    pub async fn discover_components(&mut self) -> Result<Vec<ComponentInfo>> {
        self.login().await?;
        info!("discovering…");

        let roots = self
            .execute_parsed(
                Method::GET,
                Endpoint::Navigation { parent_id: None },
                Body::Empty,
                ComponentInfo::from_json_list,
            )
            .await?;
        let root = roots
            .into_iter()
            .next()
            .ok_or_else(|| Error::Client("the appliance reported no root component".to_owned()))?;
        if !root.is_plant() {
            return Err(Error::Client(format!(
                "root component `{}` is of type `{}`, expected `{}`",
                root.component_id,
                root.component_type,
                ComponentInfo::PLANT_TYPE,
            )));
        }

        let children = self
            .execute_parsed(
                Method::GET,
                Endpoint::Navigation { parent_id: Some(&root.component_id) },
                Body::Empty,
                ComponentInfo::from_json_list,
            )
            .await?;
        let mut components = Vec::with_capacity(children.len() + 1);
        components.push(root);
        components.extend(children);

        for component in components.iter_mut().skip(1) {
            debug!(component_id = %component.component_id, "fetching the device info…");
            let device_info = self
                .execute(
                    Method::GET,
                    Endpoint::DeviceInfo { device_id: &component.component_id },
                    Body::Empty,
                )
                .await?;
            component.enrich(&device_info);
        }

        info!(n_components = components.len(), "discovered");
        Ok(components)
    }

    /// Fetch the latest values of the specific channels.
    ///
    /// Array channels come back expanded, one entry per index.
    #[instrument(skip_all, fields(host = self.config.authority(), n_items = query.len()))]
    pub async fn fetch_live(
        &mut self,
        query: &[LiveMeasurementQueryItem],
    ) -> Result<Vec<ChannelValues>> {
        self.fetch_live_measurements(query).await
    }

    /// Fetch the latest values of all channels of the components.
    #[instrument(skip_all, fields(host = self.config.authority(), component_ids = ?component_ids))]
    pub async fn fetch_live_for_components(
        &mut self,
        component_ids: &[&str],
    ) -> Result<Vec<ChannelValues>> {
        #[derive(Serialize)]
        struct ComponentQueryItem<'a> {
            #[serde(rename = "componentId")]
            component_id: &'a str,
        }

        let query = component_ids
            .iter()
            .map(|&component_id| ComponentQueryItem { component_id })
            .collect::<Vec<_>>();
        self.fetch_live_measurements(&query).await
    }

    /// List channels of all discovered components that have a current value.
    #[instrument(skip_all, fields(host = self.config.authority()))]
    pub async fn available_channels(&mut self) -> Result<Vec<AvailableChannel>> {
        let components = self.discover_components().await?;
        let component_ids =
            components.iter().map(|component| component.component_id.as_str()).collect::<Vec<_>>();
        let all_values = self.fetch_live_for_components(&component_ids).await?;

        let channels = all_values
            .into_iter()
            .filter(|values| values.values.last().is_some_and(|pair| pair.value.is_some()))
            .map(|values| AvailableChannel {
                component_name: components
                    .iter()
                    .find(|component| component.component_id == values.component_id)
                    .map(|component| component.name.clone()),
                component_id: values.component_id,
                channel_id: values.channel_id,
            })
            .collect::<Vec<_>>();
        info!(n_channels = channels.len(), "listed the available channels");
        Ok(channels)
    }

    async fn fetch_live_measurements<Q: Serialize + Sync>(
        &mut self,
        query: &[Q],
    ) -> Result<Vec<ChannelValues>> {
        self.login().await?;
        let body = serde_json::to_value(query)
            .map_err(|error| Error::Client(format!("failed to serialize the query: {error}")))?;
        let all_values = self
            .execute_parsed(
                Method::POST,
                Endpoint::LiveMeasurements,
                Body::Json(body),
                ChannelValues::from_json_list,
            )
            .await?;
        debug!(n_channels = all_values.len(), "fetched");
        Ok(all_values)
    }
}
