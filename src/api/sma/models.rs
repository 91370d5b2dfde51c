use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    api::sma::error::{Error, Result},
    fqid,
};

/// Strict field access on a JSON object, naming the offending field on failure.
struct Fields<'a> {
    what: &'static str,
    object: &'a serde_json::Map<String, serde_json::Value>,
}

impl<'a> Fields<'a> {
    fn new(what: &'static str, value: &'a serde_json::Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| Error::parsing(what, "not an object"))?;
        Ok(Self { what, object })
    }

    fn required<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self
            .object
            .get(name)
            .ok_or_else(|| Error::parsing(self.what, format!("missing field `{name}`")))?;
        self.convert(name, value)
    }

    /// Absent and `null` both yield `None`.
    fn optional<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        match self.object.get(name) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => self.convert(name, value).map(Some),
        }
    }

    fn convert<T: DeserializeOwned>(&self, name: &str, value: &serde_json::Value) -> Result<T> {
        T::deserialize(value)
            .map_err(|error| Error::parsing(self.what, format!("invalid field `{name}`: {error}")))
    }
}

/// Access token pair granted by the `token` endpoint.
#[must_use]
#[derive(Clone, derive_more::Debug)]
pub struct AuthTokenInfo {
    #[debug(skip)]
    access_token: String,

    #[debug(skip)]
    refresh_token: String,

    token_type: String,

    /// Lifetime in seconds, counted from [`AuthTokenInfo::granted_at`].
    expires_in: i64,

    granted_at: DateTime<Utc>,
}

impl AuthTokenInfo {
    pub fn new(
        access_token: String,
        refresh_token: String,
        token_type: String,
        expires_in: i64,
    ) -> Self {
        Self { access_token, refresh_token, token_type, expires_in, granted_at: Utc::now() }
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let fields = Fields::new("auth token info", value)?;
        Ok(Self::new(
            fields.required("access_token")?,
            fields.required("refresh_token")?,
            fields.required("token_type")?,
            fields.required("expires_in")?,
        ))
    }

    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    #[must_use]
    pub const fn expires_in(&self) -> i64 {
        self.expires_in
    }

    #[must_use]
    pub const fn granted_at(&self) -> DateTime<Utc> {
        self.granted_at
    }

    #[must_use]
    pub fn time_until_expiration(&self) -> TimeDelta {
        self.time_until_expiration_at(Utc::now())
    }

    #[must_use]
    pub fn time_until_expiration_at(&self, now: DateTime<Utc>) -> TimeDelta {
        self.granted_at + TimeDelta::seconds(self.expires_in) - now
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.time_until_expiration().num_seconds() <= 0
    }
}

/// Measured value as reported by the appliance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, derive_more::Display, derive_more::From)]
#[serde(untagged)]
pub enum Value {
    #[display("{_0}")]
    Integer(i64),

    #[display("{_0}")]
    Float(f64),

    #[display("{_0}")]
    Text(String),
}

impl Value {
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Float(_) | Self::Text(_) => None,
        }
    }
}

/// A single value at a single point in time.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct TimeValuePair {
    /// ISO-8601 timestamp, kept verbatim.
    pub time: String,

    pub value: Option<Value>,
}

impl TimeValuePair {
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let fields = Fields::new("time value pair", value)?;
        Ok(Self { time: fields.required("time")?, value: fields.optional("value")? })
    }
}

/// Values of a single channel of a single component.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelValues {
    pub channel_id: String,
    pub component_id: String,

    /// Chronological order: the last one is the latest.
    pub values: Vec<TimeValuePair>,
}

impl ChannelValues {
    /// Parse a single measurement entry.
    ///
    /// An array channel (`values` list instead of `value` in its record) is exploded
    /// into one entry per index: `Measurement.DcMs.Vol[]` becomes `Measurement.DcMs.Vol[0]`,
    /// `Measurement.DcMs.Vol[1]`, and so on, all sharing the record time.
    pub fn from_json(value: &serde_json::Value) -> Result<Vec<Self>> {
        let fields = Fields::new("channel values", value)?;
        let channel_id: String = fields.required("channelId")?;
        let component_id: String = fields.required("componentId")?;
        let records: Vec<serde_json::Value> = fields.required("values")?;

        if let Some((time, array)) = records.first().and_then(Self::as_array_record) {
            let base_id = channel_id.strip_suffix("[]").unwrap_or(&channel_id);
            return array
                .iter()
                .enumerate()
                .map(|(index, value)| -> Result<Self> {
                    Ok(Self {
                        channel_id: format!("{base_id}[{index}]"),
                        component_id: component_id.clone(),
                        values: vec![TimeValuePair {
                            time: time.to_owned(),
                            value: Option::<Value>::deserialize(value)
                                .map_err(|error| Error::parsing("array channel value", error))?,
                        }],
                    })
                })
                .collect();
        }

        let values = records.iter().map(TimeValuePair::from_json).collect::<Result<_>>()?;
        Ok(vec![Self { channel_id, component_id, values }])
    }

    /// Parse the whole `measurements/live` response, flattening the array channels in place.
    pub fn from_json_list(value: &serde_json::Value) -> Result<Vec<Self>> {
        let entries =
            value.as_array().ok_or_else(|| Error::parsing("live measurements", "not a list"))?;
        let mut all_values = Vec::with_capacity(entries.len());
        for entry in entries {
            all_values.extend(Self::from_json(entry)?);
        }
        Ok(all_values)
    }

    fn as_array_record(record: &serde_json::Value) -> Option<(&str, &Vec<serde_json::Value>)> {
        let time = record.get("time")?.as_str()?;
        let values = record.get("values")?.as_array()?;
        Some((time, values))
    }

    pub fn latest_value(&self) -> Result<&TimeValuePair> {
        self.values.last().ok_or_else(|| Error::NoValues {
            channel_id: self.channel_id.clone(),
            component_id: self.component_id.clone(),
        })
    }

    #[must_use]
    pub fn fqid(&self) -> String {
        fqid::format(&self.component_id, &self.channel_id)
    }
}

/// A discovered device or the plant itself.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentInfo {
    pub component_id: String,
    pub component_type: String,
    pub name: String,
    pub serial_number: Option<String>,
    pub firmware_version: Option<String>,
}

impl ComponentInfo {
    pub const PLANT_TYPE: &'static str = "Plant";

    const FIRMWARE_VERSION_FEATURE: &'static str = "FirmwareVersion";

    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let fields = Fields::new("component info", value)?;
        Ok(Self {
            component_id: fields.required("componentId")?,
            component_type: fields.required("componentType")?,
            name: fields.required("name")?,
            serial_number: None,
            firmware_version: None,
        })
    }

    /// Parse the `navigation` response.
    pub fn from_json_list(value: &serde_json::Value) -> Result<Vec<Self>> {
        value
            .as_array()
            .ok_or_else(|| Error::parsing("navigation", "not a list"))?
            .iter()
            .map(Self::from_json)
            .collect()
    }

    #[must_use]
    pub fn is_plant(&self) -> bool {
        self.component_type == Self::PLANT_TYPE
    }

    /// Merge the `widgets/deviceinfo` response.
    ///
    /// Everything in there is optional: fields of unexpected types are ignored.
    pub fn enrich(&mut self, device_info: &serde_json::Value) {
        if let Some(serial_number) = device_info.get("serial").and_then(serde_json::Value::as_str) {
            self.serial_number = Some(serial_number.to_owned());
        }
        let firmware_version = device_info
            .get("deviceInfoFeatures")
            .and_then(serde_json::Value::as_array)
            .into_iter()
            .flatten()
            .filter(|feature| {
                feature.get("infoWidgetType").and_then(serde_json::Value::as_str)
                    == Some(Self::FIRMWARE_VERSION_FEATURE)
            })
            .find_map(|feature| feature.get("value").and_then(serde_json::Value::as_str));
        if let Some(firmware_version) = firmware_version {
            self.firmware_version = Some(firmware_version.to_owned());
        }
    }
}

/// Channel to poll: serializes into the `measurements/live` request item.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("{channel_id}@{component_id}")]
pub struct LiveMeasurementQueryItem {
    #[serde(rename = "componentId")]
    pub component_id: String,

    #[serde(rename = "channelId")]
    pub channel_id: String,
}

impl LiveMeasurementQueryItem {
    pub fn new(component_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self { component_id: component_id.into(), channel_id: channel_id.into() }
    }
}

impl std::str::FromStr for LiveMeasurementQueryItem {
    type Err = fqid::InvalidFqid;

    /// Parse `channel@component`.
    fn from_str(fqid: &str) -> Result<Self, Self::Err> {
        let (component_id, channel_id) = fqid::parse(fqid)?;
        Ok(Self::new(component_id, channel_id))
    }
}
