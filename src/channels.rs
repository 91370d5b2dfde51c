//! Metadata of the channels the Data Manager is known to report.

mod table;

use std::borrow::Cow;

use derive_more::Display;

use crate::api::sma::Value;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Unit {
    #[display("")]
    PlainNumber,

    #[display("V")]
    Volt,

    #[display("A")]
    Ampere,

    #[display("W")]
    Watt,

    #[display("Wh")]
    WattHour,

    #[display("°C")]
    Celsius,

    #[display("Hz")]
    Hertz,

    #[display("var")]
    VoltAmpereReactive,

    #[display("s")]
    Second,

    #[display("%")]
    Percent,

    /// Integer status code, see [`KnownChannel::statuses`].
    #[display("")]
    Enum,
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum DeviceKind {
    #[display("grid")]
    Grid,

    #[display("battery")]
    Battery,

    #[display("PV")]
    Pv,

    #[display("other")]
    Other,
}

/// How the values accumulate over time.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum CumulativeMode {
    /// Monotonic counter, like the number of events or the operating time.
    #[display("counter")]
    Counter,

    /// Running total, like the yield.
    #[display("total")]
    Total,

    #[display("minimum")]
    Minimum,

    #[display("maximum")]
    Maximum,
}

#[derive(Debug, PartialEq, Eq)]
pub struct KnownChannel {
    /// Channel ID, array channels with the empty index: `Measurement.DcMs.Vol[]`.
    pub id: &'static str,

    pub name: &'static str,
    pub unit: Unit,
    pub device_kind: DeviceKind,

    /// `None` for one-off measurements.
    pub cumulative_mode: Option<CumulativeMode>,

    /// Status code labels of [`Unit::Enum`] channels.
    pub statuses: &'static [(i64, &'static str)],
}

impl KnownChannel {
    /// Render the value with its unit, or its label for the status channels.
    #[must_use]
    pub fn format_value(&self, value: &Value) -> String {
        if self.unit == Unit::Enum
            && let Some(code) = value.as_integer()
        {
            return self.status_label(code).map_or_else(|| format!("[{code}]"), ToOwned::to_owned);
        }
        match self.unit {
            Unit::PlainNumber | Unit::Enum => value.to_string(),
            unit => format!("{value} {unit}"),
        }
    }

    #[must_use]
    pub fn status_label(&self, code: i64) -> Option<&'static str> {
        self.statuses.iter().find(|(known_code, _)| *known_code == code).map(|(_, label)| *label)
    }
}

/// Replace the array index with the empty brackets: `Vol[3]` becomes `Vol[]`.
#[must_use]
pub fn normalize_channel_id(channel_id: &str) -> Cow<'_, str> {
    if channel_id.ends_with(']')
        && let Some(bracket_start) = channel_id.rfind('[')
        && bracket_start + 2 != channel_id.len()
    {
        return Cow::Owned(format!("{}[]", &channel_id[..bracket_start]));
    }
    Cow::Borrowed(channel_id)
}

/// Look up the channel metadata, array channels with any index included.
#[must_use]
pub fn get_known_channel(channel_id: &str) -> Option<&'static KnownChannel> {
    let channel_id = normalize_channel_id(channel_id);
    table::KNOWN_CHANNELS.iter().find(|channel| channel.id == channel_id)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_plain_channel_ok() {
        let channel = get_known_channel("Measurement.GridMs.TotW").unwrap();
        assert_eq!(channel.device_kind, DeviceKind::Grid);
        assert_eq!(channel.unit, Unit::Watt);
        assert_eq!(channel.cumulative_mode, None);
    }

    #[test]
    fn test_array_channel_ok() {
        let channel = get_known_channel("Measurement.DcMs.Vol[0]").unwrap();
        assert_eq!(channel.id, "Measurement.DcMs.Vol[]");
        assert_eq!(channel.device_kind, DeviceKind::Pv);
        assert_eq!(channel.unit, Unit::Volt);
        assert_eq!(get_known_channel("Measurement.DcMs.Vol[7]"), Some(channel));
        assert_eq!(get_known_channel("Measurement.DcMs.Vol[]"), Some(channel));
    }

    #[test]
    fn test_unknown_channel_ok() {
        assert_eq!(get_known_channel("Measurement.Nope"), None);
        assert_eq!(get_known_channel("Measurement.GridMs.TotW[1]"), None);
    }

    #[test]
    fn test_normalize_channel_id_ok() {
        assert_eq!(normalize_channel_id("Measurement.DcMs.Amp[12]"), "Measurement.DcMs.Amp[]");
        assert_eq!(normalize_channel_id("Measurement.DcMs.Amp[]"), "Measurement.DcMs.Amp[]");
        assert_eq!(normalize_channel_id("Measurement.GridMs.TotW"), "Measurement.GridMs.TotW");
        assert_eq!(normalize_channel_id("odd]"), "odd]");
    }

    #[test]
    fn test_ids_are_unique_ok() {
        assert!(table::KNOWN_CHANNELS.iter().map(|channel| channel.id).all_unique());
    }

    #[test]
    fn test_cumulative_mode_ok() {
        let channel = get_known_channel("Measurement.Metering.GridMs.TotWhIn.Bat").unwrap();
        assert_eq!(channel.unit, Unit::WattHour);
        assert_eq!(channel.cumulative_mode, Some(CumulativeMode::Total));
    }

    #[test]
    fn test_status_labels_ok() {
        let channel = get_known_channel("Measurement.Operation.Health").unwrap();
        assert_eq!(channel.unit, Unit::Enum);
        assert_eq!(channel.format_value(&Value::Integer(307)), "Ok");
        assert_eq!(channel.format_value(&Value::Integer(455)), "Warning");
        assert_eq!(channel.format_value(&Value::Integer(1)), "[1]");
    }

    #[test]
    fn test_format_value_ok() {
        let channel = get_known_channel("Measurement.GridMs.TotW").unwrap();
        assert_eq!(channel.format_value(&Value::Integer(1200)), "1200 W");
        assert_eq!(channel.format_value(&Value::Float(49.5)), "49.5 W");
    }
}
