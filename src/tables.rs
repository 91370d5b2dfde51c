use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use sma_data_manager::{
    api::sma::{AvailableChannel, ChannelValues, ComponentInfo},
    channels::get_known_channel,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_components_table(components: &[ComponentInfo]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Type", "Name", "Serial number", "Firmware"]);
    for component in components {
        table.add_row(vec![
            Cell::new(&component.component_id).add_attribute(Attribute::Dim),
            Cell::new(&component.component_type)
                .fg(if component.is_plant() { Color::Green } else { Color::Reset }),
            Cell::new(&component.name),
            Cell::new(component.serial_number.as_deref().unwrap_or_default()),
            Cell::new(component.firmware_version.as_deref().unwrap_or_default())
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_channels_table(channels: &[AvailableChannel]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Channel", "Component", "Name", "Kind", "Unit"]);
    for channel in channels {
        let known_channel = get_known_channel(&channel.channel_id);
        table.add_row(vec![
            Cell::new(&channel.channel_id),
            Cell::new(channel.component_name.as_deref().unwrap_or(&channel.component_id))
                .add_attribute(Attribute::Dim),
            known_channel.map_or_else(
                || Cell::new("unknown").fg(Color::DarkYellow),
                |known_channel| Cell::new(known_channel.name),
            ),
            Cell::new(
                known_channel.map(|known_channel| known_channel.device_kind.to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(
                known_channel.map(|known_channel| known_channel.unit.to_string()).unwrap_or_default(),
            ),
        ]);
    }
    table
}

pub fn build_values_table(all_values: &[ChannelValues]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Channel", "Name", "Time", "Value"]);
    for values in all_values {
        let known_channel = get_known_channel(&values.channel_id);
        let (time, value) = values.latest_value().map_or(("", None), |latest| {
            (latest.time.as_str(), latest.value.as_ref())
        });
        let value = match (value, known_channel) {
            (Some(value), Some(known_channel)) => Cell::new(known_channel.format_value(value)),
            (Some(value), None) => Cell::new(value),
            (None, _) => Cell::new("n/a").fg(Color::DarkYellow),
        };
        table.add_row(vec![
            Cell::new(values.fqid()).add_attribute(Attribute::Dim),
            Cell::new(known_channel.map_or("", |known_channel| known_channel.name)),
            Cell::new(time).add_attribute(Attribute::Dim),
            value.set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
