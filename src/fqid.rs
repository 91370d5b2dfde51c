//! Fully-qualified channel identifiers: `channel@component`.

#[derive(Debug, thiserror::Error)]
#[error("invalid channel fqid `{0}`, expected `channel@component`")]
pub struct InvalidFqid(pub String);

#[must_use]
pub fn format(component_id: &str, channel_id: &str) -> String {
    format!("{channel_id}@{component_id}")
}

/// Split the fqid into `(component_id, channel_id)`.
pub fn parse(fqid: &str) -> Result<(&str, &str), InvalidFqid> {
    let mut parts = fqid.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(channel_id), Some(component_id), None) => Ok((component_id, channel_id)),
        _ => Err(InvalidFqid(fqid.to_owned())),
    }
}
