use super::error::IngestError;

/// Parses whitespace-separated numbers typed by a user.
///
/// A decimal comma is accepted in place of the decimal point (`32,5`).
/// A blank line gives an empty list.
pub fn parse_number_line(text: &str) -> anyhow::Result<Vec<f64>> {
    let mut values = Vec::new();
    for (idx, token) in text.split_whitespace().enumerate() {
        let normalized = token.replace(',', ".");
        let value = normalized.parse::<f64>().map_err(|_| IngestError::BadNumber {
            token: token.to_string(),
            position: idx + 1,
        })?;
        values.push(value);
    }
    log::debug!("parsed {} values from input line", values.len());
    Ok(values)
}
