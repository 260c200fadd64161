use super::error::RenderError;
use crate::core::models::color::lookup_color;
use crate::core::models::pocket::Pocket;
use crate::core::models::record::StructureRecord;

/// Formats a pocket as one `pocketDataList` entry, trailing comma and newline included.
///
/// # Errors
///
/// Returns [`RenderError::UnknownColor`] if the pocket's color key is not in the table.
pub fn format_pocket(pocket: &Pocket) -> Result<String, RenderError> {
    let color = lookup_color(pocket.color_key())?;
    Ok(format!(
        "{{ data: `{}`.trim(), color: {{ name: 'uniform', value: '{}' }}, label: '{} Pocket' }},\n",
        pocket.content(),
        color.hex,
        color.name
    ))
}
