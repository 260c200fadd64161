use crate::error::Result;
use molview::core::models::color::palette;

pub fn run() -> Result<()> {
    println!("{}", format_palette());
    Ok(())
}

fn format_palette() -> String {
    palette()
        .map(|(key, color)| format!("{:<8} {:<8} {}", key, color.name, color.hex))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_lists_every_color_in_order() {
        let listing = format_palette();
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("red"));
        assert!(lines[0].ends_with("0xFF0000"));
        assert!(lines[9].starts_with("brown"));
        assert!(listing.contains("celeste  Celeste  0xb2FFFF"));
    }
}
