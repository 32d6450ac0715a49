//! Glyph identifiers carried by catalog entries.
//!
//! Each service references an icon by tag; the tag is resolved to a concrete
//! glyph at render time.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Video,
    Palette,
    Layers,
    Image,
    Share,
    Lightbulb,
    Monitor,
    PenTool,
    FileText,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Video => "\u{1F3AC}",
            Icon::Palette => "\u{1F3A8}",
            Icon::Layers => "\u{1F4DA}",
            Icon::Image => "\u{1F5BC}",
            Icon::Share => "\u{1F4E3}",
            Icon::Lightbulb => "\u{1F4A1}",
            Icon::Monitor => "\u{1F5A5}",
            Icon::PenTool => "\u{270F}",
            Icon::FileText => "\u{1F4C4}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_resolves_to_a_glyph() {
        let icons = [
            Icon::Video,
            Icon::Palette,
            Icon::Layers,
            Icon::Image,
            Icon::Share,
            Icon::Lightbulb,
            Icon::Monitor,
            Icon::PenTool,
            Icon::FileText,
        ];

        for icon in icons {
            assert!(!icon.glyph().is_empty());
        }
    }
}
