// File: crates/chartie-skia/src/text.rs
// Summary: Text shaper using Skia textlayout, resolving CSS-style font family lists.

use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

use chartie_core::Font;

/// Families tried after the ones a font asks for.
const FALLBACK_FAMILIES: [&str; 5] = ["Segoe UI", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &Font, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size((font.size as f32).max(1.0));
        ts.set_color(color);
        let mut families = font.families();
        for fallback in FALLBACK_FAMILIES {
            if !families.iter().any(|f| f.eq_ignore_ascii_case(fallback)) {
                families.push(fallback.to_string());
            }
        }
        ts.set_font_families(&families);
        ts
    }

    /// Single-line paragraph laid out without wrapping.
    pub fn layout(&self, text: &str, font: &Font, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, font: &Font) -> f32 {
        self.layout(text, font, skia::Color::TRANSPARENT).max_intrinsic_width()
    }
}
