use cairo::{Context, FontSlant, FontWeight, Format, ImageSurface};
use ferris_wheel::host::TextMeasure;
use ferris_wheel::{FontSpec, Size};

/// Measures labels with cairo's toy text API on a scratch surface. Unknown
/// families fall back to cairo's default face.
pub struct CairoTextMeasure {
    cr: Context,
}

impl CairoTextMeasure {
    pub fn new() -> Result<Self, cairo::Error> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)?;
        Ok(Self {
            cr: Context::new(&surface)?,
        })
    }
}

pub fn select_font(cr: &Context, font: &FontSpec) {
    let weight = if font.bold {
        FontWeight::Bold
    } else {
        FontWeight::Normal
    };
    cr.select_font_face(font.family.as_str(), FontSlant::Normal, weight);
    cr.set_font_size(font.size);
}

impl TextMeasure for CairoTextMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        select_font(&self.cr, font);
        match self.cr.text_extents(text) {
            Ok(ext) => Size::new(ext.width(), ext.height()),
            Err(e) => {
                log::warn!("Failed to measure '{}': {}", text, e);
                Size::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longer_labels_measure_wider() {
        let measure = CairoTextMeasure::new().unwrap();
        let font = FontSpec::default();
        let short = measure.measure("ab", &font);
        let long = measure.measure("abcdefgh", &font);
        assert!(long.width > short.width);
    }

    #[test]
    fn test_missing_family_still_measures() {
        let measure = CairoTextMeasure::new().unwrap();
        let font = FontSpec::new("No Such Family 1234", 14.0);
        assert!(measure.measure("foo", &font).width > 0.0);
    }
}
