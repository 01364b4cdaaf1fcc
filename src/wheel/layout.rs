use super::WheelError;
use crate::geometry::{Point, Transform};
use crate::host::{IconSource, TextMeasure};
use crate::item::{ButtonStyle, FontSpec, MenuItem};
use std::f64::consts::TAU;

/// Added to a label's measured width to get the button diameter.
pub const LABEL_PADDING: f64 = 16.0;
/// Diameter for items with neither a label nor a resolvable icon.
pub const MIN_BUTTON_DIAMETER: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Diameter of the wheel itself.
    pub diameter: f64,
    pub start_angle: f64,
    pub equalize: bool,
}

impl LayoutOptions {
    pub fn new(diameter: f64) -> Self {
        Self {
            diameter,
            start_angle: 0.0,
            equalize: true,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.diameter / 2.0, self.diameter / 2.0)
    }
}

#[derive(Debug, Clone)]
pub struct ButtonDescriptor {
    pub index: usize,
    pub diameter: f64,
    pub angle: f64,
    /// Rotation of the per-item container about the wheel centre.
    pub container_transform: Transform,
    /// Live transform of the button inside its container.
    pub button_transform: Transform,
    /// Button centre in wheel-local coordinates, before any wheel rotation.
    pub center: Point,
    pub style: ButtonStyle,
    pub item: MenuItem,
}

impl ButtonDescriptor {
    /// Counter-rotation that keeps the label upright when the wheel is at rest.
    pub fn canonical_transform(&self) -> Transform {
        Transform::rotation(-self.angle)
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

struct Measured {
    diameter: f64,
    has_icon: bool,
}

pub struct LayoutEngine {
    text: Box<dyn TextMeasure>,
    icons: Box<dyn IconSource>,
}

impl LayoutEngine {
    pub fn new(text: impl TextMeasure + 'static, icons: impl IconSource + 'static) -> Self {
        Self {
            text: Box::new(text),
            icons: Box::new(icons),
        }
    }

    pub fn layout(
        &self,
        items: &[MenuItem],
        options: &LayoutOptions,
    ) -> Result<Vec<ButtonDescriptor>, WheelError> {
        if items.is_empty() {
            return Err(WheelError::InvalidArgument(
                "a wheel needs at least one item".into(),
            ));
        }
        if !options.diameter.is_finite() || options.diameter <= 0.0 {
            return Err(WheelError::InvalidArgument(format!(
                "wheel diameter must be positive, got {}",
                options.diameter
            )));
        }

        let measured: Vec<Measured> = items.iter().map(|item| self.measure(item)).collect();

        // every natural size must be known before any button is resized
        let equal_diameter = options.equalize.then(|| {
            let largest = measured
                .iter()
                .map(|m| m.diameter)
                .fold(f64::NEG_INFINITY, f64::max);
            (largest - LABEL_PADDING).max(0.0)
        });

        let theta = TAU / items.len() as f64;
        let center = options.center();

        Ok(items
            .iter()
            .zip(measured)
            .enumerate()
            .map(|(i, (item, m))| {
                let diameter = equal_diameter.unwrap_or(m.diameter);
                let angle = i as f64 * theta + options.start_angle;
                let rotation = Transform::rotation(angle);
                // container spans from the rim to the centre; the button sits at the rim end
                let rim = Point::new(diameter / 2.0 - options.diameter / 2.0, 0.0);
                let offset = rotation.apply(rim);

                ButtonDescriptor {
                    index: i,
                    diameter,
                    angle,
                    container_transform: rotation,
                    button_transform: Transform::rotation(-angle),
                    center: Point::new(center.x + offset.x, center.y + offset.y),
                    style: ButtonStyle::resolve(item, m.has_icon),
                    item: item.clone(),
                }
            })
            .collect())
    }

    fn measure(&self, item: &MenuItem) -> Measured {
        if let Some(name) = &item.icon {
            match self.icons.natural_size(name) {
                Some(size) => {
                    return Measured {
                        diameter: size.max_side(),
                        has_icon: true,
                    };
                }
                None => log::warn!("Icon '{}' not found, using base styling", name),
            }
        }

        let diameter = item
            .label
            .as_deref()
            .map(|label| {
                let font = item.font.clone().unwrap_or_default();
                self.label_diameter(label, &font)
            })
            .unwrap_or(MIN_BUTTON_DIAMETER);

        Measured {
            diameter,
            has_icon: false,
        }
    }

    fn label_diameter(&self, label: &str, font: &FontSpec) -> f64 {
        self.text.measure(label, font).width + LABEL_PADDING
    }
}
