use crate::icon::PixbufIcons;
use crate::measure::select_font;
use crate::scene::Scene;
use cairo::Context;
use ferris_wheel::{ButtonDescriptor, Point, Transform};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::PI;

pub struct Theme {
    pub wheel: Srgba<f64>,
    pub rim: Srgba<f64>,
    pub rim_width: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            wheel: Srgba::new(1.0, 1.0, 0.0, 1.0),
            rim: Srgba::new(0.15, 0.15, 0.15, 0.5),
            rim_width: 1.0,
        }
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct ButtonRenderer<'a> {
    button: &'a ButtonDescriptor,
    /// Button centre after the wheel transform.
    center: Point,
    scale: f64,
    /// Net on-screen rotation of the button's content.
    rotation: f64,
}

impl<'a> ButtonRenderer<'a> {
    /// `local_center` is the wheel centre in the button's coordinates,
    /// `origin` where that centre lands on the surface.
    fn new(
        button: &'a ButtonDescriptor,
        local_center: Point,
        origin: Point,
        wheel: &Transform,
    ) -> Self {
        let offset = wheel.apply(Point::new(
            button.center.x - local_center.x,
            button.center.y - local_center.y,
        ));
        Self {
            button,
            center: Point::new(origin.x + offset.x, origin.y + offset.y),
            scale: wheel.scale_factor(),
            rotation: button
                .container_transform
                .then(wheel)
                .rotated(button.button_transform.rotation_angle())
                .rotation_angle(),
        }
    }

    fn draw(&self, cr: &Context, icons: &PixbufIcons) -> Result<(), cairo::Error> {
        self.draw_circle(cr)?;

        cr.save()?;
        cr.translate(self.center.x, self.center.y);
        cr.rotate(self.rotation);
        cr.scale(self.scale, self.scale);
        let pixbuf = self
            .button
            .item
            .icon
            .as_ref()
            .and_then(|name| icons.load(name, self.button.diameter.round() as i32));
        let result = if let Some(pixbuf) = &pixbuf {
            self.draw_icon(cr, pixbuf)
        } else if let Some(label) = &self.button.item.label {
            self.draw_text(cr, label)
        } else {
            Ok(())
        };
        cr.restore()?;
        result
    }

    fn draw_circle(&self, cr: &Context) -> Result<(), cairo::Error> {
        set_source(cr, self.button.style.background);
        cr.arc(
            self.center.x,
            self.center.y,
            self.button.radius() * self.scale,
            0.0,
            2.0 * PI,
        );
        cr.fill()
    }

    fn draw_icon(&self, cr: &Context, pixbuf: &Pixbuf) -> Result<(), cairo::Error> {
        let (iw, ih) = (pixbuf.width() as f64, pixbuf.height() as f64);
        cr.set_source_pixbuf(pixbuf, -iw / 2.0, -ih / 2.0);
        cr.paint()
    }

    fn draw_text(&self, cr: &Context, text: &str) -> Result<(), cairo::Error> {
        set_source(cr, self.button.style.text);
        let font = self.button.item.font.clone().unwrap_or_default();
        select_font(cr, &font);
        let ext = cr.text_extents(text)?;
        cr.move_to(
            -ext.width() / 2.0 - ext.x_bearing(),
            -ext.height() / 2.0 - ext.y_bearing(),
        );
        cr.show_text(text)
    }
}

/// Paints the scene's current frame with the wheel centred at `center`.
pub fn draw(
    cr: &Context,
    scene: &Scene,
    theme: &Theme,
    icons: &PixbufIcons,
    center: Point,
    diameter: f64,
) -> Result<(), cairo::Error> {
    if scene.alpha <= 0.0 {
        return Ok(());
    }

    let local_center = Point::new(diameter / 2.0, diameter / 2.0);

    cr.push_group();
    draw_wheel(cr, scene, theme, center, diameter)?;
    for button in &scene.buttons {
        ButtonRenderer::new(button, local_center, center, &scene.wheel_transform)
            .draw(cr, icons)?;
    }
    cr.pop_group_to_source()?;
    cr.paint_with_alpha(scene.alpha)
}

fn draw_wheel(
    cr: &Context,
    scene: &Scene,
    theme: &Theme,
    center: Point,
    diameter: f64,
) -> Result<(), cairo::Error> {
    let radius = diameter / 2.0 * scene.wheel_transform.scale_factor();
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    set_source(cr, theme.wheel);
    cr.fill_preserve()?;
    set_source(cr, theme.rim);
    cr.set_line_width(theme.rim_width);
    cr.stroke()
}
