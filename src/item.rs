use derive_more::{AsRef, Deref, Display, From, Into};
use palette::Srgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct IconName(String);

crate::string_newtype!(IconName);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct FontFamily(String);

crate::string_newtype!(FontFamily);

pub const DEFAULT_FONT_FAMILY: &str = "Sans";
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size: f64,
    pub bold: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: FontFamily::new(family),
            size,
            bold: false,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE)
    }
}

/// Handler run when a button is tapped. Receives the button index.
#[derive(Clone)]
pub struct Action(Rc<dyn Fn(usize)>);

impl Action {
    pub fn new(f: impl Fn(usize) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn invoke(&self, index: usize) {
        (self.0)(index)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// One slot on the wheel.
#[derive(Debug, Clone, Default)]
pub struct MenuItem {
    pub label: Option<String>,
    pub icon: Option<IconName>,
    pub action: Option<Action>,
    pub font: Option<FontSpec>,
    pub text_color: Option<Srgba<f64>>,
    pub text_highlight_color: Option<Srgba<f64>>,
    pub background_color: Option<Srgba<f64>>,
}

impl MenuItem {
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn iconic(icon: impl Into<String>) -> Self {
        Self {
            icon: Some(IconName::new(icon)),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(IconName::new(icon));
        self
    }

    pub fn with_action(mut self, f: impl Fn(usize) + 'static) -> Self {
        self.action = Some(Action::new(f));
        self
    }

    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_text_color(mut self, color: Srgba<f64>) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_text_highlight_color(mut self, color: Srgba<f64>) -> Self {
        self.text_highlight_color = Some(color);
        self
    }

    pub fn with_background_color(mut self, color: Srgba<f64>) -> Self {
        self.background_color = Some(color);
        self
    }
}

/// Colours a host should paint a button with, after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub text: Srgba<f64>,
    pub text_highlight: Srgba<f64>,
    pub background: Srgba<f64>,
}

impl ButtonStyle {
    pub const DEFAULT_TEXT: Srgba<f64> = Srgba::new(0.0, 0.0, 0.0, 1.0);
    pub const DEFAULT_HIGHLIGHT: Srgba<f64> = Srgba::new(1.0, 0.0, 0.0, 1.0);
    pub const DEFAULT_BACKGROUND: Srgba<f64> = Srgba::new(0.0, 1.0, 0.0, 1.0);
    pub const CLEAR: Srgba<f64> = Srgba::new(0.0, 0.0, 0.0, 0.0);

    /// Icon buttons are drawn on a clear background regardless of the item's colour.
    pub fn resolve(item: &MenuItem, has_icon: bool) -> Self {
        let background = if has_icon {
            Self::CLEAR
        } else {
            item.background_color.unwrap_or(Self::DEFAULT_BACKGROUND)
        };
        Self {
            text: item.text_color.unwrap_or(Self::DEFAULT_TEXT),
            text_highlight: item
                .text_highlight_color
                .unwrap_or(Self::DEFAULT_HIGHLIGHT),
            background,
        }
    }
}
