use ferris_wheel::host::IconSource;
use ferris_wheel::{IconName, Size};
use freedesktop_icons::lookup;
use gdk_pixbuf::Pixbuf;
use std::path::{Path, PathBuf};

/// Resolves icon names through the freedesktop icon theme, or as file paths.
#[derive(Debug, Clone)]
pub struct PixbufIcons {
    /// Requested theme size; themes pick the closest match.
    pub size: u16,
}

impl Default for PixbufIcons {
    fn default() -> Self {
        Self { size: 32 }
    }
}

impl PixbufIcons {
    pub fn find_icon_path(&self, name: &IconName) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }

        let path = Path::new(name.as_str());
        if path.exists() {
            return Some(path.to_path_buf());
        }

        lookup(name.as_str()).with_size(self.size).with_scale(1).find()
    }

    /// Loads the icon scaled to fit a `side` x `side` box.
    pub fn load(&self, name: &IconName, side: i32) -> Option<Pixbuf> {
        let path = self.find_icon_path(name)?;
        Pixbuf::from_file_at_scale(&path, side, side, true)
            .map_err(|e| log::warn!("Failed to load icon {}: {}", path.display(), e))
            .ok()
    }
}

impl IconSource for PixbufIcons {
    fn natural_size(&self, name: &IconName) -> Option<Size> {
        let path = self.find_icon_path(name)?;
        Pixbuf::file_info(&path).map(|(_, w, h)| Size::new(w as f64, h as f64))
    }
}
