use crate::domain::models::ColorInt;
use crate::preview::binding::{BindTarget, HeaderTint, LayerSpec, WallpaperPreviewBinding};
use crate::preview::image::ImageHandle;

/// Full-screen preview of the selected option, drawn over the opaque
/// wallpaper with a header tinted from the image's contrast.
#[derive(Debug, Clone, PartialEq)]
pub struct FullPreviewState {
    pub session: u64,
    pub title: String,
    pub serialized: String,
    pub wallpaper: Option<ImageHandle>,
    pub accent: ColorInt,
    pub accent_light: ColorInt,
    pub binding: WallpaperPreviewBinding,
    pub header: HeaderTint,
}

impl FullPreviewState {
    pub fn new(
        session: u64,
        title: String,
        serialized: String,
        wallpaper: Option<ImageHandle>,
        accent: ColorInt,
        accent_light: ColorInt,
    ) -> Self {
        Self {
            session,
            title,
            serialized,
            wallpaper,
            accent,
            accent_light,
            binding: WallpaperPreviewBinding::new(LayerSpec::OPAQUE),
            header: HeaderTint {
                text: ColorInt::TEXT_LIGHT,
                icon: ColorInt::TEXT_LIGHT,
            },
        }
    }

    pub fn target(&self) -> BindTarget {
        BindTarget::FullPreview {
            session: self.session,
        }
    }

    /// Refreshes the header once the background has been bound.
    pub fn refresh_header(&mut self) {
        if let Some(hint) = self.binding.background().and_then(|bg| bg.contrast) {
            self.header = HeaderTint::from_contrast(hint, self.accent_light);
        }
    }
}
