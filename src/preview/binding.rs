use super::image::{
    center_crop, compose_layers, decode_for_size, derive_contrast_hint, ContrastHint, ImageHandle,
    ImagePipelineError, Overlay, RenderableImage,
};
use crate::domain::models::ColorInt;

/// How a bound background is layered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerSpec {
    pub translucency: Option<u8>,
    pub scrim: Option<Overlay>,
}

impl LayerSpec {
    pub const OPAQUE: Self = Self {
        translucency: None,
        scrim: None,
    };

    /// Contrast only matters when the image is shown as-is.
    #[must_use]
    pub fn wants_contrast_hint(&self) -> bool {
        self.translucency.is_none() && self.scrim.is_none()
    }
}

/// Which surface a background belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindTarget {
    /// Cover page of the page set stamped with `generation`.
    Cover { generation: u64 },
    /// Full preview opened as session `session`.
    FullPreview { session: u64 },
}

/// One unit of work for the image pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct BindRequest {
    pub target: BindTarget,
    pub token: u64,
    pub handle: ImageHandle,
    pub width: u32,
    pub height: u32,
    pub layers: LayerSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundBackground {
    pub image: RenderableImage,
    pub contrast: Option<ContrastHint>,
}

/// Header text and icon tint chosen from a background's contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderTint {
    pub text: ColorInt,
    pub icon: ColorInt,
}

impl HeaderTint {
    #[must_use]
    pub fn from_contrast(hint: ContrastHint, accent_light: ColorInt) -> Self {
        if hint.supports_dark_text {
            Self {
                text: ColorInt::TEXT_DARK,
                icon: accent_light,
            }
        } else {
            Self {
                text: ColorInt::TEXT_LIGHT,
                icon: ColorInt::TEXT_LIGHT,
            }
        }
    }
}

/// Association between a preview surface and the wallpaper drawn behind it.
///
/// Every distinct non-empty size (or a forced rebind) issues a new token;
/// only the completion carrying the latest token is ever accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperPreviewBinding {
    layers: LayerSpec,
    size: Option<(u32, u32)>,
    issued: u64,
    background: Option<BoundBackground>,
}

impl WallpaperPreviewBinding {
    #[must_use]
    pub fn new(layers: LayerSpec) -> Self {
        Self {
            layers,
            size: None,
            issued: 0,
            background: None,
        }
    }

    #[must_use]
    pub fn layers(&self) -> LayerSpec {
        self.layers
    }

    #[must_use]
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    #[must_use]
    pub fn background(&self) -> Option<&BoundBackground> {
        self.background.as_ref()
    }

    /// Records a layout pass. Returns a request only for a new, non-empty size
    /// with a wallpaper available.
    pub fn on_resize(
        &mut self,
        width: u32,
        height: u32,
        handle: Option<&ImageHandle>,
        target: BindTarget,
    ) -> Option<BindRequest> {
        if width == 0 || height == 0 || self.size == Some((width, height)) {
            return None;
        }
        self.size = Some((width, height));
        self.issue(handle, target)
    }

    /// Re-runs the binding at the last known size.
    pub fn rebind(&mut self, handle: Option<&ImageHandle>, target: BindTarget) -> Option<BindRequest> {
        self.size?;
        self.issue(handle, target)
    }

    fn issue(&mut self, handle: Option<&ImageHandle>, target: BindTarget) -> Option<BindRequest> {
        let handle = handle?;
        let (width, height) = self.size?;
        self.issued += 1;
        Some(BindRequest {
            target,
            token: self.issued,
            handle: handle.clone(),
            width,
            height,
            layers: self.layers,
        })
    }

    /// Stores `background` if `token` is the latest one issued.
    pub fn accept(&mut self, token: u64, background: BoundBackground) -> bool {
        if token != self.issued {
            tracing::debug!(token, latest = self.issued, "dropping superseded wallpaper binding");
            return false;
        }
        self.background = Some(background);
        true
    }
}

/// Decode, crop, layer and (for opaque layers) analyze one request.
pub async fn run_bind(request: &BindRequest) -> Result<BoundBackground, ImagePipelineError> {
    let decoded = decode_for_size(&request.handle, request.width, request.height).await?;
    let cropped = center_crop(decoded, request.width, request.height).await?;
    let contrast = if request.layers.wants_contrast_hint() {
        let bitmap = cropped.clone();
        let hint = tokio::task::spawn_blocking(move || derive_contrast_hint(&bitmap))
            .await
            .map_err(|e| ImagePipelineError::Task(e.to_string()))?;
        Some(hint)
    } else {
        None
    };
    let image = compose_layers(cropped, request.layers.scrim, request.layers.translucency);
    Ok(BoundBackground { image, contrast })
}
