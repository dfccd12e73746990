//! Wallpaper decode, crop, layering and contrast analysis.
//!
//! CPU-heavy steps run on the blocking pool so the UI task never waits on
//! them; callers get futures back and deliver the result to the page that
//! asked for it.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use image::{imageops::FilterType, DynamicImage, GenericImageView, RgbaImage};
use thiserror::Error;

use crate::domain::models::ColorInt;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImagePipelineError {
    #[error("target size {width}x{height} is empty")]
    EmptyTarget { width: u32, height: u32 },
    #[error("failed to decode {source_name}: {message}")]
    Decode { source_name: String, message: String },
    #[error("image task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, ImagePipelineError>;

#[derive(Debug)]
enum ImageSource {
    File(PathBuf),
    Memory(Arc<DynamicImage>),
}

impl ImageSource {
    fn name(&self) -> String {
        match self {
            ImageSource::File(path) => path.display().to_string(),
            ImageSource::Memory(_) => "<memory>".to_string(),
        }
    }
}

struct HandleInner {
    source: ImageSource,
    // Decoded once, shared by every decode for this handle
    cache: Mutex<Option<Arc<DynamicImage>>>,
}

/// Shared, read-only reference to a wallpaper image.
///
/// Cloning is cheap and clones share the decoded-bitmap cache.
#[derive(Clone)]
pub struct ImageHandle {
    inner: Arc<HandleInner>,
}

impl ImageHandle {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::with_source(ImageSource::File(path.into()))
    }

    #[must_use]
    pub fn in_memory(image: DynamicImage) -> Self {
        Self::with_source(ImageSource::Memory(Arc::new(image)))
    }

    fn with_source(source: ImageSource) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                source,
                cache: Mutex::new(None),
            }),
        }
    }

    #[must_use]
    pub fn source_name(&self) -> String {
        self.inner.source.name()
    }

    fn load(&self) -> Result<Arc<DynamicImage>> {
        let mut cache = self
            .inner
            .cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(image) = cache.as_ref() {
            return Ok(Arc::clone(image));
        }
        let image = match &self.inner.source {
            ImageSource::File(path) => {
                Arc::new(image::open(path).map_err(|e| ImagePipelineError::Decode {
                    source_name: self.source_name(),
                    message: e.to_string(),
                })?)
            }
            ImageSource::Memory(image) => Arc::clone(image),
        };
        *cache = Some(Arc::clone(&image));
        Ok(image)
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImageHandle").field(&self.inner.source).finish()
    }
}

/// Decoded pixels in whatever storage the decoder produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBitmap(pub DynamicImage);

impl RawBitmap {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// 8-bit RGBA view, if the pixels are already stored that way.
    #[must_use]
    pub fn as_analyzable(&self) -> Option<&RgbaImage> {
        self.0.as_rgba8()
    }
}

/// Semi-opaque layer drawn over a background for legibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub color: ColorInt,
    pub alpha: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastHint {
    pub supports_dark_text: bool,
}

/// Background ready to draw: base bitmap, its opacity and an optional scrim.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableImage {
    pub bitmap: Arc<RawBitmap>,
    pub alpha: u8,
    pub scrim: Option<Overlay>,
}

impl RenderableImage {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// Final color of pixel `(x, y)` drawn over `backdrop`.
    #[must_use]
    pub fn sample(&self, x: u32, y: u32, backdrop: ColorInt) -> ColorInt {
        let (w, h) = (self.width(), self.height());
        if w == 0 || h == 0 {
            return backdrop;
        }
        let px = self.bitmap.0.get_pixel(x.min(w - 1), y.min(h - 1));
        let alpha = u16::from(px[3]) * u16::from(self.alpha) / 255;
        let mut color = blend(backdrop, ColorInt::rgb(px[0], px[1], px[2]), alpha as u8);
        if let Some(scrim) = self.scrim {
            color = blend(color, scrim.color, scrim.alpha);
        }
        color
    }
}

fn blend(below: ColorInt, above: ColorInt, alpha: u8) -> ColorInt {
    let mix = |b: u8, a: u8| -> u8 {
        let a16 = u16::from(alpha);
        ((u16::from(a) * a16 + u16::from(b) * (255 - a16)) / 255) as u8
    };
    ColorInt::rgb(
        mix(below.red(), above.red()),
        mix(below.green(), above.green()),
        mix(below.blue(), above.blue()),
    )
}

/// Decodes `handle` at a resolution that still covers `width` x `height`.
pub async fn decode_for_size(handle: &ImageHandle, width: u32, height: u32) -> Result<RawBitmap> {
    if width == 0 || height == 0 {
        return Err(ImagePipelineError::EmptyTarget { width, height });
    }
    let handle = handle.clone();
    tokio::task::spawn_blocking(move || -> Result<RawBitmap> {
        let source = handle.load()?;
        Ok(RawBitmap(scale_to_cover(&source, width, height)))
    })
    .await
    .map_err(|e| ImagePipelineError::Task(e.to_string()))?
}

fn scale_to_cover(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (iw, ih) = image.dimensions();
    if iw == 0 || ih == 0 {
        return image.clone();
    }
    let scale = (width as f32 / iw as f32).max(height as f32 / ih as f32);
    if scale >= 1.0 {
        return image.clone();
    }
    let new_w = ((iw as f32 * scale).ceil() as u32).max(width);
    let new_h = ((ih as f32 * scale).ceil() as u32).max(height);
    image.resize_exact(new_w, new_h, FilterType::Triangle)
}

/// Crops `bitmap` to the target aspect around its center and scales it to
/// exactly `target_width` x `target_height`.
pub async fn center_crop(bitmap: RawBitmap, target_width: u32, target_height: u32) -> Result<RawBitmap> {
    if target_width == 0 || target_height == 0 {
        return Err(ImagePipelineError::EmptyTarget {
            width: target_width,
            height: target_height,
        });
    }
    tokio::task::spawn_blocking(move || -> Result<RawBitmap> {
        Ok(RawBitmap(crop_to_fill(&bitmap.0, target_width, target_height)))
    })
    .await
    .map_err(|e| ImagePipelineError::Task(e.to_string()))?
}

fn crop_to_fill(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (iw, ih) = image.dimensions();
    if iw == 0 || ih == 0 {
        return image.clone();
    }
    let scale = (width as f32 / iw as f32).max(height as f32 / ih as f32);
    let src_w = ((width as f32 / scale).round() as u32).clamp(1, iw);
    let src_h = ((height as f32 / scale).round() as u32).clamp(1, ih);
    let x = (iw - src_w) / 2;
    let y = (ih - src_h) / 2;
    image
        .crop_imm(x, y, src_w, src_h)
        .resize_exact(width, height, FilterType::Triangle)
}

/// Wraps `base` with optional translucency and a scrim layer on top.
#[must_use]
pub fn compose_layers(
    base: RawBitmap,
    scrim: Option<Overlay>,
    translucency_alpha: Option<u8>,
) -> RenderableImage {
    RenderableImage {
        bitmap: Arc::new(base),
        alpha: translucency_alpha.unwrap_or(u8::MAX),
        scrim,
    }
}

const MAX_EXTRACTION_AREA: u32 = 112 * 112;
const BRIGHT_IMAGE_MEAN_LUMINANCE: f32 = 0.75;
const DARK_PIXEL_CONTRAST: f32 = 6.0;
const MAX_DARK_AREA: f32 = 0.05;

/// Whether dark text stays legible on top of `bitmap`.
///
/// Storage the analyzer cannot read in place is copied to 8-bit RGBA first;
/// the copy lives only for the duration of this call.
#[must_use]
pub fn derive_contrast_hint(bitmap: &RawBitmap) -> ContrastHint {
    if let Some(pixels) = bitmap.as_analyzable() {
        return analyze(pixels);
    }
    let copy = bitmap.0.to_rgba8();
    let hint = analyze(&copy);
    drop(copy);
    hint
}

fn analyze(pixels: &RgbaImage) -> ContrastHint {
    let (w, h) = pixels.dimensions();
    let area = w.saturating_mul(h);
    if area == 0 {
        return ContrastHint {
            supports_dark_text: false,
        };
    }
    let step = ((area as f32 / MAX_EXTRACTION_AREA as f32).sqrt().floor() as u32).max(1);

    let mut total_luminance = 0.0f32;
    let mut dark_pixels = 0u32;
    let mut sampled = 0u32;
    for y in (0..h).step_by(step as usize) {
        for x in (0..w).step_by(step as usize) {
            let px = pixels.get_pixel(x, y);
            if px[3] == 0 {
                continue;
            }
            let luminance = relative_luminance(px[0], px[1], px[2]);
            // Contrast of black text against this pixel
            if (luminance + 0.05) / 0.05 < DARK_PIXEL_CONTRAST {
                dark_pixels += 1;
            }
            total_luminance += luminance;
            sampled += 1;
        }
    }
    if sampled == 0 {
        return ContrastHint {
            supports_dark_text: false,
        };
    }

    let mean = total_luminance / sampled as f32;
    ContrastHint {
        supports_dark_text: mean > BRIGHT_IMAGE_MEAN_LUMINANCE
            && (dark_pixels as f32) < sampled as f32 * MAX_DARK_AREA,
    }
}

fn relative_luminance(r: u8, g: u8, b: u8) -> f32 {
    let linear = |c: u8| {
        let c = f32::from(c) / 255.0;
        if c <= 0.039_28 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}
