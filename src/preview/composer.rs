use super::binding::{BindRequest, BindTarget, BoundBackground};
use super::image::{ImageHandle, ImagePipelineError, Overlay};
use super::page::{ClockTick, PreviewPage, COVER_SCRIM, ICON_SLOT_COUNT};
use crate::domain::error::PickerError;
use crate::domain::models::{CustomThemeRequest, PreviewInfo, ThemeOption, ThemeOptionId};

/// Inputs shared by every page constructor during one composition.
struct PageContext<'a> {
    option: &'a ThemeOption,
    dark_mode: bool,
    scrim: Option<Overlay>,
    on_edit: Option<CustomThemeRequest>,
}

struct PageRule {
    include: fn(&PreviewInfo) -> bool,
    build: fn(&PageContext<'_>) -> PreviewPage,
}

// Evaluated top to bottom; order here is page order on screen.
const PAGE_RULES: &[PageRule] = &[
    PageRule {
        include: always,
        build: build_cover,
    },
    PageRule {
        include: PreviewInfo::has_font_family,
        build: build_typography,
    },
    PageRule {
        include: has_full_icon_set,
        build: build_icon,
    },
    PageRule {
        include: PreviewInfo::has_both_accents,
        build: build_color,
    },
    PageRule {
        include: has_shape_icons,
        build: build_shape,
    },
];

fn always(_: &PreviewInfo) -> bool {
    true
}

fn has_full_icon_set(info: &PreviewInfo) -> bool {
    info.icons.len() >= ICON_SLOT_COUNT
}

fn has_shape_icons(info: &PreviewInfo) -> bool {
    !info.shape_app_icons.is_empty()
}

fn build_cover(ctx: &PageContext<'_>) -> PreviewPage {
    PreviewPage::cover(
        &ctx.option.title,
        &ctx.option.preview,
        ctx.dark_mode,
        ctx.scrim,
        ctx.on_edit.clone(),
    )
}

fn build_typography(ctx: &PageContext<'_>) -> PreviewPage {
    PreviewPage::typography(&ctx.option.preview, ctx.dark_mode)
}

fn build_icon(ctx: &PageContext<'_>) -> PreviewPage {
    PreviewPage::icon(&ctx.option.preview, ctx.dark_mode)
}

fn build_color(ctx: &PageContext<'_>) -> PreviewPage {
    PreviewPage::color(&ctx.option.preview, ctx.dark_mode)
}

fn build_shape(ctx: &PageContext<'_>) -> PreviewPage {
    PreviewPage::shape(&ctx.option.preview, ctx.dark_mode)
}

/// Pages composed for one selected option.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPageSet {
    pub generation: u64,
    pub option_id: ThemeOptionId,
    pub title: String,
    pub pages: Vec<PreviewPage>,
}

impl PreviewPageSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn page(&self, index: usize) -> Option<&PreviewPage> {
        self.pages.get(index)
    }
}

/// Builds and owns the preview pages of the selected option.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewComposer {
    dark_mode: bool,
    generation: u64,
    current: Option<PreviewPageSet>,
    wallpaper: Option<ImageHandle>,
    surface: Option<(u32, u32)>,
    last_tick: Option<ClockTick>,
}

impl PreviewComposer {
    #[must_use]
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            generation: 0,
            current: None,
            wallpaper: None,
            surface: None,
            last_tick: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&PreviewPageSet> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn wallpaper(&self) -> Option<&ImageHandle> {
        self.wallpaper.as_ref()
    }

    /// Replaces the page set with a fresh one for `option`. Pages of the
    /// previous set are dropped along with any claim on pending completions.
    pub fn compose(
        &mut self,
        option: &ThemeOption,
        wallpaper_asset: Option<ImageHandle>,
        on_edit: Option<CustomThemeRequest>,
    ) -> &PreviewPageSet {
        self.generation += 1;
        if wallpaper_asset.is_some() {
            self.wallpaper = wallpaper_asset;
        }

        let ctx = PageContext {
            option,
            dark_mode: self.dark_mode,
            scrim: option.is_custom().then_some(COVER_SCRIM),
            on_edit,
        };
        let mut pages: Vec<PreviewPage> = PAGE_RULES
            .iter()
            .filter(|rule| (rule.include)(&option.preview))
            .map(|rule| (rule.build)(&ctx))
            .collect();
        for page in &mut pages {
            page.bind(false);
            if let Some(tick) = &self.last_tick {
                page.update_time(tick);
            }
        }

        tracing::debug!(
            generation = self.generation,
            id = %option.id,
            pages = pages.len(),
            "composed preview pages"
        );
        self.current.insert(PreviewPageSet {
            generation: self.generation,
            option_id: option.id.clone(),
            title: option.title.clone(),
            pages,
        })
    }

    pub fn set_wallpaper_asset(&mut self, handle: ImageHandle) {
        self.wallpaper = Some(handle);
    }

    /// Layout pass of the preview surface.
    pub fn on_surface_resized(&mut self, width: u32, height: u32) -> Vec<BindRequest> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        self.surface = Some((width, height));
        let handle = self.wallpaper.clone();
        self.for_wallpaper_pages(|page, target| {
            page.binding_mut()
                .and_then(|b| b.on_resize(width, height, handle.as_ref(), target))
        })
    }

    /// Lays out a freshly composed set at the last known surface size.
    pub fn replay_layout(&mut self) -> Vec<BindRequest> {
        match self.surface {
            Some((w, h)) => {
                let handle = self.wallpaper.clone();
                self.for_wallpaper_pages(|page, target| {
                    page.binding_mut()
                        .and_then(|b| b.on_resize(w, h, handle.as_ref(), target))
                })
            }
            None => Vec::new(),
        }
    }

    /// Forces a rebind of every wallpaper-dependent page.
    pub fn rebind_wallpaper_if_available(&mut self) -> Vec<BindRequest> {
        let Some(handle) = self.wallpaper.clone() else {
            return Vec::new();
        };
        self.for_wallpaper_pages(|page, target| {
            page.binding_mut()
                .and_then(|b| b.rebind(Some(&handle), target))
        })
    }

    fn for_wallpaper_pages(
        &mut self,
        mut f: impl FnMut(&mut PreviewPage, BindTarget) -> Option<BindRequest>,
    ) -> Vec<BindRequest> {
        let Some(set) = self.current.as_mut() else {
            return Vec::new();
        };
        let target = BindTarget::Cover {
            generation: set.generation,
        };
        set.pages
            .iter_mut()
            .filter(|page| page.has_wallpaper_dependency())
            .filter_map(|page| f(page, target))
            .collect()
    }

    /// Delivers an image pipeline completion. Returns whether it was applied.
    pub fn accept_background(
        &mut self,
        generation: u64,
        token: u64,
        result: Result<BoundBackground, ImagePipelineError>,
    ) -> bool {
        let Some(set) = self.current.as_mut().filter(|s| s.generation == generation) else {
            tracing::debug!(generation, "dropping background for discarded page set");
            return false;
        };
        let background = match result {
            Ok(background) => background,
            Err(e) => {
                // Page keeps its placeholder
                let err = PickerError::from(e);
                tracing::warn!(id = %set.option_id, error = %err, "wallpaper preview failed");
                return false;
            }
        };
        let mut applied = false;
        for page in set.pages.iter_mut().filter(|p| p.has_wallpaper_dependency()) {
            if let Some(binding) = page.binding_mut() {
                if binding.accept(token, background.clone()) {
                    page.bind(true);
                    applied = true;
                }
            }
        }
        applied
    }

    pub fn broadcast_time_update(&mut self, tick: &ClockTick) {
        self.last_tick = Some(*tick);
        if let Some(set) = self.current.as_mut() {
            for page in set.pages.iter_mut().filter(|p| p.is_time_sensitive()) {
                page.update_time(tick);
            }
        }
    }
}
