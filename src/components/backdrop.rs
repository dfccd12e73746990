use crate::domain::models::ColorInt;
use crate::preview::image::RenderableImage;
use crate::style::to_color;

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

const UPPER_HALF: &str = "▀";

/// Draws an image with half blocks: each cell shows two stacked pixels.
///
/// The image is normally bound at exactly `width x 2*height` pixels; while a
/// rebind for a new size is in flight it is stretched to fit.
pub struct Backdrop<'a> {
    pub image: Option<&'a RenderableImage>,
    pub base: ColorInt,
}

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(image) = self.image else {
            let style = Style::default().bg(to_color(self.base));
            buf.set_style(area, style);
            return;
        };
        if image.width() == 0 || image.height() == 0 || area.width == 0 || area.height == 0 {
            return;
        }

        let px_w = u32::from(area.width);
        let px_h = u32::from(area.height) * 2;
        let scale_x = |x: u32| x * image.width() / px_w;
        let scale_y = |y: u32| y * image.height() / px_h;

        for row in 0..area.height {
            for col in 0..area.width {
                let x = scale_x(u32::from(col));
                let top = image.sample(x, scale_y(u32::from(row) * 2), self.base);
                let bottom = image.sample(x, scale_y(u32::from(row) * 2 + 1), self.base);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(UPPER_HALF)
                        .set_fg(to_color(top))
                        .set_bg(to_color(bottom));
                }
            }
        }
    }
}
