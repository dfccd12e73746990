use crate::app::action::Action;
use ratatui::layout::Rect;

/// Pixel sizes of the wallpaper surfaces, as measured by the last draw.
///
/// A terminal cell holds two vertically stacked pixels (half blocks), so a
/// `w x h` cell area is a `w x 2h` pixel surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutState {
    pub preview: Option<(u32, u32)>,
    pub full_preview: Option<(u32, u32)>,
    // Inner area of the option list, for mouse hits
    pub options_area: Option<Rect>,
    pub options_offset: usize,
    reported_preview: Option<(u32, u32)>,
    reported_full_preview: Option<(u32, u32)>,
}

impl LayoutState {
    pub fn cells_to_pixels(width: u16, height: u16) -> (u32, u32) {
        (u32::from(width), u32::from(height) * 2)
    }

    /// Index of the list row under `(column, row)`.
    pub fn option_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.options_area?;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        inside.then(|| self.options_offset + usize::from(row - area.y))
    }

    /// Resize actions for surfaces whose size changed since the last call.
    pub fn take_resizes(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.preview != self.reported_preview {
            self.reported_preview = self.preview;
            if let Some((w, h)) = self.preview {
                actions.push(Action::PreviewResized(w, h));
            }
        }
        if self.full_preview != self.reported_full_preview {
            self.reported_full_preview = self.full_preview;
            if let Some((w, h)) = self.full_preview {
                actions.push(Action::FullPreviewResized(w, h));
            }
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resizes_reported_once_per_change() {
        let mut layout = LayoutState {
            preview: Some((40, 20)),
            ..Default::default()
        };
        assert_eq!(layout.take_resizes(), vec![Action::PreviewResized(40, 20)]);
        assert!(layout.take_resizes().is_empty());

        layout.preview = Some((50, 20));
        layout.full_preview = Some((80, 48));
        assert_eq!(
            layout.take_resizes(),
            vec![
                Action::PreviewResized(50, 20),
                Action::FullPreviewResized(80, 48)
            ]
        );
    }

    #[test]
    fn test_closing_full_preview_forgets_its_size() {
        let mut layout = LayoutState {
            full_preview: Some((80, 48)),
            ..Default::default()
        };
        layout.take_resizes();
        layout.full_preview = None;
        assert!(layout.take_resizes().is_empty());
        // Reopening at the same size reports again
        layout.full_preview = Some((80, 48));
        assert_eq!(layout.take_resizes(), vec![Action::FullPreviewResized(80, 48)]);
    }
}
