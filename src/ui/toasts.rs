//! Terminal toast renderer.
//!
//! Draws live toasts anchored at the top-right of the frame. Slide state
//! maps to viewport membership: off-screen toasts are held but not drawn,
//! the terminal analogue of being translated past the screen edge.

use parking_lot::Mutex;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::notify::{Notification, Renderer, Slide, ToastId};
use crate::ui::theme::{Theme, TOAST_TEXT};

/// Toast width in cells, borders included.
const TOAST_WIDTH: u16 = 36;
/// Gap between the toast and the frame edges.
const MARGIN: u16 = 2;
/// Cap on how tall a wrapped message may grow.
const MAX_CONTENT_ROWS: u16 = 6;

struct ActiveToast {
    id: ToastId,
    notification: Notification,
    slide: Slide,
}

/// [`Renderer`] implementation backed by a ratatui frame.
///
/// All toasts share one anchor; when several are on screen at once, later
/// insertions draw over earlier ones.
pub struct TermRenderer {
    theme: Mutex<Theme>,
    toasts: Mutex<Vec<ActiveToast>>,
}

impl TermRenderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: Mutex::new(theme),
            toasts: Mutex::new(Vec::new()),
        }
    }

    /// Swaps the color palette; applies to the next draw.
    pub fn set_theme(&self, theme: Theme) {
        *self.theme.lock() = theme;
    }

    /// Draws every on-screen toast inside `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let theme = *self.theme.lock();
        let toasts = self.toasts.lock();

        for toast in toasts.iter() {
            if toast.slide != Slide::OnScreen {
                continue;
            }

            let rect = anchor_rect(area, toast.notification.message());
            if rect.width < 3 || rect.height < 3 {
                continue;
            }

            let color = theme.color_for(toast.notification.kind());
            let style = Style::default()
                .fg(TOAST_TEXT)
                .bg(color)
                .add_modifier(Modifier::BOLD);

            let paragraph = Paragraph::new(toast.notification.message().to_string())
                .style(style)
                .alignment(Alignment::Left)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(style),
                );

            frame.render_widget(Clear, rect);
            frame.render_widget(paragraph, rect);
        }
    }
}

/// Anchor rect at the top-right, sized to the wrapped message.
fn anchor_rect(area: Rect, message: &str) -> Rect {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(MARGIN));
    let inner_width = width.saturating_sub(2).max(1) as usize;
    let rows = message
        .chars()
        .count()
        .div_ceil(inner_width)
        .clamp(1, MAX_CONTENT_ROWS as usize) as u16;
    let height = rows + 2;

    Rect {
        x: area.x + area.width.saturating_sub(width + MARGIN),
        y: area.y + 1,
        width,
        height: height.min(area.height),
    }
}

impl Renderer for TermRenderer {
    fn insert(&self, notification: Notification) -> ToastId {
        let id = ToastId::next();
        self.toasts.lock().push(ActiveToast {
            id,
            notification,
            slide: Slide::OffScreen,
        });
        id
    }

    fn slide(&self, id: ToastId, to: Slide) {
        if let Some(toast) = self.toasts.lock().iter_mut().find(|t| t.id == id) {
            toast.slide = to;
        }
    }

    fn contains(&self, id: ToastId) -> bool {
        self.toasts.lock().iter().any(|t| t.id == id)
    }

    fn remove(&self, id: ToastId) {
        self.toasts.lock().retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Kind;

    #[test]
    fn insert_starts_off_screen() {
        let renderer = TermRenderer::new(Theme::default());
        let id = renderer.insert(Notification::new("hi", Kind::Info));

        assert!(renderer.contains(id));
        assert_eq!(renderer.toasts.lock()[0].slide, Slide::OffScreen);
    }

    #[test]
    fn slide_updates_state() {
        let renderer = TermRenderer::new(Theme::default());
        let id = renderer.insert(Notification::new("hi", Kind::Info));

        renderer.slide(id, Slide::OnScreen);
        assert_eq!(renderer.toasts.lock()[0].slide, Slide::OnScreen);
    }

    #[test]
    fn remove_tolerates_missing_ids() {
        let renderer = TermRenderer::new(Theme::default());
        let id = renderer.insert(Notification::new("hi", Kind::Info));

        renderer.remove(id);
        assert!(!renderer.contains(id));
        // second removal is a no-op
        renderer.remove(id);

        // sliding a gone toast is also a no-op
        renderer.slide(id, Slide::OnScreen);
    }

    #[test]
    fn toasts_are_independent() {
        let renderer = TermRenderer::new(Theme::default());
        let a = renderer.insert(Notification::new("a", Kind::Success));
        let b = renderer.insert(Notification::new("b", Kind::Error));

        renderer.remove(a);
        assert!(!renderer.contains(a));
        assert!(renderer.contains(b));
    }

    #[test]
    fn anchor_rect_hugs_the_right_edge() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 30,
        };
        let rect = anchor_rect(area, "short");
        assert_eq!(rect.x + rect.width + MARGIN, 100);
        assert_eq!(rect.y, 1);
        assert_eq!(rect.height, 3);
    }

    #[test]
    fn anchor_rect_grows_for_long_messages() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 30,
        };
        let long = "x".repeat(120);
        let rect = anchor_rect(area, &long);
        assert!(rect.height > 3);
        assert!(rect.height <= MAX_CONTENT_ROWS + 2);
    }
}
