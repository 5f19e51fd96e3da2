//! Transient notifications shown in the top-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use metnum_orchestration::NotificationLevel;

use crate::styles::ColorTheme;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// At most this many toasts are visible; older ones are dropped.
pub const MAX_TOASTS: usize = 3;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: NotificationLevel,
    pub message: String,
    created: Instant,
}

impl Toast {
    fn title(&self) -> &'static str {
        match self.level {
            NotificationLevel::Info => " Info ",
            NotificationLevel::Success => " Listo ",
            NotificationLevel::Warning => " Aviso ",
            NotificationLevel::Error => " Error ",
        }
    }
}

/// Queue of live toasts, newest last.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    fn push_at(&mut self, level: NotificationLevel, message: impl Into<String>, now: Instant) {
        self.toasts.push_back(Toast {
            level,
            message: message.into(),
            created: now,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// Drop toasts older than [`TOAST_TTL`].
    pub fn expire(&mut self, now: Instant) {
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created) < TOAST_TTL);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Stack the toasts downward from the top-right corner of `area`.
pub fn render_toasts(frame: &mut Frame, area: Rect, queue: &ToastQueue, theme: &ColorTheme) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width);

    for (i, toast) in queue.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let y = area.y + 1 + (i as u16) * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect {
            x,
            y,
            width,
            height: TOAST_HEIGHT,
        };
        let style = theme.notification_style(toast.level);
        let paragraph = Paragraph::new(Line::styled(toast.message.as_str(), style))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(toast.title())
                    .border_style(style),
            );
        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
    }
}
