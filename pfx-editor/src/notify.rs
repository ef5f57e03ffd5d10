//! Toast notifications drawn over the editor.
//!
//! Toasts stack down from the top-right corner in arrival order. Each one
//! stays fully opaque until the last [`FADE`] of its lifetime, then fades
//! out and is dropped.

use std::time::{Duration, Instant};

use glam::Vec2;
use pfx::canvas::{rgb, Canvas, Rgba};
use pfx::font;
use pfx::Rect;
use tracing::{error, info, warn};

/// Toast size in pixels.
pub const WIDTH: f32 = 250.0;
pub const HEIGHT: f32 = 65.0;

/// Gap between stacked toasts.
const MARGIN_Y: f32 = 10.0;
/// Distance from the right edge.
const OFFSET_X: f32 = 10.0;
/// Distance from the top edge to the first toast.
const BASE_Y: f32 = 15.0;
const ACCENT_WIDTH: f32 = 4.0;
const TEXT_INSET: f32 = 14.0;
const MAX_DESCRIPTION_LINES: usize = 3;

/// Fade-out time at the end of every toast.
pub const FADE: Duration = Duration::from_millis(500);

/// Lifetime used when the caller has no preference.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NoticeKind {
    /// Color of the accent bar on the left of the toast.
    pub fn accent(&self) -> Rgba {
        match self {
            NoticeKind::Success => rgb(40, 167, 69),
            NoticeKind::Error => rgb(220, 53, 69),
            NoticeKind::Info => rgb(23, 162, 184),
            NoticeKind::Warning => rgb(255, 193, 7),
        }
    }
}

/// One toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
    pub duration: Duration,
    created: Instant,
}

impl Notice {
    /// Opacity in `[0, 1]` at `now`.
    pub fn opacity(&self, now: Instant) -> f32 {
        let age = now.saturating_duration_since(self.created);
        let Some(remaining) = self.duration.checked_sub(age) else {
            return 0.0;
        };
        let fade = FADE.min(self.duration);
        if remaining >= fade || fade.is_zero() {
            1.0
        } else {
            remaining.as_secs_f32() / fade.as_secs_f32()
        }
    }

    /// Whether the toast has run its course at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= self.duration
    }
}

/// Queue of live toasts.
#[derive(Debug, Default)]
pub struct Notifications {
    notices: Vec<Notice>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast starting now.
    pub fn notify(
        &mut self,
        kind: NoticeKind,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: Duration,
    ) {
        self.notify_at(kind, title, description, duration, Instant::now());
    }

    /// Show a toast created at `now`.
    pub fn notify_at(
        &mut self,
        kind: NoticeKind,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: Duration,
        now: Instant,
    ) {
        let notice = Notice {
            kind,
            title: title.into(),
            description: description.into(),
            duration,
            created: now,
        };

        match kind {
            NoticeKind::Error => error!(title = %notice.title, "{}", notice.description),
            NoticeKind::Warning => warn!(title = %notice.title, "{}", notice.description),
            NoticeKind::Success | NoticeKind::Info => {
                info!(title = %notice.title, "{}", notice.description)
            }
        }
        self.notices.push(notice);
    }

    /// Drop expired toasts. Later toasts move up to fill the gap.
    pub fn prune(&mut self, now: Instant) {
        self.notices.retain(|n| !n.is_expired(now));
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    /// Screen rectangle of the `index`-th toast on a canvas `width` wide.
    pub fn slot(index: usize, width: f32) -> Rect {
        Rect::new(
            width - OFFSET_X - WIDTH,
            BASE_Y + index as f32 * (HEIGHT + MARGIN_Y),
            WIDTH,
            HEIGHT,
        )
    }

    /// Paint every live toast.
    pub fn draw(&self, canvas: &mut Canvas, now: Instant) {
        let width = canvas.width() as f32;
        for (i, notice) in self.notices.iter().enumerate() {
            let alpha = notice.opacity(now);
            if alpha <= 0.0 {
                continue;
            }
            let slot = Self::slot(i, width);

            canvas.fill_rect(slot, with_alpha(rgb(30, 30, 30), 230.0 / 255.0 * alpha));
            canvas.fill_rect(
                Rect::new(slot.x, slot.y, ACCENT_WIDTH, slot.h),
                with_alpha(notice.kind.accent(), alpha),
            );
            canvas.text(
                slot.origin() + Vec2::new(TEXT_INSET, 8.0),
                &notice.title,
                2,
                with_alpha(rgb(255, 255, 255), alpha),
            );

            let max_chars = ((WIDTH - TEXT_INSET * 2.0) as i32 / font::ADVANCE) as usize;
            let line_step = (font::line_height(1) + 2) as f32;
            for (row, line) in wrap(&notice.description, max_chars)
                .iter()
                .take(MAX_DESCRIPTION_LINES)
                .enumerate()
            {
                canvas.text(
                    slot.origin() + Vec2::new(TEXT_INSET, 30.0 + row as f32 * line_step),
                    line,
                    1,
                    with_alpha(rgb(211, 211, 211), alpha),
                );
            }
        }
    }
}

fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    let [r, g, b, a] = color;
    [r, g, b, (a as f32 * alpha.clamp(0.0, 1.0)) as u8]
}

/// Greedy word wrap to lines of at most `max_chars` characters. Words
/// longer than a line are split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let used = line.chars().count();
            let needed = if used == 0 { word.len() } else { used + 1 + word.len() };
            if needed <= max_chars {
                if used > 0 {
                    line.push(' ');
                }
                line.extend(word.iter());
                break;
            }
            if used > 0 {
                lines.push(std::mem::take(&mut line));
                continue;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
