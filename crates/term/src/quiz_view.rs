//! QuizView: maps a quiz snapshot plus UI state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::QuizSnapshot;
use crate::fb::{text_width, CellStyle, FrameBuffer, Rgb};
use crate::feedback::{Feedback, Tone};
use crate::types::{Difficulty, Phase};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Everything drawn in one frame.
#[derive(Debug, Clone, Copy)]
pub struct QuizScreen<'a> {
    pub snapshot: &'a QuizSnapshot,
    pub answer: &'a str,
    pub feedback: &'a Feedback,
}

/// Panel height: border, score row, tier row, prompt, answer, feedback, status.
pub const PANEL_HEIGHT: u16 = 11;

const TITLE: &str = " ARITHMETIC QUIZ ";
const HELP: &str = "s start  enter submit  n next  e/m/h tier  r reset  q quit";

const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const ACCENT: CellStyle = CellStyle::fg(Rgb::new(99, 102, 241)).bold();
const WARNING: CellStyle = CellStyle::fg(Rgb::new(239, 68, 68)).bold();
const MUTED: CellStyle = CellStyle::fg(Rgb::new(140, 140, 150)).dim();

/// A lightweight terminal renderer for the quiz panel.
pub struct QuizView {
    /// Panel never gets narrower than this (unless the viewport is).
    min_width: u16,
    anchor_y: AnchorY,
}

impl Default for QuizView {
    fn default() -> Self {
        Self {
            min_width: 60,
            anchor_y: AnchorY::Center,
        }
    }
}

impl QuizView {
    pub fn new(min_width: u16) -> Self {
        Self {
            min_width,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, screen: &QuizScreen<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let snap = screen.snapshot;
        let prompt_w = text_width(&snap.expression) + 4;
        let frame_w = (prompt_w + 4).max(self.min_width).min(viewport.width);
        let frame_h = PANEL_HEIGHT.min(viewport.height);
        if frame_w < 4 || frame_h < 4 {
            return;
        }

        let x0 = viewport.width.saturating_sub(frame_w) / 2;
        let y0 = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };
        let inner_x = x0 + 2;

        self.draw_border(fb, x0, y0, frame_w, frame_h);
        let title_x = x0 + frame_w.saturating_sub(text_width(TITLE)) / 2;
        fb.put_str(title_x, y0, TITLE, ACCENT);

        // Score / time.
        let row = y0 + 1;
        let x = fb.put_str(inner_x, row, "SCORE ", LABEL);
        fb.put_u32(x, row, snap.score, VALUE);

        let time_x = x0 + frame_w / 2;
        let x = fb.put_str(time_x, row, "TIME ", LABEL);
        let time_style = if snap.warning() { WARNING } else { VALUE };
        let x = fb.put_u32(x, row, snap.remaining_secs, time_style);
        if snap.warning() {
            fb.put_char(x, row, '!', WARNING);
        }

        // Tier selector; the active tier is bracketed.
        self.draw_tiers(fb, inner_x, y0 + 2, snap.difficulty);

        // Question.
        let row = y0 + 4;
        let x = fb.put_str(inner_x, row, &snap.expression, ACCENT);
        fb.put_str(x, row, " = ?", ACCENT);

        // Answer field.
        let row = y0 + 6;
        let x = fb.put_str(inner_x, row, "> ", LABEL);
        let x = fb.put_str(x, row, screen.answer, VALUE);
        if snap.phase == Phase::Running {
            fb.put_char(x, row, '_', VALUE.dim());
        }

        // Feedback.
        let row = y0 + 8;
        let x = fb.put_str(inner_x, row, screen.feedback.emoji, VALUE);
        fb.put_str(x + 1, row, &screen.feedback.text, tone_style(screen.feedback.tone));

        // Status.
        let row = y0 + 9;
        match snap.phase {
            Phase::Idle => {
                fb.put_str(inner_x, row, "press s to start", MUTED);
            }
            Phase::Running => {}
            Phase::Ended => {
                let x = fb.put_str(inner_x, row, "GAME OVER", WARNING);
                fb.put_str(x + 2, row, "press s to play again", MUTED);
            }
        }

        // Key help under the panel, when there is room.
        let help_y = y0 + frame_h;
        if help_y < viewport.height && text_width(HELP) <= viewport.width {
            let help_x = viewport.width.saturating_sub(text_width(HELP)) / 2;
            fb.put_str(help_x, help_y, HELP, MUTED);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, screen: &QuizScreen<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_tiers(&self, fb: &mut FrameBuffer, x: u16, y: u16, active: Difficulty) {
        let mut cx = x;
        for level in Difficulty::ALL {
            let name = tier_label(level);
            if level == active {
                cx = fb.put_str(cx, y, "[", ACCENT);
                cx = fb.put_str(cx, y, name, ACCENT);
                cx = fb.put_str(cx, y, "]", ACCENT);
            } else {
                cx = fb.put_str(cx + 1, y, name, MUTED);
                cx += 1;
            }
            cx += 1;
        }
    }
}

fn tier_label(level: Difficulty) -> &'static str {
    match level {
        Difficulty::Easy => "EASY",
        Difficulty::Medium => "MEDIUM",
        Difficulty::Hard => "HARD",
    }
}

fn tone_style(tone: Tone) -> CellStyle {
    match tone {
        Tone::Neutral => VALUE,
        Tone::Success => CellStyle::fg(Rgb::new(16, 185, 129)).bold(),
        Tone::Failure => WARNING,
        Tone::Finished => LABEL,
    }
}
