//! RecallView: maps a `core::RecallSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::RecallSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Hue, RecallPhase, CELEBRATION_STREAK, PALETTE_SIZE};

/// Pads per row on the board.
const PAD_COLS: u16 = 3;
/// Columns between neighboring pads.
const GAP_X: u16 = 2;
/// Rows between the two pad rows.
const GAP_Y: u16 = 1;

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

/// Host-side state layered over the snapshot: the latest narrator line,
/// the celebration countdown, and the audio toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    /// Phrase to show under the status line, usually what the narrator
    /// just said.
    pub caption: Option<&'a str>,
    /// Milliseconds left on the streak celebration overlay.
    pub celebrate_ms: u32,
    pub tones_enabled: bool,
    pub voice_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the six-pad recall board.
pub struct RecallView {
    /// Pad width in terminal columns.
    pad_w: u16,
    /// Pad height in terminal rows.
    pad_h: u16,
    anchor_y: AnchorY,
}

impl Default for RecallView {
    fn default() -> Self {
        // 10x5 keeps a pad close to square on typical terminal glyphs.
        Self {
            pad_w: 10,
            pad_h: 5,
            anchor_y: AnchorY::Center,
        }
    }
}

impl RecallView {
    pub fn new(pad_w: u16, pad_h: u16) -> Self {
        Self {
            pad_w,
            pad_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a
    /// framebuffer across frames and only resize when the terminal size
    /// changes.
    pub fn render_into(&self, snap: &RecallSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_hud(snap, None, viewport, fb);
    }

    pub fn render_into_with_hud(
        &self,
        snap: &RecallSnapshot,
        hud: Option<&HudView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let board_bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Board background, then the frame around it.
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board_bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // The six pads; the one being presented lights up.
        for index in 0..PALETTE_SIZE {
            let hue = Hue::ALL[index];
            let lit = snap.lit == Some(hue);
            self.draw_pad(fb, start_x, start_y, index, lit);
        }

        // Entry progress, status copy, and the narrator caption.
        let dots_y = start_y.saturating_add(frame_h);
        self.draw_progress_dots(fb, snap, start_x, dots_y, frame_w);
        self.draw_status(fb, snap, start_x, dots_y.saturating_add(1), frame_w);
        if let Some(line) = hud.and_then(|h| h.caption) {
            let caption = CellStyle {
                fg: Rgb::new(190, 190, 200),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                dim: true,
            };
            self.put_centered(fb, start_x, dots_y.saturating_add(2), frame_w, line, caption);
        }

        // Key help along the bottom, centered on the whole viewport.
        let help = CellStyle {
            fg: Rgb::new(140, 140, 150),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        self.put_centered(
            fb,
            0,
            dots_y.saturating_add(4),
            viewport.width,
            "1-6 pads  S start  R reset  V voice  M tones  Q quit",
            help,
        );

        // Side panel (score/level/streak).
        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);

        // Celebration overlay on top of everything.
        if hud.map(|h| h.celebrate_ms > 0).unwrap_or(false) {
            self.draw_celebration(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RecallSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_hud(
        &self,
        snap: &RecallSnapshot,
        hud: Option<&HudView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_hud(snap, hud, viewport, &mut fb);
        fb
    }

    /// Outer frame size: the pad grid plus a one-cell border.
    fn frame_size(&self) -> (u16, u16) {
        let grid_w = PAD_COLS * self.pad_w + (PAD_COLS - 1) * GAP_X;
        let grid_h = 2 * self.pad_h + GAP_Y;
        (grid_w + 2, grid_h + 2)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_pad(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, index: usize, lit: bool) {
        let hue = Hue::ALL[index];
        let col = (index as u16) % PAD_COLS;
        let row = (index as u16) / PAD_COLS;
        let px = start_x + 1 + col * (self.pad_w + GAP_X);
        let py = start_y + 1 + row * (self.pad_h + GAP_Y);

        let body = CellStyle {
            fg: if lit { lit_rgb(hue) } else { dim_rgb(hue) },
            bg: Rgb::new(30, 30, 40),
            bold: lit,
            dim: !lit,
        };
        fb.fill_rect(px, py, self.pad_w, self.pad_h, '█', body);

        // Key digit in the pad center so new players can find it.
        let label = CellStyle {
            fg: Rgb::new(20, 20, 25),
            bg: if lit { lit_rgb(hue) } else { dim_rgb(hue) },
            bold: lit,
            dim: !lit,
        };
        let cx = px + self.pad_w / 2;
        let cy = py + self.pad_h / 2;
        fb.put_char(cx, cy, pad_digit(index), label);
    }

    /// One dot per sequence step, filled as the player enters presses.
    fn draw_progress_dots(
        &self,
        fb: &mut FrameBuffer,
        snap: &RecallSnapshot,
        start_x: u16,
        y: u16,
        frame_w: u16,
    ) {
        if snap.sequence_len == 0 {
            return;
        }

        let filled = CellStyle {
            fg: Rgb::new(235, 200, 60),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let hollow = CellStyle {
            fg: Rgb::new(120, 120, 130),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };

        let width = (snap.sequence_len as u16) * 2 - 1;
        let x0 = start_x.saturating_add(frame_w.saturating_sub(width) / 2);
        for i in 0..snap.sequence_len as u16 {
            let done = i < snap.entered_len as u16;
            let style = if done { filled } else { hollow };
            fb.put_char(x0 + i * 2, y, if done { '●' } else { '○' }, style);
        }
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        snap: &RecallSnapshot,
        start_x: u16,
        y: u16,
        frame_w: u16,
    ) {
        let styled = |fg: Rgb| CellStyle {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        match snap.phase {
            RecallPhase::Idle => self.put_centered(
                fb,
                start_x,
                y,
                frame_w,
                "Watch the sequence, then repeat it!",
                styled(Rgb::new(220, 220, 220)),
            ),
            RecallPhase::Presenting => self.put_centered(
                fb,
                start_x,
                y,
                frame_w,
                "Watch carefully...",
                styled(Rgb::new(235, 200, 60)),
            ),
            RecallPhase::AwaitingInput => self.put_centered(
                fb,
                start_x,
                y,
                frame_w,
                "Now repeat the sequence!",
                styled(Rgb::new(120, 220, 140)),
            ),
            RecallPhase::RoundLost => self.put_centered(
                fb,
                start_x,
                y,
                frame_w,
                "Oops! Try again!",
                styled(Rgb::new(230, 120, 120)),
            ),
            RecallPhase::RoundWon => {
                // "Great job! Level N complete!" without allocating.
                const PREFIX: &str = "Great job! Level ";
                const SUFFIX: &str = " complete!";
                let level = snap.level.saturating_sub(1);
                let width = PREFIX.len() as u16 + digits_w(level) + SUFFIX.len() as u16;
                let x = start_x.saturating_add(frame_w.saturating_sub(width) / 2);
                let style = styled(Rgb::new(120, 220, 140));
                fb.put_str(x, y, PREFIX, style);
                fb.put_u32(x + PREFIX.len() as u16, y, level, style);
                fb.put_str(x + PREFIX.len() as u16 + digits_w(level), y, SUFFIX, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &RecallSnapshot,
        hud: Option<&HudView>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.level, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STREAK", label);
        y = y.saturating_add(1);
        for i in 0..CELEBRATION_STREAK as u16 {
            let done = (i as u32) < snap.streak;
            let style = if done { label } else { CellStyle { dim: true, ..value } };
            fb.put_char(panel_x + i * 2, y, if done { '●' } else { '○' }, style);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "WINS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.rounds_won, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        fb.put_u32(panel_x + 5, y, snap.next_length as u32, value);
        y = y.saturating_add(1);

        if let Some(hud) = hud {
            if y >= viewport.height {
                return;
            }
            fb.put_str(panel_x, y, "TONES", label);
            fb.put_str(panel_x + 6, y, on_off(hud.tones_enabled), value);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, "VOICE", label);
            fb.put_str(panel_x + 6, y, on_off(hud.voice_enabled), value);
        }
    }

    fn draw_celebration(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 230, 90),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let mid_y = start_y.saturating_add(frame_h / 2);
        self.put_centered(fb, start_x, mid_y.saturating_sub(1), frame_w, "*  *  *", style);
        self.put_centered(fb, start_x, mid_y, frame_w, "THREE IN A ROW!", style);
        self.put_centered(fb, start_x, mid_y.saturating_add(1), frame_w, "*  *  *", style);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        y: u16,
        span: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(span.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

/// Pad color while being presented.
fn lit_rgb(hue: Hue) -> Rgb {
    match hue {
        Hue::Red => Rgb::new(220, 60, 60),
        Hue::Blue => Rgb::new(70, 110, 230),
        Hue::Green => Rgb::new(70, 190, 90),
        Hue::Yellow => Rgb::new(235, 200, 60),
        Hue::Purple => Rgb::new(160, 90, 210),
        Hue::Orange => Rgb::new(240, 150, 50),
    }
}

/// Pad color at rest.
fn dim_rgb(hue: Hue) -> Rgb {
    match hue {
        Hue::Red => Rgb::new(90, 30, 30),
        Hue::Blue => Rgb::new(35, 50, 95),
        Hue::Green => Rgb::new(35, 80, 45),
        Hue::Yellow => Rgb::new(95, 85, 30),
        Hue::Purple => Rgb::new(70, 45, 90),
        Hue::Orange => Rgb::new(100, 65, 30),
    }
}

/// The keyboard digit printed on a pad, `'1'` through `'6'`.
fn pad_digit(index: usize) -> char {
    (b'1' + index as u8) as char
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Column width of `value` in decimal digits.
fn digits_w(value: u32) -> u16 {
    let mut n = value;
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
