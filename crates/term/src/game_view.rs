//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Everything is laid out in logical screen pixels (800x450 by default) and
//! projected onto the viewport, so the picture keeps its proportions at any
//! terminal size.

use crate::core::GameSnapshot;
use crate::fb::{decimal_width, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Rect, Screen, Vec2};

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

pub const RAY_WHITE: Rgb = Rgb::new(245, 245, 245);
pub const LIGHT_GRAY: Rgb = Rgb::new(200, 200, 200);
pub const DARK_GRAY: Rgb = Rgb::new(80, 80, 80);
pub const BLUE: Rgb = Rgb::new(0, 121, 241);
pub const RED: Rgb = Rgb::new(230, 41, 55);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

const BLOCK: char = '█';

const MENU_TITLE: &str = "Game Platformer";
const MENU_START: &str = "Press ENTER to Start";
const PROMPT_EXIT: &str = "Press ESCAPE to Exit";
const GAME_OVER_TITLE: &str = "Game Over";
const PROMPT_RESTART: &str = "Press R to Restart";
const PROMPT_MENU: &str = "Press M to Main Menu";
const SCORE_LABEL: &str = "Score: ";
const HIGH_SCORE_LABEL: &str = "High Score: ";

/// A lightweight terminal renderer for the platformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Draw the ground band below the ground line during gameplay.
    show_ground: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_ground: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ground(mut self, show_ground: bool) -> Self {
        self.show_ground = show_ground;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(BLACK, RAY_WHITE).into_cell(' '));
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        let proj = Projection::new(snap.screen_size, viewport);
        match snap.screen {
            Screen::MainMenu => self.draw_main_menu(fb, &proj),
            Screen::Gameplay => self.draw_gameplay(fb, snap, &proj),
            Screen::GameOver => self.draw_game_over(fb, snap, &proj),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_main_menu(&self, fb: &mut FrameBuffer, proj: &Projection) {
        let mid = proj.size.y / 2.0;
        let title = text_style().bold();
        draw_centered(fb, proj.row(mid - 40.0), MENU_TITLE, title);
        draw_centered(fb, proj.row(mid), MENU_START, text_style());
        draw_centered(fb, proj.row(mid + 40.0), PROMPT_EXIT, text_style());
    }

    fn draw_gameplay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, proj: &Projection) {
        if self.show_ground {
            let top = snap.camera.world_to_screen(Vec2::new(0.0, snap.ground_y)).y;
            let ground = CellStyle::new(DARK_GRAY, LIGHT_GRAY);
            let (w, h) = (fb.width() as i32, fb.height() as i32);
            fb.fill_span(0, proj.row(top), w, h, ' ', ground);
        }

        let platform = CellStyle::new(DARK_GRAY, RAY_WHITE);
        for rect in &snap.platforms {
            self.draw_world_rect(fb, snap, proj, rect, platform);
        }

        let objective = CellStyle::new(BLUE, RAY_WHITE);
        for rect in &snap.objectives {
            self.draw_world_rect(fb, snap, proj, rect, objective);
        }

        self.draw_world_rect(fb, snap, proj, &snap.player, CellStyle::new(RED, RAY_WHITE));

        // Scoreboard sits in screen space, outside the camera transform.
        let x = proj.col(10.0).max(0) as u16;
        let score_y = proj.row(10.0).max(0) as u16;
        let high_y = proj.row(40.0).max(score_y as i32 + 1) as u16;
        draw_labelled(fb, x, score_y, SCORE_LABEL, snap.score, text_style());
        draw_labelled(fb, x, high_y, HIGH_SCORE_LABEL, snap.high_score, text_style());
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, proj: &Projection) {
        let mid = proj.size.y / 2.0;
        let style = text_style();

        draw_centered(fb, proj.row(mid - 40.0), GAME_OVER_TITLE, style.bold());
        draw_centered_labelled(fb, proj.row(mid), SCORE_LABEL, snap.score, style);
        draw_centered_labelled(fb, proj.row(mid + 40.0), HIGH_SCORE_LABEL, snap.high_score, style);
        draw_centered(fb, proj.row(mid + 80.0), PROMPT_RESTART, style);
        draw_centered(fb, proj.row(mid + 120.0), PROMPT_MENU, style);
        draw_centered(fb, proj.row(mid + 160.0), PROMPT_EXIT, style);
    }

    fn draw_world_rect(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        proj: &Projection,
        rect: &Rect,
        style: CellStyle,
    ) {
        let top_left = snap.camera.world_to_screen(Vec2::new(rect.x, rect.y));
        let bottom_right = snap.camera.world_to_screen(Vec2::new(rect.right(), rect.bottom()));
        let (x0, x1) = proj.col_span(top_left.x, bottom_right.x);
        let (y0, y1) = proj.row_span(top_left.y, bottom_right.y);
        fb.fill_span(x0, y0, x1, y1, BLOCK, style);
    }
}

/// Logical screen pixels to terminal cells.
#[derive(Debug, Clone, Copy)]
struct Projection {
    size: Vec2,
    sx: f32,
    sy: f32,
}

impl Projection {
    fn new(size: Vec2, viewport: Viewport) -> Self {
        let size = Vec2::new(size.x.max(1.0), size.y.max(1.0));
        Self {
            size,
            sx: viewport.width as f32 / size.x,
            sy: viewport.height as f32 / size.y,
        }
    }

    fn col(&self, px: f32) -> i32 {
        (px * self.sx).floor() as i32
    }

    fn row(&self, py: f32) -> i32 {
        (py * self.sy).floor() as i32
    }

    /// Cells covered by `[left, right)`; never collapses a visible object to zero width.
    fn col_span(&self, left: f32, right: f32) -> (i32, i32) {
        let a = self.col(left);
        let b = (right * self.sx).ceil() as i32;
        (a, b.max(a + 1))
    }

    fn row_span(&self, top: f32, bottom: f32) -> (i32, i32) {
        let a = self.row(top);
        let b = (bottom * self.sy).ceil() as i32;
        (a, b.max(a + 1))
    }
}

fn text_style() -> CellStyle {
    CellStyle::new(BLACK, RAY_WHITE)
}

fn clamp_row(fb: &FrameBuffer, row: i32) -> Option<u16> {
    if row < 0 || row >= fb.height() as i32 {
        None
    } else {
        Some(row as u16)
    }
}

fn draw_centered(fb: &mut FrameBuffer, row: i32, text: &str, style: CellStyle) {
    let Some(y) = clamp_row(fb, row) else {
        return;
    };
    let w = text.chars().count() as u16;
    let x = fb.width().saturating_sub(w) / 2;
    fb.put_str(x, y, text, style);
}

fn draw_labelled(fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32, style: CellStyle) {
    fb.put_str(x, y, label, style);
    let _ = fb.put_u32(x.saturating_add(label.chars().count() as u16), y, value, style);
}

fn draw_centered_labelled(fb: &mut FrameBuffer, row: i32, label: &str, value: u32, style: CellStyle) {
    let Some(y) = clamp_row(fb, row) else {
        return;
    };
    let w = label.chars().count() as u16 + decimal_width(value);
    let x = fb.width().saturating_sub(w) / 2;
    draw_labelled(fb, x, y, label, value, style);
}

trait IntoCell {
    fn into_cell(self, ch: char) -> Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Camera;
    use crate::types::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn gameplay_snapshot() -> GameSnapshot {
        let size = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        GameSnapshot {
            screen: Screen::Gameplay,
            screen_size: size,
            ground_y: 200.0,
            player: Rect::new(0.0, 0.0, 40.0, 40.0),
            camera: Camera::new(size, Vec2::new(20.0, 20.0)),
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn projection_scales_logical_pixels_to_cells() {
        let proj = Projection::new(Vec2::new(800.0, 450.0), Viewport::new(80, 45));
        assert_eq!(proj.col(0.0), 0);
        assert_eq!(proj.col(400.0), 40);
        assert_eq!(proj.row(225.0), 22);
        assert_eq!(proj.col(-15.0), -2);
    }

    #[test]
    fn small_rects_cover_at_least_one_cell() {
        let proj = Projection::new(Vec2::new(800.0, 450.0), Viewport::new(8, 4));
        let (a, b) = proj.col_span(101.0, 102.0);
        assert_eq!(b - a, 1);
    }

    #[test]
    fn player_is_drawn_at_screen_centre() {
        let snap = gameplay_snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(80, 45));

        // Camera targets the player's centre, which lands on the middle of the screen.
        let cell = fb.get(39, 21).expect("cell in bounds");
        assert_eq!(cell.ch, BLOCK);
        assert_eq!(cell.style.fg, RED);
    }

    #[test]
    fn ground_band_can_be_disabled() {
        let snap = gameplay_snapshot();
        let vp = Viewport::new(80, 45);

        let with = GameView::default().render(&snap, vp);
        let without = GameView::default().with_ground(false).render(&snap, vp);

        assert_eq!(with.get(0, 44).map(|c| c.style.bg), Some(LIGHT_GRAY));
        assert_eq!(without.get(0, 44).map(|c| c.style.bg), Some(RAY_WHITE));
    }

    #[test]
    fn zero_sized_viewport_does_not_panic() {
        let snap = gameplay_snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(0, 0));
        assert!(fb.cells().is_empty());
    }
}
