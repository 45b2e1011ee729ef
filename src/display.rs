//! Terminal renderer.
//!
//! Takes a writer and a read-only view of the session and queues crossterm
//! commands for one frame.  World units are mapped to cells through a
//! `Viewport`; nothing here changes game state.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use platformer::debug::{collision_boxes, debug_lines, BoxKind};
use platformer::entities::{
    Camera, Enemy, EnemyKind, GameEvent, GameSession, GameStatus, Particle, ParticleColor,
    Platform, PlatformKind, PowerUp, PowerUpKind, Rect,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::White;
const C_HUD_LIVES: Color = Color::Red;
const C_GROUND: Color = Color::DarkYellow;
const C_GRASS: Color = Color::Green;
const C_PLATFORM: Color = Color::DarkRed;
const C_VICTORY: Color = Color::Yellow;
const C_PLAYER: Color = Color::Red;
const C_PLAYER_FIRE: Color = Color::White;
const C_PLAYER_BLINK: Color = Color::Yellow;
const C_GOOMBA: Color = Color::DarkYellow;
const C_FLY: Color = Color::Magenta;
const C_BOSS: Color = Color::DarkRed;
const C_COIN: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_DEBUG: Color = Color::Cyan;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps world units onto terminal cells.  Row 0 is the HUD and the last row
/// is the controls hint; the rows in between show the world.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, cell_width: f32, cell_height: f32) -> Self {
        Self {
            cols,
            rows,
            cell_width,
            cell_height,
        }
    }

    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(2)
    }

    /// Size of the visible world area in world units.
    pub fn world_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.cell_width,
            self.play_rows() as f32 * self.cell_height,
        )
    }

    /// Clip a world rectangle to screen cells: `(first_col, first_row,
    /// col_count, row_count)`, or `None` when nothing is visible.
    fn cells(&self, cam: &Camera, r: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = ((r.x - cam.x) / self.cell_width).floor();
        let c1 = ((r.right() - cam.x) / self.cell_width).ceil();
        let r0 = ((r.y - cam.y) / self.cell_height).floor();
        let r1 = ((r.bottom() - cam.y) / self.cell_height).ceil();

        let c0 = c0.max(0.0);
        let c1 = c1.min(self.cols as f32);
        let r0 = r0.max(0.0);
        let r1 = r1.min(self.play_rows() as f32);
        if c1 <= c0 || r1 <= r0 {
            return None;
        }
        Some((c0 as u16, r0 as u16 + 1, (c1 - c0) as u16, (r1 - r0) as u16))
    }

    /// Screen cell holding a world point, if visible.
    fn point(&self, cam: &Camera, x: f32, y: f32) -> Option<(u16, u16)> {
        let col = ((x - cam.x) / self.cell_width).floor();
        let row = ((y - cam.y) / self.cell_height).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.play_rows() as f32 {
            return None;
        }
        Some((col as u16, row as u16 + 1))
    }
}

// ── HUD model ─────────────────────────────────────────────────────────────────

/// What the score display currently shows.  Only changed through
/// [`Hud::apply`], once per event raised by a tick.
#[derive(Clone, Debug, Default)]
pub struct Hud {
    pub score: u32,
    pub coins: u32,
    pub lives: i32,
    pub panel: Option<(String, String)>,
}

impl Hud {
    pub fn new(state: &GameSession) -> Self {
        Self {
            score: state.score,
            coins: state.coins_collected,
            lives: state.lives,
            panel: None,
        }
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ScoreChanged {
                score,
                coins,
                lives,
                ..
            } => {
                self.score = *score;
                self.coins = *coins;
                self.lives = *lives;
            }
            GameEvent::ShowPanel { title, message } => {
                self.panel = Some((title.clone(), message.clone()));
            }
            GameEvent::HidePanel => self.panel = None,
            GameEvent::Sound(_) => {}
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameSession,
    hud: &Hud,
    view: &Viewport,
    debug_overlay: bool,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cam = &state.camera;
    for platform in &state.platforms {
        draw_platform(out, view, cam, platform)?;
    }
    for coin in state.coins.iter().filter(|c| !c.collected) {
        draw_glyph(out, view, cam, coin.rect(), coin.bob_offset, "o", C_COIN)?;
    }
    for power_up in state.power_ups.iter().filter(|p| !p.collected) {
        draw_power_up(out, view, cam, power_up)?;
    }
    for enemy in &state.enemies {
        draw_enemy(out, view, cam, enemy)?;
    }
    draw_player(out, view, state)?;
    for particle in &state.particles {
        draw_particle(out, view, cam, particle)?;
    }

    if debug_overlay {
        draw_collision_boxes(out, view, state)?;
        draw_debug_info(out, state)?;
    }

    // Time is live every frame; the rest of the HUD follows events.
    draw_hud(out, view, hud, state.time)?;
    draw_controls_hint(out, view)?;

    if state.status == GameStatus::Paused {
        draw_centered(out, view, &[("PAUSED", Color::White)])?;
    }
    if let Some((title, message)) = &hud.panel {
        draw_panel(out, view, title, message, state.status == GameStatus::Victory)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

fn fill<W: Write>(
    out: &mut W,
    view: &Viewport,
    cam: &Camera,
    rect: &Rect,
    ch: char,
    color: Color,
) -> std::io::Result<()> {
    let Some((col, row, width, height)) = view.cells(cam, rect) else {
        return Ok(());
    };
    let run: String = std::iter::repeat(ch).take(width as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for r in row..row + height {
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

/// Print `text` centred on `rect`, shifted vertically by `offset` world units.
fn draw_glyph<W: Write>(
    out: &mut W,
    view: &Viewport,
    cam: &Camera,
    rect: Rect,
    offset: f32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let (cx, cy) = rect.center();
    if let Some((col, row)) = view.point(cam, cx, cy + offset) {
        let half = text.chars().count() as u16 / 2;
        out.queue(cursor::MoveTo(col.saturating_sub(half), row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(text))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_platform<W: Write>(
    out: &mut W,
    view: &Viewport,
    cam: &Camera,
    platform: &Platform,
) -> std::io::Result<()> {
    let rect = platform.rect();
    match platform.kind {
        PlatformKind::Ground => {
            fill(out, view, cam, &rect, '▓', C_GROUND)?;
            // Grass strip along the top edge
            let grass = Rect::new(rect.x, rect.y, rect.width, view.cell_height.min(rect.height));
            fill(out, view, cam, &grass, '▀', C_GRASS)
        }
        PlatformKind::Platform => fill(out, view, cam, &rect, '▒', C_PLATFORM),
        PlatformKind::Victory => fill(out, view, cam, &rect, '█', C_VICTORY),
    }
}

fn draw_power_up<W: Write>(
    out: &mut W,
    view: &Viewport,
    cam: &Camera,
    power_up: &PowerUp,
) -> std::io::Result<()> {
    let (text, color) = match power_up.kind {
        PowerUpKind::Mushroom => ("♣", Color::Red),
        PowerUpKind::Fire => ("✿", Color::DarkYellow),
        PowerUpKind::Star => ("★", Color::Yellow),
        PowerUpKind::Life => ("1UP", Color::Green),
    };
    draw_glyph(out, view, cam, power_up.rect(), power_up.bob_offset, text, color)
}

fn draw_enemy<W: Write>(
    out: &mut W,
    view: &Viewport,
    cam: &Camera,
    enemy: &Enemy,
) -> std::io::Result<()> {
    let rect = enemy.rect();
    match enemy.kind {
        EnemyKind::Goomba => fill(out, view, cam, &rect, '▄', C_GOOMBA),
        EnemyKind::Fly { .. } => fill(out, view, cam, &rect, '▒', C_FLY),
        EnemyKind::Boss { .. } => {
            fill(out, view, cam, &rect, '█', C_BOSS)?;
            // Health pips just above the boss
            let pips = "♥".repeat(enemy.health.max(0) as usize);
            let above = Rect::new(rect.x, rect.y - view.cell_height, rect.width, 0.0);
            draw_glyph(out, view, cam, above, 0.0, &pips, Color::Red)
        }
    }
}

fn draw_player<W: Write>(out: &mut W, view: &Viewport, state: &GameSession) -> std::io::Result<()> {
    let p = &state.player;
    // Blink while invincible
    let color = if p.is_invincible && state.frame % 8 < 4 {
        C_PLAYER_BLINK
    } else if p.can_shoot_fire {
        C_PLAYER_FIRE
    } else {
        C_PLAYER
    };
    fill(out, view, &state.camera, &p.rect(), '█', color)?;

    let eye = if p.direction < 0 { "◂" } else { "▸" };
    draw_glyph(out, view, &state.camera, p.rect(), -p.height / 4.0, eye, Color::Black)
}

fn draw_particle<W: Write>(
    out: &mut W,
    view: &Viewport,
    cam: &Camera,
    particle: &Particle,
) -> std::io::Result<()> {
    let color = match particle.color {
        ParticleColor::Red => Color::Red,
        ParticleColor::Yellow => Color::Yellow,
        ParticleColor::Gold => Color::DarkYellow,
        ParticleColor::Green => Color::Green,
    };
    let ch = if particle.alpha() > 0.5 { "*" } else { "·" };
    if let Some((col, row)) = view.point(cam, particle.x, particle.y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(ch))?;
    }
    Ok(())
}

// ── HUD (row 0) and hint (last row) ───────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, hud: &Hud, time: f32) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "SCORE {:06}   COINS {:02}   TIME {:>3}",
        hud.score,
        hud.coins,
        time.ceil() as u32
    )))?;

    let lives = format!("LIVES {}", hud.lives.max(0));
    let x = view.cols.saturating_sub(lives.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(x, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(lives))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → / A D : Move   SPACE : Jump   SHIFT / X : Run   P : Pause   F3 : Debug   Q : Quit",
    ))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    view: &Viewport,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_panel<W: Write>(
    out: &mut W,
    view: &Viewport,
    title: &str,
    message: &str,
    won: bool,
) -> std::io::Result<()> {
    let frame_color = if won { Color::Yellow } else { Color::Red };
    let title_line = format!("║ {:^24} ║", title);
    let message_line = format!("║ {:^24} ║", message);
    let lines = [
        ("╔══════════════════════════╗", frame_color),
        (title_line.as_str(), frame_color),
        (message_line.as_str(), Color::White),
        ("╚══════════════════════════╝", frame_color),
        ("R - Play Again  Q - Quit", Color::White),
    ];
    draw_centered(out, view, &lines)
}

fn draw_debug_info<W: Write>(out: &mut W, state: &GameSession) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_DEBUG))?;
    for (i, line) in debug_lines(state).iter().enumerate() {
        out.queue(cursor::MoveTo(1, 2 + i as u16))?;
        out.queue(Print(format!("{:<24}", line)))?;
    }
    Ok(())
}

/// Mark the corners of every hit box.
fn draw_collision_boxes<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameSession,
) -> std::io::Result<()> {
    for (kind, rect) in collision_boxes(state) {
        let color = match kind {
            BoxKind::Player => Color::Red,
            BoxKind::Coin => Color::Yellow,
            BoxKind::Enemy => Color::Magenta,
        };
        let Some((col, row, width, height)) = view.cells(&state.camera, &rect) else {
            continue;
        };
        out.queue(style::SetForegroundColor(color))?;
        let right = col + width - 1;
        let bottom = row + height - 1;
        for (c, r, ch) in [
            (col, row, "┌"),
            (right, row, "┐"),
            (col, bottom, "└"),
            (right, bottom, "┘"),
        ] {
            out.queue(cursor::MoveTo(c, r))?;
            out.queue(Print(ch))?;
        }
    }
    Ok(())
}
