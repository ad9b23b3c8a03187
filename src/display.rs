/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable draw payload.
/// No round logic is performed; this module only translates world
/// coordinates (400×600) into terminal cells and queues commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use flappy_round::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use flappy_round::entities::{DrawPayload, ObstacleView, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Rgb { r: 135, g: 206, b: 235 };
const C_PIPE: Color = Color::Rgb { r: 34, g: 139, b: 34 };
const C_PIPE_CAP: Color = Color::Rgb { r: 0, g: 100, b: 0 };
const C_BIRD: Color = Color::Yellow;
const C_WING: Color = Color::Rgb { r: 255, g: 165, b: 0 };
const C_TEXT: Color = Color::Black;

/// Horizontal overhang of a pipe cap on each side, in world pixels.
const CAP_OVERHANG: f32 = 5.0;
const CAP_HEIGHT: f32 = 8.0;

/// Maps world pixels onto the current terminal grid.
struct Viewport {
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn col(&self, x: f32) -> i32 {
        (x * self.cols as f32 / SCREEN_WIDTH).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y * self.rows as f32 / SCREEN_HEIGHT).floor() as i32
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, payload: &DrawPayload) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport { cols, rows };

    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match payload {
        DrawPayload::Active {
            avatar,
            velocity,
            frame,
            obstacles,
            score,
        } => {
            for obstacle in obstacles {
                draw_obstacle(out, &view, obstacle)?;
            }
            draw_avatar(out, &view, avatar, *velocity, *frame)?;
            draw_score(out, *score)?;
        }
        DrawPayload::GameOver { score, high_score } => {
            draw_game_over(out, &view, *score, *high_score)?;
        }
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// Fill every on-screen cell covered by `rect` with `glyph`.
fn fill_rect<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let left = view.col(rect.x).max(0);
    let right = view.col(rect.x + rect.w).min(view.cols as i32);
    let top = view.row(rect.y).max(0);
    let bottom = view.row(rect.y + rect.h).min(view.rows as i32);
    if left >= right || top >= bottom {
        return Ok(());
    }

    let line: String = std::iter::repeat(glyph).take((right - left) as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for row in top..bottom {
        out.queue(cursor::MoveTo(left as u16, row as u16))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_obstacle<W: Write>(
    out: &mut W,
    view: &Viewport,
    obstacle: &ObstacleView,
) -> std::io::Result<()> {
    fill_rect(out, view, &obstacle.upper, '█', C_PIPE)?;
    fill_rect(out, view, &obstacle.lower, '█', C_PIPE)?;

    // Caps sit on the gap side of each pipe and are a little wider.
    let upper_cap = Rect {
        x: obstacle.upper.x - CAP_OVERHANG,
        y: obstacle.upper.y + obstacle.upper.h - CAP_HEIGHT,
        w: obstacle.upper.w + CAP_OVERHANG * 2.0,
        h: CAP_HEIGHT,
    };
    let lower_cap = Rect {
        y: obstacle.lower.y,
        ..upper_cap
    };
    fill_rect(out, view, &upper_cap, '▄', C_PIPE_CAP)?;
    fill_rect(out, view, &lower_cap, '▀', C_PIPE_CAP)?;
    Ok(())
}

// ── Avatar ────────────────────────────────────────────────────────────────────

fn draw_avatar<W: Write>(
    out: &mut W,
    view: &Viewport,
    avatar: &Rect,
    velocity: f32,
    frame: u64,
) -> std::io::Result<()> {
    // Sprite (3 cols):  wing, body, wing
    //   ^●^   rising
    //   v●v / -●-   gliding, alternating
    let cx = view.col(avatar.x + avatar.w / 2.0);
    let cy = view.row(avatar.y + avatar.h / 2.0);
    if cy < 0 || cy >= view.rows as i32 {
        return Ok(());
    }

    let wing = if velocity < 0.0 {
        '^'
    } else if frame % 16 < 8 {
        '-'
    } else {
        'v'
    };

    let cells = [(cx - 1, wing, C_WING), (cx, '●', C_BIRD), (cx + 1, wing, C_WING)];
    for (col, glyph, color) in cells {
        if col < 0 || col >= view.cols as i32 {
            continue;
        }
        out.queue(cursor::MoveTo(col as u16, cy as u16))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, score: u32) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    out.queue(Print(format!("Score: {}", score)))?;
    Ok(())
}

// ── Game-over screen ──────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    view: &Viewport,
    score: u32,
    high_score: u32,
) -> std::io::Result<()> {
    let score_line = format!("Score: {}", score);
    let best_line = format!("High Score: {}", high_score);

    let lines: [(&str, Color); 6] = [
        ("╔════════════════════════╗", Color::Red),
        ("║       GAME  OVER       ║", Color::Red),
        ("╚════════════════════════╝", Color::Red),
        ("PRESS SPACE TO RESTART", C_TEXT),
        (score_line.as_str(), C_TEXT),
        (best_line.as_str(), C_TEXT),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
