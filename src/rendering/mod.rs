use macroquad::prelude::*;

use crate::application::{GameState, Viewport};

/// Draw one full frame: cells, pointer highlight and status line
pub fn draw_frame(state: &GameState, viewport: &Viewport) {
    clear_background(BLACK);
    draw_grid(state, viewport);
    if let Some((x, y)) = state.highlighted {
        draw_highlight(viewport, x as usize, y as usize);
    }
    draw_status(state);
}

/// One filled rectangle per cell
pub fn draw_grid(state: &GameState, viewport: &Viewport) {
    let (cell_width, cell_height) = viewport.cell_size();
    let alive_color = Color::from_rgba(0, 0, 0, 255);
    let dead_color = Color::from_rgba(200, 200, 200, 255);

    for (x, y, cell) in state.grid.iter_cells() {
        let (screen_x, screen_y) = viewport.cell_to_screen(x, y);
        let color = if cell.is_alive() { alive_color } else { dead_color };
        draw_rectangle(screen_x, screen_y, cell_width, cell_height, color);
    }
}

/// Translucent overlay on the cell under the pointer
fn draw_highlight(viewport: &Viewport, x: usize, y: usize) {
    let (cell_width, cell_height) = viewport.cell_size();
    let (screen_x, screen_y) = viewport.cell_to_screen(x, y);
    draw_rectangle(
        screen_x,
        screen_y,
        cell_width,
        cell_height,
        Color::from_rgba(255, 255, 255, 63),
    );
}

/// One-line summary of rule, speed and progress
pub fn status_text(state: &GameState) -> String {
    let status = if state.is_running() { "Running" } else { "Paused" };
    format!(
        "{} ({}) | {:.1} gen/s | {} | Gen {} | Pop {}",
        state.rule.name(),
        state.rule.description(),
        1000.0 / state.clock.step_ms(),
        status,
        state.generation,
        state.grid.population(),
    )
}

fn draw_status(state: &GameState) {
    let text = status_text(state);
    let color = if state.is_running() {
        Color::from_rgba(0, 120, 60, 255)
    } else {
        Color::from_rgba(200, 90, 0, 255)
    };
    draw_text(&text, 8.0, screen_height() - 8.0, 18.0, color);
}
