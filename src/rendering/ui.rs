//! Shared UI drawing helpers: the health bar and character-granularity text
//! wrapping for Korean strings.

use macroquad::prelude::*;

/// Health bar width in pixels.
pub const HP_BAR_WIDTH: f32 = 200.0;

/// Health bar height in pixels.
pub const HP_BAR_HEIGHT: f32 = 20.0;

/// Draws a health bar: a full-width backdrop with a fill proportional to
/// `health / max_health` (never negative).
pub fn draw_health_bar(x: f32, y: f32, health: i32, max_health: i32, backdrop: Color) {
    let ratio = (health as f32 / max_health as f32).max(0.0);
    draw_rectangle(x, y, HP_BAR_WIDTH, HP_BAR_HEIGHT, backdrop);
    draw_rectangle(
        x,
        y,
        HP_BAR_WIDTH * ratio,
        HP_BAR_HEIGHT,
        Color::from_rgba(255, 80, 80, 255),
    );
}

/// Wraps `text` into lines no wider than `max_width` pixels, breaking at
/// character granularity rather than whitespace so Korean sentences wrap
/// naturally.
pub fn wrap_text_chars(text: &str, font: Option<&Font>, font_size: u16, max_width: f32) -> Vec<String> {
    if text.contains('\n') {
        return text
            .split('\n')
            .flat_map(|raw| wrap_text_chars(raw, font, font_size, max_width))
            .collect();
    }
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        let mut test = current.clone();
        test.push(ch);
        if measure_text(&test, font, font_size, 1.0).width <= max_width {
            current = test;
        } else {
            if !current.is_empty() {
                lines.push(current);
            }
            current = ch.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
