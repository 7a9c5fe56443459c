//! # Display Management
//!
//! Loads the game's image and font assets and renders every screen: the
//! zoomed world view with minimap and HP bar, the dialogue box, the
//! encounter screen, and the intro. A missing asset is fatal at startup.

use crate::game::{
    Camera, DialoguePrompt, Encounter, Facing, Minimap, Player, SpriteVariant, WorldPoint,
};
use crate::rendering::ui::{self, HP_BAR_WIDTH};
use crate::{CampusError, CampusResult};
use macroquad::prelude::*;

/// Dialogue box height in pixels.
const DIALOGUE_BOX_HEIGHT: f32 = 210.0;

/// The macroquad display manager.
///
/// Owns all textures and the font; the simulation core never touches any of
/// this. Drawing functions take the core's state by reference and project it
/// to the screen.
pub struct Display {
    /// Screen width in pixels
    pub screen_w: f32,
    /// Screen height in pixels
    pub screen_h: f32,
    map: Texture2D,
    player_stand: Texture2D,
    player_run_right: Texture2D,
    player_run_left: Texture2D,
    zombie: Texture2D,
    intro_bg: Texture2D,
    font: Font,
}

impl Display {
    /// Creates the display, loading every asset. Any failure aborts startup.
    pub async fn new() -> CampusResult<Self> {
        let screen_w = screen_width();
        let screen_h = screen_height();

        let map = load_texture_fatal("map.png").await?;
        let player_stand = load_texture_fatal("player_stand.png").await?;
        let player_run_right = load_texture_fatal("player_run_right.png").await?;
        let player_run_left = load_texture_fatal("player_run_left.png").await?;
        let zombie = load_texture_fatal("zombie.png").await?;
        let intro_bg = load_texture_fatal("intro.png").await?;

        let font = load_ttf_font("gamefont.ttf")
            .await
            .map_err(|e| CampusError::Asset(format!("gamefont.ttf: {e}")))?;

        Ok(Self {
            screen_w,
            screen_h,
            map,
            player_stand,
            player_run_right,
            player_run_left,
            zombie,
            intro_bg,
            font,
        })
    }

    /// The world map dimensions, taken from the loaded map image.
    pub fn map_size(&self) -> (f32, f32) {
        (self.map.width(), self.map.height())
    }

    fn player_texture(&self, facing: Facing, sprite: SpriteVariant) -> &Texture2D {
        match (sprite, facing) {
            (SpriteVariant::Idle, _) => &self.player_stand,
            (SpriteVariant::Running, Facing::Right) => &self.player_run_right,
            (SpriteVariant::Running, Facing::Left) => &self.player_run_left,
        }
    }

    fn draw_korean(&self, text: &str, x: f32, y: f32, font_size: u16, color: Color) {
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: Some(&self.font),
                font_size,
                color,
                ..Default::default()
            },
        );
    }

    /// Renders the world view: the camera's slice of the map scaled to the
    /// screen, the player sprite, the HP bar and the minimap overlay.
    pub fn draw_world(&self, player: &Player, camera: &Camera, minimap: &Minimap, health: i32, max_health: i32) {
        clear_background(BLACK);

        // Camera slice of the map, scaled up to the full screen.
        let region = camera.screen_region();
        draw_texture_ex(
            &self.map,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(self.screen_w, self.screen_h)),
                source: Some(Rect::new(region.x, region.y, region.w, region.h)),
                ..Default::default()
            },
        );

        // Player sprite, zoom applied to position and size.
        let (px, py) = camera.world_to_screen(WorldPoint::new(player.rect.x, player.rect.y));
        let size = player.rect.w * camera.zoom();
        draw_texture_ex(
            self.player_texture(player.facing, player.sprite),
            px,
            py,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(size, size)),
                ..Default::default()
            },
        );

        // HP bar and label.
        ui::draw_health_bar(20.0, 20.0, health, max_health, Color::from_rgba(100, 0, 0, 255));
        self.draw_korean(&format!("HP: {health}"), 20.0, 64.0, 26, WHITE);

        self.draw_minimap(player, camera, minimap);
    }

    /// Renders the minimap: scaled map image, player marker and the camera's
    /// visible-region outline.
    fn draw_minimap(&self, player: &Player, camera: &Camera, minimap: &Minimap) {
        let overlay = minimap.overlay_rect();
        draw_rectangle(
            overlay.x - 5.0,
            overlay.y - 5.0,
            overlay.w + 10.0,
            overlay.h + 10.0,
            BLACK,
        );
        draw_texture_ex(
            &self.map,
            overlay.x,
            overlay.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(overlay.w, overlay.h)),
                ..Default::default()
            },
        );

        let (mx, my) = minimap.project_point(WorldPoint::new(player.rect.x, player.rect.y));
        draw_circle(mx, my, 4.0, Color::from_rgba(255, 80, 80, 255));

        let cam_box = minimap.project_rect(&camera.screen_region());
        draw_rectangle_lines(
            cam_box.x,
            cam_box.y,
            cam_box.w,
            cam_box.h,
            2.0,
            Color::from_rgba(0, 230, 255, 255),
        );
    }

    /// Renders the building entry prompt over the world view.
    pub fn draw_dialogue(&self, prompt: &DialoguePrompt) {
        let box_top = self.screen_h - DIALOGUE_BOX_HEIGHT;
        draw_rectangle(
            0.0,
            box_top,
            self.screen_w,
            DIALOGUE_BOX_HEIGHT,
            Color::from_rgba(20, 20, 20, 190),
        );

        let margin_x = 40.0;
        let max_text_width = self.screen_w - margin_x * 2.0;
        let text = prompt.text();
        let lines = ui::wrap_text_chars(&text, Some(&self.font), 32, max_text_width);

        let mut y = box_top + 56.0;
        for line in &lines {
            self.draw_korean(line, margin_x, y, 32, Color::from_rgba(240, 240, 240, 255));
            y += 40.0;
        }

        let choice_color = Color::from_rgba(220, 220, 220, 255);
        let [choice1, choice2] = DialoguePrompt::choices();
        y += 10.0;
        self.draw_korean(choice1, margin_x, y, 26, choice_color);
        y += 32.0;
        self.draw_korean(choice2, margin_x, y, 26, choice_color);
    }

    /// Renders the encounter screen: title with survival time, HP bar,
    /// player and pursuer sprites, the leave hint, and the transient hit or
    /// death overlays.
    pub fn draw_encounter(&self, encounter: &Encounter, max_health: i32) {
        clear_background(WHITE);

        if encounter.showing_death_banner() {
            self.draw_korean(
                "당신은 좀비에게 잡혀 사망했습니다!",
                self.screen_w / 2.0 - 300.0,
                self.screen_h / 2.0,
                60,
                Color::from_rgba(200, 0, 0, 255),
            );
            return;
        }

        self.draw_korean(
            &format!(
                "{} - 생존 {}s",
                encounter.building(),
                encounter.elapsed_secs()
            ),
            10.0,
            36.0,
            32,
            BLACK,
        );

        ui::draw_health_bar(
            10.0,
            50.0,
            encounter.health(),
            max_health,
            Color::from_rgba(180, 0, 0, 255),
        );
        self.draw_korean(
            &format!("HP: {}", encounter.health()),
            HP_BAR_WIDTH + 20.0,
            68.0,
            32,
            BLACK,
        );

        draw_texture_ex(
            self.player_texture(encounter.facing, encounter.sprite),
            encounter.player.x,
            encounter.player.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(encounter.player.w, encounter.player.h)),
                ..Default::default()
            },
        );
        draw_texture_ex(
            &self.zombie,
            encounter.pursuer.x,
            encounter.pursuer.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(encounter.pursuer.w, encounter.pursuer.h)),
                ..Default::default()
            },
        );

        if encounter.showing_hit_flash() {
            self.draw_korean(
                "-20",
                encounter.player.x,
                encounter.player.y - 40.0,
                60,
                Color::from_rgba(255, 50, 50, 255),
            );
        }

        self.draw_korean(
            "ESC: 건물에서 나가기",
            10.0,
            self.screen_h - 24.0,
            32,
            Color::from_rgba(50, 50, 50, 255),
        );
    }

    /// Renders the intro: background, dark overlay and (once the still delay
    /// has passed) the typed lines in a translucent box, plus the start hint
    /// when typing has finished.
    ///
    /// `lines` pairs each rendered line with its source line index, so the
    /// warning line can use its own styling.
    pub fn draw_intro(&self, lines: &[(String, usize)], show_text: bool, finished: bool) {
        draw_texture_ex(
            &self.intro_bg,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(self.screen_w, self.screen_h)),
                ..Default::default()
            },
        );
        draw_rectangle(
            0.0,
            0.0,
            self.screen_w,
            self.screen_h,
            Color::from_rgba(0, 0, 0, 90),
        );

        if !show_text {
            return;
        }

        let max_width = self.screen_w * 0.75;
        let mut wrapped: Vec<(String, usize)> = Vec::new();
        for (text, idx) in lines {
            let font_size = if *idx == 1 { 26 } else { 32 };
            for line in ui::wrap_text_chars(text, Some(&self.font), font_size, max_width) {
                wrapped.push((line, *idx));
            }
        }

        if !wrapped.is_empty() {
            let line_height = 42.0;
            let total_h = wrapped.len() as f32 * line_height;
            let start_y = self.screen_h * 0.30 - total_h / 2.0;

            let box_w = max_width + 40.0;
            draw_rectangle(
                (self.screen_w - box_w) / 2.0,
                start_y - 20.0,
                box_w,
                total_h + 40.0,
                Color::from_rgba(0, 0, 0, 150),
            );

            let x = (self.screen_w - box_w) / 2.0 + 20.0;
            let mut y = start_y + 28.0;
            for (line, idx) in &wrapped {
                let (font_size, color) = if *idx == 1 {
                    (26, Color::from_rgba(255, 230, 190, 255))
                } else {
                    (32, WHITE)
                };
                self.draw_korean(line, x, y, font_size, color);
                y += line_height;
            }
        }

        if finished {
            let hint = "ENTER를 눌러 게임을 시작합니다.";
            let dims = measure_text(hint, Some(&self.font), 24, 1.0);
            let cx = self.screen_w / 2.0;
            let cy = self.screen_h - 80.0;
            draw_rectangle(
                cx - dims.width / 2.0 - 20.0,
                cy - dims.height - 10.0,
                dims.width + 40.0,
                dims.height + 20.0,
                Color::from_rgba(0, 0, 0, 160),
            );
            self.draw_korean(hint, cx - dims.width / 2.0, cy, 24, Color::from_rgba(255, 255, 180, 255));
        }
    }
}

/// Loads a texture, converting a failure into the fatal asset error.
async fn load_texture_fatal(name: &str) -> CampusResult<Texture2D> {
    load_texture(name)
        .await
        .map_err(|e| CampusError::Asset(format!("{name}: {e}")))
}
