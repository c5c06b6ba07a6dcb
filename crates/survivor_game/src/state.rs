//! The whole session state and the per-update rules that drive it.
//!
//! [`GameState`] needs no window: the runner feeds it [`InputEvent`]s and the
//! held-key snapshot, calls [`GameState::update`] once per fixed tick and asks
//! it to fill a [`DrawList`] once per rendered frame.

use glam::Vec2;
use survivor_core::{
    Color, DrawList, InputEvent, InputState, KeyCode, MouseButton, Rect, SpriteDraw, SpriteFrame,
    View2D,
};

use crate::aim::{angle_degrees, dashed_segments, direction_from_degrees};
use crate::animation::{AnimationSet, Pose};
use crate::bullet::Bullets;
use crate::camera::{Camera, CameraMode};
use crate::config::GameConfig;
use crate::player::{MoveKeys, Player};
use crate::reload::ReloadTimer;

const BULLET_COLOR: Color = Color::YELLOW;
const AIM_COLOR: Color = Color::RED;

pub struct GameState {
    config: GameConfig,
    player: Player,
    bullets: Bullets,
    camera: Camera,
    reload: ReloadTimer,
    animations: AnimationSet,
    background: SpriteFrame,
    /// Last cursor position in window pixels.
    cursor_screen: Vec2,
    window_size: Vec2,
    running: bool,
}

impl GameState {
    pub fn new(config: GameConfig, animations: AnimationSet, background: SpriteFrame) -> Self {
        let player = Player::new(config.world_center(), config.movement_speed);
        let camera = Camera::new(config.world_size, config.zoom_factor);
        let reload = ReloadTimer::new(config.reload_duration);
        Self {
            cursor_screen: config.world_center(),
            window_size: config.world_size,
            player,
            bullets: Bullets::new(),
            camera,
            reload,
            animations,
            background,
            running: true,
            config,
        }
    }

    /// React to one discrete event.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::CloseRequested => {
                log::info!("close requested");
                self.running = false;
            }
            InputEvent::KeyPressed(KeyCode::KeyR) => {
                self.player.is_reloading = true;
                self.reload.restart();
            }
            InputEvent::KeyReleased(KeyCode::KeyR) => {
                self.player.is_reloading = false;
            }
            InputEvent::MousePressed(MouseButton::Left) => self.fire(),
            InputEvent::MousePressed(MouseButton::Right) => self.set_aiming(true),
            InputEvent::MouseReleased(MouseButton::Right) => self.set_aiming(false),
            InputEvent::CursorMoved { x, y } => {
                self.cursor_screen = Vec2::new(x as f32, y as f32);
            }
            InputEvent::Resized { width, height } => self.set_window_size(width, height),
            _ => {}
        }
    }

    /// Advance the simulation by one tick of `dt` seconds.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.player.rotation_deg = angle_degrees(self.player.position, self.cursor_world());

        if !self.player.is_reloading {
            let bounds = self.world_rect();
            let keys = MoveKeys {
                up: input.is_key_pressed(KeyCode::KeyW),
                down: input.is_key_pressed(KeyCode::KeyS),
                left: input.is_key_pressed(KeyCode::KeyA),
                right: input.is_key_pressed(KeyCode::KeyD),
            };
            let moved = self.player.step(keys, bounds);
            self.player.is_moving = moved;
            if moved {
                // one tick per update, even when both axes moved
                self.player.advance_frame(self.animations.moving.len());
                self.player.set_pose(Pose::Moving);
            } else {
                self.player.set_pose(Pose::Idle);
            }
        } else {
            self.player.is_moving = false;
            self.reload.tick(dt);
            if self.reload.is_finished() {
                log::debug!("reload finished after {:.3}s", self.reload.elapsed());
                self.player.is_reloading = false;
                self.player.set_pose(Pose::Idle);
            } else {
                self.player.advance_frame(self.animations.reloading.len());
                self.player.set_pose(Pose::Reloading);
            }
        }

        self.bullets.advance(self.config.bullet_speed);
        let culled = self.bullets.retain_within(self.camera.visible_limit());
        if culled > 0 {
            log::trace!("culled {culled} bullets, {} left", self.bullets.len());
        }
    }

    /// Fill `list` with this frame's draw commands, back to front.
    pub fn render(&self, list: &mut DrawList) {
        list.clear(Color::BLACK);

        list.sprite(SpriteDraw {
            texture: self.background.texture,
            center: self.config.world_center(),
            size: self.config.world_size,
            rotation_deg: 0.0,
            tint: Color::WHITE,
        });

        for bullet in &self.bullets {
            list.circle(bullet.position, self.config.bullet_radius, BULLET_COLOR);
        }

        for (from, to) in dashed_segments(
            self.player.position,
            self.cursor_world(),
            self.config.aim_dash_length,
            self.config.aim_dash_gap,
        ) {
            list.line(from, to, self.config.aim_line_thickness, AIM_COLOR);
        }

        list.sprite(SpriteDraw::from_frame(
            self.current_sprite(),
            self.player.position,
            self.config.player_scale,
            self.player.rotation_deg,
        ));
    }

    fn fire(&mut self) {
        let angle = angle_degrees(self.player.position, self.cursor_world());
        self.bullets.spawn(self.player.position, direction_from_degrees(angle));
        log::trace!("fired at {angle:.1}°, {} bullets live", self.bullets.len());
    }

    fn set_aiming(&mut self, aiming: bool) {
        self.player.is_aiming = aiming;
        self.camera.set_mode(if aiming {
            CameraMode::Zoomed
        } else {
            CameraMode::Normal
        });
    }

    /// Window size in pixels, used to map the cursor into the world.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = Vec2::new(width as f32, height as f32);
    }

    fn world_rect(&self) -> Rect {
        Rect::new(Vec2::ZERO, self.config.world_size)
    }

    /// Cursor mapped through the active view.
    pub fn cursor_world(&self) -> Vec2 {
        self.camera
            .active()
            .screen_to_world(self.cursor_screen, self.window_size)
    }

    /// Frame the player sprite shows right now.
    pub fn current_sprite(&self) -> SpriteFrame {
        self.animations
            .frame(self.player.pose(), self.player.current_frame)
    }

    pub fn view(&self) -> View2D {
        *self.camera.active()
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera.mode()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn bullets(&self) -> &Bullets {
        &self.bullets
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use survivor_core::{DrawCommand, FrameSet, TextureId};

    use super::*;

    const DT: f32 = 0.001;
    const EPS: f32 = 1e-4;

    fn frames(first_id: u32) -> FrameSet {
        let frames = (0..4)
            .map(|i| SpriteFrame::new(TextureId(first_id + i), Vec2::new(200.0, 120.0)))
            .collect();
        FrameSet::new(frames).unwrap()
    }

    fn game_with(config: GameConfig) -> GameState {
        let animations = AnimationSet::new(frames(10), frames(20), frames(30));
        let background = SpriteFrame::new(TextureId(0), Vec2::new(64.0, 64.0));
        GameState::new(config, animations, background)
    }

    fn game() -> GameState {
        game_with(GameConfig::default())
    }

    fn hold(keys: &[KeyCode]) -> InputState {
        let mut input = InputState::new();
        for &key in keys {
            input.record_key(key, true, false);
        }
        input
    }

    fn point_at(game: &mut GameState, x: f32, y: f32) {
        game.handle_input(&InputEvent::CursorMoved {
            x: x as f64,
            y: y as f64,
        });
    }

    #[test]
    fn holding_w_for_one_update() {
        let mut game = game();
        game.update(&hold(&[KeyCode::KeyW]), DT);

        let p = game.player();
        assert!((p.position.x - 500.0).abs() < EPS);
        assert!((p.position.y - 399.95).abs() < EPS);
        assert!(p.is_moving);
        assert_eq!(game.current_sprite().texture, TextureId(11));
    }

    #[test]
    fn idle_shows_idle_frame_without_advancing() {
        let mut game = game();
        game.update(&InputState::new(), DT);
        game.update(&InputState::new(), DT);
        assert!(!game.player().is_moving);
        assert_eq!(game.player().current_frame, 0);
        assert_eq!(game.current_sprite().texture, TextureId(20));
    }

    #[test]
    fn diagonal_movement_advances_frame_once() {
        let mut game = game();
        game.update(&hold(&[KeyCode::KeyW, KeyCode::KeyD]), DT);
        assert_eq!(game.player().current_frame, 1);
        let p = game.player().position;
        assert!((p - Vec2::new(500.05, 399.95)).length() < EPS);
    }

    #[test]
    fn player_stays_inside_world() {
        let mut game = game_with(GameConfig {
            movement_speed: 37.0,
            ..Default::default()
        });
        let corners = [
            [KeyCode::KeyW, KeyCode::KeyA],
            [KeyCode::KeyS, KeyCode::KeyD],
            [KeyCode::KeyW, KeyCode::KeyD],
            [KeyCode::KeyS, KeyCode::KeyA],
        ];
        for keys in corners {
            let input = hold(&keys);
            for _ in 0..40 {
                game.update(&input, DT);
                let p = game.player().position;
                assert!((0.0..=1000.0).contains(&p.x), "x out of range: {p}");
                assert!((0.0..=800.0).contains(&p.y), "y out of range: {p}");
            }
        }
        // parked in the bottom-left corner, pushing further does nothing
        game.update(&hold(&[KeyCode::KeyS, KeyCode::KeyA]), DT);
        assert!(!game.player().is_moving);
        assert_eq!(game.player().position, Vec2::new(0.0, 800.0));
    }

    #[test]
    fn frame_index_stays_in_range() {
        let mut game = game();
        let input = hold(&[KeyCode::KeyD]);
        for _ in 0..37 {
            game.update(&input, DT);
            assert!(game.player().current_frame < 4);
        }
        game.handle_input(&InputEvent::KeyPressed(KeyCode::KeyR));
        for _ in 0..13 {
            game.update(&input, DT);
            assert!(game.player().current_frame < 4);
        }
    }

    #[test]
    fn clicking_right_of_player_fires_along_x() {
        let mut game = game();
        point_at(&mut game, 600.0, 400.0);
        game.handle_input(&InputEvent::MousePressed(MouseButton::Left));

        let bullet = game.bullets().as_slice()[0];
        assert_eq!(bullet.position, Vec2::new(500.0, 400.0));
        assert!((bullet.direction - Vec2::X).length() < 1e-5);
    }

    #[test]
    fn each_click_appends_one_bullet_in_order() {
        let mut game = game();
        let targets = [(600.0, 400.0), (500.0, 100.0), (200.0, 700.0), (900.0, 800.0)];
        for (i, &(x, y)) in targets.iter().enumerate() {
            game.player_mut().position = Vec2::new(100.0 + i as f32, 400.0);
            point_at(&mut game, x, y);
            game.handle_input(&InputEvent::MousePressed(MouseButton::Left));
        }

        let bullets = game.bullets().as_slice();
        assert_eq!(bullets.len(), targets.len());
        for (i, (bullet, &(x, y))) in bullets.iter().zip(&targets).enumerate() {
            let start = Vec2::new(100.0 + i as f32, 400.0);
            assert_eq!(bullet.position, start);
            let theta = (y - start.y).atan2(x - start.x);
            assert!((bullet.direction - Vec2::new(theta.cos(), theta.sin())).length() < 1e-5);
        }
    }

    #[test]
    fn releasing_r_ends_reload_immediately() {
        let mut game = game();
        game.handle_input(&InputEvent::KeyPressed(KeyCode::KeyR));
        assert!(game.player().is_reloading);

        for _ in 0..50 {
            game.update(&InputState::new(), DT);
        }
        assert!(game.player().is_reloading);
        assert_eq!(game.player().pose(), Pose::Reloading);

        game.handle_input(&InputEvent::KeyReleased(KeyCode::KeyR));
        assert!(!game.player().is_reloading);
    }

    #[test]
    fn reload_expires_on_its_own() {
        let mut game = game();
        game.handle_input(&InputEvent::KeyPressed(KeyCode::KeyR));
        for _ in 0..99 {
            game.update(&InputState::new(), DT);
        }
        assert!(game.player().is_reloading);
        assert_eq!(game.player().pose(), Pose::Reloading);

        // the 100th tick reaches 0.1 s
        game.update(&InputState::new(), DT);
        assert!(!game.player().is_reloading);
        assert_eq!(game.player().pose(), Pose::Idle);
    }

    #[test]
    fn movement_resumes_after_reload_expires() {
        let mut game = game();
        let w = hold(&[KeyCode::KeyW]);
        game.handle_input(&InputEvent::KeyPressed(KeyCode::KeyR));
        for _ in 0..100 {
            game.update(&w, DT);
        }
        assert!(!game.player().is_reloading);
        assert_eq!(game.player().position, Vec2::new(500.0, 400.0));

        game.update(&w, DT);
        assert!(game.player().is_moving);
        assert_eq!(game.player().pose(), Pose::Moving);
        assert!((game.player().position.y - 399.95).abs() < EPS);
    }

    #[test]
    fn reloading_clears_the_moving_flag() {
        let mut game = game();
        let w = hold(&[KeyCode::KeyW]);
        game.update(&w, DT);
        assert!(game.player().is_moving);

        game.handle_input(&InputEvent::KeyPressed(KeyCode::KeyR));
        game.update(&w, DT);
        assert!(game.player().is_reloading);
        assert!(!game.player().is_moving);
        assert_eq!(game.player().pose(), Pose::Reloading);
    }

    #[test]
    fn cursor_maps_through_the_seeded_window_size() {
        let mut game = game();
        game.set_window_size(500, 400);
        point_at(&mut game, 250.0, 100.0);
        assert!((game.cursor_world() - Vec2::new(500.0, 200.0)).length() < EPS);
    }

    #[test]
    fn reloading_blocks_movement() {
        let mut game = game();
        game.handle_input(&InputEvent::KeyPressed(KeyCode::KeyR));
        game.update(&hold(&[KeyCode::KeyW]), DT);
        assert_eq!(game.player().position, Vec2::new(500.0, 400.0));
        assert_eq!(game.current_sprite().texture, TextureId(31));
    }

    #[test]
    fn bullets_leaving_the_zoomed_view_are_culled() {
        let mut game = game_with(GameConfig {
            bullet_speed: 250.0,
            ..Default::default()
        });
        point_at(&mut game, 1000.0, 400.0);
        game.handle_input(&InputEvent::MousePressed(MouseButton::Left));

        // x = 500 + 4 * 250 = 1500, on the edge of the zoomed view
        for _ in 0..4 {
            game.update(&InputState::new(), DT);
        }
        assert_eq!(game.bullets().len(), 1);

        game.update(&InputState::new(), DT);
        assert!(game.bullets().is_empty());
    }

    #[test]
    fn right_button_toggles_zoom() {
        let mut game = game();
        game.handle_input(&InputEvent::MousePressed(MouseButton::Right));
        assert!(game.player().is_aiming);
        assert_eq!(game.camera_mode(), CameraMode::Zoomed);
        assert_eq!(game.view().size, Vec2::new(2000.0, 1600.0));

        // the window edge now maps further out
        point_at(&mut game, 1000.0, 400.0);
        assert!((game.cursor_world() - Vec2::new(1500.0, 400.0)).length() < EPS);

        game.handle_input(&InputEvent::MouseReleased(MouseButton::Right));
        assert!(!game.player().is_aiming);
        assert_eq!(game.camera_mode(), CameraMode::Normal);
        assert!((game.cursor_world() - Vec2::new(1000.0, 400.0)).length() < EPS);
    }

    #[test]
    fn facing_follows_cursor() {
        let mut game = game();
        point_at(&mut game, 500.0, 600.0);
        game.update(&InputState::new(), DT);
        assert!((game.player().rotation_deg - 90.0).abs() < 1e-3);
    }

    #[test]
    fn render_draws_background_bullets_aim_then_player() {
        let mut game = game();
        point_at(&mut game, 545.0, 400.0);
        game.handle_input(&InputEvent::MousePressed(MouseButton::Left));
        game.handle_input(&InputEvent::MousePressed(MouseButton::Left));

        let mut list = DrawList::new();
        game.render(&mut list);
        let cmds = list.commands();

        match cmds[0] {
            DrawCommand::Sprite(bg) => {
                assert_eq!(bg.texture, TextureId(0));
                assert_eq!(bg.size, Vec2::new(1000.0, 800.0));
                assert_eq!(bg.center, Vec2::new(500.0, 400.0));
            }
            other => panic!("expected background, got {other:?}"),
        }
        assert!(matches!(
            cmds[1],
            DrawCommand::Circle { radius, color, .. } if radius == 4.0 && color == Color::YELLOW
        ));
        assert!(matches!(cmds[2], DrawCommand::Circle { .. }));
        // 45 units with 10/10 dashes
        let lines = cmds
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { color, .. } if *color == Color::RED))
            .count();
        assert_eq!(lines, 3);
        match cmds[cmds.len() - 1] {
            DrawCommand::Sprite(p) => {
                assert_eq!(p.texture, TextureId(20));
                assert_eq!(p.size, Vec2::new(100.0, 60.0));
                assert_eq!(p.center, Vec2::new(500.0, 400.0));
            }
            other => panic!("expected player sprite, got {other:?}"),
        }
        assert_eq!(cmds.len(), 1 + 2 + 3 + 1);
    }

    #[test]
    fn close_request_stops_the_game() {
        let mut game = game();
        assert!(game.is_running());
        game.handle_input(&InputEvent::CloseRequested);
        assert!(!game.is_running());
    }
}
