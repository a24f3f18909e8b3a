use froghop_core::error::ConfigError;
use froghop_core::geometry::Rect;
use froghop_core::input::{InputEvent, intent_for};
use froghop_core::sprite::{ClipId, ClipLibrary};

use crate::config::GameConfig;
use crate::level::Level;
use crate::platform::Platform;
use crate::player::Player;

/// Everything the renderer needs to draw the player this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    /// Destination rectangle in world pixels.
    pub rect: Rect,
    pub clip: ClipId,
    pub frame_index: u32,
    /// Source sub-rectangle within the clip's strip.
    pub src: Rect,
}

/// A running game: config, clip metadata, the level, and the player.
///
/// The embedding loop feeds it raw input events and calls [`Session::tick`]
/// at a fixed rate; between ticks it reads [`Session::player_view`] and
/// [`Session::platforms`] to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    config: GameConfig,
    library: ClipLibrary,
    level: Level,
    player: Player,
    tick: u64,
}

impl Session {
    /// Validates `config` up front; a degenerate tunable fails here instead
    /// of corrupting the simulation later.
    pub fn new(config: GameConfig, library: ClipLibrary, level: Level) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = Player::spawn(&config, level.spawn());
        tracing::info!(
            width = level.width(),
            height = level.height(),
            platforms = level.platforms().len(),
            "session started"
        );
        Ok(Self {
            config,
            library,
            level,
            player,
            tick: 0,
        })
    }

    /// Route a raw button transition to the player. Events with no movement
    /// meaning (jump release) are dropped here.
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(intent) = intent_for(event) {
            self.player.set_move_intent(intent);
        }
    }

    /// Advance the simulation by one fixed tick.
    pub fn tick(&mut self) {
        self.player.update(&self.level, &self.library);
        self.tick += 1;
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn platforms(&self) -> &[Platform] {
        self.level.platforms()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_view(&self) -> PlayerView {
        let clip = self.player.clip();
        let frame_index = self.player.frame_index();
        PlayerView {
            rect: self.player.rect(),
            clip,
            frame_index,
            src: self.library.frame_src(clip, frame_index),
        }
    }
}
