use froghop_core::geometry::{Rect, Vec2};
use froghop_core::input::{MoveDir, MoveIntent};
use froghop_core::sprite::{ClipId, ClipKind, ClipLibrary, Facing};

use crate::animation::AnimationState;
use crate::collision::{Contact, resolve_ground, resolve_platform};
use crate::config::GameConfig;
use crate::level::Level;

/// Downward velocity at spawn (pixels/tick); the player drops into the
/// level rather than starting at rest.
const SPAWN_FALL_SPEED: f32 = 5.0;

/// The player character: position, velocity, movement intent, jump state,
/// and the embedded animation machine. Created once per session and mutated
/// only by [`Player::update`] and [`Player::set_move_intent`].
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) size: f32,
    pub(crate) gravity: f32,
    pub(crate) jump_impulse: f32,
    pub(crate) move_dir: MoveDir,
    /// Last non-stopped horizontal direction. Selects the idle/jump clip
    /// variant and must survive `move_dir` resetting to `Stopped`.
    pub(crate) facing: Facing,
    pub(crate) can_jump: bool,
    pub(crate) animation: AnimationState,
}

impl Player {
    pub fn spawn(config: &GameConfig, at: Vec2) -> Self {
        Self {
            position: at,
            velocity: Vec2::new(config.physics.move_speed, SPAWN_FALL_SPEED),
            size: config.player_size(),
            gravity: config.physics.gravity,
            jump_impulse: config.physics.jump_impulse,
            move_dir: MoveDir::Stopped,
            facing: Facing::Right,
            can_jump: false,
            animation: AnimationState::new(
                ClipId::new(ClipKind::Idle, Facing::Right),
                config.animation.frames_per_advance,
            ),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size, self.size)
    }

    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn move_dir(&self) -> MoveDir {
        self.move_dir
    }

    pub fn clip(&self) -> ClipId {
        self.animation.active_clip()
    }

    pub fn frame_index(&self) -> u32 {
        self.animation.frame_index()
    }

    /// Advance one tick: animation throttle, then semi-implicit Euler
    /// integration, then collision against the ground plane and every
    /// platform in list order.
    ///
    /// Platforms are resolved independently, so with overlapping platforms a
    /// later one can override an earlier one's correction. Levels are
    /// expected not to overlap platforms; the behavior is kept as-is.
    pub fn update(&mut self, level: &Level, library: &ClipLibrary) {
        self.animation.tick(library);

        // Position moves at the previous tick's velocity, then gravity
        // accumulates for the next. The order is load-bearing.
        self.position.y += self.velocity.y;
        self.velocity.y += self.gravity;

        match self.move_dir {
            MoveDir::Left => self.position.x -= self.velocity.x,
            MoveDir::Right => self.position.x += self.velocity.x,
            MoveDir::Stopped => {},
        }

        self.resolve_collisions(level);
    }

    fn resolve_collisions(&mut self, level: &Level) {
        let mut rect = self.rect();

        if resolve_ground(&mut rect, &mut self.velocity.y, level.floor_y()) {
            self.can_jump = true;
        }

        for platform in level.platforms() {
            match resolve_platform(&mut rect, &mut self.velocity.y, platform.rect()) {
                Contact::Landed => {
                    self.can_jump = true;
                    // Landing always switches to the run clip, whatever the
                    // horizontal intent.
                    self.animation.switch(ClipId::new(ClipKind::Run, self.facing));
                },
                Contact::Ceiling | Contact::Side | Contact::None => {},
            }
        }

        self.position = rect.top_left();
    }

    /// Apply a movement order. `Left`/`Right` persist and update facing;
    /// `Stopped` persists but leaves facing alone; `Up` is consumed
    /// immediately as a jump attempt.
    pub fn set_move_intent(&mut self, intent: MoveIntent) {
        match intent {
            MoveIntent::Left => {
                self.move_dir = MoveDir::Left;
                self.facing = Facing::Left;
                self.animation.switch(ClipId::new(ClipKind::Run, Facing::Left));
            },
            MoveIntent::Right => {
                self.move_dir = MoveDir::Right;
                self.facing = Facing::Right;
                self.animation.switch(ClipId::new(ClipKind::Run, Facing::Right));
            },
            MoveIntent::Up => self.jump(),
            MoveIntent::Stopped => {
                self.move_dir = MoveDir::Stopped;
                self.animation.switch(ClipId::new(ClipKind::Idle, self.facing));
            },
        }
    }

    /// Single-shot: only fires when the player landed since the last jump.
    /// There is no jump buffering; a denied attempt changes nothing.
    fn jump(&mut self) {
        if self.can_jump {
            self.can_jump = false;
            self.velocity.y = -self.jump_impulse;
            self.animation.switch(ClipId::new(ClipKind::Jump, self.facing));
        }
    }
}
