use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Rect;

/// The named animation clips a player can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClipKind {
    Idle,
    Run,
    Jump,
}

/// Horizontal direction used to select a clip variant and sprite orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Identifies one sprite strip: a clip plus its directional variant.
///
/// Compared by value. Whether an animation switch resets the frame index is
/// decided entirely by this identity, never by image-handle identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipId {
    pub kind: ClipKind,
    pub facing: Facing,
}

impl ClipId {
    pub fn new(kind: ClipKind, facing: Facing) -> Self {
        Self { kind, facing }
    }
}

/// Layout of one horizontal sprite strip: frame count and per-frame source
/// size in pixels. The drawable image itself stays with the renderer, keyed
/// by `ClipId`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub frame_count: u32,
    pub frame_width: f32,
    pub frame_height: f32,
}

/// The left/right variants of one clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalClip {
    pub left: SpriteSheet,
    pub right: SpriteSheet,
}

/// Frame metadata for every clip × facing the player can show.
///
/// Validated at construction: a zero-frame clip fails fast instead of
/// producing a degenerate animation cycle at run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipLibrary {
    idle: DirectionalClip,
    run: DirectionalClip,
    jump: DirectionalClip,
}

/// Source frame size of the stock player strips, in pixels.
pub const BASE_FRAME_PX: f32 = 32.0;

impl ClipLibrary {
    pub fn new(
        idle: DirectionalClip,
        run: DirectionalClip,
        jump: DirectionalClip,
    ) -> Result<Self, ConfigError> {
        for (name, clip) in [("idle", &idle), ("run", &run), ("jump", &jump)] {
            for (facing, sheet) in [("left", clip.left), ("right", clip.right)] {
                if sheet.frame_count == 0 {
                    return Err(ConfigError::EmptyClip {
                        clip: format!("{name}/{facing}"),
                    });
                }
            }
        }
        Ok(Self { idle, run, jump })
    }

    /// The Ninja Frog strips shipped with the stock assets: 32x32 frames,
    /// idle 11 frames, run 12, jump 1.
    pub fn ninja_frog() -> Self {
        let sheet = |frame_count| SpriteSheet {
            frame_count,
            frame_width: BASE_FRAME_PX,
            frame_height: BASE_FRAME_PX,
        };
        let both = |frame_count| DirectionalClip {
            left: sheet(frame_count),
            right: sheet(frame_count),
        };
        Self {
            idle: both(11),
            run: both(12),
            jump: both(1),
        }
    }

    pub fn sheet(&self, clip: ClipId) -> &SpriteSheet {
        let pair = match clip.kind {
            ClipKind::Idle => &self.idle,
            ClipKind::Run => &self.run,
            ClipKind::Jump => &self.jump,
        };
        match clip.facing {
            Facing::Left => &pair.left,
            Facing::Right => &pair.right,
        }
    }

    pub fn frame_count(&self, clip: ClipId) -> u32 {
        self.sheet(clip).frame_count
    }

    /// The sub-rectangle of the strip to blit for `frame`. Frames are laid
    /// out in a single horizontal row.
    pub fn frame_src(&self, clip: ClipId, frame: u32) -> Rect {
        let sheet = self.sheet(clip);
        Rect::new(
            sheet.frame_width * frame as f32,
            0.0,
            sheet.frame_width,
            sheet.frame_height,
        )
    }
}
