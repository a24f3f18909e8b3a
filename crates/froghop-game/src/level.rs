use serde::{Deserialize, Serialize};

use froghop_core::error::ConfigError;
use froghop_core::geometry::{Rect, Vec2};

use crate::platform::{Platform, PlatformStyle};

/// Terrain tiles are 16x16 source pixels; platform rectangles are laid out
/// in tile multiples.
const TILE_PX: f32 = 16.0;

/// A loaded level: world bounds, spawn point, and the ordered platform list.
/// Immutable once constructed; collision walks the platforms in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    width: f32,
    height: f32,
    spawn: Vec2,
    platforms: Vec<Platform>,
}

impl Level {
    pub fn new(
        width: f32,
        height: f32,
        spawn: Vec2,
        platforms: Vec<Platform>,
    ) -> Result<Self, ConfigError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::DegenerateRect { width, height });
        }
        Ok(Self {
            width,
            height,
            spawn,
            platforms,
        })
    }

    /// The first level: two floating 30x8-tile platforms, spawn up in the
    /// top-left. `width`/`height` are the view dimensions in pixels; the
    /// floor sits at the view bottom.
    pub fn first(width: f32, height: f32) -> Result<Self, ConfigError> {
        let plat = |x, y| {
            Platform::new(
                Rect::new(x, y, TILE_PX * 30.0, TILE_PX * 8.0),
                PlatformStyle::PinkGrass,
            )
        };
        Self::new(
            width,
            height,
            Vec2::new(100.0, 100.0),
            vec![plat(200.0, height - 300.0)?, plat(800.0, height - 500.0)?],
        )
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    /// The ground plane: the bottom of the world.
    pub fn floor_y(&self) -> f32 {
        self.height
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }
}
