use serde::{Deserialize, Serialize};

use froghop_core::error::ConfigError;
use froghop_core::geometry::Rect;

/// Tile theme a platform is drawn with. Render-only: collision sees the
/// bounding box and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformStyle {
    #[default]
    PinkGrass,
    GreenGrass,
    BrownGrass,
    Wood,
    Brick,
    Gray,
    Green,
}

/// A static platform: an axis-aligned rectangle fixed at level load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    rect: Rect,
    style: PlatformStyle,
}

impl Platform {
    /// Rejects degenerate rectangles so the collision math never sees one.
    pub fn new(rect: Rect, style: PlatformStyle) -> Result<Self, ConfigError> {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return Err(ConfigError::DegenerateRect {
                width: rect.width,
                height: rect.height,
            });
        }
        Ok(Self { rect, style })
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn style(&self) -> PlatformStyle {
        self.style
    }
}
