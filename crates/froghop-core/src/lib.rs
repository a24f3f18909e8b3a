pub mod error;
pub mod geometry;
pub mod input;
pub mod sprite;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::geometry::Rect;
    use crate::sprite::{BASE_FRAME_PX, ClipLibrary, DirectionalClip, SpriteSheet};

    /// Shorthand rectangle constructor for test fixtures.
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect::new(x, y, width, height)
    }

    /// Build a clip library with the given frame counts (32x32 frames,
    /// identical left/right variants).
    pub fn library_with_counts(idle: u32, run: u32, jump: u32) -> ClipLibrary {
        let both = |frame_count| DirectionalClip {
            left: SpriteSheet {
                frame_count,
                frame_width: BASE_FRAME_PX,
                frame_height: BASE_FRAME_PX,
            },
            right: SpriteSheet {
                frame_count,
                frame_width: BASE_FRAME_PX,
                frame_height: BASE_FRAME_PX,
            },
        };
        ClipLibrary::new(both(idle), both(run), both(jump))
            .expect("test library frame counts must be positive")
    }
}
