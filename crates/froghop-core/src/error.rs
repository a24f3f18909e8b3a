use thiserror::Error;

/// Construction-time configuration failures.
///
/// The runtime has no fallible operations once built; everything that can go
/// wrong is caught here, before the first tick.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// An animation clip was registered with no frames. Ticking it would
    /// make the frame-index modulo degenerate.
    #[error("animation clip '{clip}' has zero frames")]
    EmptyClip { clip: String },

    /// A platform or level rectangle with a non-positive dimension.
    #[error("rectangle has non-positive dimensions {width}x{height}")]
    DegenerateRect { width: f32, height: f32 },

    /// A tunable that must be strictly positive was not.
    #[error("'{field}' must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}
