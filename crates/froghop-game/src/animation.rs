use froghop_core::sprite::{ClipId, ClipLibrary};

/// Frame-indexed animation state for one entity.
///
/// Advancement is throttled: the frame index moves one step every
/// `frames_per_advance` ticks and wraps within the active clip's frame
/// count. Switching clips compares `ClipId` by value; switching to the clip
/// already active keeps the current frame and throttle counter, which is
/// what stops held-key auto-repeat from restarting the animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    active: ClipId,
    frame_index: u32,
    frames_per_advance: u32,
    ticks_since_advance: u32,
}

impl AnimationState {
    /// `frames_per_advance` must be >= 1; config validation enforces this
    /// before any state is built.
    pub fn new(initial: ClipId, frames_per_advance: u32) -> Self {
        Self {
            active: initial,
            frame_index: 0,
            frames_per_advance,
            ticks_since_advance: 0,
        }
    }

    pub fn active_clip(&self) -> ClipId {
        self.active
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// Advance one tick. The frame index only moves when the throttle
    /// counter fills.
    pub fn tick(&mut self, library: &ClipLibrary) {
        self.ticks_since_advance += 1;
        if self.ticks_since_advance == self.frames_per_advance {
            self.frame_index = (self.frame_index + 1) % library.frame_count(self.active);
            self.ticks_since_advance = 0;
        }
    }

    /// Switch to `target`. No-op when `target` equals the active clip;
    /// otherwise the frame index and throttle counter reset to 0.
    pub fn switch(&mut self, target: ClipId) {
        if self.active != target {
            self.active = target;
            self.frame_index = 0;
            self.ticks_since_advance = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use froghop_core::sprite::{ClipKind, Facing};
    use froghop_core::test_helpers::library_with_counts;

    fn run_right() -> ClipId {
        ClipId::new(ClipKind::Run, Facing::Right)
    }

    #[test]
    fn frame_advances_every_third_tick() {
        let lib = library_with_counts(11, 12, 1);
        let mut anim = AnimationState::new(run_right(), 3);

        anim.tick(&lib);
        anim.tick(&lib);
        assert_eq!(anim.frame_index(), 0, "two ticks must not advance yet");
        anim.tick(&lib);
        assert_eq!(anim.frame_index(), 1, "third tick advances the frame");
        for _ in 0..3 {
            anim.tick(&lib);
        }
        assert_eq!(anim.frame_index(), 2);
    }

    #[test]
    fn frame_index_wraps_within_clip() {
        let lib = library_with_counts(11, 12, 1);
        let mut anim = AnimationState::new(run_right(), 1);

        for _ in 0..12 {
            anim.tick(&lib);
        }
        assert_eq!(anim.frame_index(), 0, "12-frame run clip must wrap to 0");
    }

    #[test]
    fn frame_index_stays_in_range() {
        let lib = library_with_counts(11, 12, 1);
        let mut anim = AnimationState::new(run_right(), 2);
        for _ in 0..100 {
            anim.tick(&lib);
            assert!(anim.frame_index() < lib.frame_count(anim.active_clip()));
        }
    }

    #[test]
    fn single_frame_clip_never_leaves_frame_zero() {
        let lib = library_with_counts(11, 12, 1);
        let mut anim = AnimationState::new(ClipId::new(ClipKind::Jump, Facing::Left), 3);
        for _ in 0..30 {
            anim.tick(&lib);
            assert_eq!(anim.frame_index(), 0);
        }
    }

    #[test]
    fn switch_to_same_clip_preserves_progress() {
        let lib = library_with_counts(11, 12, 1);
        let mut anim = AnimationState::new(run_right(), 3);
        for _ in 0..4 {
            anim.tick(&lib);
        }
        let frame = anim.frame_index();
        assert_eq!(frame, 1);

        anim.switch(run_right());
        assert_eq!(anim.frame_index(), frame, "same-clip switch must not reset");
        anim.tick(&lib);
        anim.tick(&lib);
        assert_eq!(
            anim.frame_index(),
            frame + 1,
            "throttle counter must carry across a same-clip switch"
        );
    }

    #[test]
    fn switch_to_other_facing_resets() {
        let lib = library_with_counts(11, 12, 1);
        let mut anim = AnimationState::new(run_right(), 3);
        for _ in 0..6 {
            anim.tick(&lib);
        }
        assert_eq!(anim.frame_index(), 2);

        anim.switch(ClipId::new(ClipKind::Run, Facing::Left));
        assert_eq!(anim.frame_index(), 0, "facing change resets the frame");
        assert_eq!(anim.active_clip(), ClipId::new(ClipKind::Run, Facing::Left));
    }

    #[test]
    fn switch_to_other_kind_resets() {
        let lib = library_with_counts(11, 12, 1);
        let mut anim = AnimationState::new(run_right(), 3);
        for _ in 0..6 {
            anim.tick(&lib);
        }

        anim.switch(ClipId::new(ClipKind::Idle, Facing::Right));
        assert_eq!(anim.frame_index(), 0);
    }

    #[test]
    fn switch_after_shrinking_clip_keeps_index_in_range() {
        // Run (12 frames) at index 10, then switch to idle (11 frames):
        // the reset keeps the invariant regardless of the new count.
        let lib = library_with_counts(2, 12, 1);
        let mut anim = AnimationState::new(run_right(), 1);
        for _ in 0..10 {
            anim.tick(&lib);
        }
        assert_eq!(anim.frame_index(), 10);
        anim.switch(ClipId::new(ClipKind::Idle, Facing::Right));
        assert!(anim.frame_index() < lib.frame_count(anim.active_clip()));
    }
}
