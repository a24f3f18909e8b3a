use serde::{Deserialize, Serialize};

use crate::sprite::Facing;

/// The buttons the runtime cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Left,
    Right,
    Jump,
}

/// A discrete button transition delivered by the embedding input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Button),
    Released(Button),
}

/// A movement order for the player, as consumed by `set_move_intent`.
///
/// `Up` is a one-shot jump trigger and never persists; the persisted
/// horizontal state is [`MoveDir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveIntent {
    Stopped,
    Left,
    Right,
    Up,
}

/// Persisted horizontal movement state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDir {
    #[default]
    Stopped,
    Left,
    Right,
}

impl MoveDir {
    /// The facing this direction implies, if any. `Stopped` implies none;
    /// facing is tracked separately so it survives key release.
    pub fn facing(self) -> Option<Facing> {
        match self {
            MoveDir::Left => Some(Facing::Left),
            MoveDir::Right => Some(Facing::Right),
            MoveDir::Stopped => None,
        }
    }
}

/// Map a raw button transition to a movement order.
///
/// Releasing either horizontal button stops the player, even if the other
/// is still held. Releasing jump means nothing.
pub fn intent_for(event: InputEvent) -> Option<MoveIntent> {
    match event {
        InputEvent::Pressed(Button::Left) => Some(MoveIntent::Left),
        InputEvent::Pressed(Button::Right) => Some(MoveIntent::Right),
        InputEvent::Pressed(Button::Jump) => Some(MoveIntent::Up),
        InputEvent::Released(Button::Left) | InputEvent::Released(Button::Right) => {
            Some(MoveIntent::Stopped)
        },
        InputEvent::Released(Button::Jump) => None,
    }
}
