// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input types for the overlay controller.

/// The fixed key set the overlay controller responds to.
///
/// Anything outside this set is ignored by the controller with no side
/// effect; hosts translating raw platform key codes can use
/// [`Key::from_code`] and forward unrecognized codes untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow up: retreat the focus cursor (wrapping).
    Up,
    /// Arrow down: advance the focus cursor (wrapping), or open the list.
    Down,
    /// Commit the focused item.
    Enter,
    /// Dismiss the list without committing.
    Escape,
    /// Commit the focused item and let document focus move on.
    Tab,
}

impl Key {
    /// Maps a DOM-style `keyCode` to a [`Key`], or `None` for any other code.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            9 => Some(Self::Tab),
            13 => Some(Self::Enter),
            27 => Some(Self::Escape),
            38 => Some(Self::Up),
            40 => Some(Self::Down),
            _ => None,
        }
    }
}

/// Verdict returned from event entry points.
///
/// [`Propagation::Stop`] means the controller responded to the event and the
/// host must stop further propagation (and suppress the default action, for
/// capture-phase and wheel events). [`Propagation::Continue`] means the event
/// was not consumed and must keep flowing, so surrounding components such as
/// dialogs retain their own key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Propagation {
    /// The event was not consumed; let it propagate normally.
    Continue,
    /// The event was consumed; stop propagation.
    Stop,
}

impl Propagation {
    /// Returns `true` for [`Propagation::Stop`].
    #[must_use]
    pub const fn is_stopped(self) -> bool {
        matches!(self, Self::Stop)
    }
}
