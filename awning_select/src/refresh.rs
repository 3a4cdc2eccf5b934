// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Latest-wins guard for asynchronously populated selects.
//!
//! An async filtering select fires one fetch per keystroke, and responses
//! can land out of order. The guard hands out a token per request; only the
//! token from the most recent `begin` is accepted, so a slow stale response
//! can never clobber the items of a newer query. This is a monotonic
//! counter, not a clock — no host time source is needed.

/// Token identifying one refresh request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RefreshToken(u64);

/// Hands out refresh tokens and accepts only the most recent one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefreshGuard {
    current: u64,
}

impl RefreshGuard {
    /// Creates a guard with no outstanding request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, invalidating every earlier token.
    pub fn begin(&mut self) -> RefreshToken {
        self.current += 1;
        RefreshToken(self.current)
    }

    /// Returns `true` if `token` belongs to the most recent request.
    ///
    /// The caller applies its response (typically via
    /// `OverlayController::set_items`) only on `true`.
    #[must_use]
    pub fn accept(&self, token: RefreshToken) -> bool {
        token.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_latest_token_is_accepted() {
        let mut guard = RefreshGuard::new();
        let token = guard.begin();
        assert!(guard.accept(token));
    }

    #[test]
    fn stale_tokens_are_rejected() {
        let mut guard = RefreshGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        // The slow first response arrives after the second request.
        assert!(!guard.accept(first));
        assert!(guard.accept(second));
    }

    #[test]
    fn out_of_order_arrival_keeps_only_the_newest() {
        let mut guard = RefreshGuard::new();
        let a = guard.begin();
        let b = guard.begin();
        let c = guard.begin();

        assert!(guard.accept(c));
        assert!(!guard.accept(b));
        assert!(!guard.accept(a));
    }
}
