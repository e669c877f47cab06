//! diagnostics::policy — per-kind handling of reported diagnostics.
//!
//! Purpose
//! -------
//! Decide, for each [`SfErrorKind`], whether a diagnostic is dropped, handed
//! to the configured sink, or turned into an error by checked entry points.
//!
//! Conventions
//! -----------
//! - The policy is a plain value (`Copy`), stored inside the evaluation
//!   options; there is no global error state.
//! - The default policy warns on every kind.
use crate::diagnostics::errors::SfErrorKind;

/// What to do with a diagnostic of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SfErrorAction {
    /// Drop the diagnostic.
    Ignore,
    /// Forward the diagnostic to the sink.
    #[default]
    Warn,
    /// Forward the diagnostic and fail checked evaluations.
    Raise,
}

impl std::str::FromStr for SfErrorAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(SfErrorAction::Ignore),
            "warn" => Ok(SfErrorAction::Warn),
            "raise" => Ok(SfErrorAction::Raise),
            other => Err(format!(
                "invalid error action {other:?} (expected 'ignore', 'warn', or 'raise')"
            )),
        }
    }
}

/// SfErrorPolicy — action table indexed by [`SfErrorKind`].
///
/// Invariants
/// ----------
/// - Exactly one action per kind; lookups never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SfErrorPolicy {
    actions: [SfErrorAction; SfErrorKind::ALL.len()],
}

impl SfErrorPolicy {
    /// Policy applying the same action to every kind.
    pub const fn uniform(action: SfErrorAction) -> Self {
        SfErrorPolicy { actions: [action; SfErrorKind::ALL.len()] }
    }

    /// Return a copy of `self` with `kind` mapped to `action`.
    pub fn with_action(mut self, kind: SfErrorKind, action: SfErrorAction) -> Self {
        self.actions[kind.index()] = action;
        self
    }

    pub const fn action(&self, kind: SfErrorKind) -> SfErrorAction {
        self.actions[kind.index()]
    }
}

impl Default for SfErrorPolicy {
    fn default() -> Self {
        SfErrorPolicy::uniform(SfErrorAction::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    // Purpose
    // -------
    // Verify the default policy warns on every kind.
    //
    // Given
    // -----
    // - `SfErrorPolicy::default()`.
    //
    // Expect
    // ------
    // - `action(kind) == Warn` for all kinds.
    fn policy_default_warns_on_every_kind() {
        let policy = SfErrorPolicy::default();
        for kind in SfErrorKind::ALL {
            assert_eq!(policy.action(kind), SfErrorAction::Warn, "kind {kind:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure `with_action` overrides exactly one kind.
    //
    // Given
    // -----
    // - An all-ignore policy with Overflow switched to Raise.
    //
    // Expect
    // ------
    // - Overflow maps to Raise; Memory still maps to Ignore.
    fn policy_with_action_overrides_single_kind() {
        // Arrange
        let policy = SfErrorPolicy::uniform(SfErrorAction::Ignore)
            .with_action(SfErrorKind::Overflow, SfErrorAction::Raise);

        // Act / Assert
        assert_eq!(policy.action(SfErrorKind::Overflow), SfErrorAction::Raise);
        assert_eq!(policy.action(SfErrorKind::Memory), SfErrorAction::Ignore);
    }

    #[test]
    // Purpose
    // -------
    // Check case-insensitive parsing of action names and rejection of
    // unknown names.
    //
    // Given
    // -----
    // - "RAISE", "warn", "Ignore", and "explode".
    //
    // Expect
    // ------
    // - The first three parse; "explode" yields an error naming the input.
    fn action_from_str_parses_known_names() {
        assert_eq!(SfErrorAction::from_str("RAISE"), Ok(SfErrorAction::Raise));
        assert_eq!(SfErrorAction::from_str("warn"), Ok(SfErrorAction::Warn));
        assert_eq!(SfErrorAction::from_str("Ignore"), Ok(SfErrorAction::Ignore));
        let err = SfErrorAction::from_str("explode").unwrap_err();
        assert!(err.contains("explode"), "Got: {err}");
    }
}
