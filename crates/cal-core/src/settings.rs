//! Global library settings.
//!
//! [`Settings`] holds the **default addition rule**: the [`AdditionRule`]
//! used by date arithmetic built without an explicit rule.  It is a
//! process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the rule is stored behind a `Mutex`.  Tests that change it
//! should go through [`ScopedAdditionRule`], which restores the previous rule
//! when dropped.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::addition_rule::AdditionRule;

/// Process-wide settings used by calendrical.
pub struct Settings {
    default_addition_rule: Mutex<AdditionRule>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| {
            tracing::debug!(target: "cal_core", "initialising global settings");
            Settings {
                default_addition_rule: Mutex::new(AdditionRule::default()),
            }
        })
    }

    // The stored value is a plain `Copy` enum, a poisoned lock cannot leave
    // it half-written.
    fn lock(&self) -> MutexGuard<'_, AdditionRule> {
        self.default_addition_rule
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the current default addition rule.
    pub fn default_addition_rule(&self) -> AdditionRule {
        *self.lock()
    }

    /// Set the default addition rule, returning the previous one.
    pub fn set_default_addition_rule(&self, rule: AdditionRule) -> AdditionRule {
        let mut guard = self.lock();
        let previous = *guard;
        *guard = rule;
        tracing::debug!(target: "cal_core", %previous, %rule, "default addition rule changed");
        previous
    }

    /// Restore the built-in default ([`AdditionRule::Truncate`]).
    pub fn reset(&self) {
        self.set_default_addition_rule(AdditionRule::default());
    }
}

/// Sets the default addition rule for the lifetime of the guard.
///
/// ```
/// use cal_core::{AdditionRule, ScopedAdditionRule, Settings};
///
/// {
///     let _guard = ScopedAdditionRule::new(AdditionRule::Exact);
///     assert_eq!(Settings::instance().default_addition_rule(), AdditionRule::Exact);
/// }
/// ```
#[must_use = "the previous rule is restored as soon as the guard is dropped"]
pub struct ScopedAdditionRule {
    previous: AdditionRule,
}

impl ScopedAdditionRule {
    /// Install `rule` as the default until the guard is dropped.
    pub fn new(rule: AdditionRule) -> Self {
        let previous = Settings::instance().set_default_addition_rule(rule);
        Self { previous }
    }
}

impl Drop for ScopedAdditionRule {
    fn drop(&mut self) {
        Settings::instance().set_default_addition_rule(self.previous);
    }
}
