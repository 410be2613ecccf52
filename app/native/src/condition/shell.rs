//! Shell conditions.

use super::WaitCondition;
use crate::core::Result;
use crate::lookup::{ShellLookup, ShellSnapshot, TitleMatcher};
use crate::toolkit::Shell;

// ============================================================================
// New shell detection
// ============================================================================

/// Outcome of comparing the live shell list against an earlier snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellDetection {
    /// The reference shell is no longer open.
    ReferenceClosed,
    /// Exactly one shell was opened since the snapshot.
    Opened(Shell),
    /// None or several shells were opened; not decided yet.
    Pending {
        /// Number of shells opened since the snapshot.
        new_shells: usize,
    },
}

/// Decides whether a new shell was opened or `reference` was closed.
///
/// `reference` missing from `live` wins over any new shells. Otherwise the
/// shells of `live` absent from `previous` (by identity) decide: exactly one
/// is the result, any other count is undecided.
#[must_use]
pub fn detect_new_shell(previous: &[Shell], reference: Shell, live: &[Shell]) -> ShellDetection {
    if !live.contains(&reference) {
        return ShellDetection::ReferenceClosed;
    }

    let mut opened = live.iter().filter(|shell| !previous.contains(shell));
    match (opened.next(), opened.count()) {
        (Some(shell), 0) => ShellDetection::Opened(*shell),
        (None, _) => ShellDetection::Pending { new_shells: 0 },
        (Some(_), rest) => ShellDetection::Pending { new_shells: rest + 1 },
    }
}

/// Fulfilled when a single new shell has opened or the reference shell has
/// closed.
///
/// The result is the new shell, or `None` when the reference shell closed.
/// Several new shells at once leave the outcome undecided until a later poll
/// sees exactly one; only the wait's timeout ends an undecided wait.
#[derive(Debug)]
pub struct NewShellOpenedOrClosed {
    lookup: ShellLookup,
    reference: Shell,
    previous: ShellSnapshot,
    new_shell: Option<Shell>,
}

impl NewShellOpenedOrClosed {
    /// Creates the condition from a snapshot taken before the triggering
    /// action.
    #[must_use]
    pub const fn new(lookup: ShellLookup, reference: Shell, previous: ShellSnapshot) -> Self {
        Self {
            lookup,
            reference,
            previous,
            new_shell: None,
        }
    }

    /// Takes the snapshot now and creates the condition from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the display is gone.
    pub fn capture(lookup: ShellLookup, reference: Shell) -> Result<Self> {
        let previous = lookup.snapshot()?;
        Ok(Self::new(lookup, reference, previous))
    }

    #[must_use]
    pub const fn reference(&self) -> Shell { self.reference }
}

impl WaitCondition for NewShellOpenedOrClosed {
    type Output = Shell;

    fn test(&mut self) -> Result<bool> {
        let live = self.lookup.shells()?;
        match detect_new_shell(self.previous.shells(), self.reference, &live) {
            ShellDetection::ReferenceClosed => {
                self.new_shell = None;
                Ok(true)
            }
            ShellDetection::Opened(shell) => {
                self.new_shell = Some(shell);
                Ok(true)
            }
            ShellDetection::Pending { new_shells } => {
                if new_shells > 1 {
                    tracing::trace!(new_shells, "several new shells, waiting for one");
                }
                Ok(false)
            }
        }
    }

    fn description(&self) -> String {
        format!("a new shell is opened or {} is closed", self.reference)
    }

    fn take_result(&mut self) -> Option<Self::Output> { self.new_shell.take() }
}

// ============================================================================
// Availability
// ============================================================================

/// Fulfilled when a shell with a matching title is open. The result is the
/// shell.
#[derive(Debug)]
pub struct ShellIsAvailable {
    lookup: ShellLookup,
    matcher: TitleMatcher,
    found: Option<Shell>,
}

impl ShellIsAvailable {
    #[must_use]
    pub const fn new(lookup: ShellLookup, matcher: TitleMatcher) -> Self {
        Self { lookup, matcher, found: None }
    }
}

impl WaitCondition for ShellIsAvailable {
    type Output = Shell;

    fn test(&mut self) -> Result<bool> {
        self.found = self.lookup.find(&self.matcher)?;
        Ok(self.found.is_some())
    }

    fn description(&self) -> String { format!("shell {} is available", self.matcher) }

    fn take_result(&mut self) -> Option<Self::Output> { self.found.take() }
}

/// Fulfilled once `shell` is no longer open.
#[derive(Debug)]
pub struct ShellIsClosed {
    lookup: ShellLookup,
    shell: Shell,
}

impl ShellIsClosed {
    #[must_use]
    pub const fn new(lookup: ShellLookup, shell: Shell) -> Self { Self { lookup, shell } }
}

impl WaitCondition for ShellIsClosed {
    type Output = ();

    fn test(&mut self) -> Result<bool> { Ok(!self.lookup.shells()?.contains(&self.shell)) }

    fn description(&self) -> String { format!("{} is closed", self.shell) }

    fn take_result(&mut self) -> Option<Self::Output> { Some(()) }
}
