//! Live shell lookup.
//!
//! Every query re-reads the toolkit's shell list on the UI thread. Nothing is
//! cached between calls; a [`ShellSnapshot`] is an explicit, caller-held copy
//! of the list at one instant.

use std::fmt;
use std::time::Instant;

use regex::Regex;

use crate::core::{Error, Result};
use crate::exec::SyncExecutor;
use crate::toolkit::{Shell, Ui};

// ============================================================================
// Title matching
// ============================================================================

/// How a shell title is matched.
#[derive(Debug, Clone)]
pub enum TitleMatcher {
    /// The title equals the text.
    Exact(String),
    /// The title contains the text.
    Contains(String),
    /// The title matches the regular expression.
    Regex(Regex),
}

impl TitleMatcher {
    #[must_use]
    pub fn exact(title: impl Into<String>) -> Self { Self::Exact(title.into()) }

    #[must_use]
    pub fn contains(text: impl Into<String>) -> Self { Self::Contains(text.into()) }

    /// Compiles a regular expression matcher.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] if the pattern does not compile.
    pub fn regex(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self::Regex)
            .map_err(|err| Error::invalid_args(format!("Invalid title pattern '{pattern}': {err}")))
    }

    #[must_use]
    pub fn matches(&self, title: &str) -> bool {
        match self {
            Self::Exact(text) => title == text,
            Self::Contains(text) => title.contains(text.as_str()),
            Self::Regex(regex) => regex.is_match(title),
        }
    }
}

impl fmt::Display for TitleMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(text) => write!(f, "'{text}'"),
            Self::Contains(text) => write!(f, "containing '{text}'"),
            Self::Regex(regex) => write!(f, "matching /{}/", regex.as_str()),
        }
    }
}

// ============================================================================
// Snapshots
// ============================================================================

/// The open shells at one instant, in the order they were opened.
#[derive(Debug, Clone)]
pub struct ShellSnapshot {
    shells: Vec<Shell>,
    taken_at: Instant,
}

impl ShellSnapshot {
    #[must_use]
    pub fn new(shells: Vec<Shell>) -> Self { Self { shells, taken_at: Instant::now() } }

    #[must_use]
    pub fn shells(&self) -> &[Shell] { &self.shells }

    #[must_use]
    pub const fn taken_at(&self) -> Instant { self.taken_at }

    #[must_use]
    pub fn len(&self) -> usize { self.shells.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.shells.is_empty() }

    #[must_use]
    pub fn contains(&self, shell: Shell) -> bool { self.shells.contains(&shell) }

    /// Shells of `live` that were not open when this snapshot was taken,
    /// compared by identity.
    #[must_use]
    pub fn new_since(&self, live: &[Shell]) -> Vec<Shell> {
        live.iter().copied().filter(|shell| !self.contains(*shell)).collect()
    }
}

// ============================================================================
// Lookup
// ============================================================================

/// Reads the toolkit's open shells through the UI thread.
#[derive(Debug, Clone)]
pub struct ShellLookup {
    exec: SyncExecutor,
}

impl ShellLookup {
    #[must_use]
    pub const fn new(exec: SyncExecutor) -> Self { Self { exec } }

    /// Returns the shells open right now, in the order they were opened.
    ///
    /// # Errors
    ///
    /// Returns an error if the display is gone.
    pub fn shells(&self) -> Result<Vec<Shell>> { self.exec.run(|ui| ui.shells()) }

    /// Captures the current shell list.
    ///
    /// # Errors
    ///
    /// Returns an error if the display is gone.
    pub fn snapshot(&self) -> Result<ShellSnapshot> { self.shells().map(ShellSnapshot::new) }

    /// Returns the active shell, if any shell is open.
    ///
    /// # Errors
    ///
    /// Returns an error if the display is gone.
    pub fn active_shell(&self) -> Result<Option<Shell>> { self.exec.run(|ui| ui.active_shell()) }

    /// Returns the title of `shell`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is disposed.
    pub fn title(&self, shell: Shell) -> Result<String> {
        self.exec.try_run(move |ui| ui.text(shell))
    }

    /// Finds an open shell whose title matches.
    ///
    /// The active shell is checked first, then the others from the most
    /// recently opened one.
    ///
    /// # Errors
    ///
    /// Returns an error if the display is gone.
    pub fn find(&self, matcher: &TitleMatcher) -> Result<Option<Shell>> {
        let matcher = matcher.clone();
        self.exec.run(move |ui| find_on_ui(ui, &matcher))
    }
}

fn find_on_ui(ui: &Ui, matcher: &TitleMatcher) -> Option<Shell> {
    let matches = |shell: &Shell| ui.text(*shell).is_ok_and(|title| matcher.matches(&title));
    ui.active_shell()
        .filter(matches)
        .or_else(|| ui.shells().into_iter().rev().find(matches))
}
