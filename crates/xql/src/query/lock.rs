//! Row locking clauses.

use xql_core::primitives::{Keyword, Ws};
use xql_core::{Node, Renderer};

use crate::name::TableName;

/// Lock strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    /// `UPDATE`
    Update,
    /// `NO KEY UPDATE`
    NoKeyUpdate,
    /// `SHARE`
    Share,
    /// `KEY SHARE`
    KeyShare,
}

/// What to do when a row is already locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockWait {
    /// `WAIT n`, in seconds.
    Wait(u64),
    /// `NOWAIT`
    NoWait,
    /// `SKIP LOCKED`
    SkipLocked,
}

/// `FOR mode [OF tables] [WAIT n|NOWAIT|SKIP LOCKED]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForLock {
    /// Lock strength.
    pub mode: LockMode,
    /// Tables to lock.
    pub of: Vec<TableName>,
    /// Waiting policy.
    pub wait: Option<LockWait>,
}

impl ForLock {
    /// Creates a locking clause.
    #[must_use]
    pub const fn new(mode: LockMode) -> Self {
        Self {
            mode,
            of: Vec::new(),
            wait: None,
        }
    }

    /// `FOR UPDATE`
    #[must_use]
    pub const fn update() -> Self {
        Self::new(LockMode::Update)
    }

    /// `FOR SHARE`
    #[must_use]
    pub const fn share() -> Self {
        Self::new(LockMode::Share)
    }

    /// Restricts the lock to some tables.
    #[must_use]
    pub fn of<I, T>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TableName>,
    {
        self.of = tables.into_iter().map(Into::into).collect();
        self
    }

    /// `WAIT n`
    #[must_use]
    pub const fn wait(mut self, seconds: u64) -> Self {
        self.wait = Some(LockWait::Wait(seconds));
        self
    }

    /// `NOWAIT`
    #[must_use]
    pub const fn no_wait(mut self) -> Self {
        self.wait = Some(LockWait::NoWait);
        self
    }

    /// `SKIP LOCKED`
    #[must_use]
    pub const fn skip_locked(mut self) -> Self {
        self.wait = Some(LockWait::SkipLocked);
        self
    }
}

impl Node for ForLock {
    fn accept<'r>(&self, r: &'r mut Renderer) -> &'r mut Renderer {
        r.keyword("FOR").ws().keyword(match self.mode {
            LockMode::Update => "UPDATE",
            LockMode::NoKeyUpdate => "NO KEY UPDATE",
            LockMode::Share => "SHARE",
            LockMode::KeyShare => "KEY SHARE",
        });
        r.visit(&[&Ws, &Keyword("OF"), &Ws, &self.of]);
        match self.wait {
            Some(LockWait::Wait(seconds)) => r.ws().keyword("WAIT").ws().uint(seconds),
            Some(LockWait::NoWait) => r.ws().keyword("NOWAIT"),
            Some(LockWait::SkipLocked) => r.ws().keyword("SKIP LOCKED"),
            None => r,
        }
    }
}

impl_display!(ForLock);
