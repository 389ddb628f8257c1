//! # Session Context
//!
//! One [`Session`] per user session, explicitly passed and exclusively
//! owned - no process-wide mutable state. The session owns the history
//! store; a calculation either completes and is appended, or fails and
//! leaves history untouched.
//!
//! The slope-converter page is the one calculator with durable history:
//! bind a file with [`Session::with_slope_log`] and every successful
//! slope calculation rewrites it in full, while existing rows are loaded
//! back at session start.
//!
//! ## Example
//!
//! ```rust
//! use toolbox_core::formula::RawInputs;
//! use toolbox_core::registry::BUILTIN;
//! use toolbox_core::session::Session;
//!
//! let mut session = Session::new();
//! let raw = RawInputs::new().with("diameter", "1000").with("angle", "90");
//! let entry = session.calculate(&BUILTIN, "arc_length", &raw).unwrap();
//! assert!((entry.outputs.number("arc_length_mm").unwrap() - 785.4).abs() < 0.01);
//! assert_eq!(session.history().len("arc_length"), 1);
//! ```

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::CalcResult;
use crate::formula::RawInputs;
use crate::formulas;
use crate::history::{HistoryEntry, HistoryStore};
use crate::persist;
use crate::registry::FormulaRegistry;
use crate::validate::validate;

/// Conventional file name for the persisted slope history.
pub const SLOPE_HISTORY_FILE: &str = "slope_history.csv";

/// Per-session calculation context.
#[derive(Debug)]
pub struct Session {
    /// Session identifier (log correlation, temp file naming)
    pub id: Uuid,

    /// When the session started
    pub started_at: DateTime<Utc>,

    history: HistoryStore,
    slope_log: Option<PathBuf>,
}

impl Session {
    /// A fresh session with empty, volatile history.
    pub fn new() -> Self {
        Session {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            history: HistoryStore::new(),
            slope_log: None,
        }
    }

    /// A session whose slope-converter history is bound to a file.
    ///
    /// Existing rows are loaded into history; a missing file just means a
    /// first run. The file is rewritten after every successful slope
    /// calculation and on [`Session::clear_history`] of that calculator.
    pub fn with_slope_log(path: impl Into<PathBuf>) -> CalcResult<Self> {
        let path = path.into();
        let mut session = Session::new();

        if path.exists() {
            let spec = formulas::slope::spec();
            let entries = persist::load_history(&spec, &path)?;
            session.history.restore(formulas::slope::ID, entries);
        }

        session.slope_log = Some(path);
        Ok(session)
    }

    /// Read access to the history store.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Validate, compute, and archive one calculation.
    ///
    /// Any validation or domain error aborts before the append, so a
    /// failed attempt is invisible to history. Returns the stored entry.
    pub fn calculate(
        &mut self,
        registry: &FormulaRegistry,
        calculator_id: &str,
        raw: &RawInputs,
    ) -> CalcResult<&HistoryEntry> {
        let spec = registry.lookup(calculator_id)?;
        let inputs = validate(spec, raw)?;
        let outputs = (spec.compute)(&inputs)?;

        self.history.append(calculator_id, inputs, outputs);
        if let Some(path) = self.bound_log_for(calculator_id) {
            persist::save_history(spec, &path, self.history.list(calculator_id))?;
        }

        Ok(self
            .history
            .list(calculator_id)
            .last()
            .expect("appended above"))
    }

    /// Clear one calculator's history (and its bound file, if any).
    pub fn clear_history(&mut self, calculator_id: &str) -> CalcResult<()> {
        self.history.clear(calculator_id);
        if let Some(path) = self.bound_log_for(calculator_id) {
            let spec = formulas::slope::spec();
            persist::save_history(&spec, &path, &[])?;
        }
        Ok(())
    }

    fn bound_log_for(&self, calculator_id: &str) -> Option<PathBuf> {
        match &self.slope_log {
            Some(path) if calculator_id == formulas::slope::ID => Some(path.clone()),
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
