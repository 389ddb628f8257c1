//! # Formula Registry
//!
//! Central registry mapping calculator ids to their [`FormulaSpec`]s.
//! Populated exactly once at startup and read-only afterward; there is no
//! runtime re-registration. Registration order is preserved so front-ends
//! can render a stable menu.
//!
//! ## Usage
//!
//! ```rust
//! use toolbox_core::registry::BUILTIN;
//!
//! let spec = BUILTIN.lookup("arc_length").unwrap();
//! assert_eq!(spec.title, "Arc Length of RF Pad");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::{CalcError, CalcResult};
use crate::formula::FormulaSpec;
use crate::formulas;

/// Process-wide registry of the built-in calculators.
pub static BUILTIN: Lazy<FormulaRegistry> = Lazy::new(FormulaRegistry::builtin);

/// Ordered, id-indexed collection of formula specs.
#[derive(Debug, Clone, Default)]
pub struct FormulaRegistry {
    specs: Vec<FormulaSpec>,
    index: HashMap<&'static str, usize>,
}

impl FormulaRegistry {
    /// An empty registry. Library users compose their own; most callers
    /// want [`FormulaRegistry::builtin`] or the [`BUILTIN`] static.
    pub fn new() -> Self {
        FormulaRegistry::default()
    }

    /// A registry holding every built-in calculator, in the order the
    /// original toolbox listed its pages.
    pub fn builtin() -> Self {
        let mut registry = FormulaRegistry::new();
        for spec in formulas::all() {
            // Built-in ids are distinct by construction.
            registry
                .register(spec)
                .unwrap_or_else(|e| panic!("builtin registry: {e}"));
        }
        registry
    }

    /// Register a formula. Fails if the id is already taken.
    pub fn register(&mut self, spec: FormulaSpec) -> CalcResult<()> {
        if self.index.contains_key(spec.id) {
            return Err(CalcError::DuplicateFormula {
                id: spec.id.to_string(),
            });
        }
        self.index.insert(spec.id, self.specs.len());
        self.specs.push(spec);
        Ok(())
    }

    /// Look up a formula by id.
    pub fn lookup(&self, id: &str) -> CalcResult<&FormulaSpec> {
        self.index
            .get(id)
            .map(|&i| &self.specs[i])
            .ok_or_else(|| CalcError::FormulaNotFound { id: id.to_string() })
    }

    /// Ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|s| s.id)
    }

    /// Specs in registration order.
    pub fn specs(&self) -> &[FormulaSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
