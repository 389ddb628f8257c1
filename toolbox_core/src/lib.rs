//! # toolbox_core - Tank & Coil Engineering Calculator Engine
//!
//! `toolbox_core` is the computational heart of the engineering toolbox:
//! a declarative formula registry plus the shared validate-compute-archive
//! pipeline that every calculator page used to reimplement by hand. All
//! inputs and outputs are JSON-serializable, making the crate easy to put
//! behind any form-driven front-end.
//!
//! ## Design Philosophy
//!
//! - **Declarative**: a calculator is a [`formula::FormulaSpec`] value -
//!   input contract plus a pure formula body - not a new code path
//! - **Stateless formulas**: identical inputs yield bit-identical outputs
//! - **Session-owned state**: history lives in an explicitly passed
//!   [`session::Session`], never in a process-wide singleton
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use toolbox_core::formula::RawInputs;
//! use toolbox_core::registry::BUILTIN;
//! use toolbox_core::session::Session;
//!
//! let mut session = Session::new();
//! let raw = RawInputs::new().with("length", "10").with("width", "5");
//! let entry = session.calculate(&BUILTIN, "rectangle_area", &raw).unwrap();
//! assert_eq!(entry.outputs.number("area"), Some(50.0));
//! ```
//!
//! ## Modules
//!
//! - [`formula`] - formula specs, input/output records
//! - [`registry`] - id-to-spec registry, built-in calculator set
//! - [`validate`] - raw input validation against a spec
//! - [`engine`] - the validate-then-compute pipeline
//! - [`formulas`] - the built-in calculators
//! - [`history`] - append-only per-session history store
//! - [`session`] - per-session context owning history and persistence
//! - [`persist`] - CSV flat-file history export/import
//! - [`quadrature`] - Simpson's rule for the elliptic integral
//! - [`units`] - metric unit newtypes
//! - [`humor`] - injectable result one-liners
//! - [`errors`] - structured error types

pub mod engine;
pub mod errors;
pub mod formula;
pub mod formulas;
pub mod history;
pub mod humor;
pub mod persist;
pub mod quadrature;
pub mod registry;
pub mod session;
pub mod units;
pub mod validate;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use formula::{FormulaSpec, InputField, InputRecord, OutputRecord, RawInputs};
pub use history::{HistoryEntry, HistoryStore};
pub use registry::{FormulaRegistry, BUILTIN};
pub use session::Session;
