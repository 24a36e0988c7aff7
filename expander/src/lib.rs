//! Arity template expander.
//!
//! Emits the `binder.inc` unit consumed by the yalp C++ runtime: one
//! `Binder<void (*)(...)>` and one `Binder<R (*)(...)>` specialization per
//! parameter count, wrapped in a shared header and footer.

pub mod arity;
pub mod config;
pub mod error;
pub mod expander;
pub mod skeleton;
pub mod substitution;

pub use arity::ArityDescriptor;
pub use config::GeneratorConfig;
pub use error::BinderError;
pub use expander::Expander;
pub use skeleton::SpecializationVariant;
pub use substitution::{Placeholder, SubstitutionTable};

/// Largest parameter count bound when no configuration overrides it.
pub const DEFAULT_MAX_PARAM: usize = 8;
