//! Design-token reference resolution, CSS variable auditing, and accessible
//! palette selection for the Recursica design system.
//!
//! The foundation crates are re-exported under short names; the [`engine`]
//! module ties them to a published document snapshot.

pub mod engine;
pub mod error;

pub use recursica_a11y as a11y;
pub use recursica_audit as audit;
pub use recursica_reference as reference;
pub use recursica_resolver as resolver;
pub use recursica_types as types;

pub use engine::config::RecursicaConfig;
pub use engine::events::{EventBus, ThemeEvent};
pub use engine::recheck::{LevelRecheck, RecheckReport, RecheckTrigger};
pub use engine::store::{BindingStore, DocumentStore};
pub use engine::{Recursica, RecursicaBuilder};
pub use error::RecursicaError;
pub use recursica_types::Mode;
