//! Internationalization (i18n) for the invitation page.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` handle with key lookup (`t`)
//! - `strings`: Localized string tables for the message form
//!
//! # Example
//!
//! ```rust,ignore
//! use engagement_invite::i18n::Language;
//!
//! let arabic = Language::from_code("ar")?;
//! let label = arabic.t("sendMessage");
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, KEYS};
