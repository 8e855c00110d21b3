//! viewdeck-api - traits and types for viewdeck message views
//!
//! This crate provides everything a view author implements: the
//! [`MessageView`] capability interface and its [`MessageModel`] content
//! model, the optional [`SearchableView`] capability, [`DefaultViewSelector`]
//! rules, the [`HttpMessage`] subject type, and the TOML-backed
//! [`ConfigStore`].
//!
//! # Example
//!
//! ```
//! use viewdeck_api::{HttpMessage, MessageModel, MessageView, SharedMessage};
//!
//! #[derive(Default)]
//! struct RawModel {
//!     message: Option<SharedMessage>,
//! }
//!
//! impl MessageModel for RawModel {
//!     fn set_message(&mut self, message: Option<SharedMessage>) {
//!         self.message = message;
//!     }
//!
//!     fn clear(&mut self) {
//!         self.message = None;
//!     }
//! }
//!
//! #[derive(Default)]
//! struct RawView {
//!     model: RawModel,
//! }
//!
//! impl MessageView for RawView {
//!     fn config_name(&self) -> &str {
//!         "raw"
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Raw"
//!     }
//!
//!     fn position(&self) -> i32 {
//!         0
//!     }
//!
//!     fn is_enabled(&self, _message: Option<&HttpMessage>) -> bool {
//!         true
//!     }
//!
//!     fn model(&mut self) -> &mut dyn MessageModel {
//!         &mut self.model
//!     }
//! }
//! ```

pub mod config;
pub mod message;
pub mod search;
pub mod selector;
pub mod view;

pub use config::{ConfigError, ConfigStore};
pub use message::{HttpMessage, SharedMessage, shared};
pub use search::{MessageLocation, SearchMatch, SearchableView};
pub use selector::DefaultViewSelector;
pub use view::{MessageModel, MessageView};
