//! viewdeck-core - the view-selection controller
//!
//! This crate provides the controller that decides which of a set of
//! registered message views is shown:
//!
//! - [`ViewManager`]: view registry, enablement tracking, active-view
//!   switching, and default-view selector evaluation
//! - [`ViewItem`]: lightweight, identity-by-key view projection used for
//!   ordering and display
//! - [`SelectorSurface`] / [`DropdownState`]: the surface users pick views
//!   through, kept in sync with the enabled set
//! - [`CardStack`]: keyed rendering-surface bookkeeping
//!
//! # Example
//!
//! ```
//! use viewdeck_api::{HttpMessage, MessageModel, MessageView, SharedMessage, shared};
//! use viewdeck_core::ViewManager;
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
//!
//! let mut manager = ViewManager::new("panel");
//! manager.add_view(Box::new(RawView::default()));
//! manager.set_message(Some(shared(HttpMessage::request("GET / HTTP/1.1", ""))));
//!
//! assert_eq!(manager.active_view_name(), Some("raw"));
//! ```

pub mod item;
pub mod manager;
pub mod surface;

pub use item::ViewItem;
pub use manager::ViewManager;
pub use surface::{CardStack, DropdownState, SelectorSurface};
