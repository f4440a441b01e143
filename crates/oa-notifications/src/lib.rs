//! # oa-notifications
//!
//! Notification classification and email fragment rendering for Community Platform RS.
//!
//! ## Features
//!
//! - Notification model with a closed set of type tags
//! - Classification of type tags into rendering categories
//! - Site branding resolution per deployment
//! - HTML list-item fragments for digest emails
//!
//! All rendering here is synchronous and pure: no I/O, no shared state, no
//! implicit configuration. The site base URL is threaded through as an
//! explicit argument everywhere it is needed.

pub mod branding;
pub mod links;
pub mod notification;
pub mod render;

pub use branding::{Brand, BrandIdentity};
pub use links::{resource_link, user_link};
pub use notification::{Category, Notification, NotificationType, TriggeredBy};
pub use render::{notification_list_item, RenderError, RenderResult};
