//! Link Builders
//!
//! Anchor fragments for the two link kinds that appear in digest emails:
//! the user who triggered a notification, and the resource it refers to.
//! Dynamic content is escaped on interpolation, so caller-supplied names
//! and paths cannot inject markup into the surrounding email.

use maud::{html, Markup};

use crate::notification::NotificationType;

/// Build an anchor pointing at a user's profile page
pub fn user_link(display_name: &str, user_id: &str, site_url: &str) -> Markup {
    html! {
        a href=(format!("{site_url}/u/{user_id}")) { (display_name) }
    }
}

/// Build an anchor pointing at the resource a notification refers to,
/// labeled by the resource family of its type tag
pub fn resource_link(
    notification_type: NotificationType,
    relevant_url: &str,
    site_url: &str,
) -> Markup {
    html! {
        a href=(format!("{site_url}{relevant_url}")) { (notification_type.resource_label()) }
    }
}
