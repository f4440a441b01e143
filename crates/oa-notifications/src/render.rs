//! Fragment Rendering
//!
//! Renders a notification into the list-item fragment a digest email embeds.
//! One template per rendering category, each a single `<p>` block built from
//! the user and resource links.

use maud::{html, Markup};
use thiserror::Error;

use crate::links::{resource_link, user_link};
use crate::notification::{Category, Notification, NotificationType};

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// The type tag maps to none of the rendering categories.
    ///
    /// Raised instead of returning an empty fragment, so a corrupt or
    /// newly-added-but-unmapped tag is surfaced rather than silently
    /// dropped from a digest. Callers should skip the one notification,
    /// not the whole digest.
    #[error("Unclassified notification type: {notification_type:?}")]
    Unclassified {
        notification_type: NotificationType,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Render a notification as a digest list item
pub fn notification_list_item(notification: &Notification, site_url: &str) -> RenderResult<String> {
    let category =
        notification
            .notification_type
            .category()
            .ok_or(RenderError::Unclassified {
                notification_type: notification.notification_type,
            })?;

    let user = user_link(
        &notification.triggered_by.display_name,
        &notification.triggered_by.user_id,
        site_url,
    );
    let resource = resource_link(
        notification.notification_type,
        &notification.relevant_url,
        site_url,
    );

    let fragment: Markup = match category {
        Category::Comment => html! {
            p { "New comment on your " (resource) " by " (user) }
        },
        Category::Mention => html! {
            p { (user) " mentioned you in this " (resource) }
        },
        Category::Useful => html! {
            p { (user) " found your " (resource) " useful" }
        },
        Category::Update => html! {
            p { (user) " posted an update to this " (resource) " you follow" }
        },
        Category::ModerationApproved => html! {
            p { "Your " (resource) " has been approved" }
        },
        Category::ModerationRejected => html! {
            p { "Your " (resource) " needs updates" }
        },
    };

    Ok(fragment.into_string())
}
