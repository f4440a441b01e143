//! Notification Model
//!
//! The platform emits a closed set of notification type tags. Two orthogonal
//! groupings hang off that set: the *resource family* (how-to, research,
//! map pin) that names the linked resource, and the *category* (comment,
//! mention, ...) that selects the rendered template.

use serde::{Deserialize, Serialize};

/// Notification type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// New comment on a how-to
    NewComment,
    /// New comment on a research update
    NewCommentResearch,
    /// Mentioned in a how-to
    HowtoMention,
    /// How-to marked useful
    HowtoUseful,
    /// How-to passed moderation
    HowtoApproved,
    /// How-to sent back by moderation
    HowtoNeedsUpdates,
    /// Mentioned in a research update
    ResearchMention,
    /// Research marked useful
    ResearchUseful,
    /// Update posted to followed research
    ResearchUpdate,
    /// Research passed moderation
    ResearchApproved,
    /// Research sent back by moderation
    ResearchNeedsUpdates,
    /// Map pin passed moderation
    MapPinApproved,
    /// Map pin sent back by moderation
    MapPinNeedsUpdates,
    /// Tag not recognized by this version.
    ///
    /// Stored records can carry tags added after (or removed before) this
    /// release; they deserialize here instead of failing the whole record.
    #[serde(other)]
    Unknown,
}

/// Rendering category a notification falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Comment,
    Mention,
    Useful,
    Update,
    ModerationApproved,
    ModerationRejected,
}

/// Tags whose subject is a how-to guide
const HOWTO_FAMILY: &[NotificationType] = &[
    NotificationType::NewComment,
    NotificationType::HowtoUseful,
    NotificationType::HowtoMention,
    NotificationType::HowtoApproved,
    NotificationType::HowtoNeedsUpdates,
];

/// Tags whose subject is a research update
const RESEARCH_FAMILY: &[NotificationType] = &[
    NotificationType::NewCommentResearch,
    NotificationType::ResearchUseful,
    NotificationType::ResearchMention,
    NotificationType::ResearchUpdate,
    NotificationType::ResearchApproved,
    NotificationType::ResearchNeedsUpdates,
];

/// Tags whose subject is a map pin
const MAP_PIN_FAMILY: &[NotificationType] = &[
    NotificationType::MapPinApproved,
    NotificationType::MapPinNeedsUpdates,
];

impl NotificationType {
    /// Get the rendering category for this tag.
    ///
    /// Total over the known tags; `Unknown` maps to no category so that an
    /// unmapped tag surfaces at the call site instead of borrowing a
    /// template it was never meant to use.
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::NewComment | Self::NewCommentResearch => Some(Category::Comment),
            Self::ResearchMention | Self::HowtoMention => Some(Category::Mention),
            Self::ResearchUseful | Self::HowtoUseful => Some(Category::Useful),
            Self::ResearchUpdate => Some(Category::Update),
            Self::HowtoApproved | Self::MapPinApproved | Self::ResearchApproved => {
                Some(Category::ModerationApproved)
            }
            Self::HowtoNeedsUpdates | Self::MapPinNeedsUpdates | Self::ResearchNeedsUpdates => {
                Some(Category::ModerationRejected)
            }
            Self::Unknown => None,
        }
    }

    /// Get the human label of the resource this tag refers to.
    ///
    /// Checks the how-to family, then research, then map pin, and falls back
    /// to "item". First match wins; the families are mutually exclusive, so
    /// the order only matters if that invariant is ever broken.
    pub fn resource_label(&self) -> &'static str {
        if HOWTO_FAMILY.contains(self) {
            "how-to"
        } else if RESEARCH_FAMILY.contains(self) {
            "research"
        } else if MAP_PIN_FAMILY.contains(self) {
            "map pin"
        } else {
            "item"
        }
    }
}

/// User whose action triggered a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggeredBy {
    /// Name shown as the link text
    pub display_name: String,
    /// Profile id the link points at
    pub user_id: String,
}

impl TriggeredBy {
    pub fn new(display_name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            user_id: user_id.into(),
        }
    }
}

/// A notification event
///
/// Transient record constructed from caller-supplied data per render call;
/// nothing here is persisted or mutated after construction. Field names
/// follow the platform's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Type tag
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    /// Site-relative path to the referenced resource
    pub relevant_url: String,
    /// Who triggered this notification
    pub triggered_by: TriggeredBy,
}

impl Notification {
    pub fn new(
        notification_type: NotificationType,
        relevant_url: impl Into<String>,
        triggered_by: TriggeredBy,
    ) -> Self {
        Self {
            notification_type,
            relevant_url: relevant_url.into(),
            triggered_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_TAGS: [NotificationType; 13] = [
        NotificationType::NewComment,
        NotificationType::NewCommentResearch,
        NotificationType::HowtoMention,
        NotificationType::HowtoUseful,
        NotificationType::HowtoApproved,
        NotificationType::HowtoNeedsUpdates,
        NotificationType::ResearchMention,
        NotificationType::ResearchUseful,
        NotificationType::ResearchUpdate,
        NotificationType::ResearchApproved,
        NotificationType::ResearchNeedsUpdates,
        NotificationType::MapPinApproved,
        NotificationType::MapPinNeedsUpdates,
    ];

    #[test]
    fn test_every_known_tag_has_a_category() {
        for tag in KNOWN_TAGS {
            assert!(tag.category().is_some(), "{:?} has no category", tag);
        }
    }

    #[test]
    fn test_unknown_tag_has_no_category() {
        assert_eq!(NotificationType::Unknown.category(), None);
    }

    #[test]
    fn test_families_are_mutually_exclusive() {
        for tag in KNOWN_TAGS {
            let memberships = [
                super::HOWTO_FAMILY.contains(&tag),
                super::RESEARCH_FAMILY.contains(&tag),
                super::MAP_PIN_FAMILY.contains(&tag),
            ]
            .iter()
            .filter(|m| **m)
            .count();
            assert_eq!(memberships, 1, "{:?} is in {} families", tag, memberships);
        }
    }

    #[test]
    fn test_resource_labels() {
        assert_eq!(NotificationType::NewComment.resource_label(), "how-to");
        assert_eq!(NotificationType::HowtoApproved.resource_label(), "how-to");
        assert_eq!(
            NotificationType::NewCommentResearch.resource_label(),
            "research"
        );
        assert_eq!(NotificationType::ResearchUpdate.resource_label(), "research");
        assert_eq!(NotificationType::MapPinApproved.resource_label(), "map pin");
        assert_eq!(NotificationType::Unknown.resource_label(), "item");
    }

    #[test]
    fn test_tag_wire_format() {
        let tag: NotificationType = serde_json::from_str("\"howto_mention\"").unwrap();
        assert_eq!(tag, NotificationType::HowtoMention);

        let tag: NotificationType = serde_json::from_str("\"map_pin_needs_updates\"").unwrap();
        assert_eq!(tag, NotificationType::MapPinNeedsUpdates);
    }

    #[test]
    fn test_unrecognized_tag_deserializes_to_unknown() {
        let tag: NotificationType = serde_json::from_str("\"howto_featured\"").unwrap();
        assert_eq!(tag, NotificationType::Unknown);
    }

    #[test]
    fn test_notification_wire_format() {
        let notification: Notification = serde_json::from_str(
            r#"{
                "type": "new_comment",
                "relevantUrl": "/how-to/42",
                "triggeredBy": { "displayName": "Alice", "userId": "u1" }
            }"#,
        )
        .unwrap();

        assert_eq!(notification.notification_type, NotificationType::NewComment);
        assert_eq!(notification.relevant_url, "/how-to/42");
        assert_eq!(notification.triggered_by.display_name, "Alice");
        assert_eq!(notification.triggered_by.user_id, "u1");
    }
}
