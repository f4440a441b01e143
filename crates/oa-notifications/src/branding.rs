//! Site Branding
//!
//! Each deployment serves one community under its own domain and visual
//! identity. The mapping from configured site URL to brand is a fixed table
//! matched by literal string equality; trailing slashes or protocol
//! differences do not match.

use serde::{Deserialize, Serialize};

/// A community brand hosted by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brand {
    PreciousPlastic,
    ProjectKamp,
}

/// Brand fields for email header/footer composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandIdentity {
    /// Name shown in email headers
    pub display_name: &'static str,
    /// Logo asset embedded in emails
    pub image_asset: &'static str,
}

impl Brand {
    /// Resolve the brand for a configured site URL.
    ///
    /// Returns `None` for any URL outside the known deployment table;
    /// callers decide whether to fall back or abort composition.
    pub fn for_site_url(site_url: &str) -> Option<Self> {
        match site_url {
            "https://dev.onearmy.world" | "https://community.preciousplastic.com" => {
                Some(Self::PreciousPlastic)
            }
            "https://dev.community.projectkamp.com" | "https://community.projectkamp.com" => {
                Some(Self::ProjectKamp)
            }
            _ => None,
        }
    }

    /// Get the display name for this brand
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PreciousPlastic => "Precious Plastic",
            Self::ProjectKamp => "Project Kamp",
        }
    }

    /// Get the logo asset for this brand
    pub fn image_asset(&self) -> &'static str {
        match self {
            Self::PreciousPlastic => {
                "https://community.preciousplastic.com/assets/img/precious-plastic-logo.png"
            }
            Self::ProjectKamp => {
                "https://community.projectkamp.com/assets/img/project-kamp-logo.png"
            }
        }
    }

    /// Get the full brand identity
    pub fn identity(&self) -> BrandIdentity {
        BrandIdentity {
            display_name: self.display_name(),
            image_asset: self.image_asset(),
        }
    }
}
