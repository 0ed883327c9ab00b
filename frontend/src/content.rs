//! Page content. Everything the screen shows lives here and is handed to the
//! page as a prop, so the copy can change without touching the components.

use std::collections::HashSet;

use log::{error, info};
use serde::Deserialize;
use thiserror::Error;

use crate::assets::AssetRef;
use crate::config;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("service id {0:?} is used more than once")]
    DuplicateServiceId(String),
    #[error("team member id {0:?} is used more than once")]
    DuplicateTeamMemberId(String),
    #[error("social icon {0:?} is used more than once")]
    DuplicateSocialIcon(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: AssetRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    /// Font Awesome glyph name, e.g. `twitter`.
    pub icon: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactDetails {
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Which scroll position drives the service card emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmphasisSource {
    /// Vertical page scroll, even though the rail itself scrolls sideways.
    #[default]
    PageScroll,
    /// Horizontal scroll of the services rail.
    RailScroll,
}

impl EmphasisSource {
    /// Picks the scroll offset that feeds the card emphasis curve.
    pub fn driver(self, page_offset: f64, rail_offset: f64) -> f64 {
        match self {
            EmphasisSource::PageScroll => page_offset,
            EmphasisSource::RailScroll => rail_offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub brand: String,
    pub hero_image: AssetRef,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub services: Vec<Service>,
    pub about_text: String,
    pub team: Vec<TeamMember>,
    pub contact_title: String,
    pub contact_button: String,
    pub tagline: String,
    pub contact: ContactDetails,
    pub socials: Vec<SocialLink>,
    pub copyright: String,
    pub menu_items: Vec<String>,
    pub emphasis_source: EmphasisSource,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        let service = |id: &str, title: &str, description: &str, icon: &str| Service {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        };
        let member = |id: &str, name: &str, role: &str, image: &str| TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            image: AssetRef::new(image),
        };
        let social = |icon: &str, name: &str| SocialLink {
            icon: icon.to_string(),
            name: name.to_string(),
        };

        Self {
            brand: "TechInnovate".to_string(),
            hero_image: AssetRef::new("hero-banner.jpg"),
            hero_title: "Innovate. Transform. Succeed.".to_string(),
            hero_subtitle: "Empowering businesses with cutting-edge technology".to_string(),
            services: vec![
                service("1", "AI Solutions", "Cutting-edge artificial intelligence for your business", "🤖"),
                service("2", "Cloud Services", "Scalable and secure cloud infrastructure", "☁️"),
                service("3", "Cybersecurity", "Advanced protection for your digital assets", "🔒"),
            ],
            about_text: "At TechInnovate, we're passionate about driving innovation and excellence in the tech industry. \
                Our mission is to empower businesses with transformative digital solutions. \
                With years of experience and a dedicated team of experts, we deliver cutting-edge \
                technologies that propel our clients to the forefront of their industries."
                .to_string(),
            team: vec![
                member("1", "Sarah Johnson", "CEO", "ceo.jpg"),
                member("2", "Jackson Wang", "CTO", "cto.jpg"),
                member("3", "Jeanette Manoban", "CFO", "cfo.jpg"),
            ],
            contact_title: "Ready to Transform Your Business?".to_string(),
            contact_button: "Contact Us Now".to_string(),
            tagline: "Empowering businesses with cutting-edge technology".to_string(),
            contact: ContactDetails {
                phone: "+1 (555) 123-4567".to_string(),
                email: "info@techinnovate.com".to_string(),
                address: "123 Tech Street, Innovation City".to_string(),
            },
            socials: vec![
                social("facebook", "Facebook"),
                social("twitter", "Twitter"),
                social("linkedin", "LinkedIn"),
                social("instagram", "Instagram"),
            ],
            copyright: "© 2024 TechInnovate. All rights reserved.".to_string(),
            menu_items: ["Home", "Services", "About Us", "Team", "Contact"]
                .iter()
                .map(|item| item.to_string())
                .collect(),
            emphasis_source: EmphasisSource::default(),
        }
    }
}

impl CompanyProfile {
    /// Parses a content override. Fields missing from `json` keep their
    /// built-in values.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let profile: CompanyProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for service in &self.services {
            if !seen.insert(service.id.as_str()) {
                return Err(ContentError::DuplicateServiceId(service.id.clone()));
            }
        }
        let mut seen = HashSet::new();
        for member in &self.team {
            if !seen.insert(member.id.as_str()) {
                return Err(ContentError::DuplicateTeamMemberId(member.id.clone()));
            }
        }
        let mut seen = HashSet::new();
        for social in &self.socials {
            if !seen.insert(social.icon.as_str()) {
                return Err(ContentError::DuplicateSocialIcon(social.icon.clone()));
            }
        }
        Ok(())
    }

    /// Reads the optional inline override from the host page. Never fails:
    /// a missing or broken override falls back to the built-in content.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(config::CONTENT_ELEMENT_ID))
            .and_then(|el| el.text_content());

        Self::from_override(raw)
    }

    fn from_override(raw: Option<String>) -> Self {
        match raw {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(profile) => {
                    info!("Using content override from #{}", config::CONTENT_ELEMENT_ID);
                    profile
                }
                Err(e) => {
                    error!("Ignoring content override: {}", e);
                    Self::default()
                }
            },
            _ => {
                info!("Using built-in content");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists_keep_order_and_keys() {
        let profile = CompanyProfile::default();
        let service_ids: Vec<&str> = profile.services.iter().map(|s| s.id.as_str()).collect();
        let member_ids: Vec<&str> = profile.team.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(service_ids, ["1", "2", "3"]);
        assert_eq!(member_ids, ["1", "2", "3"]);
        assert_eq!(profile.services[0].title, "AI Solutions");
        assert_eq!(profile.team[2].name, "Jeanette Manoban");
        assert_eq!(profile.menu_items.len(), 5);
        assert_eq!(profile.emphasis_source, EmphasisSource::PageScroll);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let profile = CompanyProfile::from_json(r#"{ "brand": "Acme", "emphasis_source": "rail_scroll" }"#).unwrap();
        assert_eq!(profile.brand, "Acme");
        assert_eq!(profile.emphasis_source, EmphasisSource::RailScroll);
        assert_eq!(profile.services, CompanyProfile::default().services);
    }

    #[test]
    fn override_replaces_lists() {
        let json = r#"{
            "team": [
                { "id": "a", "name": "Ada", "role": "Engineer", "image": "ada.jpg" }
            ]
        }"#;
        let profile = CompanyProfile::from_json(json).unwrap();
        assert_eq!(profile.team.len(), 1);
        assert_eq!(profile.team[0].image, AssetRef::new("ada.jpg"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{
            "services": [
                { "id": "1", "title": "A", "description": "a", "icon": "*" },
                { "id": "1", "title": "B", "description": "b", "icon": "*" }
            ]
        }"#;
        match CompanyProfile::from_json(json) {
            Err(ContentError::DuplicateServiceId(id)) => assert_eq!(id, "1"),
            other => panic!("expected duplicate service id, got {:?}", other),
        }

        let json = r#"{
            "team": [
                { "id": "x", "name": "A", "role": "a", "image": "a.jpg" },
                { "id": "x", "name": "B", "role": "b", "image": "b.jpg" }
            ]
        }"#;
        assert!(matches!(
            CompanyProfile::from_json(json),
            Err(ContentError::DuplicateTeamMemberId(_))
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            CompanyProfile::from_json("{ brand: "),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn duplicate_social_icons_are_rejected() {
        let json = r#"{
            "socials": [
                { "icon": "twitter", "name": "Twitter" },
                { "icon": "twitter", "name": "X" }
            ]
        }"#;
        match CompanyProfile::from_json(json) {
            Err(ContentError::DuplicateSocialIcon(icon)) => assert_eq!(icon, "twitter"),
            other => panic!("expected duplicate social icon, got {:?}", other),
        }
    }

    #[test]
    fn missing_or_broken_override_falls_back_to_default() {
        let default = CompanyProfile::default();
        assert_eq!(CompanyProfile::from_override(None), default);
        assert_eq!(CompanyProfile::from_override(Some("  \n\t ".to_string())), default);
        assert_eq!(CompanyProfile::from_override(Some("{ brand: ".to_string())), default);

        let duplicate = r#"{
            "team": [
                { "id": "1", "name": "A", "role": "a", "image": "a.jpg" },
                { "id": "1", "name": "B", "role": "b", "image": "b.jpg" }
            ]
        }"#;
        assert_eq!(CompanyProfile::from_override(Some(duplicate.to_string())), default);
    }

    #[test]
    fn valid_override_is_used() {
        let profile = CompanyProfile::from_override(Some(r#"{ "brand": "Acme" }"#.to_string()));
        assert_eq!(profile.brand, "Acme");
        assert_eq!(profile.team, CompanyProfile::default().team);
    }

    #[test]
    fn emphasis_driver_follows_source() {
        assert_eq!(EmphasisSource::PageScroll.driver(350.0, 40.0), 350.0);
        assert_eq!(EmphasisSource::PageScroll.driver(350.0, 900.0), 350.0);
        assert_eq!(EmphasisSource::RailScroll.driver(350.0, 40.0), 40.0);
        assert_eq!(EmphasisSource::RailScroll.driver(0.0, 40.0), 40.0);
    }
}
