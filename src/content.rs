// =============================================================================
// Folio Web - Site Content Model
// =============================================================================
// Table of Contents:
// 1. Storage Keys
// 2. Footer Configuration
// 3. Merge & Edits
// 4. Navigation Configuration
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

// -----------------------------------------------------------------------------
// 1. Storage Keys
// -----------------------------------------------------------------------------

/// Storage key for the footer configuration. Owned by the surrounding
/// application; other sections write the same key.
pub const FOOTER_INFO_KEY: &str = "footer-info";

/// Storage key for the shared navigation configuration.
pub const NAV_CONFIG_KEY: &str = "nav-config";

// -----------------------------------------------------------------------------
// 2. Footer Configuration
// -----------------------------------------------------------------------------

/// Template creator credit record. Part of the persisted shape but never
/// user-editable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateCreator {
    pub name: String,
    pub youtube: String,
    pub website: String,
    pub email: String,
}

/// The full persisted footer shape. Field names stay camelCase on the wire
/// so the stored records remain shared with the rest of the site.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    pub show_footer: bool,
    pub name: String,
    pub description: String,
    pub show_quick_links: bool,
    pub quick_links_title: String,
    pub show_contact_info: bool,
    pub contact_title: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub copyright: String,
    pub show_made_with: bool,
    pub made_with_location: String,
    pub show_template_credit: bool,
    pub template_creator: TemplateCreator,
    pub show_scroll_top: bool,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            show_footer: true,
            name: "유복길".to_string(),
            description: "개발,디자이너,크리에이터 지망생".to_string(),
            show_quick_links: true,
            quick_links_title: "빠른 링크".to_string(),
            show_contact_info: true,
            contact_title: "연락처".to_string(),
            phone: "010-0000-0000".to_string(),
            email: "유복길@복길.com".to_string(),
            location: "대한민국".to_string(),
            copyright: String::new(),
            show_made_with: false,
            made_with_location: String::new(),
            show_template_credit: false,
            template_creator: TemplateCreator::default(),
            show_scroll_top: true,
        }
    }
}

impl FooterConfig {
    /// Shallow-merge a stored JSON value onto the defaults, field by field.
    /// Missing or wrongly-typed fields keep their default; the protected
    /// credit fields are never taken from storage, so a tampered record
    /// cannot re-enable them.
    pub fn merged(stored: &Value) -> Self {
        let mut config = Self::default();
        let Some(obj) = stored.as_object() else {
            return config;
        };

        fn merge_bool(field: &mut bool, obj: &serde_json::Map<String, Value>, key: &str) {
            if let Some(v) = obj.get(key).and_then(Value::as_bool) {
                *field = v;
            }
        }
        fn merge_str(field: &mut String, obj: &serde_json::Map<String, Value>, key: &str) {
            if let Some(v) = obj.get(key).and_then(Value::as_str) {
                *field = v.to_string();
            }
        }

        merge_bool(&mut config.show_footer, obj, "showFooter");
        merge_bool(&mut config.show_quick_links, obj, "showQuickLinks");
        merge_bool(&mut config.show_contact_info, obj, "showContactInfo");
        merge_bool(&mut config.show_scroll_top, obj, "showScrollTop");

        merge_str(&mut config.name, obj, "name");
        merge_str(&mut config.description, obj, "description");
        merge_str(&mut config.quick_links_title, obj, "quickLinksTitle");
        merge_str(&mut config.contact_title, obj, "contactTitle");
        merge_str(&mut config.phone, obj, "phone");
        merge_str(&mut config.email, obj, "email");
        merge_str(&mut config.location, obj, "location");
        merge_str(&mut config.copyright, obj, "copyright");

        config
    }

    /// True when any contact line has content.
    pub fn has_contact(&self) -> bool {
        !self.phone.is_empty() || !self.email.is_empty() || !self.location.is_empty()
    }

    /// The copyright line to render: the stored value, or the computed
    /// fallback when nothing is stored.
    pub fn copyright_line(&self, year: i32) -> String {
        if !self.copyright.is_empty() {
            return self.copyright.clone();
        }
        let name = if self.name.is_empty() { "Portfolio" } else { &self.name };
        format!("© {} {}. All rights reserved.", year, name)
    }
}

// -----------------------------------------------------------------------------
// 3. Merge & Edits
// -----------------------------------------------------------------------------

/// One field update requested from the UI.
#[derive(Clone, Debug, PartialEq)]
pub enum FooterEdit {
    ShowFooter(bool),
    Name(String),
    Description(String),
    ShowQuickLinks(bool),
    QuickLinksTitle(String),
    ShowContactInfo(bool),
    ContactTitle(String),
    Phone(String),
    Email(String),
    Location(String),
    Copyright(String),
    ShowMadeWith(bool),
    MadeWithLocation(String),
    ShowTemplateCredit(bool),
    TemplateCreator(TemplateCreator),
    ShowScrollTop(bool),
}

impl FooterEdit {
    /// Whether this edit targets one of the write-protected credit fields.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            FooterEdit::ShowMadeWith(_)
                | FooterEdit::MadeWithLocation(_)
                | FooterEdit::ShowTemplateCredit(_)
                | FooterEdit::TemplateCreator(_)
        )
    }
}

impl FooterConfig {
    /// Apply a single edit. Protected edits are refused: the config is left
    /// untouched and `false` is returned so callers skip persistence too.
    pub fn apply(&mut self, edit: FooterEdit) -> bool {
        match edit {
            FooterEdit::ShowFooter(v) => self.show_footer = v,
            FooterEdit::Name(v) => self.name = v,
            FooterEdit::Description(v) => self.description = v,
            FooterEdit::ShowQuickLinks(v) => self.show_quick_links = v,
            FooterEdit::QuickLinksTitle(v) => self.quick_links_title = v,
            FooterEdit::ShowContactInfo(v) => self.show_contact_info = v,
            FooterEdit::ContactTitle(v) => self.contact_title = v,
            FooterEdit::Phone(v) => self.phone = v,
            FooterEdit::Email(v) => self.email = v,
            FooterEdit::Location(v) => self.location = v,
            FooterEdit::Copyright(v) => self.copyright = v,
            FooterEdit::ShowScrollTop(v) => self.show_scroll_top = v,
            FooterEdit::ShowMadeWith(_)
            | FooterEdit::MadeWithLocation(_)
            | FooterEdit::ShowTemplateCredit(_)
            | FooterEdit::TemplateCreator(_) => return false,
        }
        true
    }
}

// -----------------------------------------------------------------------------
// 4. Navigation Configuration
// -----------------------------------------------------------------------------

/// One stored navigation entry, owned by the navigation section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub show: bool,
}

/// The stored navigation configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// The projection the footer renders.
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub name: String,
    pub url: String,
}

impl NavLink {
    fn new(name: &str, url: &str) -> Self {
        Self { name: name.to_string(), url: url.to_string() }
    }

    /// The fixed quick-links list used when no navigation is stored.
    pub fn defaults() -> Vec<NavLink> {
        vec![
            NavLink::new("소개", "#about"),
            NavLink::new("프로젝트", "#projects"),
            NavLink::new("연락처", "#contact"),
        ]
    }
}

impl NavConfig {
    /// The `{name, url}` projection of visible items, in stored order.
    pub fn visible_links(&self) -> Vec<NavLink> {
        self.items
            .iter()
            .filter(|item| item.show)
            .map(|item| NavLink { name: item.name.clone(), url: item.url.clone() })
            .collect()
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merged_overrides_only_present_fields() {
        let stored = json!({ "phone": "031-1234-5678", "showQuickLinks": false });
        let merged = FooterConfig::merged(&stored);
        let defaults = FooterConfig::default();

        assert_eq!(merged.phone, "031-1234-5678");
        assert!(!merged.show_quick_links);
        assert_eq!(merged.name, defaults.name);
        assert_eq!(merged.email, defaults.email);
        assert_eq!(merged.copyright, defaults.copyright);
    }

    #[test]
    fn merged_forces_protected_fields_to_defaults() {
        let stored = json!({
            "showMadeWith": true,
            "madeWithLocation": "somewhere",
            "showTemplateCredit": true,
            "templateCreator": { "name": "x", "youtube": "y", "website": "z", "email": "w" },
            "name": "Acme"
        });
        let merged = FooterConfig::merged(&stored);

        assert_eq!(merged.name, "Acme");
        assert!(!merged.show_made_with);
        assert!(merged.made_with_location.is_empty());
        assert!(!merged.show_template_credit);
        assert_eq!(merged.template_creator, TemplateCreator::default());
    }

    #[test]
    fn merged_tolerates_malformed_input() {
        let defaults = FooterConfig::default();
        assert_eq!(FooterConfig::merged(&json!("not an object")), defaults);
        assert_eq!(FooterConfig::merged(&json!(null)), defaults);

        // Wrong type on one field leaves that field at its default.
        let merged = FooterConfig::merged(&json!({ "phone": 42, "name": "Acme" }));
        assert_eq!(merged.phone, defaults.phone);
        assert_eq!(merged.name, "Acme");
    }

    #[test]
    fn protected_edit_is_refused() {
        let mut config = FooterConfig::default();
        let before = config.clone();

        assert!(!config.apply(FooterEdit::ShowMadeWith(true)));
        assert!(!config.apply(FooterEdit::MadeWithLocation("x".into())));
        assert!(!config.apply(FooterEdit::ShowTemplateCredit(true)));
        assert!(!config.apply(FooterEdit::TemplateCreator(TemplateCreator {
            name: "x".into(),
            ..Default::default()
        })));
        assert_eq!(config, before);
    }

    #[test]
    fn phone_edit_changes_only_phone() {
        let mut config = FooterConfig::default();
        let before = config.clone();

        assert!(config.apply(FooterEdit::Phone("02-555-0100".into())));
        assert_eq!(config.phone, "02-555-0100");
        assert_eq!(
            FooterConfig { phone: before.phone.clone(), ..config.clone() },
            before
        );
    }

    #[test]
    fn default_nav_links_in_order() {
        let names: Vec<_> = NavLink::defaults().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["소개", "프로젝트", "연락처"]);
    }

    #[test]
    fn visible_links_filters_hidden_items() {
        let config = NavConfig {
            items: vec![
                NavItem { name: "홈".into(), url: "#home".into(), icon: "home".into(), show: false },
                NavItem { name: "소개".into(), url: "#about".into(), icon: "user".into(), show: true },
            ],
        };
        let links = config.visible_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "소개");
        assert_eq!(links[0].url, "#about");
    }

    #[test]
    fn copyright_fallback_uses_year_and_name() {
        let config = FooterConfig { name: "Acme".into(), copyright: String::new(), ..Default::default() };
        assert_eq!(config.copyright_line(2026), "© 2026 Acme. All rights reserved.");

        let unnamed = FooterConfig { name: String::new(), ..config.clone() };
        assert_eq!(unnamed.copyright_line(2026), "© 2026 Portfolio. All rights reserved.");

        let stored = FooterConfig { copyright: "custom".into(), ..config };
        assert_eq!(stored.copyright_line(2026), "custom");
    }

    #[test]
    fn footer_config_round_trips_camel_case() {
        let value = serde_json::to_value(FooterConfig::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("showFooter"));
        assert!(obj.contains_key("quickLinksTitle"));
        assert!(obj.contains_key("templateCreator"));
    }
}
