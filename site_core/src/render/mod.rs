//! HTML rendering
//!
//! Pages are handlebars templates rendered into a shared layout shell. The
//! shell carries the navigation, the theme class, and the footer; page
//! bodies are rendered first and injected pre-escaped.

pub mod templates;

use crate::catalog::ServiceItem;
use crate::error::Result;
use crate::theme::ThemeMode;
use chrono::Datelike;
use handlebars::Handlebars;
use serde::Serialize;
use std::sync::Arc;

const NAV_LINKS: [(&str, &str); 3] = [
    ("Home", "/"),
    ("Services", "/services"),
    ("Contact", "/contact"),
];

/// A catalog entry flattened for templates: the icon tag is resolved to its
/// glyph and the accent tag to a class name here, at render time.
#[derive(Debug, Serialize)]
pub struct ServiceCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
    pub accent_class: &'static str,
}

impl From<&'static ServiceItem> for ServiceCard {
    fn from(item: &'static ServiceItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            glyph: item.icon.glyph(),
            accent_class: item.accent.css_class(),
        }
    }
}

#[derive(Serialize)]
struct NavItem {
    label: &'static str,
    path: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct LayoutShell {
    title: String,
    theme_class: &'static str,
    theme_toggle_label: &'static str,
    nav: Vec<NavItem>,
    body: String,
    year: i32,
}

#[derive(Clone)]
pub struct Renderer {
    hb: Arc<Handlebars<'static>>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut hb = Handlebars::new();
        hb.register_template_string("layout", templates::LAYOUT)?;
        hb.register_template_string("home", templates::HOME)?;
        hb.register_template_string("services", templates::SERVICES)?;
        hb.register_template_string("service_detail", templates::SERVICE_DETAIL)?;
        hb.register_template_string("contact", templates::CONTACT)?;
        hb.register_template_string("contact_success", templates::CONTACT_SUCCESS)?;
        Ok(Self { hb: Arc::new(hb) })
    }

    /// Renders a page body and wraps it in the layout shell.
    pub fn page<T: Serialize>(
        &self,
        template: &str,
        title: &str,
        path: &str,
        mode: ThemeMode,
        data: &T,
    ) -> Result<String> {
        let body = self.hb.render(template, data)?;

        let nav = NAV_LINKS
            .iter()
            .map(|&(label, link)| NavItem {
                label,
                path: link,
                active: is_active(link, path),
            })
            .collect();

        let shell = LayoutShell {
            title: title.to_string(),
            theme_class: mode.css_class(),
            theme_toggle_label: match mode {
                ThemeMode::Dark => "\u{2600}",
                ThemeMode::Light => "\u{1F319}",
            },
            nav,
            body,
            year: chrono::Utc::now().year(),
        };

        Ok(self.hb.render("layout", &shell)?)
    }
}

/// `/services` stays highlighted on detail pages; `/` only matches exactly.
fn is_active(link: &str, current: &str) -> bool {
    if link == "/" {
        current == "/"
    } else {
        current == link || current.starts_with(&format!("{}/", link))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_nav_active_matching() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/services"));
        assert!(is_active("/services", "/services"));
        assert!(is_active("/services", "/services/branding"));
        assert!(!is_active("/services", "/servicesx"));
        assert!(is_active("/contact", "/contact"));
    }

    #[test]
    fn test_page_renders_inside_layout() {
        let renderer = Renderer::new().unwrap();
        let catalog = Catalog::new();

        #[derive(Serialize)]
        struct Ctx {
            featured: Vec<ServiceCard>,
        }

        let ctx = Ctx {
            featured: catalog.all().iter().map(ServiceCard::from).collect(),
        };

        let html = renderer
            .page("home", "Home", "/", ThemeMode::Dark, &ctx)
            .unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("class=\"dark\""));
        assert!(html.contains("data-page=\"home\""));
        assert!(html.contains("Video Editing"));
    }
}
