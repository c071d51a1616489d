//! Document metadata injected once at startup: title, description and
//! social-card tags, canonical URL, and the schema.org Organization
//! payload search engines read.

use serde::Serialize;
use web_sys::{Document, Element, HtmlHeadElement};

use crate::browser;
use crate::config;

const PAGE_TITLE: &str =
    "Cliq Events Agency - Agence Marketing Digital Premium en Algérie | Cliq Events";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Organization {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    alternate_name: Vec<&'static str>,
    description: &'static str,
    url: &'static str,
    logo: String,
    image: String,
    contact_point: ContactPoint,
    address: PostalAddress,
    same_as: Vec<&'static str>,
    service: Vec<Service>,
    founding_date: &'static str,
    knows_about: Vec<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactPoint {
    #[serde(rename = "@type")]
    kind: &'static str,
    telephone: &'static str,
    contact_type: &'static str,
    email: &'static str,
    area_served: &'static str,
    available_language: Vec<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    address_locality: &'static str,
    address_country: &'static str,
}

#[derive(Serialize)]
struct Service {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
}

fn organization() -> Organization {
    Organization {
        context: "https://schema.org",
        kind: "Organization",
        name: config::SITE_NAME,
        alternate_name: vec!["Cliq Events", "Cliqevents", "Cliq"],
        description: config::SITE_DESCRIPTION,
        url: config::get_site_url(),
        logo: format!("{}/assets/logo-without-bg.png", config::get_site_url()),
        image: format!("{}/assets/cliq-logo-bg.jpeg", config::get_site_url()),
        contact_point: ContactPoint {
            kind: "ContactPoint",
            telephone: config::CONTACT_PHONE,
            contact_type: "customer service",
            email: config::CONTACT_EMAIL,
            area_served: "DZ",
            available_language: vec!["French", "Arabic", "English"],
        },
        address: PostalAddress {
            kind: "PostalAddress",
            address_locality: "Alger",
            address_country: "DZ",
        },
        same_as: vec![
            config::FACEBOOK_URL,
            config::INSTAGRAM_URL,
            config::LINKEDIN_URL,
            config::TWITTER_URL,
        ],
        service: vec![
            Service {
                kind: "Service",
                name: "Marketing d'influence",
                description: "Stratégies de marketing d'influence pour augmenter votre visibilité",
            },
            Service {
                kind: "Service",
                name: "Développement Web",
                description: "Création de sites web et applications digitales",
            },
            Service {
                kind: "Service",
                name: "Communication Digitale",
                description: "Stratégies de communication digitale et branding",
            },
            Service {
                kind: "Service",
                name: "Événementiel Premium",
                description: "Organisation d'événements premium et corporate",
            },
        ],
        founding_date: "2020",
        knows_about: vec![
            "Marketing Digital",
            "Marketing d'Influence",
            "Développement Web",
            "Communication Digitale",
            "Branding",
            "Événementiel",
            "Social Media Management",
        ],
    }
}

/// Write the full metadata set into `<head>`. Safe to call again; existing
/// tags are updated in place.
pub fn apply() {
    let document = match browser::document() {
        Some(document) => document,
        None => return,
    };
    let head = match document.head() {
        Some(head) => head,
        None => return,
    };

    document.set_title(PAGE_TITLE);

    set_meta(&document, &head, "name", "description", config::SITE_DESCRIPTION);
    set_meta(&document, &head, "name", "robots", "index, follow");
    set_meta(&document, &head, "name", "author", config::SITE_NAME);

    set_meta(&document, &head, "property", "og:title", PAGE_TITLE);
    set_meta(&document, &head, "property", "og:description", config::SITE_DESCRIPTION);
    set_meta(&document, &head, "property", "og:type", "website");
    set_meta(&document, &head, "property", "og:locale", "fr_FR");
    set_meta(&document, &head, "property", "og:site_name", config::SITE_NAME);
    set_meta(&document, &head, "property", "og:url", config::get_site_url());
    set_meta(
        &document,
        &head,
        "property",
        "og:image",
        &format!("{}/assets/cliq-logo-bg.jpeg", config::get_site_url()),
    );

    set_meta(&document, &head, "name", "twitter:card", "summary_large_image");
    set_meta(&document, &head, "name", "twitter:site", "@cliqevents");
    set_meta(&document, &head, "name", "twitter:title", PAGE_TITLE);
    set_meta(&document, &head, "name", "twitter:description", config::SITE_DESCRIPTION);

    set_canonical(&document, &head);
    set_structured_data(&document, &head);
}

fn set_meta(document: &Document, head: &HtmlHeadElement, attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{}='{}']", attr, key);
    let existing = document.query_selector(&selector).ok().flatten();
    let element = match existing {
        Some(element) => element,
        None => match create_in_head(document, head, "meta") {
            Some(element) => {
                let _ = element.set_attribute(attr, key);
                element
            }
            None => return,
        },
    };
    let _ = element.set_attribute("content", content);
}

fn set_canonical(document: &Document, head: &HtmlHeadElement) {
    let existing = document.query_selector("link[rel='canonical']").ok().flatten();
    let element = match existing {
        Some(element) => element,
        None => match create_in_head(document, head, "link") {
            Some(element) => {
                let _ = element.set_attribute("rel", "canonical");
                element
            }
            None => return,
        },
    };
    let _ = element.set_attribute("href", config::get_site_url());
}

fn set_structured_data(document: &Document, head: &HtmlHeadElement) {
    let payload = match serde_json::to_string(&organization()) {
        Ok(payload) => payload,
        Err(error) => {
            log::warn!("Failed to serialize structured data: {}", error);
            return;
        }
    };
    let existing = document
        .query_selector("script[type='application/ld+json']")
        .ok()
        .flatten();
    let element = match existing {
        Some(element) => element,
        None => match create_in_head(document, head, "script") {
            Some(element) => {
                let _ = element.set_attribute("type", "application/ld+json");
                element
            }
            None => return,
        },
    };
    element.set_text_content(Some(&payload));
}

fn create_in_head(document: &Document, head: &HtmlHeadElement, tag: &str) -> Option<Element> {
    let element = document.create_element(tag).ok()?;
    head.append_child(&element).ok()?;
    Some(element)
}
