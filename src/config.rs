pub const SITE_NAME: &str = "Cliq Events Agency";
pub const SITE_DESCRIPTION: &str = "Agence 360° spécialisée en marketing d'influence, communication digitale, développement web, branding et événementiel premium en Algérie.";

pub const CONTACT_EMAIL: &str = "cliqevents3@gmail.com";
pub const CONTACT_PHONE: &str = "+213540017730";
pub const CONTACT_PHONE_DISPLAY: &str = "+213 540 017 730";
pub const CONTACT_CITY: &str = "Draria Alger, Algérie";

pub const FACEBOOK_URL: &str = "https://facebook.com/cliqevents";
pub const INSTAGRAM_URL: &str = "https://instagram.com/cliqevents_off";
pub const LINKEDIN_URL: &str = "https://linkedin.com/company/cliqevents";
pub const TWITTER_URL: &str = "https://twitter.com/cliqevents";

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080" // Development URL when serving locally
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://cliqevents.agency"
}
