use super::models::Config;
use log::error;
use validator::ValidateEmail;

pub const NOT_ENABLED: &str = "Cloudflare purging is not enabled";
pub const EMAIL_EMPTY: &str = "E-mail is empty";
pub const EMAIL_INVALID: &str = "E-mail is not valid";
pub const API_KEY_EMPTY: &str = "API Key is empty";
pub const ZONE_ID_EMPTY: &str = "Zone Id is empty";

/// Checks the settings needed to talk to Cloudflare.
///
/// Returns one message per violated rule, in a fixed order. An empty list
/// means the config is usable. Any errors are also logged once, joined into
/// a single entry.
pub fn validate(config: &Config) -> Vec<String> {
    let mut errors = Vec::new();

    if !config.enabled {
        errors.push(NOT_ENABLED.to_string());
    }

    if config.email.is_empty() {
        errors.push(EMAIL_EMPTY.to_string());
    } else if !config.email.validate_email() || !has_dotted_domain(&config.email) {
        errors.push(EMAIL_INVALID.to_string());
    }

    if config.api_key.is_empty() {
        errors.push(API_KEY_EMPTY.to_string());
    }

    if config.zone_id.is_empty() {
        errors.push(ZONE_ID_EMPTY.to_string());
    }

    if !errors.is_empty() {
        error!(target: "cf_purge", "Config error: {}", errors.join(", "));
    }

    errors
}

// The email rule alone accepts single-label hosts such as `user@localhost`.
fn has_dotted_domain(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => {
            let domain = domain.trim_start_matches('[').trim_end_matches(']');
            domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}
