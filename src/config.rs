use std::time::Duration;
use log::Level;

/// Simulated latency of a quote request when nothing overrides it at build time.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 600;

pub struct ContactDetails {
    pub company: &'static str,
    pub tagline: &'static str,
    pub phone_display: &'static str,
    pub phone_uri: &'static str,
    pub email: &'static str,
    pub city: &'static str,
    pub area: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    company: "HUMITEK",
    tagline: "Maîtriser l’humidité",
    phone_display: "06 59 61 02 85",
    phone_uri: "tel:+33659610285",
    email: "contact@humitek.fr",
    city: "Bordeaux",
    area: "Nouvelle-Aquitaine",
};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Delay before a quote request is considered sent.
///
/// Set `HUMITEK_SUBMIT_DELAY_MS` when building to override it.
pub fn submit_delay() -> Duration {
    parse_submit_delay(option_env!("HUMITEK_SUBMIT_DELAY_MS"))
}

fn parse_submit_delay(raw: Option<&str>) -> Duration {
    let millis = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_SUBMIT_DELAY_MS);
    Duration::from_millis(millis)
}

pub fn mailto_link(subject: &str) -> String {
    format!("mailto:{}?subject={}", CONTACT.email, urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_delay_falls_back_to_default() {
        assert_eq!(parse_submit_delay(None), Duration::from_millis(600));
    }

    #[test]
    fn delay_override_is_parsed() {
        assert_eq!(parse_submit_delay(Some(" 0 ")), Duration::ZERO);
        assert_eq!(parse_submit_delay(Some("1500")), Duration::from_millis(1500));
    }

    #[test]
    fn garbage_delay_is_ignored() {
        assert_eq!(parse_submit_delay(Some("soon")), Duration::from_millis(600));
        assert_eq!(parse_submit_delay(Some("-5")), Duration::from_millis(600));
    }

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_link("Demande de devis"),
            "mailto:contact@humitek.fr?subject=Demande%20de%20devis"
        );
    }
}
