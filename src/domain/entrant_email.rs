use validator::ValidateEmail;

// Throwaway inboxes we refuse to add to the list.
const DISPOSABLE_DOMAINS: [&str; 4] = [
    "tempmail.org",
    "10minutemail.com",
    "guerrillamail.com",
    "mailinator.com",
];

#[derive(Debug, Clone)]
pub struct EntrantEmail(String);

impl EntrantEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        // RFC 5322 upper bound
        let too_long = s.chars().count() > 254;
        let has_consecutive_dots = s.contains("..");
        let has_dot_on_edge = s.starts_with('.') || s.ends_with('.');

        if too_long || has_consecutive_dots || has_dot_on_edge || !s.validate_email() {
            return Err(format!("{s} is not a valid waitlist email."));
        }

        let domain = s
            .split_once('@')
            .map(|(_, domain)| domain.to_lowercase())
            .unwrap_or_default();
        if DISPOSABLE_DOMAINS.contains(&domain.as_str()) {
            return Err(format!("{s} is a disposable email address."));
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for EntrantEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntrantEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        EntrantEmail::parse(value)
    }
}
