#[derive(Debug, Clone)]
pub struct EntrantName(String);

impl EntrantName {
    /// Letters, spaces, hyphens, apostrophes and periods only, 2-50 chars.
    pub fn parse(s: String) -> Result<Self, String> {
        let has_valid_length = (2..=50).contains(&s.chars().count());
        let has_only_allowed_chars = s
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, ' ' | '.' | '\'' | '-'));

        if has_valid_length && has_only_allowed_chars {
            Ok(Self(s))
        } else {
            Err(format!("{s} is not a valid entrant name."))
        }
    }
}

impl AsRef<str> for EntrantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntrantName {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        EntrantName::parse(value)
    }
}
