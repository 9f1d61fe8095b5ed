use super::{EntrantEmail, EntrantName};

pub struct NewWaitlistEntry {
    pub name: EntrantName,
    pub email: EntrantEmail,
}

impl NewWaitlistEntry {
    pub fn parse(name: String, email: String) -> Result<Self, String> {
        let name = EntrantName::parse(name)?;
        let email = EntrantEmail::parse(email)?;
        Ok(Self { name, email })
    }
}
