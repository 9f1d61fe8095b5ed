mod entrant_email;
mod entrant_name;
mod new_waitlist_entry;

pub use entrant_email::EntrantEmail;
pub use entrant_name::EntrantName;
pub use new_waitlist_entry::NewWaitlistEntry;
