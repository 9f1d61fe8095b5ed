mod health_check;
mod helpers;
mod waitlist;

pub use health_check::health_check;
pub use waitlist::{
    ErrorResponse, SaveWaitlistError, SaveWaitlistRequest, SaveWaitlistResponse, save_waitlist,
    save_waitlist_fallback,
};
