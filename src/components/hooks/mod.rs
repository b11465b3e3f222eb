mod scroll_subscription;
mod use_near_bottom;
mod use_random;
mod use_reveal_toggle;

pub use scroll_subscription::*;
pub use use_near_bottom::*;
pub use use_random::*;
pub use use_reveal_toggle::*;
