mod home;
mod login;
mod signup;

pub use home::*;
pub use login::*;
pub use signup::*;
