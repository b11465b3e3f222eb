pub mod backend_check;
pub mod footer;
pub mod hooks;
pub mod navbar;
pub mod ui;

pub use backend_check::*;
pub use footer::*;
pub use navbar::*;
