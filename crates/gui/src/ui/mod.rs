#![forbid(unsafe_code)]

pub mod pager;
pub mod statusbar;
pub mod topbar;
pub mod updates;
