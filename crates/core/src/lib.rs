#![forbid(unsafe_code)]

pub mod model;
pub mod quality;
pub mod question;
pub mod time;

pub use time::Clock;
