pub mod user;

pub use user::{ProfileDisplay, UserRecord};
