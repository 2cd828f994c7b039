pub mod profile_viewmodel;

pub use profile_viewmodel::{LoadOutcome, ProfileElements, ProfileWidget};
