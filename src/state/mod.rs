pub mod load_abort;
pub mod mount_schedule;

pub use load_abort::{AbortRegistration, LoadAbort};
pub use mount_schedule::MountSchedule;
