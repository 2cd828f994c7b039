// Utils compartidos

pub mod constants;
pub mod navigation;
pub mod storage;

pub use navigation::{Navigator, RecordingNavigator, WindowNavigator};
pub use storage::{LocalTokenStore, MemoryTokenStore, TokenStore};
