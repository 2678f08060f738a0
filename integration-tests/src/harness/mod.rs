mod fixture;
pub mod tracing;

pub use fixture::{fixture_path, load_fixture, write_log};
pub use self::tracing::{CapturedEvent, capture_events};
