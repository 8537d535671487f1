mod manual_clock;
mod system_clock;
mod ticker;

pub use manual_clock::ManualClock;
pub use system_clock::SystemClock;
pub use ticker::StatusTicker;
