pub mod collapse;
pub mod countdown;

pub use collapse::Collapse;
pub use countdown::Countdown;
