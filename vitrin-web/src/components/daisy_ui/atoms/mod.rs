pub mod badge;
pub mod progress;

pub use badge::Badge;
pub use progress::Progress;
