//! Screen implementations, one per game phase.

mod discussion;
mod pass_device;
mod results;
mod reveal;
mod setup;

pub use discussion::DiscussionScreen;
pub use pass_device::PassDeviceScreen;
pub use results::ResultsScreen;
pub use reveal::RevealScreen;
pub use setup::{SetupField, SetupScreen};
