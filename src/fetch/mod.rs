pub mod backend;
pub mod backends;
pub mod types;

pub use backend::{FetchBackend, FetchError};
pub use backends::{AladhanBackend, PrefetchedBackend};
pub use types::{Location, PrayerTimes, decode, sanitize};
