pub mod aladhan;
pub mod prefetched;

pub use aladhan::AladhanBackend;
pub use prefetched::PrefetchedBackend;
