//! Live quote lookups: crypto prices and USD exchange rates.
//!
//! Nothing here caches; every call goes to the fetcher.

pub mod exchange;
pub mod fetch;
pub mod price;
