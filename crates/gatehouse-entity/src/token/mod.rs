//! Token value types: the persisted refresh record and the issued pair.

pub mod pair;
pub mod record;

pub use pair::TokenPair;
pub use record::RefreshRecord;
