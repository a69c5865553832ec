pub mod contact;
pub mod filter;
pub mod pipeline;
pub mod store;
pub mod summary;
