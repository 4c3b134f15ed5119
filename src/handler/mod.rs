pub mod auctions;
pub mod chat;
pub mod properties;
pub mod session;
