pub mod auctionmodel;
pub mod chatmodel;
pub mod propertymodel;
pub mod sessionmodel;
