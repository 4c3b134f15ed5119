pub mod auction_service;
pub mod background_jobs;
pub mod chatbot;
pub mod error;
