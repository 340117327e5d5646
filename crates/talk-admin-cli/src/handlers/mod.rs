pub mod auth;
pub mod opinion;
pub mod pages;
pub mod push;
pub mod report;
pub mod session;
pub mod stats;
