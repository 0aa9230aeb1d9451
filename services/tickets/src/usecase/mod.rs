pub mod activity;
pub mod auth;
pub mod checkin;
pub mod comment;
pub mod event;
pub mod rating;
pub mod recommendation;
pub mod registration;
pub mod user;
