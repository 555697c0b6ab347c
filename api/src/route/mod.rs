pub mod health;
pub mod user;
pub mod v1;
pub mod webinar;
