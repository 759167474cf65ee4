pub mod availability;
pub mod backend;
pub mod booking;
pub mod controller;
pub mod session;
pub mod validation;
