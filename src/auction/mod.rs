pub mod clock;
pub mod display;
pub mod session;
