pub mod presentation;
pub mod recognition;
pub mod shared;
