pub mod batch;
pub mod compare;
pub mod session;
