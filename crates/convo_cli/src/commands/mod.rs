pub mod check;
pub mod classify;
pub mod validate;
