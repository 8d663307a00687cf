//! Low-level utilities shared by the belief filters

pub mod numeric;
