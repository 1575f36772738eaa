pub mod email;
pub mod offices;
