pub mod components;
pub mod histogram;
