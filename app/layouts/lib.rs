pub mod document;
pub mod xray_layout;
