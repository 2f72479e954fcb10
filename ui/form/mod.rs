mod field_label;
mod form;
mod select_field;

pub use self::field_label::*;
pub use self::form::*;
pub use self::select_field::*;
