mod compare;
mod page;

pub use self::compare::*;
pub use self::page::*;
