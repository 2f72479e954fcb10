pub mod color;
mod button;
mod form;
mod icon;
mod link;
mod table;
mod token;
mod tooltip;
mod util;

pub use self::button::*;
pub use self::form::*;
pub use self::icon::*;
pub use self::link::*;
pub use self::table::*;
pub use self::token::*;
pub use self::tooltip::*;
pub use self::util::*;
