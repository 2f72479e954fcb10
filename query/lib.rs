//! A small model of saved questions and the queries behind them.

mod error;
mod query;
mod question;
mod table;

pub use self::error::QueryError;
pub use self::query::*;
pub use self::question::*;
pub use self::table::*;
