use derive_more::{Display, Error};

#[derive(Display, Debug, Error, Clone, PartialEq)]
pub enum QueryError {
	#[display(fmt = "only structured queries can be converted to underlying records")]
	NotStructured,
}
