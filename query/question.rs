use crate::{Query, QueryError};

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Visualization {
	Table,
	Scalar,
	Bar,
	Line,
	Pie,
	Map,
}

impl Default for Visualization {
	fn default() -> Visualization {
		Visualization::Table
	}
}

/// A query together with how its result is presented. Questions are never modified in place; derivations return a new question.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Question {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub display: Visualization,
	pub query: Query,
}

impl Question {
	pub fn new(query: Query) -> Question {
		Question {
			name: None,
			display: Visualization::default(),
			query,
		}
	}

	pub fn query(&self) -> &Query {
		&self.query
	}

	/// A new unsaved question listing the records behind this question's aggregated result.
	pub fn to_underlying_records(&self) -> Result<Question, QueryError> {
		match &self.query {
			Query::Structured(query) => Ok(Question {
				name: None,
				display: Visualization::Table,
				query: Query::Structured(query.to_underlying_records()),
			}),
			Query::Native(_) => Err(QueryError::NotStructured),
		}
	}
}
