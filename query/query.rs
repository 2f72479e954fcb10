use crate::Table;
use std::sync::Arc;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
	Structured(StructuredQuery),
	Native(NativeQuery),
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct StructuredQuery {
	pub table: Arc<Table>,
	#[serde(default)]
	pub aggregations: Vec<Aggregation>,
	#[serde(default)]
	pub breakouts: Vec<Breakout>,
	#[serde(default)]
	pub filters: Vec<Filter>,
	#[serde(default)]
	pub order_by: Vec<OrderBy>,
	#[serde(default)]
	pub limit: Option<u64>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct NativeQuery {
	pub database_id: u64,
	pub query: String,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRef {
	pub field_id: u64,
}

/// `Rows` asks for the raw records and is equivalent to no aggregation at all.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Aggregation {
	Rows,
	Count,
	Sum(FieldRef),
	Avg(FieldRef),
	Distinct(FieldRef),
	Min(FieldRef),
	Max(FieldRef),
	CumulativeSum(FieldRef),
	CumulativeCount,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Breakout {
	pub field: FieldRef,
	#[serde(default)]
	pub temporal_unit: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
	#[serde(rename = "=")]
	Equal,
	#[serde(rename = "!=")]
	NotEqual,
	#[serde(rename = "<")]
	LessThan,
	#[serde(rename = ">")]
	GreaterThan,
	IsNull,
	NotNull,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Filter {
	pub operator: FilterOperator,
	pub field: FieldRef,
	#[serde(default)]
	pub values: Vec<serde_json::Value>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
	Ascending,
	Descending,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct OrderBy {
	pub field: FieldRef,
	pub direction: Direction,
}

impl StructuredQuery {
	pub fn new(table: Arc<Table>) -> StructuredQuery {
		StructuredQuery {
			table,
			aggregations: Vec::new(),
			breakouts: Vec::new(),
			filters: Vec::new(),
			order_by: Vec::new(),
			limit: None,
		}
	}

	pub fn table(&self) -> &Table {
		&self.table
	}

	/// The aggregations that actually group records, skipping the `Rows` marker.
	pub fn aggregations(&self) -> impl Iterator<Item = &Aggregation> {
		self.aggregations
			.iter()
			.filter(|aggregation| **aggregation != Aggregation::Rows)
	}

	/// True when the query already returns raw records, with no aggregation and no breakout.
	pub fn is_bare_rows(&self) -> bool {
		self.aggregations().next().is_none() && self.breakouts.is_empty()
	}

	pub fn aggregate(mut self, aggregation: Aggregation) -> StructuredQuery {
		self.aggregations.push(aggregation);
		self
	}

	pub fn breakout(mut self, breakout: Breakout) -> StructuredQuery {
		self.breakouts.push(breakout);
		self
	}

	pub fn filter(mut self, filter: Filter) -> StructuredQuery {
		self.filters.push(filter);
		self
	}

	/// The same source and filters, returning every matching record.
	pub fn to_underlying_records(&self) -> StructuredQuery {
		StructuredQuery {
			table: Arc::clone(&self.table),
			aggregations: Vec::new(),
			breakouts: Vec::new(),
			filters: self.filters.clone(),
			order_by: Vec::new(),
			limit: None,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn orders() -> Arc<Table> {
		Arc::new(Table {
			id: 2,
			name: "ORDERS".to_owned(),
			display_name: "Orders".to_owned(),
		})
	}

	#[test]
	fn test_is_bare_rows() {
		let query = StructuredQuery::new(orders());
		assert!(query.is_bare_rows());
		let query = query.aggregate(Aggregation::Rows);
		assert!(query.is_bare_rows());
		let query = query.aggregate(Aggregation::Count);
		assert!(!query.is_bare_rows());
		let query = StructuredQuery::new(orders()).breakout(Breakout {
			field: FieldRef { field_id: 7 },
			temporal_unit: Some("month".to_owned()),
		});
		assert!(!query.is_bare_rows());
	}

	#[test]
	fn test_to_underlying_records_keeps_filters() {
		let filter = Filter {
			operator: FilterOperator::GreaterThan,
			field: FieldRef { field_id: 5 },
			values: vec![serde_json::json!(100)],
		};
		let mut query = StructuredQuery::new(orders())
			.aggregate(Aggregation::Sum(FieldRef { field_id: 5 }))
			.breakout(Breakout {
				field: FieldRef { field_id: 7 },
				temporal_unit: None,
			})
			.filter(filter.clone());
		query.limit = Some(10);
		query.order_by.push(OrderBy {
			field: FieldRef { field_id: 7 },
			direction: Direction::Descending,
		});
		let underlying = query.to_underlying_records();
		assert!(underlying.is_bare_rows());
		assert_eq!(underlying.filters, vec![filter]);
		assert!(underlying.order_by.is_empty());
		assert_eq!(underlying.limit, None);
		assert!(Arc::ptr_eq(&underlying.table, &query.table));
	}

	#[test]
	fn test_deserialize() {
		let query: Query = serde_json::from_value(serde_json::json!({
			"type": "structured",
			"table": { "id": 2, "name": "ORDERS", "display_name": "Orders" },
			"aggregations": [{ "type": "count" }, { "type": "sum", "field_id": 5 }],
			"breakouts": [{ "field": { "field_id": 7 } }],
			"filters": [{ "operator": "=", "field": { "field_id": 3 }, "values": ["Widget"] }]
		}))
		.unwrap();
		let query = match query {
			Query::Structured(query) => query,
			Query::Native(_) => panic!("expected a structured query"),
		};
		assert_eq!(
			query.aggregations,
			vec![Aggregation::Count, Aggregation::Sum(FieldRef { field_id: 5 })]
		);
		assert_eq!(query.filters[0].operator, FilterOperator::Equal);
		assert_eq!(query.table().display_name, "Orders");
	}
}
