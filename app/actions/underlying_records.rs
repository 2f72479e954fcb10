use crate::{ClickAction, ClickActionProps};
use html::html;
use std::rc::Rc;
use xray_query::Query;

/// Offer to list the records behind an aggregated structured query. Native queries and queries that already return raw rows get no action.
pub fn underlying_records_action(props: &ClickActionProps) -> Vec<ClickAction> {
	let query = match props.question.query() {
		Query::Structured(query) => query,
		_ => return Vec::new(),
	};
	if query.is_bare_rows() {
		return Vec::new();
	}
	let table_name = query.table().display_name.clone();
	let title = html! {
		<span>
			{"View the underlying "}
			<span class="text-dark">{table_name}</span>
			{" records"}
		</span>
	};
	let question = props.question.clone();
	vec![ClickAction {
		name: "underlying-records",
		title,
		icon: "table2",
		question: Rc::new(move || question.to_underlying_records()),
	}]
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{get_actions, DEFAULT_ACTIONS};
	use std::sync::Arc;
	use xray_query::{
		Aggregation, Breakout, FieldRef, NativeQuery, Question, StructuredQuery, Table,
	};

	fn orders() -> Arc<Table> {
		Arc::new(Table {
			id: 2,
			name: "ORDERS".to_owned(),
			display_name: "Orders".to_owned(),
		})
	}

	#[test]
	fn test_native_query_has_no_action() {
		let question = Question::new(Query::Native(NativeQuery {
			database_id: 1,
			query: "select count(*) from orders".to_owned(),
		}));
		let actions = underlying_records_action(&ClickActionProps {
			question: &question,
		});
		assert!(actions.is_empty());
	}

	#[test]
	fn test_bare_rows_have_no_action() {
		let question = Question::new(Query::Structured(
			StructuredQuery::new(orders()).aggregate(Aggregation::Rows),
		));
		let actions = underlying_records_action(&ClickActionProps {
			question: &question,
		});
		assert!(actions.is_empty());
	}

	#[test]
	fn test_aggregated_query_has_one_action() {
		let question = Question::new(Query::Structured(
			StructuredQuery::new(orders())
				.aggregate(Aggregation::Sum(FieldRef { field_id: 5 }))
				.breakout(Breakout {
					field: FieldRef { field_id: 7 },
					temporal_unit: Some("month".to_owned()),
				}),
		));
		let actions = underlying_records_action(&ClickActionProps {
			question: &question,
		});
		assert_eq!(actions.len(), 1);
		let action = &actions[0];
		assert_eq!(action.name, "underlying-records");
		assert_eq!(action.icon, "table2");
		assert_eq!(action.title_text(), "View the underlying Orders records");
		assert_eq!(
			action.title.clone().render_to_string(),
			r#"<span>View the underlying <span class="text-dark">Orders</span> records</span>"#
		);
		assert_eq!((action.question)(), question.to_underlying_records());
	}

	#[test]
	fn test_breakout_without_aggregation_has_action() {
		let question = Question::new(Query::Structured(StructuredQuery::new(orders()).breakout(
			Breakout {
				field: FieldRef { field_id: 7 },
				temporal_unit: None,
			},
		)));
		let actions = get_actions(
			&ClickActionProps {
				question: &question,
			},
			DEFAULT_ACTIONS,
		);
		insta::assert_debug_snapshot!(actions, @r###"
  [
      ClickAction {
          name: "underlying-records",
          title: "View the underlying Orders records",
          icon: "table2",
      },
  ]
  "###);
	}
}
