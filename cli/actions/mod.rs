use crate::ActionsOptions;
use anyhow::{anyhow, Context, Result};
use xray_app_actions::{get_actions, ClickAction, ClickActionProps, DEFAULT_ACTIONS};
use xray_query::Question;

pub(crate) fn actions(options: ActionsOptions) -> Result<()> {
	let question = std::fs::read_to_string(&options.question)
		.with_context(|| format!("failed to read {}", options.question.display()))?;
	let question: Question = serde_json::from_str(&question)
		.with_context(|| format!("failed to parse {}", options.question.display()))?;
	match options.apply {
		Some(name) => {
			let question = apply_action(&question, &name)?;
			println!("{}", serde_json::to_string_pretty(&question)?);
		}
		None => {
			let actions = offered_actions(&question);
			if actions.is_empty() {
				eprintln!("No actions are offered for this question.");
			}
			print!("{}", format_actions(&actions));
		}
	}
	Ok(())
}

fn offered_actions(question: &Question) -> Vec<ClickAction> {
	get_actions(&ClickActionProps { question }, DEFAULT_ACTIONS)
}

/// Run the producer of the named action and return the question it leads to.
fn apply_action(question: &Question, name: &str) -> Result<Question> {
	let actions = offered_actions(question);
	let action = actions
		.iter()
		.find(|action| action.name == name)
		.ok_or_else(|| anyhow!("the action \"{}\" is not offered for this question", name))?;
	let question = (action.question)()?;
	Ok(question)
}

/// One line per action with its name, icon and plain text title separated by tabs.
fn format_actions(actions: &[ClickAction]) -> String {
	actions
		.iter()
		.map(|action| format!("{}\t{}\t{}\n", action.name, action.icon, action.title_text()))
		.collect()
}

#[cfg(test)]
mod test {
	use super::*;
	use xray_query::{Query, Visualization};

	fn products_count() -> Question {
		serde_json::from_value(serde_json::json!({
			"name": "Products by category",
			"display": "bar",
			"query": {
				"type": "structured",
				"table": { "id": 1, "name": "PRODUCTS", "display_name": "Products" },
				"aggregations": [{ "type": "count" }],
				"breakouts": [{ "field": { "field_id": 4 } }],
				"filters": [{ "operator": ">", "field": { "field_id": 6 }, "values": [10] }],
				"limit": 20
			}
		}))
		.unwrap()
	}

	#[test]
	fn test_format_actions() {
		let actions = offered_actions(&products_count());
		assert_eq!(
			format_actions(&actions),
			"underlying-records\ttable2\tView the underlying Products records\n"
		);
		assert_eq!(format_actions(&[]), "");
	}

	#[test]
	fn test_apply_underlying_records() {
		let question = products_count();
		let underlying = apply_action(&question, "underlying-records").unwrap();
		assert_eq!(underlying.name, None);
		assert_eq!(underlying.display, Visualization::Table);
		let query = match underlying.query() {
			Query::Structured(query) => query,
			Query::Native(_) => panic!("expected a structured query"),
		};
		assert!(query.is_bare_rows());
		assert_eq!(query.filters.len(), 1);
		assert_eq!(query.limit, None);
		let json = serde_json::to_value(&underlying).unwrap();
		assert_eq!(json["query"]["table"]["display_name"], "Products");
		assert_eq!(json["display"], "table");
	}

	#[test]
	fn test_apply_unknown_action() {
		let error = apply_action(&products_count(), "zoom-in").unwrap_err();
		assert_eq!(
			error.to_string(),
			"the action \"zoom-in\" is not offered for this question"
		);
	}

	#[test]
	fn test_apply_to_native_question() {
		let question: Question = serde_json::from_value(serde_json::json!({
			"query": { "type": "native", "database_id": 1, "query": "select 1" }
		}))
		.unwrap();
		assert!(offered_actions(&question).is_empty());
		assert!(apply_action(&question, "underlying-records").is_err());
	}
}
