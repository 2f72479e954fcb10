//! Actions offered when the user clicks on a query result.

mod underlying_records;

pub use self::underlying_records::underlying_records_action;

use std::{fmt, rc::Rc};
use xray_query::{Question, QueryError};

pub struct ClickActionProps<'a> {
	pub question: &'a Question,
}

/// Produces the question an action navigates to. It is only called when the user picks the action.
pub type QuestionProducer = Rc<dyn Fn() -> Result<Question, QueryError>>;

#[derive(Clone)]
pub struct ClickAction {
	pub name: &'static str,
	pub title: html::Node,
	pub icon: &'static str,
	pub question: QuestionProducer,
}

impl ClickAction {
	/// The title without markup, for hosts that cannot render html.
	pub fn title_text(&self) -> String {
		self.title.clone().render_to_text()
	}
}

impl fmt::Debug for ClickAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClickAction")
			.field("name", &self.name)
			.field("title", &self.title_text())
			.field("icon", &self.icon)
			.finish()
	}
}

pub type ClickActionResolver = fn(&ClickActionProps) -> Vec<ClickAction>;

pub const DEFAULT_ACTIONS: &[ClickActionResolver] = &[underlying_records_action];

/// Collect the actions every resolver offers for the clicked question, in resolver order.
pub fn get_actions(props: &ClickActionProps, resolvers: &[ClickActionResolver]) -> Vec<ClickAction> {
	resolvers
		.iter()
		.flat_map(|resolver| resolver(props))
		.collect()
}
