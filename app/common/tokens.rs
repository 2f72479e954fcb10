use crate::item::ItemType;
use html::{component, html};
use xray_ui as ui;

#[component]
pub fn ItemTypeToken(item_type: ItemType) {
	let (color, text) = match item_type {
		ItemType::Segment => ("var(--purple)", "Segment"),
		ItemType::Table => ("var(--blue)", "Table"),
		ItemType::Field => ("var(--teal)", "Field"),
		ItemType::Card => ("var(--orange)", "Question"),
	};
	html! {
		<ui::Token
			class_name={Some(format!("item-type-token item-type-{}", item_type))}
			color={Some(color.to_owned())}
		>
			{text}
		</ui::Token>
	}
}

#[test]
fn test_item_type_token() {
	let html = html!(<ItemTypeToken item_type={ItemType::Card} />).render_to_string();
	assert_eq!(
		html,
		r#"<div class="token item-type-token item-type-card" style="background-color: var(--orange);">Question</div>"#
	);
}
