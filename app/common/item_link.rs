use crate::{item::Item, tokens::ItemTypeToken};
use html::{component, html, style};
use xray_ui as ui;

/// A summary card for one compared item that links to the item's own xray.
#[component]
pub fn ItemLink(item: Item, link: String) {
	let dot_style = style! {
		"background-color" => item.color.main.clone(),
	};
	html! {
		<ui::Link
			class_name={Some("item-link no-decoration flex align-center bordered shadowed bg-white p1 px2 rounded mr1".to_owned())}
			href={Some(link)}
			title={None}
		>
			<div class="item-link-dot mr1" style={dot_style}></div>
			<h2>{item.name}</h2>
			<ItemTypeToken item_type={item.item_type} />
		</ui::Link>
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::item::{ItemColor, ItemType};

	#[test]
	fn test_item_link() {
		let item = Item {
			id: 12,
			item_type: ItemType::Table,
			name: "Orders".to_owned(),
			color: ItemColor {
				main: "#509EE3".to_owned(),
				text: "#fff".to_owned(),
			},
			constituents: Default::default(),
		};
		let link = item.href();
		let html = html!(<ItemLink item={item} link={link} />).render_to_string();
		assert!(html.contains(r#"href="/xray/table/12/approximate""#));
		assert!(html.contains(r#"<div class="item-link-dot mr1" style="background-color: #509EE3;"></div>"#));
		assert!(html.contains("<h2>Orders</h2>"));
		assert!(html.contains(">Table</div>"));
	}
}
