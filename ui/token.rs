use html::{classes, component, html, style};

/// A small colored label, such as the kind of an xray item.
#[component]
pub fn Token(class_name: Option<String>, color: Option<String>) {
	let class = classes!("token", class_name);
	let style = style! {
		"background-color" => color,
	};
	html! {
		<div class={class} style={style}>
			{children}
		</div>
	}
}

#[test]
fn test_token() {
	let html = html! {
		<Token class_name={Some("item-type-token".to_owned())} color={None}>
			{"Segment"}
		</Token>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<div class="token item-type-token" style="">Segment</div>"#
	);
}
