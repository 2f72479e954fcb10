use html::{classes, component, html};

#[component]
pub fn Link(class_name: Option<String>, href: Option<String>, title: Option<String>) {
	let class_name = classes!("link", class_name);
	html! {
		<a class={class_name} href={href} title={title}>
			{children}
		</a>
	}
}

#[test]
fn test_link() {
	let html = html! {
		<Link
			class_name={Some("no-decoration".to_owned())}
			href={Some("/xray/field/3/approximate".to_owned())}
			title={None}
		>
			{"Total"}
		</Link>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<a class="link no-decoration" href="/xray/field/3/approximate">Total</a>"#
	);
}
