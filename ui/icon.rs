use html::{classes, component, html, style};

/// An icon from the application's icon sprite, addressed by name.
#[component]
pub fn Icon(class_name: Option<String>, name: String, size: Option<u32>) {
	let size = size.unwrap_or(16);
	let class = classes!("icon", format!("icon-{}", name), class_name);
	let style = style! {
		"width" => format!("{}px", size),
		"height" => format!("{}px", size),
	};
	html! {
		<span aria-label={name.clone()} class={class} data-icon={name} role="img" style={style}></span>
	}
}
