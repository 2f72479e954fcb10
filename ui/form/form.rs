use html::{classes, component, html};

#[component]
pub fn Form(
	action: Option<String>,
	class_name: Option<String>,
	id: Option<String>,
	post: Option<bool>,
) {
	let method = if post.unwrap_or(false) { "post" } else { "get" };
	let class = classes!("form", class_name);
	html! {
		<form action={action} class={class} id={id} method={method}>
			{children}
		</form>
	}
}
