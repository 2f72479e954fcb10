use html::{component, html};

#[component]
pub fn Tooltip(tooltip: Option<String>) {
	html! {
		<div class="tooltip" title={tooltip}>
			{children}
		</div>
	}
}
