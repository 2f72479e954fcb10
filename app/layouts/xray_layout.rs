use html::{component, html};

#[component]
pub fn XRayPageWrapper() {
	html! {
		<div class="xray-page-wrapper wrapper pb4 full-height">
			{children}
		</div>
	}
}

#[component]
pub fn Heading(heading: String) {
	html! {
		<h2 class="py3">{heading}</h2>
	}
}
