use html::{component, html, raw};

#[derive(Clone, Default)]
pub struct PageInfo {
	pub title: Option<String>,
}

#[component]
pub fn Document(page_info: PageInfo) {
	let title = page_info
		.title
		.map(|title| format!("{} · XRay", title))
		.unwrap_or_else(|| "XRay".to_owned());
	html! {
		<>
			{raw!("<!doctype html>")}
			<html lang="en">
				<head>
					<meta charset="utf-8" />
					<meta content="width=device-width, initial-scale=1" name="viewport" />
					<link href="/favicon.png" rel="icon" type="image/png" />
					<title>{title}</title>
					<link href="/styles.css" rel="stylesheet" />
				</head>
				<body>
					{children}
				</body>
			</html>
		</>
	}
}

#[test]
fn test_document_title() {
	let page_info = PageInfo {
		title: Some("Comparing".to_owned()),
	};
	let html = html! {
		<Document page_info={page_info}>
			<main>{"body"}</main>
		</Document>
	}
	.render_to_string();
	assert!(html.starts_with("<!doctype html><html lang=\"en\">"));
	assert!(html.contains("<title>Comparing · XRay</title>"));
	assert!(html.contains("<body><main>body</main></body>"));
}
