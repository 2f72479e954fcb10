use html::{classes, component, html, style};

#[component]
pub fn Table(class_name: Option<String>, width: Option<String>) {
	let class = classes!("table", class_name);
	let style = style! {
		"width" => width.unwrap_or_else(|| "auto".into()),
	};
	html! {
		<div class="table-wrapper">
			<table class={class} style={style}>
				{children}
			</table>
		</div>
	}
}

#[component]
pub fn TableHeader() {
	html! {
		<thead class="table-header">
			{children}
		</thead>
	}
}

#[component]
pub fn TableBody() {
	html! { <tbody>{children}</tbody> }
}

#[component]
pub fn TableRow(class_name: Option<String>, color: Option<String>) {
	let class = classes!("table-row", class_name);
	let style = style! {
		"background-color" => color,
	};
	html! {
		<tr class={class} style={style}>
			{children}
		</tr>
	}
}

#[derive(Clone)]
pub enum TextAlign {
	Left,
	Center,
	Right,
}

fn text_align_class(text_align: Option<TextAlign>) -> &'static str {
	match text_align {
		Some(TextAlign::Right) => "table-align-right",
		Some(TextAlign::Center) => "table-align-center",
		Some(TextAlign::Left) | None => "table-align-left",
	}
}

#[component]
pub fn TableHeaderCell(class_name: Option<String>, text_align: Option<TextAlign>) {
	let class = classes!(
		"table-header-cell",
		text_align_class(text_align),
		class_name
	);
	html! {
		<th class={class}>
			{children}
		</th>
	}
}

#[component]
pub fn TableCell(
	class_name: Option<String>,
	min_width: Option<String>,
	text_align: Option<TextAlign>,
) {
	let class = classes!("table-cell", text_align_class(text_align), class_name);
	let style = style! {
		"min-width" => min_width,
	};
	html! {
		<td class={class} style={style}>
			{children}
		</td>
	}
}
