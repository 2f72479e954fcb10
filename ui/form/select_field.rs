use super::FieldLabel;
use html::{component, html};

#[derive(Clone)]
pub struct SelectFieldOption {
	pub text: String,
	pub value: String,
}

#[component]
pub fn SelectField(
	disabled: Option<bool>,
	id: Option<String>,
	label: Option<String>,
	name: Option<String>,
	options: Vec<SelectFieldOption>,
	required: Option<bool>,
	value: Option<String>,
) {
	html! {
		<FieldLabel html_for={id.clone()}>
			{label}
			<select
				class="form-select"
				disabled={disabled}
				id={id}
				name={name}
				required={required}
			>
				{
					options.into_iter().map(|option| {
						let selected = value.as_deref() == Some(option.value.as_str());
						html! {
							<option selected={selected} value={option.value}>
								{option.text}
							</option>
						}
					}).collect::<Vec<_>>()
				}
			</select>
		</FieldLabel>
	}
}

#[test]
fn test_select_field_marks_current_value() {
	let options = vec![
		SelectFieldOption {
			text: "Exact".to_owned(),
			value: "exact".to_owned(),
		},
		SelectFieldOption {
			text: "Extended".to_owned(),
			value: "extended".to_owned(),
		},
	];
	let html = html! {
		<SelectField
			disabled={None}
			id={None}
			label={None}
			name={Some("cost".to_owned())}
			options={options}
			required={None}
			value={Some("extended".to_owned())}
		/>
	}
	.render_to_string();
	assert!(html.contains(r#"<option value="exact">Exact</option>"#));
	assert!(html.contains(r#"<option selected value="extended">Extended</option>"#));
}
