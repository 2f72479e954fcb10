use crate::cost::{Cost, COSTS};
use html::{component, html};
use xray_ui as ui;

/// Lets the user rerun the view at a different cost. Submitting the form reloads the page with a `cost` search param.
#[component]
pub fn CostSelect(current_cost: Cost) {
	let options = COSTS
		.iter()
		.map(|cost| ui::SelectFieldOption {
			text: cost.display_name().to_owned(),
			value: cost.to_string(),
		})
		.collect::<Vec<_>>();
	html! {
		<ui::Form action={None} class_name={Some("cost-select".to_owned())} id={None} post={None}>
			<ui::Tooltip tooltip={Some(current_cost.description().to_owned())}>
				<ui::SelectField
					disabled={None}
					id={Some("cost-select-field".to_owned())}
					label={Some("Cost".to_owned())}
					name={Some("cost".to_owned())}
					options={options}
					required={None}
					value={Some(current_cost.to_string())}
				/>
			</ui::Tooltip>
			<noscript>
				<ui::Button
					button_type={ui::ButtonType::Submit}
					color={None}
					disabled={None}
					href={None}
					id={None}
				>
					{"Submit"}
				</ui::Button>
			</noscript>
		</ui::Form>
	}
}

#[test]
fn test_cost_select_marks_current_cost() {
	let html = html!(<CostSelect current_cost={Cost::Exact} />).render_to_string();
	assert!(html.contains(r#"<form class="form cost-select" method="get">"#));
	assert!(html.contains(r#"<option selected value="exact">Exact</option>"#));
	assert!(html.contains(r#"<option value="approximate">Approximate</option>"#));
	assert!(html.contains(r#"name="cost""#));
}
