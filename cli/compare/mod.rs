use crate::CompareOptions;
use anyhow::{Context, Result};
use xray_app_layouts::document::PageInfo;
use xray_app_pages_xray_compare::{render, Props};

pub(crate) fn compare(options: CompareOptions) -> Result<()> {
	let props = std::fs::read_to_string(&options.props)
		.with_context(|| format!("failed to read {}", options.props.display()))?;
	let html = render_props(&props)
		.with_context(|| format!("failed to render {}", options.props.display()))?;
	match options.output {
		Some(output) => {
			std::fs::write(&output, html)
				.with_context(|| format!("failed to write {}", output.display()))?;
			eprintln!("Your comparison was written to {}.", output.display());
		}
		None => print!("{}", html),
	}
	Ok(())
}

/// Parse comparison props from json and render the full page.
fn render_props(props: &str) -> Result<String> {
	let props: Props = serde_json::from_str(props).context("failed to parse the comparison props")?;
	let page_info = PageInfo {
		title: Some(format!(
			"Comparing {} and {}",
			props.item_a.name, props.item_b.name
		)),
	};
	Ok(render(props, page_info))
}
