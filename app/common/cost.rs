use std::fmt;

/// How much work the server may spend computing statistics. Higher costs give more precise results.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cost {
	Approximate,
	Exact,
	Extended,
}

pub const COSTS: [Cost; 3] = [Cost::Approximate, Cost::Exact, Cost::Extended];

impl Cost {
	pub fn display_name(self) -> &'static str {
		match self {
			Cost::Approximate => "Approximate",
			Cost::Exact => "Exact",
			Cost::Extended => "Extended",
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			Cost::Approximate => "Get a sense for this data by looking at a sample.",
			Cost::Exact => "Go deeper into this data by performing a full scan.",
			Cost::Extended => "Adds additional info about this entity by including related objects.",
		}
	}
}

impl Default for Cost {
	fn default() -> Cost {
		Cost::Approximate
	}
}

impl fmt::Display for Cost {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let cost = match self {
			Cost::Approximate => "approximate",
			Cost::Exact => "exact",
			Cost::Extended => "extended",
		};
		write!(f, "{}", cost)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_cost_round_trips_through_its_query_value() {
		let costs = COSTS
			.iter()
			.map(|cost| {
				let value = cost.to_string();
				let parsed: Cost = serde_json::from_value(serde_json::json!(value)).unwrap();
				(value, parsed)
			})
			.collect::<Vec<_>>();
		assert_eq!(
			costs,
			vec![
				("approximate".to_owned(), Cost::Approximate),
				("exact".to_owned(), Cost::Exact),
				("extended".to_owned(), Cost::Extended),
			]
		);
		assert!(serde_json::from_value::<Cost>(serde_json::json!("cheap")).is_err());
		assert_eq!(Cost::default(), Cost::Approximate);
	}
}
