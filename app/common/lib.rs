pub mod cost;
pub mod cost_select;
pub mod distance;
pub mod item;
pub mod item_link;
pub mod schema_metadata;
pub mod tokens;
