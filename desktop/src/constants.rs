//! Constant values.

/// Resource catalog bundled with the client.
pub static CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// Class applied to the root element for the dark theme.
pub static DARK_THEME_CLASS: &str = "dark";

#[cfg(test)]
#[path = "./constants_test.rs"]
mod constants_test;
