use crate::core::{category::Category, command_init::CommandInit, error::Result};

/// Search a whole category by name, without showing its first page first
pub fn execute_search(base_url: Option<String>, category: &str, term: &[String]) -> Result<()> {
    let category: Category = category.parse()?;
    let term = term.join(" ");
    let mut navigator = CommandInit::initialize(base_url)?;

    navigator.activate(category);
    navigator.search(&term)?;
    Ok(())
}
