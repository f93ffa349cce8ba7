use crate::core::{category::Category, command_init::CommandInit, error::Result};

pub fn execute_list(base_url: Option<String>, category: &str, page: u32) -> Result<()> {
    let category: Category = category.parse()?;
    let mut navigator = CommandInit::initialize(base_url)?;

    log::debug!("Listing {category} page {page}");
    navigator.open_page(category, page)?;
    Ok(())
}
