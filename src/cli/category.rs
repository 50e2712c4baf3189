//! Category listing

use crate::display::format_category_table;
use crate::error::LedgerResult;

pub fn handle_categories_command() -> LedgerResult<()> {
    print!("{}", format_category_table());
    Ok(())
}
