use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::context::Context;
use crate::display::formatter::print_resolution_details;

pub fn detect_command(context: &Context, filepath: &Path, json: bool) -> Result<()> {
    debug!("Detecting runtimes for: {}", filepath.display());

    let result = context.resolver().detect_runtimes(filepath)?;

    if json {
        println!("{}", result.to_json()?);
    } else {
        println!("🔍 Detecting runtimes for: {}", filepath.display());
        print_resolution_details(&result, context.use_color());
    }

    Ok(())
}
