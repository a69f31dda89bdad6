use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::info;

use crate::context::Context;

pub fn select_command(context: &Context, filepath: &Path) -> Result<()> {
    let runtime = context
        .resolver()
        .select(filepath)
        .with_context(|| format!("Cannot choose a runtime for {}", filepath.display()))?;

    info!("Selected runtime {} for {}", runtime, filepath.display());
    println!("{runtime}");

    Ok(())
}
