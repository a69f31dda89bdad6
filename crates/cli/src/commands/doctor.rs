use anyhow::Result;
use script_runner_core::RuntimeFamily;
use tracing::{debug, warn};

use crate::context::Context;
use crate::display::formatter::format_resolution;

pub fn doctor_command(context: &Context, families: &[RuntimeFamily], json: bool) -> Result<()> {
    let families = if families.is_empty() {
        context.config.report_families.as_slice()
    } else {
        families
    };
    debug!("Reporting runtimes for {} families", families.len());

    let report = context.resolver().diagnose(families);

    for family in report.missing_families() {
        warn!("No {} runtime installed", family);
    }

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("🩺 Runtime availability");
    if let Some(source) = &context.config_source {
        println!("   📄 Config: {}", source.display());
    }
    let use_color = context.use_color();
    for entry in report.entries() {
        println!("   {}", format_resolution(entry, use_color));
    }

    Ok(())
}
