//! `folio` binary entry point

use anyhow::Result;
use folio_section::builtin;
use folio_studio::logging::init_tracing;
use folio_studio::{Invocation, Studio, StudioConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let invocation = Invocation::from_env();

    let mut config = StudioConfig::load(invocation.config.as_deref())?;
    if let Some(layout) = invocation.layout {
        config = config.with_layout_path(layout);
    }
    if let Some(site_data) = invocation.site_data {
        config = config.with_site_data_path(site_data);
    }

    init_tracing(&config.log_filter);
    tracing::debug!(?config, "studio configured");

    let mut studio = Studio::open(&config, builtin::registry()).await?;
    let output = studio.run(invocation.action).await?;
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}
