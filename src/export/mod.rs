pub mod markdown;
pub mod pdf;

use std::path::Path;

use eyre::Result;
use log::info;

/// Writes rendered export bytes where the user asked for them.
pub async fn write_export(path: &Path, bytes: Vec<u8>) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, bytes).await?;
    info!("exported {}", path.display());
    Ok(())
}
