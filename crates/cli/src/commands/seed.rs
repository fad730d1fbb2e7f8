//! Seed the data directory with demo users and shops.

use bamboo_box_services::seed::ensure_seeded;
use tracing::info;

use crate::Context;

/// Seed demo data if the buckets are empty.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let summary = ensure_seeded(&ctx.store)?;

    if summary.seeded_users {
        info!("seeded demo accounts: test/user, boss/merchant");
    } else {
        info!("users bucket already present, left untouched");
    }
    if summary.seeded_shops {
        info!("seeded three demo shops");
    } else {
        info!("shops bucket already present, left untouched");
    }

    println!("data directory: {}", ctx.config.data_dir.display());
    Ok(())
}
