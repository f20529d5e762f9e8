use crate::config::Config;
use crate::db::Store;

pub async fn cmd_forget(config: &Config, location_id: i32) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let Some(location) = store.get_location(location_id).await? else {
        println!("Location with ID {location_id} not found.");
        return Ok(());
    };

    let removed = store.delete_by_location_id(location_id).await?;
    println!(
        "✓ Removed {removed} stored record(s) for '{}' (ID: {location_id})",
        location.search_query
    );

    Ok(())
}
