use crate::config::Config;
use crate::state::SharedState;

pub async fn cmd_resolve(config: Config, query: &str) -> anyhow::Result<()> {
    let state = SharedState::new(config).await?;

    println!("Resolving: {query}");

    let was_cached = state.store.count_locations_by_query(query).await? > 0;
    let location = state.location_service.resolve(query).await?;

    println!();
    println!("{}", location.formatted_query);
    println!("  Latitude:  {}", location.latitude);
    println!("  Longitude: {}", location.longitude);
    println!(
        "  Source:    {}",
        if was_cached { "cache" } else { "geocoder" }
    );
    match location.id {
        Some(id) => println!("  Stored as: #{id} ({})", location.created_at),
        None => println!("  Not stored (cache write failed)"),
    }

    Ok(())
}
