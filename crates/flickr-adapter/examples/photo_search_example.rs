/*
[INPUT]:  FLICKR_API_KEY / FLICKR_SECRET environment variables, search tags
[OUTPUT]: Matching photos with thumbnail URLs and aspect ratios
[POS]:    Examples - photo search and people lookups
[UPDATE]: When adding new read endpoints
*/

use flickr_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: search photos by tag and look up the owner of the first hit
///
/// Set RUST_LOG=flickr_adapter=debug to watch the rate limiter pace calls.
#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    println!("=== Flickr Photo Search Example ===\n");

    let (api_key, secret) = match (std::env::var("FLICKR_API_KEY"), std::env::var("FLICKR_SECRET")) {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            eprintln!("Set FLICKR_API_KEY and FLICKR_SECRET to run this example");
            return;
        }
    };

    let client = match FlickrClient::new(Credentials::new(api_key, secret)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created\n");

    let params = PhotosSearchParams {
        tags: "castle".to_string(),
        sort: "interestingness-desc".to_string(),
        safe_search: 1,
        per_page: 5,
        ..Default::default()
    };

    println!("Searching photos tagged 'castle'...");
    let results = match client.photos_search(params).await {
        Ok(results) => results,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!(
        "✓ Page {}/{} of {} photos",
        results.paging.page, results.paging.pages, results.paging.total
    );
    for photo in &results.photos {
        let ratio = photo
            .ratio
            .map(|r| format!("{:.2}", r))
            .unwrap_or_else(|| "?".to_string());
        println!("  {} [{}] {}", photo.title, ratio, photo.url(ImageSize::Medium640));
    }

    let Some(first) = results.photos.first() else {
        return;
    };

    println!("\nLooking up owner {}...", first.owner);
    let person = PeopleGetInfoParams {
        user_id: first.owner.clone(),
    };
    match client.people_get_info(person).await {
        Ok(person) => println!("✓ {} ({})", person.username, person.profile_url),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Photo search example complete");
}
