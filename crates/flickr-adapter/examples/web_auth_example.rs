/*
[INPUT]:  FLICKR_API_KEY / FLICKR_SECRET environment variables, frob from the callback
[OUTPUT]: Auth URL to visit, then an issued auth token
[POS]:    Examples - web authentication flow
[UPDATE]: When auth flow changes
*/

use flickr_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: web authentication
///
/// 1. Run without arguments and open the printed URL.
/// 2. After approving, copy the `frob` query parameter from the callback URL.
/// 3. Run again with the frob as the first argument to obtain a token.
#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    println!("=== Flickr Web Auth Example ===\n");

    let (api_key, secret) = match (std::env::var("FLICKR_API_KEY"), std::env::var("FLICKR_SECRET")) {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            eprintln!("Set FLICKR_API_KEY and FLICKR_SECRET to run this example");
            return;
        }
    };

    let mut client = match FlickrClient::new(Credentials::new(api_key, secret)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let Some(frob) = std::env::args().nth(1) else {
        println!("Visit this URL to authorize the application:\n");
        println!("  {}\n", client.auth_url(Permission::Read));
        println!("Then run again with the frob from the callback URL.");
        return;
    };

    println!("Exchanging frob for a token...");
    let token = match client.get_token(&frob).await {
        Ok(token) => token,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Token issued to {} with {} permission", token.user.username, token.perms);
    client.set_auth_token(token.token);

    println!("\nListing your own photos...");
    let params = PhotosSearchParams {
        user_id: "me".to_string(),
        per_page: 10,
        ..Default::default()
    };
    match client.photos_search(params).await {
        Ok(results) => {
            for photo in &results.photos {
                println!("  {} {}", photo.id, photo.title);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Web auth example complete");
}
