//! Print the OpenAPI document as JSON.
//!
//! ```sh
//! cargo run --manifest-path backend/Cargo.toml --bin openapi-dump > openapi.json
//! ```

use backend::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), serde_json::Error> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
