pub mod api_client;

pub use api_client::{asset_url, endpoint, ApiClient, LostPawApi, API_PREFIX};
