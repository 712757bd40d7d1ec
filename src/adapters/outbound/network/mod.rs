/// Network adapters for the remote product database
mod postgrest_client;

pub use postgrest_client::{PostgrestQuery, PostgrestStore};
