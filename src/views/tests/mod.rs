
use std::sync::Arc;

use serde_json::json;

use crate::client::interceptor::JwtInterceptor;
use crate::client::mock::{temp_storage, MockTransport};
use crate::client::ApiClient;
use crate::services::Services;
use crate::storage::LocalStorage;

struct Fixture {
    transport: Arc<MockTransport>,
    storage: LocalStorage,
    services: Services,
}

fn fixture(name: &str) -> Fixture {
    let transport = MockTransport::new();
    let storage = temp_storage(name);
    let client = ApiClient::new(transport.clone())
        .with_interceptor(Arc::new(JwtInterceptor::new(storage.clone())));
    let services = Services::new(client, storage.clone());
    Fixture {
        transport,
        storage,
        services,
    }
}

fn push_me(transport: &MockTransport, user_id: i64) {
    transport.push_json(200, json!({"user_id": user_id, "username": "alice"}));
}

fn movie(id: i64, title: &str) -> serde_json::Value {
    json!({
        "movieId": id,
        "imdbId": id * 10,
        "tmdbId": id * 100,
        "title": title,
        "released_date": "1995-01-01",
        "year": "1995",
        "overview": "",
        "poster": "",
    })
}
