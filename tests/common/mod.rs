use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use catalog_admin::storage::MemoryStore;
use catalog_admin::{AppContext, Config};

/// Build a context pointed at `server` over a fresh in-memory store.
#[allow(dead_code)]
pub fn context_for(server: &MockServer) -> (AppContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let ctx = context_with_store(server, Arc::clone(&store));
    (ctx, store)
}

#[allow(dead_code)]
pub fn context_with_store(server: &MockServer, store: Arc<MemoryStore>) -> AppContext {
    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.api.timeout_seconds = 5;
    AppContext::new(config, store).expect("failed to build context")
}

/// Login response body as returned by the remote API.
#[allow(dead_code)]
pub fn login_body(token: &str) -> Value {
    json!({
        "id": 1,
        "username": "emilys",
        "email": "emily.johnson@x.dummyjson.com",
        "firstName": "Emily",
        "lastName": "Johnson",
        "gender": "female",
        "image": "https://dummyjson.com/icon/emilys/128",
        "accessToken": token,
        "refreshToken": "refresh-token"
    })
}

/// Mount a login endpoint that accepts any credentials.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body(token)))
        .mount(server)
        .await;
}

/// Context that is already logged in with `token`.
#[allow(dead_code)]
pub async fn logged_in_context(server: &MockServer, token: &str) -> (AppContext, Arc<MemoryStore>) {
    mount_login(server, token).await;
    let (ctx, store) = context_for(server);
    ctx.session()
        .login("emilys", "emilyspass")
        .await
        .expect("login should succeed");
    (ctx, store)
}

#[allow(dead_code)]
pub fn product_json(id: u64, title: &str, category: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "category": category,
        "price": 9.99,
        "discountPercentage": 5.0,
        "rating": 4.5,
        "stock": 10,
        "tags": [category]
    })
}
