//! In-process emulation of the slice of the Artsy auction API that the
//! client core is tested against.
//!
//! Token grants, public reads, account creation, and the `/api/v1/me/*`
//! routes are implemented just faithfully enough to validate request
//! building end-to-end: parameter shapes are checked, authenticated routes
//! reject requests without an `X-Access-Token` header, and created resources
//! live in shared in-memory state.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub postal_code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: Location,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub phone: String,
    pub name: String,
    pub location: Location,
}

#[derive(Deserialize)]
pub struct UpdateMe {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub name: Option<String>,
    pub location: Option<Location>,
}

#[derive(Deserialize)]
pub struct PlaceBid {
    pub sale_id: String,
    pub artwork_id: String,
    pub max_bid_amount_cents: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BidPosition {
    pub id: Uuid,
    pub sale_id: String,
    pub artwork_id: String,
    pub max_bid_amount_cents: String,
    pub is_active: bool,
}

#[derive(Deserialize)]
pub struct RegisterCard {
    pub provider: String,
    pub token: String,
    pub created_by_trusted_client: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: Uuid,
    pub provider: String,
    pub token: String,
    pub created_by_trusted_client: bool,
}

/// Everything the server remembers between requests.
#[derive(Default)]
pub struct Store {
    pub users: Vec<User>,
    pub positions: HashMap<Uuid, BidPosition>,
    pub cards: Vec<CreditCard>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/v1/xapp_token", get(xapp_token))
        .route("/oauth2/access_token", get(access_token))
        .route("/api/v1/system/ping", get(ping))
        .route("/api/v1/system/time", get(system_time))
        .route("/api/v1/artwork/{id}", get(artwork))
        .route("/api/v1/artist/{id}", get(artist))
        .route("/api/v1/sales", get(sales))
        .route("/api/v1/sale/{id}", get(sale))
        .route("/api/v1/sale/{id}/sale_artworks", get(sale_artworks))
        .route("/api/v1/user", get(find_registration).post(create_user))
        .route("/api/v1/me", get(me).put(update_me))
        .route("/api/v1/me/bidder_position", post(place_bid))
        .route("/api/v1/me/bidder_position/{id}", get(bid_position))
        .route("/api/v1/me/credit_cards", get(credit_cards).post(register_card))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    tracing::info!(addr = %listener.local_addr()?, "mock auction API listening");
    axum::serve(listener, app()).await
}

/// Authenticated routes demand a non-empty `X-Access-Token` header.
fn require_token(headers: &HeaderMap) -> Result<(), StatusCode> {
    match headers.get(ACCESS_TOKEN_HEADER) {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

// --- token grants ---

async fn xapp_token(Query(q): Query<HashMap<String, String>>) -> Result<Json<Value>, StatusCode> {
    if q.get("client_id").is_none_or(String::is_empty) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "xapp_token": "MOCK_XAPP_TOKEN",
        "expires_in": "2026-01-01T00:00:00+00:00"
    })))
}

async fn access_token(Query(q): Query<HashMap<String, String>>) -> Result<Json<Value>, StatusCode> {
    let granted = q.get("grant_type").map(String::as_str) == Some("credentials")
        && q.contains_key("email")
        && q.contains_key("password");
    if !granted {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "access_token": "MOCK_ACCESS_TOKEN",
        "expires_in": "2026-01-01T00:00:00+00:00"
    })))
}

// --- public reads ---

async fn ping() -> Json<Value> {
    Json(json!({ "ping": "pong" }))
}

async fn system_time() -> Json<Value> {
    Json(json!({
        "time": "2015-05-06T20:00:00Z",
        "unix": 1430942400,
        "zone": "UTC"
    }))
}

async fn artwork(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "id": id,
        "title": "Composition in Blue",
        "medium": "Oil on canvas"
    }))
}

async fn artist(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "id": id,
        "name": "Sample Artist",
        "nationality": "American"
    }))
}

fn all_sales() -> Vec<Value> {
    vec![
        json!({ "id": "evening-sale", "name": "Evening Sale", "is_auction": true, "live": true }),
        json!({ "id": "benefit-sale", "name": "Annual Benefit Auction", "is_auction": true, "live": false }),
    ]
}

/// `/api/v1/sales` serves both "all auctions" (`is_auction=true`) and
/// "active auctions" (`is_auction=true&live=true`); booleans arrive as the
/// string `"true"` either way once query-encoded.
async fn sales(Query(q): Query<HashMap<String, String>>) -> Result<Json<Vec<Value>>, StatusCode> {
    if q.get("is_auction").map(String::as_str) != Some("true") {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut sales = all_sales();
    if q.get("live").map(String::as_str) == Some("true") {
        sales.retain(|s| s["live"] == json!(true));
    }
    Ok(Json(sales))
}

async fn sale(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "id": id,
        "name": "Evening Sale",
        "is_auction": true,
        "auction_state": "open"
    }))
}

async fn sale_artworks(
    Path(id): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    let size: u32 = parse_numeric(&q, "size")?.unwrap_or(10);
    let page: u32 = parse_numeric(&q, "page")?.unwrap_or(1);
    if size == 0 || page == 0 {
        return Err(StatusCode::BAD_REQUEST);
    }
    let first = (page - 1) * size + 1;
    let lots = (first..first + size)
        .map(|n| json!({ "id": format!("{id}-lot-{n}"), "lot_number": n.to_string() }))
        .collect();
    Ok(Json(lots))
}

fn parse_numeric(q: &HashMap<String, String>, key: &str) -> Result<Option<u32>, StatusCode> {
    match q.get(key) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| StatusCode::BAD_REQUEST),
    }
}

// --- account ---

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<CreateUser>,
) -> (StatusCode, Json<User>) {
    let user = User {
        id: Uuid::new_v4(),
        name: input.name,
        email: input.email,
        phone: input.phone,
        location: input.location,
    };
    db.write().await.users.push(user.clone());
    (StatusCode::CREATED, Json(user))
}

/// Registration lookup by email; axum answers HEAD requests through this
/// GET handler with the body stripped, which is all the client sends.
async fn find_registration(
    State(db): State<Db>,
    Query(q): Query<HashMap<String, String>>,
) -> Result<Json<User>, StatusCode> {
    let email = q.get("email").ok_or(StatusCode::BAD_REQUEST)?;
    let store = db.read().await;
    store
        .users
        .iter()
        .find(|u| &u.email == email)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

// --- me-scoped (authenticated) ---

async fn me(State(db): State<Db>, headers: HeaderMap) -> Result<Json<User>, StatusCode> {
    require_token(&headers)?;
    let store = db.read().await;
    store
        .users
        .last()
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_me(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<UpdateMe>,
) -> Result<Json<User>, StatusCode> {
    require_token(&headers)?;
    let mut store = db.write().await;
    let user = store.users.last_mut().ok_or(StatusCode::NOT_FOUND)?;
    if let Some(email) = input.email {
        user.email = email;
    }
    if let Some(phone) = input.phone {
        user.phone = phone;
    }
    if let Some(name) = input.name {
        user.name = name;
    }
    if let Some(location) = input.location {
        user.location = location;
    }
    Ok(Json(user.clone()))
}

async fn place_bid(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<PlaceBid>,
) -> Result<(StatusCode, Json<BidPosition>), StatusCode> {
    require_token(&headers)?;
    let position = BidPosition {
        id: Uuid::new_v4(),
        sale_id: input.sale_id,
        artwork_id: input.artwork_id,
        max_bid_amount_cents: input.max_bid_amount_cents,
        is_active: true,
    };
    db.write().await.positions.insert(position.id, position.clone());
    Ok((StatusCode::CREATED, Json(position)))
}

async fn bid_position(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<BidPosition>, StatusCode> {
    require_token(&headers)?;
    let store = db.read().await;
    store
        .positions
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn credit_cards(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<Vec<CreditCard>>, StatusCode> {
    require_token(&headers)?;
    Ok(Json(db.read().await.cards.clone()))
}

async fn register_card(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<RegisterCard>,
) -> Result<(StatusCode, Json<CreditCard>), StatusCode> {
    require_token(&headers)?;
    if input.provider != "stripe" {
        return Err(StatusCode::BAD_REQUEST);
    }
    let card = CreditCard {
        id: Uuid::new_v4(),
        provider: input.provider,
        token: input.token,
        created_by_trusted_client: input.created_by_trusted_client,
    };
    db.write().await.cards.push(card.clone());
    Ok((StatusCode::CREATED, Json(card)))
}
