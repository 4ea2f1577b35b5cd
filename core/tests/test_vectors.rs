//! Verify the full registry against the JSON vectors in `test-vectors/`.
//!
//! Each case names one descriptor and the request it must build: path,
//! method, parameter mapping, and the auth flag, plus the fixture name the
//! descriptor maps to. Parameters are compared as parsed JSON (not raw
//! strings) to avoid false negatives from field-ordering differences; the
//! string-`"true"` vs boolean-`true` sales distinction is still exact,
//! because JSON keeps the two types apart.

use artsy_core::{
    ArtsyApi, ArtsyAuthenticatedApi, ArtsyClient, Credentials, Endpoint, Environment, HttpMethod,
    HttpRequest, STAGING_BASE_URL,
};

fn sample_credentials() -> Credentials {
    Credentials::new("vector-key", "vector-secret")
}

fn client() -> ArtsyClient<Environment> {
    ArtsyClient::new(Environment { use_staging: true }, sample_credentials())
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "HEAD" => HttpMethod::Head,
        other => panic!("unknown method: {other}"),
    }
}

/// Build the descriptor for a vector case, with the same fixed arguments the
/// vector file's expectations were written against.
fn build_case(name: &str) -> (HttpRequest, &'static str) {
    let c = client();
    let built = |e: &dyn Endpoint| (c.build(e).unwrap(), e.fixture());
    match name {
        "XApp" => built(&ArtsyApi::XApp),
        "XAuth" => built(&ArtsyApi::XAuth {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
        }),
        "TrustToken" => built(&ArtsyApi::TrustToken {
            number: "42".to_string(),
            auction_pin: "1234".to_string(),
        }),
        "SystemTime" => built(&ArtsyApi::SystemTime),
        "Ping" => built(&ArtsyApi::Ping),
        "Artwork" => built(&ArtsyApi::Artwork {
            id: "the-artwork".to_string(),
        }),
        "Artist" => built(&ArtsyApi::Artist {
            id: "the-artist".to_string(),
        }),
        "Auctions" => built(&ArtsyApi::Auctions),
        "AuctionListings" => built(&ArtsyApi::AuctionListings {
            id: "the-sale".to_string(),
            page: 2,
            page_size: 25,
        }),
        "AuctionInfo" => built(&ArtsyApi::AuctionInfo {
            auction_id: "the-sale".to_string(),
        }),
        "AuctionInfoForArtwork" => built(&ArtsyApi::AuctionInfoForArtwork {
            auction_id: "the-sale".to_string(),
            artwork_id: "the-artwork".to_string(),
        }),
        "FindBidderRegistration" => built(&ArtsyApi::FindBidderRegistration {
            auction_id: "the-sale".to_string(),
            phone: "5551234567".to_string(),
        }),
        "ActiveAuctions" => built(&ArtsyApi::ActiveAuctions),
        "CreateUser" => built(&ArtsyApi::CreateUser {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
            phone: "5551234567".to_string(),
            post_code: "10013".to_string(),
            name: "Ash".to_string(),
        }),
        "BidderDetailsNotification" => built(&ArtsyApi::BidderDetailsNotification {
            auction_id: "the-sale".to_string(),
            identifier: "5551234567".to_string(),
        }),
        "LostPasswordNotification" => built(&ArtsyApi::LostPasswordNotification {
            email: "user@example.com".to_string(),
        }),
        "FindExistingEmailRegistration" => built(&ArtsyApi::FindExistingEmailRegistration {
            email: "user@example.com".to_string(),
        }),
        "MyCreditCards" => built(&ArtsyAuthenticatedApi::MyCreditCards),
        "CreatePinForBidder" => built(&ArtsyAuthenticatedApi::CreatePinForBidder {
            bidder_id: "the-bidder".to_string(),
        }),
        "RegisterToBid" => built(&ArtsyAuthenticatedApi::RegisterToBid {
            auction_id: "the-sale".to_string(),
        }),
        "MyBiddersForAuction" => built(&ArtsyAuthenticatedApi::MyBiddersForAuction {
            auction_id: "the-sale".to_string(),
        }),
        "MyBidPositionsForAuctionArtwork" => {
            built(&ArtsyAuthenticatedApi::MyBidPositionsForAuctionArtwork {
                auction_id: "the-sale".to_string(),
                artwork_id: "the-artwork".to_string(),
            })
        }
        "MyBidPosition" => built(&ArtsyAuthenticatedApi::MyBidPosition {
            id: "the-position".to_string(),
        }),
        "FindMyBidderRegistration" => built(&ArtsyAuthenticatedApi::FindMyBidderRegistration {
            auction_id: "the-sale".to_string(),
        }),
        "PlaceABid" => built(&ArtsyAuthenticatedApi::PlaceABid {
            auction_id: "the-sale".to_string(),
            artwork_id: "the-artwork".to_string(),
            max_bid_cents: "1000000".to_string(),
        }),
        "UpdateMe" => built(&ArtsyAuthenticatedApi::UpdateMe {
            email: "user@example.com".to_string(),
            phone: "5551234567".to_string(),
            post_code: "10013".to_string(),
            name: "Ash".to_string(),
        }),
        "RegisterCard" => built(&ArtsyAuthenticatedApi::RegisterCard {
            stripe_token: "tok_1".to_string(),
            swiped: true,
        }),
        "Me" => built(&ArtsyAuthenticatedApi::Me),
        other => panic!("unknown case: {other}"),
    }
}

#[test]
fn endpoint_test_vectors() {
    let raw = include_str!("../../test-vectors/endpoints.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let cases = vectors["cases"].as_array().unwrap();
    assert_eq!(cases.len(), 28, "one case per descriptor variant");

    for case in cases {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected_request"];

        let (req, fixture) = build_case(name);

        assert_eq!(
            req.method,
            parse_method(expected["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(
            req.url,
            format!("{STAGING_BASE_URL}{}", expected["path"].as_str().unwrap()),
            "{name}: url"
        );

        let params_json = match &req.params {
            Some(params) => serde_json::to_value(params).unwrap(),
            None => serde_json::Value::Null,
        };
        assert_eq!(params_json, expected["params"], "{name}: params");

        assert_eq!(
            req.requires_auth,
            expected["requires_auth"].as_bool().unwrap(),
            "{name}: requires_auth"
        );
        assert_eq!(fixture, case["fixture"].as_str().unwrap(), "{name}: fixture");
    }
}
