//! The endpoint registries: every API operation the client can perform,
//! as closed payload-carrying enums.
//!
//! # Design
//! Two disjoint registries share one contract ([`Endpoint`]): `ArtsyApi`
//! covers session bootstrap, public reads, and account creation;
//! `ArtsyAuthenticatedApi` covers everything scoped to "me" (bidding, credit
//! cards, profile). Each registry answers path/method/params/auth/fixture by
//! exhaustive match, so adding a variant without defining its row is a
//! compile error.
//!
//! Identifiers carried by a descriptor are interpolated into the path as
//! given — no escaping, no validation. Callers own argument well-formedness.

use crate::client::Credentials;
use crate::http::HttpMethod;
use crate::params::{param_map, ParamMap};

/// Contract shared by both registries.
///
/// All queries are pure; `params` takes the credential provider's values
/// explicitly because the session-bootstrap operations submit the client
/// key/secret as ordinary parameters.
pub trait Endpoint {
    /// URL path with any carried identifiers substituted in.
    fn path(&self) -> String;

    /// HTTP method; `Get` unless the operation overrides it.
    fn method(&self) -> HttpMethod;

    /// Fully shaped parameter mapping, or `None` when the operation
    /// carries nothing.
    fn params(&self, credentials: &Credentials) -> Option<ParamMap>;

    /// Whether the request must carry an authentication credential.
    fn requires_auth(&self) -> bool;

    /// Name of the canned sample payload for offline/test execution.
    fn fixture(&self) -> &'static str;
}

/// Unauthenticated registry: session bootstrap, public reads, account
/// creation, password recovery.
///
/// "Unauthenticated" refers to which token namespace the operation lives in,
/// not to whether a credential is attached: every variant except the two
/// bootstrap tags (`XApp`, `XAuth`) still requires one.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtsyApi {
    /// App-level session token grant.
    XApp,
    /// User session token grant (password grant).
    XAuth { email: String, password: String },
    /// Exchange a bidder number + auction PIN for a trust token.
    TrustToken { number: String, auction_pin: String },

    SystemTime,
    Ping,

    Artwork { id: String },
    Artist { id: String },

    /// All auctions.
    Auctions,
    /// Lots in one auction, paginated.
    AuctionListings { id: String, page: i32, page_size: i32 },
    AuctionInfo { auction_id: String },
    AuctionInfoForArtwork { auction_id: String, artwork_id: String },
    FindBidderRegistration { auction_id: String, phone: String },
    /// Auctions currently live.
    ActiveAuctions,

    CreateUser {
        email: String,
        password: String,
        phone: String,
        post_code: String,
        name: String,
    },

    BidderDetailsNotification { auction_id: String, identifier: String },

    LostPasswordNotification { email: String },
    FindExistingEmailRegistration { email: String },
}

/// Authenticated registry: operations scoped to the logged-in user.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtsyAuthenticatedApi {
    MyCreditCards,
    CreatePinForBidder { bidder_id: String },
    RegisterToBid { auction_id: String },
    MyBiddersForAuction { auction_id: String },
    MyBidPositionsForAuctionArtwork { auction_id: String, artwork_id: String },
    MyBidPosition { id: String },
    FindMyBidderRegistration { auction_id: String },
    PlaceABid {
        auction_id: String,
        artwork_id: String,
        max_bid_cents: String,
    },

    UpdateMe {
        email: String,
        phone: String,
        post_code: String,
        name: String,
    },
    RegisterCard { stripe_token: String, swiped: bool },
    Me,
}

impl Endpoint for ArtsyApi {
    fn path(&self) -> String {
        use ArtsyApi::*;
        match self {
            XApp => "/api/v1/xapp_token".to_string(),
            XAuth { .. } => "/oauth2/access_token".to_string(),
            TrustToken { .. } => "/api/v1/me/trust_token".to_string(),

            SystemTime => "/api/v1/system/time".to_string(),
            Ping => "/api/v1/system/ping".to_string(),

            Artwork { id } => format!("/api/v1/artwork/{id}"),
            Artist { id } => format!("/api/v1/artist/{id}"),

            // Same path as ActiveAuctions; the parameter shapes differ.
            Auctions => "/api/v1/sales".to_string(),
            ActiveAuctions => "/api/v1/sales".to_string(),
            AuctionListings { id, .. } => format!("/api/v1/sale/{id}/sale_artworks"),
            AuctionInfo { auction_id } => format!("/api/v1/sale/{auction_id}"),
            AuctionInfoForArtwork {
                auction_id,
                artwork_id,
            } => format!("/api/v1/sale/{auction_id}/sale_artwork/{artwork_id}"),
            FindBidderRegistration { .. } => "/api/v1/bidder".to_string(),

            CreateUser { .. } => "/api/v1/user".to_string(),

            BidderDetailsNotification { .. } => {
                "/api/v1/bidder/bidding_details_notification".to_string()
            }

            LostPasswordNotification { .. } => {
                "/api/v1/users/send_reset_password_instructions".to_string()
            }
            FindExistingEmailRegistration { .. } => "/api/v1/user".to_string(),
        }
    }

    fn method(&self) -> HttpMethod {
        use ArtsyApi::*;
        match self {
            LostPasswordNotification { .. } | CreateUser { .. } => HttpMethod::Post,
            FindExistingEmailRegistration { .. } => HttpMethod::Head,
            BidderDetailsNotification { .. } => HttpMethod::Put,
            _ => HttpMethod::Get,
        }
    }

    fn params(&self, credentials: &Credentials) -> Option<ParamMap> {
        use ArtsyApi::*;
        match self {
            XApp => Some(param_map([
                ("client_id", credentials.key_or_default().into()),
                ("client_secret", credentials.secret_or_default().into()),
            ])),

            XAuth { email, password } => Some(param_map([
                ("client_id", credentials.key_or_default().into()),
                ("client_secret", credentials.secret_or_default().into()),
                ("email", email.clone().into()),
                ("password", password.clone().into()),
                ("grant_type", "credentials".into()),
            ])),

            TrustToken {
                number,
                auction_pin,
            } => Some(param_map([
                ("number", number.clone().into()),
                ("auction_pin", auction_pin.clone().into()),
            ])),

            // Observed API inconsistency: this one sends the *string*
            // "true", ActiveAuctions below sends booleans. Reproduced
            // as-is; see DESIGN.md.
            Auctions => Some(param_map([("is_auction", "true".into())])),

            ActiveAuctions => Some(param_map([
                ("is_auction", true.into()),
                ("live", true.into()),
            ])),

            AuctionListings {
                page, page_size, ..
            } => Some(param_map([
                ("size", (*page_size).into()),
                ("page", (*page).into()),
            ])),

            FindBidderRegistration { auction_id, phone } => Some(param_map([
                ("sale_id", auction_id.clone().into()),
                ("number", phone.clone().into()),
            ])),

            CreateUser {
                email,
                password,
                phone,
                post_code,
                name,
            } => Some(param_map([
                ("email", email.clone().into()),
                ("password", password.clone().into()),
                ("phone", phone.clone().into()),
                ("name", name.clone().into()),
                (
                    "location",
                    param_map([("postal_code", post_code.clone().into())]).into(),
                ),
            ])),

            BidderDetailsNotification {
                auction_id,
                identifier,
            } => Some(param_map([
                ("sale_id", auction_id.clone().into()),
                ("identifier", identifier.clone().into()),
            ])),

            LostPasswordNotification { email } => {
                Some(param_map([("email", email.clone().into())]))
            }

            FindExistingEmailRegistration { email } => {
                Some(param_map([("email", email.clone().into())]))
            }

            _ => None,
        }
    }

    fn requires_auth(&self) -> bool {
        // Only the two token-bootstrap operations run bare.
        !matches!(self, ArtsyApi::XApp | ArtsyApi::XAuth { .. })
    }

    fn fixture(&self) -> &'static str {
        use ArtsyApi::*;
        match self {
            XApp => "XApp",
            XAuth { .. } => "XAuth",
            // Trust-token responses have the XAuth shape, so the fixture
            // is shared.
            TrustToken { .. } => "XAuth",

            SystemTime => "SystemTime",
            Ping => "Ping",

            Artwork { .. } => "Artwork",
            Artist { .. } => "Artist",

            Auctions => "Auctions",
            ActiveAuctions => "ActiveAuctions",
            AuctionListings { .. } => "AuctionListings",
            AuctionInfo { .. } => "AuctionInfo",
            AuctionInfoForArtwork { .. } => "AuctionInfoForArtwork",

            // This API returns a 302 in production, so the stub is a plain
            // Me payload.
            FindBidderRegistration { .. } => "Me",

            CreateUser { .. } => "Me",

            BidderDetailsNotification { .. } => "RegisterToBid",

            LostPasswordNotification { .. } => "ForgotPassword",
            FindExistingEmailRegistration { .. } => "ForgotPassword",
        }
    }
}

impl Endpoint for ArtsyAuthenticatedApi {
    fn path(&self) -> String {
        use ArtsyAuthenticatedApi::*;
        match self {
            RegisterToBid { .. } => "/api/v1/bidder".to_string(),
            MyCreditCards => "/api/v1/me/credit_cards".to_string(),
            CreatePinForBidder { bidder_id } => format!("/api/v1/bidder/{bidder_id}/pin"),
            Me => "/api/v1/me".to_string(),
            UpdateMe { .. } => "/api/v1/me".to_string(),
            MyBiddersForAuction { .. } => "/api/v1/me/bidders".to_string(),
            MyBidPositionsForAuctionArtwork { .. } => "/api/v1/me/bidder_positions".to_string(),
            MyBidPosition { id } => format!("/api/v1/me/bidder_position/{id}"),
            FindMyBidderRegistration { .. } => "/api/v1/me/bidders".to_string(),
            PlaceABid { .. } => "/api/v1/me/bidder_position".to_string(),
            RegisterCard { .. } => "/api/v1/me/credit_cards".to_string(),
        }
    }

    fn method(&self) -> HttpMethod {
        use ArtsyAuthenticatedApi::*;
        match self {
            PlaceABid { .. }
            | RegisterCard { .. }
            | RegisterToBid { .. }
            | CreatePinForBidder { .. } => HttpMethod::Post,
            UpdateMe { .. } => HttpMethod::Put,
            _ => HttpMethod::Get,
        }
    }

    fn params(&self, _credentials: &Credentials) -> Option<ParamMap> {
        use ArtsyAuthenticatedApi::*;
        match self {
            RegisterToBid { auction_id } => {
                Some(param_map([("sale_id", auction_id.clone().into())]))
            }

            MyBiddersForAuction { auction_id } => {
                Some(param_map([("sale_id", auction_id.clone().into())]))
            }

            PlaceABid {
                auction_id,
                artwork_id,
                max_bid_cents,
            } => Some(param_map([
                ("sale_id", auction_id.clone().into()),
                ("artwork_id", artwork_id.clone().into()),
                ("max_bid_amount_cents", max_bid_cents.clone().into()),
            ])),

            FindMyBidderRegistration { auction_id } => {
                Some(param_map([("sale_id", auction_id.clone().into())]))
            }

            UpdateMe {
                email,
                phone,
                post_code,
                name,
            } => Some(param_map([
                ("email", email.clone().into()),
                ("phone", phone.clone().into()),
                ("name", name.clone().into()),
                (
                    "location",
                    param_map([("postal_code", post_code.clone().into())]).into(),
                ),
            ])),

            RegisterCard {
                stripe_token,
                swiped,
            } => Some(param_map([
                ("provider", "stripe".into()),
                ("token", stripe_token.clone().into()),
                ("created_by_trusted_client", (*swiped).into()),
            ])),

            MyBidPositionsForAuctionArtwork {
                auction_id,
                artwork_id,
            } => Some(param_map([
                ("sale_id", auction_id.clone().into()),
                ("artwork_id", artwork_id.clone().into()),
            ])),

            _ => None,
        }
    }

    fn requires_auth(&self) -> bool {
        true
    }

    fn fixture(&self) -> &'static str {
        use ArtsyAuthenticatedApi::*;
        match self {
            CreatePinForBidder { .. } => "CreatePINForBidder",
            MyCreditCards => "MyCreditCards",
            RegisterToBid { .. } => "RegisterToBid",
            MyBiddersForAuction { .. } => "MyBiddersForAuction",
            Me => "Me",
            UpdateMe { .. } => "Me",
            PlaceABid { .. } => "CreateABid",
            FindMyBidderRegistration { .. } => "FindMyBidderRegistration",
            RegisterCard { .. } => "RegisterCard",
            MyBidPositionsForAuctionArtwork { .. } => "MyBidPositionsForAuctionArtwork",
            MyBidPosition { .. } => "MyBidPosition",
        }
    }
}
