//! Canned sample payloads for offline/test execution.
//!
//! One JSON file per fixture name under `core/fixtures/`, compiled in with
//! `include_bytes!`. Several descriptors deliberately share a name (the
//! bootstrap grants both answer with a token payload, and a handful of
//! operations respond with a `Me` body), so the table is keyed by name, not
//! by descriptor. A name missing from the table means the registry and this
//! table have drifted — callers in tests should unwrap and abort.

use crate::error::ApiError;

/// Raw bytes of the sample payload registered under `name`.
pub fn sample_data(name: &str) -> Result<&'static [u8], ApiError> {
    let bytes: &'static [u8] = match name {
        "XApp" => include_bytes!("../fixtures/XApp.json"),
        "XAuth" => include_bytes!("../fixtures/XAuth.json"),
        "SystemTime" => include_bytes!("../fixtures/SystemTime.json"),
        "Ping" => include_bytes!("../fixtures/Ping.json"),
        "Artwork" => include_bytes!("../fixtures/Artwork.json"),
        "Artist" => include_bytes!("../fixtures/Artist.json"),
        "Auctions" => include_bytes!("../fixtures/Auctions.json"),
        "ActiveAuctions" => include_bytes!("../fixtures/ActiveAuctions.json"),
        "AuctionListings" => include_bytes!("../fixtures/AuctionListings.json"),
        "AuctionInfo" => include_bytes!("../fixtures/AuctionInfo.json"),
        "AuctionInfoForArtwork" => include_bytes!("../fixtures/AuctionInfoForArtwork.json"),
        "Me" => include_bytes!("../fixtures/Me.json"),
        "ForgotPassword" => include_bytes!("../fixtures/ForgotPassword.json"),
        "RegisterToBid" => include_bytes!("../fixtures/RegisterToBid.json"),
        "MyCreditCards" => include_bytes!("../fixtures/MyCreditCards.json"),
        "CreatePINForBidder" => include_bytes!("../fixtures/CreatePINForBidder.json"),
        "MyBiddersForAuction" => include_bytes!("../fixtures/MyBiddersForAuction.json"),
        "MyBidPositionsForAuctionArtwork" => {
            include_bytes!("../fixtures/MyBidPositionsForAuctionArtwork.json")
        }
        "MyBidPosition" => include_bytes!("../fixtures/MyBidPosition.json"),
        "FindMyBidderRegistration" => include_bytes!("../fixtures/FindMyBidderRegistration.json"),
        "CreateABid" => include_bytes!("../fixtures/CreateABid.json"),
        "RegisterCard" => include_bytes!("../fixtures/RegisterCard.json"),
        other => return Err(ApiError::FixtureNotFound(other.to_string())),
    };
    Ok(bytes)
}
