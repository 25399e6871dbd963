use soroban_sdk::{contractevent, Address};

/// Event emitted when the contract is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub payment_token: Address,
}

/// Event emitted when a new token is minted into the treasury
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMintedEventData {
    #[topic]
    pub token_id: u32,
    pub owner: Address,
}

/// Event emitted when an auction is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub auction_index: u32,
    pub token_id: u32,
    pub start_time: u64,
    pub end_time: u64,
}

/// Event emitted when a bid is accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub auction_index: u32,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when a winner claims their token
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenClaimedEventData {
    #[topic]
    pub auction_index: u32,
    pub winner: Address,
    pub token_id: u32,
}

/// Event emitted when the admin withdraws the contract balance
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEventData {
    #[topic]
    pub admin: Address,
    pub amount: i128,
}

/// Event emitted when the minimum bid is updated
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinBidUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub value: i128,
}

/// Event emitted when the reserve price is updated
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReservePriceUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub value: i128,
}
