//! Event log types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Who performed an action in the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    /// The synthetic opening event of the run.
    MarketStart,
    /// The party resting the limit buy.
    Human,
    /// The market-making algo.
    Algo,
    /// Bookkeeping events emitted by the simulator itself.
    System,
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::MarketStart => write!(f, "market_start"),
            Actor::Human => write!(f, "human"),
            Actor::Algo => write!(f, "algo"),
            Actor::System => write!(f, "system"),
        }
    }
}

/// What happened at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Quotes posted or replaced; carries no trade price.
    SetQuotes,
    /// The human's resting limit buy is placed.
    PostLimitBuy,
    /// The algo trades at the next tick of the scripted path.
    AggressiveBuy,
    /// The algo sells into the resting buy; this is the fill event.
    SellIntoHuman,
    /// The algo retreats to its reset quote pair; carries no trade price.
    ResetQuotes,
    /// Terminal marker when the path is exhausted without a fill.
    NoFill,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::SetQuotes => write!(f, "set_quotes"),
            Action::PostLimitBuy => write!(f, "post_limit_buy"),
            Action::AggressiveBuy => write!(f, "aggressive_buy"),
            Action::SellIntoHuman => write!(f, "sell_into_human"),
            Action::ResetQuotes => write!(f, "reset_quotes"),
            Action::NoFill => write!(f, "no_fill"),
        }
    }
}

/// A best-bid/best-ask pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: Decimal,
    pub ask: Decimal,
}

impl Quote {
    pub fn new(bid: Decimal, ask: Decimal) -> Self {
        Self { bid, ask }
    }

    /// Spread width. Negative if the quote is crossed; the engine does not
    /// police quote sanity.
    pub fn spread(&self) -> Decimal {
        self.ask - self.bid
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.bid, self.ask)
    }
}

/// One row of the event log. Immutable once appended.
///
/// Field order matches the export column order:
/// `time, actor, action, price, best_bid, best_ask, note`. A missing
/// `price` serializes as an empty field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Logical clock; increments by exactly 1 per event, starting at 0.
    pub time: u64,
    pub actor: Actor,
    pub action: Action,
    /// Trade price, absent for quote-only events.
    pub price: Option<Decimal>,
    /// Best bid at this instant.
    pub best_bid: Decimal,
    /// Best ask at this instant.
    pub best_ask: Decimal,
    /// Human-readable annotation; never used for logic.
    pub note: String,
}

impl Event {
    /// Create a quote-only event (no trade price).
    pub fn quote_only(
        time: u64,
        actor: Actor,
        action: Action,
        quote: Quote,
        note: impl Into<String>,
    ) -> Self {
        Self {
            time,
            actor,
            action,
            price: None,
            best_bid: quote.bid,
            best_ask: quote.ask,
            note: note.into(),
        }
    }

    /// Create an event carrying a trade price.
    pub fn traded(
        time: u64,
        actor: Actor,
        action: Action,
        price: Decimal,
        quote: Quote,
        note: impl Into<String>,
    ) -> Self {
        Self {
            time,
            actor,
            action,
            price: Some(price),
            best_bid: quote.bid,
            best_ask: quote.ask,
            note: note.into(),
        }
    }

    /// The quote snapshot carried by this event.
    pub fn quote(&self) -> Quote {
        Quote::new(self.best_bid, self.best_ask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_only_event_has_no_price() {
        let event = Event::quote_only(
            0,
            Actor::MarketStart,
            Action::SetQuotes,
            Quote::new(dec!(20), dec!(80)),
            "wide spread",
        );
        assert_eq!(event.price, None);
        assert_eq!(event.best_bid, dec!(20));
        assert_eq!(event.best_ask, dec!(80));
    }

    #[test]
    fn test_traded_event_carries_price_and_quote() {
        let event = Event::traded(
            3,
            Actor::Algo,
            Action::AggressiveBuy,
            dec!(25),
            Quote::new(dec!(23), dec!(27)),
            "",
        );
        assert_eq!(event.price, Some(dec!(25)));
        assert_eq!(event.quote(), Quote::new(dec!(23), dec!(27)));
    }

    #[test]
    fn test_actor_action_serde_names() {
        assert_eq!(
            serde_json::to_string(&Actor::MarketStart).unwrap(),
            "\"market_start\""
        );
        assert_eq!(
            serde_json::to_string(&Action::SellIntoHuman).unwrap(),
            "\"sell_into_human\""
        );
        assert_eq!(Actor::Algo.to_string(), "algo");
        assert_eq!(Action::NoFill.to_string(), "no_fill");
    }

    #[test]
    fn test_spread() {
        assert_eq!(Quote::new(dec!(20), dec!(80)).spread(), dec!(60));
        // Crossed quotes are representable; sanity is the caller's concern.
        assert_eq!(Quote::new(dec!(80), dec!(20)).spread(), dec!(-60));
    }
}
