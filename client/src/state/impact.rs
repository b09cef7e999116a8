//! Landing-page impact figures.
//!
//! The figures are public; they are re-fetched whenever the session changes
//! and a failed fetch keeps the previously shown numbers.

#[cfg(test)]
#[path = "impact_test.rs"]
mod impact_test;

use crate::net::api::SessionApi;
use crate::net::types::ImpactStats;
use crate::util::format::{format_quantity, with_unit};

/// Impact figures plus whether a fetch is in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactState {
    pub stats: ImpactStats,
    pub loading: bool,
}

impl Default for ImpactState {
    fn default() -> Self {
        Self { stats: ImpactStats::default(), loading: true }
    }
}

/// Which icon a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactIcon {
    Recycle,
    MapPin,
    Coins,
    Leaf,
}

/// One rendered impact card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImpactCard {
    pub title: &'static str,
    pub value: String,
    pub icon: ImpactIcon,
}

/// Cards in display order.
#[must_use]
pub fn impact_cards(stats: &ImpactStats) -> [ImpactCard; 4] {
    [
        ImpactCard {
            title: "Waste Collected",
            value: with_unit(stats.waste_collected, "kg"),
            icon: ImpactIcon::Recycle,
        },
        ImpactCard {
            title: "Reports Submitted",
            value: format_quantity(stats.reports_submitted),
            icon: ImpactIcon::MapPin,
        },
        ImpactCard { title: "Tokens Earned", value: format_quantity(stats.tokens_earned), icon: ImpactIcon::Coins },
        ImpactCard { title: "CO2 Offset", value: with_unit(stats.co2_offset, "kg"), icon: ImpactIcon::Leaf },
    ]
}

/// Fetch fresh figures, falling back to `previous` on any failure.
pub async fn fetch_impact<A: SessionApi>(api: &A, previous: ImpactStats) -> ImpactStats {
    match api.fetch_impact_stats().await {
        Ok(stats) => stats,
        Err(e) => {
            log::warn!("error fetching impact data: {e}");
            previous
        }
    }
}
