use chrono::{DateTime, Utc};
use fundboard_models::User;
use serde::Serialize;

/// A managed account row. The admin area is backed by fixture data; the
/// live portfolio pipeline is a separate service.
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub currency: &'static str,
    pub balance: f64,
}

pub const ACCOUNTS: &[AccountSummary] = &[
    AccountSummary {
        id: "acc-cash",
        name: "Cash Reserve",
        currency: "USD",
        balance: 1_250_000.0,
    },
    AccountSummary {
        id: "acc-bond",
        name: "Fixed Income",
        currency: "USD",
        balance: 3_400_000.0,
    },
    AccountSummary {
        id: "acc-eq",
        name: "Global Equities",
        currency: "EUR",
        balance: 2_875_000.0,
    },
];

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub user: User,
    pub account_count: usize,
    pub total_balance: f64,
    pub generated_at: DateTime<Utc>,
}
