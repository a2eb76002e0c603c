use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One account category's roll-up on the accounts summary page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub name: String,
    pub total_debit: f64,
    pub total_credit: f64,
    pub total_final: f64,
    pub count: u64,
    /// Display color key for the category card (blue, green, orange, ...)
    pub color: String,
}

/// Grand totals across all account categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub total_debit: f64,
    pub total_credit: f64,
    pub total_final: f64,
    pub total_count: u64,
}

/// Response of `/api/v1/accounts/summary/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsSummary {
    pub accounts: HashMap<String, AccountSummary>,
    pub summary: SummaryTotals,
}

/// A single ledger entry as carried by the detail and per-account listings.
/// `final_total` is a precomputed signed balance from the API; it is never
/// recomputed client-side except where summed for on-page totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: u64,
    pub account_number: String,
    pub truck_type: String,
    pub account_type: String,
    pub plate_number: String,
    pub debit: f64,
    pub credit: f64,
    pub final_total: f64,
    pub reference_number: String,
    pub date: String,
    pub description: String,
    pub remarks: String,
    #[serde(default)]
    pub driver: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub liters: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub front_load: Option<String>,
    #[serde(default)]
    pub back_load: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
}

/// One expandable account section on the accounts detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDetail {
    pub name: String,
    pub entries: Vec<LedgerEntry>,
}

/// Response of `/api/v1/accounts/detail/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsDetail {
    pub accounts: HashMap<String, AccountDetail>,
}

/// Whether a driver load detail came from a front load or a back load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadKind {
    FrontLoad,
    BackLoad,
}

/// One load line under an expanded driver row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverLoadDetail {
    pub reference_number: String,
    pub account_number: String,
    pub date: String,
    pub amount: f64,
    pub load_type: LoadKind,
    pub route: String,
    pub description: String,
}

/// Per-driver aggregation row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub driver_name: String,
    pub front_load_amount: f64,
    pub back_load_amount: f64,
    pub allowance_amount: f64,
    pub total_loads: u64,
    pub details: Vec<DriverLoadDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriversTotals {
    pub total_front_load: f64,
    pub total_back_load: f64,
    pub total_allowance: f64,
    pub total_loads: u64,
}

/// Response of `/api/v1/drivers/summary/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriversSummary {
    pub drivers: Vec<Driver>,
    pub total_drivers: u64,
    pub summary: DriversTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueStreams {
    pub front_load_amount: f64,
    pub back_load_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseStreams {
    pub allowance: f64,
    pub add_allowance: f64,
    pub fuel_amount: f64,
    pub add_fuel_amount: f64,
    pub total_opex: f64,
}

/// Response of `/api/v1/revenue/streams/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueReport {
    pub revenue_streams: RevenueStreams,
    pub expense_streams: ExpenseStreams,
}

/// One consolidated trip row (1 day = 1 trip per truck).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub account_number: String,
    pub plate_number: String,
    pub date: String,
    pub trip_route: String,
    pub driver: String,
    pub allowance: f64,
    pub reference_number: String,
    pub fuel_liters: f64,
    pub fuel_price: f64,
    pub front_load: String,
    pub front_load_reference_number: String,
    pub front_load_amount: f64,
    pub back_load_reference_number: String,
    pub back_load_amount: f64,
    pub front_and_back_load_amount: f64,
    pub remarks: String,
    pub insurance_expense: f64,
    pub repairs_maintenance_expense: f64,
    pub taxes_permits_licenses_expense: f64,
    pub salaries_allowance: f64,
}

/// Response of `/api/v1/trips/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripsData {
    pub trips: Vec<Trip>,
    pub total_trips: u64,
}

/// A raw account row as returned by the trucking and salary listings.
/// Both endpoints share one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: u64,
    pub account_number: String,
    pub account_type: String,
    pub truck_type: String,
    #[serde(default)]
    pub plate_number: Option<String>,
    pub description: String,
    pub debit: f64,
    pub credit: f64,
    pub final_total: f64,
    pub remarks: String,
    #[serde(default)]
    pub reference_number: Option<String>,
    pub date: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub driver: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub front_load: Option<String>,
    #[serde(default)]
    pub back_load: Option<String>,
}

/// The trucking endpoint returns either a bare array or a paginated
/// `{results: [...]}` wrapper depending on the backend's configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AccountListing {
    Plain(Vec<AccountRecord>),
    Paginated { results: Vec<AccountRecord> },
}

impl AccountListing {
    pub fn into_records(self) -> Vec<AccountRecord> {
        match self {
            AccountListing::Plain(records) => records,
            AccountListing::Paginated { results } => results,
        }
    }
}
