use crate::api::{
    AccountRecord, AccountsDetail, AccountsSummary, ApiClient, ApiError, DriversSummary,
    RevenueReport, Trip,
};
use crate::preview::{self, PreviewError, PreviewTable};
use crate::report::{
    self, PieSlice, RevenueBreakdown, SalaryTotals, TripTotals, TRUCKING_PAGE_SIZE,
};
use crate::session::{self, Session, SessionError};
use crate::upload::{self, UploadError, UploadReceipt, UploadType, UPLOAD_TYPES};
use serde::Serialize;
use std::sync::Arc;
use tauri::{command, AppHandle, State};

pub struct AppState {
    pub api: ApiClient,
}

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl From<ApiError> for CommandError {
    fn from(e: ApiError) -> Self {
        CommandError {
            message: e.to_string(),
        }
    }
}

impl From<PreviewError> for CommandError {
    fn from(e: PreviewError) -> Self {
        CommandError {
            message: e.to_string(),
        }
    }
}

impl From<UploadError> for CommandError {
    fn from(e: UploadError) -> Self {
        CommandError {
            message: e.to_string(),
        }
    }
}

impl From<SessionError> for CommandError {
    fn from(e: SessionError) -> Self {
        CommandError {
            message: e.to_string(),
        }
    }
}

// Session commands

#[command]
pub fn login(app: AppHandle, email: String, password: String) -> Result<Session, CommandError> {
    let session = session::login(&app, &email, &password)?;
    println!("[login] session opened for {}", session.email);
    Ok(session)
}

/// Signup shares the mock acceptance rule with login: any non-empty pair
/// opens a session.
#[command]
pub fn signup(app: AppHandle, email: String, password: String) -> Result<Session, CommandError> {
    Ok(session::login(&app, &email, &password)?)
}

#[command]
pub fn logout(app: AppHandle) -> Result<(), CommandError> {
    Ok(session::logout(&app)?)
}

#[command]
pub fn current_session(app: AppHandle) -> Result<Option<Session>, CommandError> {
    Ok(session::current_session(&app)?)
}

// Page fetch commands. Each page issues exactly one fetch per user action
// (mount or refresh click); recovery from failure is the user re-invoking.

#[command]
pub async fn fetch_accounts_summary(
    state: State<'_, Arc<AppState>>,
) -> Result<AccountsSummary, CommandError> {
    Ok(state.api.accounts_summary().await?)
}

#[command]
pub async fn fetch_accounts_detail(
    state: State<'_, Arc<AppState>>,
) -> Result<AccountsDetail, CommandError> {
    Ok(state.api.accounts_detail().await?)
}

#[command]
pub async fn fetch_drivers_summary(
    state: State<'_, Arc<AppState>>,
) -> Result<DriversSummary, CommandError> {
    Ok(state.api.drivers_summary().await?)
}

/// Revenue report plus the derived card totals and pie geometry.
#[derive(Debug, Serialize)]
pub struct RevenuePage {
    pub report: RevenueReport,
    pub breakdown: RevenueBreakdown,
    /// Frontload then backload.
    pub revenue_slices: Vec<PieSlice>,
    /// Allowance, added allowance, fuel, added fuel, opex.
    pub expense_slices: Vec<PieSlice>,
}

#[command]
pub async fn fetch_revenue_streams(
    state: State<'_, Arc<AppState>>,
) -> Result<RevenuePage, CommandError> {
    let report = state.api.revenue_streams().await?;
    let breakdown = report::revenue_breakdown(&report);

    let rev = &report.revenue_streams;
    let exp = &report.expense_streams;
    let revenue_slices = report::pie_slices(&[rev.front_load_amount, rev.back_load_amount]);
    let expense_slices = report::pie_slices(&[
        exp.allowance,
        exp.add_allowance,
        exp.fuel_amount,
        exp.add_fuel_amount,
        exp.total_opex,
    ]);

    Ok(RevenuePage {
        report,
        breakdown,
        revenue_slices,
        expense_slices,
    })
}

/// Trips listing with the plate filter applied and its totals row.
#[derive(Debug, Serialize)]
pub struct TripsPage {
    pub trips: Vec<Trip>,
    /// Total trips reported by the API, before filtering.
    pub total_trips: u64,
    /// Plate numbers for the filter dropdown.
    pub plates: Vec<String>,
    pub totals: TripTotals,
}

#[command]
pub async fn fetch_trips(
    state: State<'_, Arc<AppState>>,
    plate: Option<String>,
) -> Result<TripsPage, CommandError> {
    let data = state.api.trips().await?;

    let plates = report::unique_plates(&data.trips);
    let filtered: Vec<Trip> = report::filter_by_plate(&data.trips, plate.as_deref())
        .into_iter()
        .cloned()
        .collect();
    let totals = report::trip_totals(filtered.iter());

    Ok(TripsPage {
        trips: filtered,
        total_trips: data.total_trips,
        plates,
        totals,
    })
}

/// First page of trucking accounts plus the true total count.
#[derive(Debug, Serialize)]
pub struct TruckingPage {
    pub accounts: Vec<AccountRecord>,
    pub total_count: usize,
}

#[command]
pub async fn fetch_trucking_accounts(
    state: State<'_, Arc<AppState>>,
) -> Result<TruckingPage, CommandError> {
    let mut accounts = state.api.trucking_accounts().await?;
    let total_count = accounts.len();
    accounts.truncate(TRUCKING_PAGE_SIZE);

    Ok(TruckingPage {
        accounts,
        total_count,
    })
}

#[derive(Debug, Serialize)]
pub struct SalaryPage {
    pub accounts: Vec<AccountRecord>,
    pub totals: SalaryTotals,
}

#[command]
pub async fn fetch_salary_accounts(
    state: State<'_, Arc<AppState>>,
) -> Result<SalaryPage, CommandError> {
    let accounts = state.api.salary_accounts().await?;
    let totals = report::salary_totals(&accounts);
    Ok(SalaryPage { accounts, totals })
}

// Upload commands

#[command]
pub fn list_upload_types() -> Vec<UploadType> {
    UPLOAD_TYPES.to_vec()
}

/// Decoded preview plus its formatted projection and row count.
#[derive(Debug, Serialize)]
pub struct PreviewPage {
    pub table: PreviewTable,
    /// One formatted string per header column per row; missing cells show
    /// the placeholder dash, extra cells are dropped.
    pub display_rows: Vec<Vec<String>>,
    pub row_count: usize,
}

/// Decode the selected file into a preview table. The preview is rebuilt
/// from scratch on every call; the caller discards it on file/type change.
#[command]
pub async fn preview_spreadsheet(path: String) -> Result<PreviewPage, CommandError> {
    let table = preview::decode_workbook(&path)?;
    let display_rows = table.display_rows();
    let row_count = table.row_count();

    Ok(PreviewPage {
        table,
        display_rows,
        row_count,
    })
}

#[command]
pub async fn upload_spreadsheet(
    state: State<'_, Arc<AppState>>,
    path: String,
    upload_type: String,
) -> Result<UploadReceipt, CommandError> {
    let descriptor = upload::find_upload_type(&upload_type)
        .ok_or_else(|| CommandError::from(UploadError::UnknownType(upload_type.clone())))?;

    println!("[upload_spreadsheet] {} -> {}", path, descriptor.endpoint);
    let receipt = upload::submit_upload(&state.api, descriptor, &path).await?;
    println!(
        "[upload_spreadsheet] created {} records, {} row errors",
        receipt.created_count,
        receipt.errors.len()
    );
    Ok(receipt)
}
