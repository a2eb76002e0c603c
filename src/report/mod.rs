//! Client-side aggregation over fetched data.
//!
//! These are the sums, filters, and chart geometry the dashboard pages
//! derive from already-structured API responses. Pure, single-pass
//! functions; nothing here mutates or persists the fetched data.

use serde::Serialize;

use crate::api::{AccountRecord, RevenueReport, Trip};

/// Hard client-side page cap on the trucking listing.
pub const TRUCKING_PAGE_SIZE: usize = 50;

/// Sorted, deduplicated truck plate numbers for the trips filter dropdown.
pub fn unique_plates(trips: &[Trip]) -> Vec<String> {
    let mut plates: Vec<String> = trips.iter().map(|t| t.plate_number.clone()).collect();
    plates.sort();
    plates.dedup();
    plates
}

/// Trips whose plate number equals the selected truck. `None` keeps all
/// trips. Order is preserved.
pub fn filter_by_plate<'a>(trips: &'a [Trip], plate: Option<&str>) -> Vec<&'a Trip> {
    match plate {
        None => trips.iter().collect(),
        Some(p) => trips.iter().filter(|t| t.plate_number == p).collect(),
    }
}

/// Column sums for the trips totals row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripTotals {
    pub allowance: f64,
    pub fuel_liters: f64,
    pub front_load_amount: f64,
    pub back_load_amount: f64,
    pub front_and_back_load_amount: f64,
    pub insurance_expense: f64,
    pub repairs_maintenance_expense: f64,
    pub taxes_permits_licenses_expense: f64,
    pub salaries_allowance: f64,
}

pub fn trip_totals<'a, I>(trips: I) -> TripTotals
where
    I: IntoIterator<Item = &'a Trip>,
{
    trips.into_iter().fold(TripTotals::default(), |mut acc, t| {
        acc.allowance += t.allowance;
        acc.fuel_liters += t.fuel_liters;
        acc.front_load_amount += t.front_load_amount;
        acc.back_load_amount += t.back_load_amount;
        acc.front_and_back_load_amount += t.front_and_back_load_amount;
        acc.insurance_expense += t.insurance_expense;
        acc.repairs_maintenance_expense += t.repairs_maintenance_expense;
        acc.taxes_permits_licenses_expense += t.taxes_permits_licenses_expense;
        acc.salaries_allowance += t.salaries_allowance;
        acc
    })
}

/// Totals and percentage shares for the revenue page cards and pie charts.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueBreakdown {
    pub total_revenue: f64,
    pub total_expenses: f64,
    /// Frontload and backload share of total revenue, in percent.
    pub front_load_pct: f64,
    pub back_load_pct: f64,
}

pub fn revenue_breakdown(report: &RevenueReport) -> RevenueBreakdown {
    let rev = &report.revenue_streams;
    let exp = &report.expense_streams;

    let total_revenue = rev.front_load_amount + rev.back_load_amount;
    let total_expenses =
        exp.allowance + exp.add_allowance + exp.fuel_amount + exp.add_fuel_amount + exp.total_opex;

    RevenueBreakdown {
        total_revenue,
        total_expenses,
        front_load_pct: share_pct(rev.front_load_amount, total_revenue),
        back_load_pct: share_pct(rev.back_load_amount, total_revenue),
    }
}

/// Percentage share of `part` in `total`; zero (not NaN) when the total is
/// zero.
fn share_pct(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

/// Stroke-dasharray geometry for one slice of an inline SVG pie chart
/// drawn on a radius-40 circle (circumference ~251.2 units, so one percent
/// of the pie is 2.512 units of dash).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    /// Visible arc length.
    pub dash: f64,
    /// Remainder of the circumference.
    pub gap: f64,
    /// Negative rotation offset so slices sit end to end.
    pub offset: f64,
}

const PIE_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * 40.0;

/// Convert value shares into consecutive pie slices. Shares that sum to
/// zero produce empty slices rather than NaN geometry.
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().sum();
    let mut consumed = 0.0;

    values
        .iter()
        .map(|&v| {
            let dash = if total == 0.0 {
                0.0
            } else {
                v / total * PIE_CIRCUMFERENCE
            };
            let slice = PieSlice {
                dash,
                gap: PIE_CIRCUMFERENCE - dash,
                offset: -consumed,
            };
            consumed += dash;
            slice
        })
        .collect()
}

/// Debit/credit roll-up for the salary listing footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalaryTotals {
    pub total_debit: f64,
    pub total_credit: f64,
    /// Net balance, debit minus credit.
    pub net_total: f64,
}

pub fn salary_totals(accounts: &[AccountRecord]) -> SalaryTotals {
    let total_debit: f64 = accounts.iter().map(|a| a.debit).sum();
    let total_credit: f64 = accounts.iter().map(|a| a.credit).sum();
    SalaryTotals {
        total_debit,
        total_credit,
        net_total: total_debit - total_credit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ExpenseStreams, RevenueStreams};

    fn trip(plate: &str, allowance: f64, front: f64) -> Trip {
        Trip {
            account_number: "0401".to_string(),
            plate_number: plate.to_string(),
            date: "2024-01-15".to_string(),
            trip_route: "MNL-BAT".to_string(),
            driver: "Juan".to_string(),
            allowance,
            reference_number: String::new(),
            fuel_liters: 10.0,
            fuel_price: 65.0,
            front_load: String::new(),
            front_load_reference_number: String::new(),
            front_load_amount: front,
            back_load_reference_number: String::new(),
            back_load_amount: 0.0,
            front_and_back_load_amount: front,
            remarks: String::new(),
            insurance_expense: 0.0,
            repairs_maintenance_expense: 0.0,
            taxes_permits_licenses_expense: 0.0,
            salaries_allowance: 0.0,
        }
    }

    #[test]
    fn test_unique_plates_sorted_deduped() {
        let trips = vec![trip("B", 0.0, 0.0), trip("A", 0.0, 0.0), trip("B", 0.0, 0.0)];
        assert_eq!(unique_plates(&trips), vec!["A", "B"]);
    }

    #[test]
    fn test_plate_filter_restricts_rows_and_totals() {
        let trips = vec![
            trip("A", 500.0, 1000.0),
            trip("B", 300.0, 2000.0),
            trip("A", 200.0, 500.0),
        ];

        let filtered = filter_by_plate(&trips, Some("A"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|t| t.plate_number == "A"));

        let totals = trip_totals(filtered);
        assert_eq!(totals.allowance, 700.0);
        assert_eq!(totals.front_load_amount, 1500.0);

        // No filter keeps everything
        let all = filter_by_plate(&trips, None);
        assert_eq!(trip_totals(all).allowance, 1000.0);
    }

    #[test]
    fn test_revenue_breakdown() {
        let report = RevenueReport {
            revenue_streams: RevenueStreams {
                front_load_amount: 24.0,
                back_load_amount: 76.0,
            },
            expense_streams: ExpenseStreams {
                allowance: 10.0,
                add_allowance: 5.0,
                fuel_amount: 20.0,
                add_fuel_amount: 5.0,
                total_opex: 60.0,
            },
        };

        let breakdown = revenue_breakdown(&report);
        assert_eq!(breakdown.total_revenue, 100.0);
        assert_eq!(breakdown.total_expenses, 100.0);
        assert!((breakdown.front_load_pct - 24.0).abs() < 1e-9);
        assert!((breakdown.back_load_pct - 76.0).abs() < 1e-9);
    }

    #[test]
    fn test_revenue_breakdown_zero_total() {
        let report = RevenueReport {
            revenue_streams: RevenueStreams {
                front_load_amount: 0.0,
                back_load_amount: 0.0,
            },
            expense_streams: ExpenseStreams {
                allowance: 0.0,
                add_allowance: 0.0,
                fuel_amount: 0.0,
                add_fuel_amount: 0.0,
                total_opex: 0.0,
            },
        };

        let breakdown = revenue_breakdown(&report);
        assert_eq!(breakdown.front_load_pct, 0.0);
        assert_eq!(breakdown.back_load_pct, 0.0);
    }

    #[test]
    fn test_pie_slices_cover_the_circle() {
        let slices = pie_slices(&[1.0, 3.0]);
        assert_eq!(slices.len(), 2);
        let total_dash: f64 = slices.iter().map(|s| s.dash).sum();
        assert!((total_dash - PIE_CIRCUMFERENCE).abs() < 1e-9);
        // Second slice starts where the first ended
        assert_eq!(slices[0].offset, 0.0);
        assert!((slices[1].offset + slices[0].dash).abs() < 1e-9);
    }

    #[test]
    fn test_pie_slices_zero_values() {
        let slices = pie_slices(&[0.0, 0.0]);
        assert!(slices.iter().all(|s| s.dash == 0.0));
    }

    #[test]
    fn test_salary_totals() {
        let a = AccountRecord {
            id: 1,
            account_number: "s-1".to_string(),
            account_type: "Salary".to_string(),
            truck_type: "10W".to_string(),
            plate_number: None,
            description: String::new(),
            debit: 1000.0,
            credit: 250.0,
            final_total: 750.0,
            remarks: String::new(),
            reference_number: None,
            date: "2024-01-15".to_string(),
            quantity: None,
            price: None,
            driver: None,
            route: None,
            front_load: None,
            back_load: None,
        };
        let mut b = a.clone();
        b.id = 2;
        b.debit = 500.0;
        b.credit = 0.0;

        let totals = salary_totals(&[a, b]);
        assert_eq!(totals.total_debit, 1500.0);
        assert_eq!(totals.total_credit, 250.0);
        assert_eq!(totals.net_total, 1250.0);
    }
}
