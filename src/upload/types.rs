use serde::{Deserialize, Serialize};

/// Static descriptor for one back-office account category: its submission
/// endpoint and the column names its spreadsheets are expected to carry.
///
/// The column list labels the preview and the format instructions only. It
/// does not validate or reorder the sheet: a header that disagrees with the
/// descriptor is still accepted, matching the behavior uploads have always
/// had.
#[derive(Debug, Clone, Serialize)]
pub struct UploadType {
    pub key: &'static str,
    pub label: &'static str,
    pub endpoint: &'static str,
    pub columns: &'static [&'static str],
}

/// All supported upload categories, in menu order.
pub const UPLOAD_TYPES: &[UploadType] = &[
    UploadType {
        key: "repair-maintenance",
        label: "Repair & Maintenance",
        endpoint: "repair-maintenance/upload/",
        columns: &[
            "AccountNumber", "AccountType", "TruckType", "PlateNumber", "Description",
            "Debit", "Credit", "Final Total", "Remarks", "Reference Number", "Date",
        ],
    },
    UploadType {
        key: "insurance",
        label: "Insurance",
        endpoint: "insurance/upload/",
        columns: &[
            "AccountNumber", "AccountType", "TruckType", "PlateNumber", "Description",
            "Debit", "Credit", "FinalTotal", "Remarks", "ReferenceNumber", "Date",
            "Unit Cost",
        ],
    },
    UploadType {
        key: "fuel",
        label: "Fuel & Oil",
        endpoint: "fuel/upload/",
        columns: &[
            "Account", "AccountType", "TruckType", "PlateNumber", "Description",
            "Debit", "Credit", "FinalTotal", "Remarks", "ReferenceNumber", "Date",
            "Liters", "Price", "Driver", "Route", "Front_Loa", "Back_Load",
        ],
    },
    UploadType {
        key: "tax",
        label: "Tax Account",
        endpoint: "tax/upload/",
        columns: &[
            "AccountNumber", "AccountType", "TruckType", "PlateNumber", "Description",
            "Debit", "Credit", "FinalTotal", "Remarks", "ReferenceNumber", "Date",
            "Price", "Quantity",
        ],
    },
    UploadType {
        key: "allowance",
        label: "Allowance Account",
        endpoint: "allowance/upload/",
        columns: &[
            "AccountNumber", "AccountType", "TruckType", "PlateNumber", "Description",
            "Debit", "Credit", "FinalTotal", "Remarks", "ReferenceNumber", "Date",
        ],
    },
    UploadType {
        key: "income",
        label: "Income Account",
        endpoint: "income/upload/",
        columns: &[
            "AccountNumber", "AccountType", "TruckType", "PlateNumber", "Description",
            "Debit", "Credit", "FinalTotal", "Remarks", "ReferenceNumber", "Date",
            "Driver", "Route", "Quantity", "Price", "Front_Loa", "Back_Load",
        ],
    },
    UploadType {
        key: "trucking",
        label: "Trucking Account",
        endpoint: "trucking/upload/",
        columns: &[
            "AccountNumber", "AccountType", "TruckType", "PlateNumber", "Description",
            "Debit", "Credit", "FinalTotal", "Remarks", "ReferenceNumber", "Date",
            "Quantity", "Price", "Driver", "Route", "Front_Load", "Back_Load",
        ],
    },
    UploadType {
        key: "salary",
        label: "Salary Account",
        endpoint: "salary/upload/",
        columns: &[
            "AccountNumber", "AccountType", "TruckType", "PlateNumber", "Description",
            "Debit", "Credit", "FinalTotal", "Remarks", "ReferenceNumber", "Date",
            "Quantity", "Price", "Driver", "Route", "Front_Load", "Back_Load",
        ],
    },
];

/// Look up an upload type by its category key.
pub fn find_upload_type(key: &str) -> Option<&'static UploadType> {
    UPLOAD_TYPES.iter().find(|t| t.key == key)
}

/// Category-specific extraction counts the server reports for load-bearing
/// categories (trucking, income, fuel).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsingStats {
    pub drivers_extracted: u64,
    pub routes_extracted: u64,
    pub loads_extracted: u64,
}

/// Structured server response to a spreadsheet upload. `created_count` and
/// `errors` are independent: rows can fail while others are created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub message: String,
    pub created_count: u64,
    #[serde(default)]
    pub parsing_stats: Option<ParsingStats>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Upload submission errors.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Network error: could not connect to server: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Unknown upload type: {0}")]
    UnknownType(String),
    #[error("Failed to decode server response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories_present() {
        let keys: Vec<&str> = UPLOAD_TYPES.iter().map(|t| t.key).collect();
        assert_eq!(
            keys,
            vec![
                "repair-maintenance",
                "insurance",
                "fuel",
                "tax",
                "allowance",
                "income",
                "trucking",
                "salary"
            ]
        );
    }

    #[test]
    fn test_endpoints_follow_category_key() {
        for t in UPLOAD_TYPES {
            assert_eq!(t.endpoint, format!("{}/upload/", t.key));
            assert!(!t.columns.is_empty());
        }
    }

    #[test]
    fn test_find_upload_type() {
        assert_eq!(find_upload_type("fuel").unwrap().label, "Fuel & Oil");
        assert!(find_upload_type("nope").is_none());
    }
}
