//! Tracker datasets exposed by `GET /trackers/{id}/datasets/{dataset}`.

// self
use crate::_prelude::*;

/// Dataset kinds a tracker can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
	/// Transfers between accounts.
	Transfers,
	/// Purchases with cash back.
	CashBackPurchases,
	/// Deposits.
	Deposits,
	/// Checks.
	Checks,
	/// Wire transfers.
	WireTransfers,
	/// Distinct accounts seen across documents.
	UniqueAccounts,
	/// Statement periods with no document.
	MissingStatements,
	/// Statements with missing pages.
	MissingPages,
	/// Tracker listing.
	TrackerList,
}
impl Dataset {
	/// Every dataset, in service order.
	pub const ALL: [Dataset; 9] = [
		Dataset::Transfers,
		Dataset::CashBackPurchases,
		Dataset::Deposits,
		Dataset::Checks,
		Dataset::WireTransfers,
		Dataset::UniqueAccounts,
		Dataset::MissingStatements,
		Dataset::MissingPages,
		Dataset::TrackerList,
	];

	/// Returns the path segment used for this dataset.
	pub const fn as_str(self) -> &'static str {
		match self {
			Dataset::Transfers => "transfers",
			Dataset::CashBackPurchases => "cash_back_purchases",
			Dataset::Deposits => "deposits",
			Dataset::Checks => "checks",
			Dataset::WireTransfers => "wire_transfers",
			Dataset::UniqueAccounts => "unique_accounts",
			Dataset::MissingStatements => "missing_statements",
			Dataset::MissingPages => "missing_pages",
			Dataset::TrackerList => "tracker_list",
		}
	}
}
impl Display for Dataset {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Dataset {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter().find(|dataset| dataset.as_str() == s).ok_or_else(|| {
			Error::InvalidArgument { argument: "dataset", reason: format!("unknown dataset `{s}`") }
		})
	}
}
