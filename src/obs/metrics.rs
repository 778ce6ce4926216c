// self
use crate::obs::{CallOutcome, Resource};

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(resource: Resource, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"falcon_client_call_total",
			"resource" => resource.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (resource, outcome);
	}
}
