use serde::{Deserialize, Serialize};

/// JSON body returned for every failed report request.
///
/// `duration_ms` is how long the request ran before failing, so a slow data
/// source is distinguishable from an immediate validation reject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
    pub duration_ms: u64,
}
