use encodeflow_core::Status;

/// Map a raw cluster job status to the canonical [`Status`].
///
/// Matching is exact and case-sensitive. Anything unrecognised maps to
/// [`Status::Unknown`] so new backend states never turn into errors.
pub fn status_map(status: &str) -> Status {
    match status {
        "pending" => Status::Queued,
        "preprocessing" | "running" | "postprocessing" => Status::Started,
        "complete" => Status::Finished,
        "cancelled" => Status::Canceled,
        "error" => Status::Failed,
        _ => Status::Unknown,
    }
}
