//! Endpoint grouping.
//!
//! The core entry point is [`compare`], which diffs two fixture documents and
//! returns one [`EndpointDiffRecord`] per position of the longer `apis` array.

use crate::diff::filter::ExceptionFilter;
use crate::diff::model::{ApiIdentity, EndpointDiffRecord, PathSegment, RawChangeNode};
use crate::diff::normalize::{normalize, LocatedEntry};
use crate::diff::path::canonicalize;
use crate::diff::structural::diff;
use crate::model::Dataset;

const REQUEST: &str = "request";
const RESPONSE: &str = "response";

/// Structural changes between two documents that survive the filter
pub fn filtered_changes(
    mock: &Dataset,
    real: &Dataset,
    filter: &ExceptionFilter,
) -> Vec<RawChangeNode> {
    filter.retain(diff(&mock.to_value(), &real.to_value()))
}

/// Diff two documents and group the surviving changes by endpoint.
pub fn compare(mock: &Dataset, real: &Dataset, filter: &ExceptionFilter) -> Vec<EndpointDiffRecord> {
    group_by_endpoint(mock, real, &filtered_changes(mock, real, filter))
}

/// Group already-filtered change nodes by endpoint index.
///
/// The result has exactly `max(len(mock.apis), len(real.apis))` records, in
/// index order. Record `i` is identified by `mock.apis[i]` when it exists,
/// otherwise by `real.apis[i]`.
pub fn group_by_endpoint(
    mock: &Dataset,
    real: &Dataset,
    changes: &[RawChangeNode],
) -> Vec<EndpointDiffRecord> {
    let len = mock.apis().len().max(real.apis().len());
    let mut records: Vec<EndpointDiffRecord> = (0..len)
        .map(|i| {
            let identity = mock
                .api(i)
                .or_else(|| real.api(i))
                .map(ApiIdentity::of)
                .unwrap_or_default();
            EndpointDiffRecord::new(i, identity)
        })
        .collect();

    for change in changes {
        let Some(located) = normalize(change) else {
            tracing::warn!(
                path = %canonicalize(&change.path),
                "change outside the endpoint list is not reviewable"
            );
            continue;
        };
        match records.get_mut(located.endpoint) {
            Some(record) => attach(record, located),
            None => tracing::warn!(
                endpoint_index = located.endpoint,
                record_count = len,
                "change addresses an endpoint beyond both documents"
            ),
        }
    }

    records
}

fn attach(record: &mut EndpointDiffRecord, located: LocatedEntry) {
    if let Some(sub_path) = sub_path_after(&located.segments, REQUEST) {
        record.request_paths.push(sub_path);
    }
    if let Some(sub_path) = sub_path_after(&located.segments, RESPONSE) {
        record.response_paths.push(sub_path);
    }
    record.diffs.push(located.entry);
}

/// Canonical path of everything after the first `token` key segment
fn sub_path_after(segments: &[PathSegment], token: &str) -> Option<String> {
    let position = segments
        .iter()
        .position(|segment| segment.as_key() == Some(token))?;
    Some(canonicalize(segments.get(position + 1..).unwrap_or(&[])))
}
