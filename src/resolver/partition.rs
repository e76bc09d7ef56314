//! Partition resolution: slicing one flat result row into per-entity
//! column segments.

use crate::result_set::ResultSchema;

use super::errors::ResolveError;

/// Contiguous range of ordinals owned by one entity: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, ordinal: usize) -> bool {
        ordinal >= self.start && ordinal < self.end
    }
}

/// Ordered, non-overlapping segments covering a flat multi-entity row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    segments: Vec<Segment>,
}

impl PartitionPlan {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Segment {
        self.segments[index]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Compute the partition plan for `targets` entities over `schema`.
///
/// With no markers a single-entity query spans all columns; a multi-entity
/// query is rejected outright (`AmbiguousPartition`). With markers, each
/// marker is scanned for starting one past the previous boundary, so the
/// resolved boundaries are strictly increasing and every segment holds at
/// least the boundary column itself.
pub fn resolve_partition(
    schema: &ResultSchema,
    targets: usize,
    markers: &[String],
    query: &str,
) -> Result<PartitionPlan, ResolveError> {
    debug_assert!(targets > 0);

    if markers.is_empty() {
        if targets > 1 {
            return Err(ResolveError::AmbiguousPartition {
                targets,
                query: query.to_string(),
            });
        }
        return Ok(PartitionPlan {
            segments: vec![Segment {
                start: 0,
                end: schema.len(),
            }],
        });
    }

    if markers.len() != targets - 1 {
        return Err(ResolveError::PartitionCount {
            targets,
            expected: targets - 1,
            actual: markers.len(),
            query: query.to_string(),
        });
    }

    let mut boundaries = Vec::with_capacity(targets + 1);
    boundaries.push(0);

    let mut previous = 0usize;
    for marker in markers {
        let scan_from = previous + 1;
        let found = schema.position_from(scan_from, marker).ok_or_else(|| {
            ResolveError::InvalidPartition {
                marker: marker.clone(),
                scan_from,
                query: query.to_string(),
            }
        })?;
        boundaries.push(found);
        previous = found;
    }
    boundaries.push(schema.len());

    let segments = boundaries
        .windows(2)
        .map(|pair| Segment {
            start: pair[0],
            end: pair[1],
        })
        .collect();

    Ok(PartitionPlan { segments })
}
