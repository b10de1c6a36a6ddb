//! Two-threshold edge linking.
//!
//! Seeds (`Candidate::Strong`) are always edges; weak candidates become edges
//! only when 8-connected, directly or through other weak candidates, to a
//! seed. Tracing uses an explicit stack so long contours cannot overflow the
//! call stack.
use super::nms::{Candidate, CandidateMap};

pub const EDGE: u8 = 255;
pub const NON_EDGE: u8 = 0;

/// Resolve a candidate map into a tightly packed `w × h` edge mask.
pub fn trace_edges(map: &CandidateMap) -> Vec<u8> {
    let (w, h) = (map.w, map.h);
    let mut out = vec![NON_EDGE; w * h];
    let mut stack: Vec<usize> = map
        .labels
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == Candidate::Strong)
        .map(|(i, _)| i)
        .collect();
    for &i in &stack {
        out[i] = EDGE;
    }

    while let Some(i) = stack.pop() {
        let x = i % w;
        let y = i / w;
        let y_range = y.saturating_sub(1)..=(y + 1).min(h - 1);
        for ny in y_range {
            for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                let j = ny * w + nx;
                if out[j] == NON_EDGE && map.labels[j] == Candidate::Weak {
                    out[j] = EDGE;
                    stack.push(j);
                }
            }
        }
    }

    out
}
