//! Greedy color-aware assignment of loose voxels to rebuild targets.
//!
//! Targets are served in input order; earlier targets get first pick of the
//! pool, which is what makes the heuristic deterministic. This is O(targets
//! x pool) and not globally optimal - it trades optimality for stable,
//! reproducible assignments.

use crate::color::Rgb;
use crate::config::MatchConfig;

/// For each target index, the chosen source index into the pool, or `None`
/// when the pool ran out of candidates.
pub type Assignment = Vec<Option<usize>>;

/// Assign each target a distinct source cell by penalized color distance.
///
/// Unmatched targets are dropped silently; unassigned sources are the
/// caller's rubble. Both are expected steady-state outcomes, not errors.
pub fn assign(pool: &[Rgb], targets: &[Rgb], cfg: &MatchConfig) -> Assignment {
  let mut taken = vec![false; pool.len()];
  let mut out = Vec::with_capacity(targets.len());

  for &target in targets {
    let natural_target = cfg.is_natural_target(target);
    let mut best_cost = f32::INFINITY;
    let mut best_idx = None;

    for (i, &source) in pool.iter().enumerate() {
      if taken[i] {
        continue;
      }

      let d = source.distance(target);
      let penalized = if cfg.is_natural_source(source) && !natural_target {
        d + cfg.natural_penalty
      } else {
        d
      };

      if penalized < best_cost {
        best_cost = penalized;
        best_idx = Some(i);
        // Near-exact match: no better candidate is worth scanning for.
        if d < cfg.exact_epsilon {
          break;
        }
      }
    }

    if let Some(i) = best_idx {
      taken[i] = true;
    }
    out.push(best_idx);
  }

  out
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;
