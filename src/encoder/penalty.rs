//! Mask evaluation penalty scoring
//!
//! Implements the four penalty rules used to rank mask candidates. Rows
//! and columns share one scan routine parameterized over the axis, so no
//! transposed copy of the matrix is allocated.

use crate::models::BitMatrix;

/// Penalty weight for runs of five or more same-color modules
const PENALTY_N1: i32 = 3;
/// Penalty weight for each 2x2 same-color block
const PENALTY_N2: i32 = 3;
/// Penalty weight for each finder-like pattern occurrence
const PENALTY_N3: i32 = 40;
/// Penalty weight per 5% step of dark-ratio deviation from 50%
const PENALTY_N4: i32 = 10;

/// Total penalty score of a fully drawn matrix; lower is better
pub fn penalty_score(matrix: &BitMatrix) -> i32 {
    let size = matrix.size();
    let mut result = 0;

    // Rules 1 and 3 over rows, then columns
    for y in 0..size {
        result += line_penalty(size, |i| matrix.get(i, y));
    }
    for x in 0..size {
        result += line_penalty(size, |i| matrix.get(x, i));
    }

    // Rule 2: 2x2 blocks of a single color
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let color = matrix.get(x, y);
            if color == matrix.get(x + 1, y)
                && color == matrix.get(x, y + 1)
                && color == matrix.get(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }

    // Rule 4: dark-ratio deviation from 50% in 5% steps
    let dark = matrix.count_dark() as i32;
    let total = (size * size) as i32;
    let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
    debug_assert!((0..=9).contains(&k));
    result += k * PENALTY_N4;

    debug_assert!(result >= 0);
    result
}

/// Rules 1 and 3 for a single row or column
fn line_penalty(size: usize, line: impl Fn(usize) -> bool) -> i32 {
    let mut result = 0;
    let mut run_color = false;
    let mut run_len: i32 = 0;
    let mut history = RunHistory::new(size);
    for i in 0..size {
        if line(i) == run_color {
            run_len += 1;
            if run_len == 5 {
                result += PENALTY_N1;
            } else if run_len > 5 {
                result += 1;
            }
        } else {
            history.push(run_len);
            if !run_color {
                // A light run just ended; a finder-like pattern may have
                // completed with it.
                result += history.count_patterns() * PENALTY_N3;
            }
            run_color = line(i);
            run_len = 1;
        }
    }
    result + history.terminate(run_color, run_len) * PENALTY_N3
}

/// Sliding window of the last seven run lengths, used to spot
/// dark:light:dark*3:light:dark sequences with enough light quiet zone
struct RunHistory {
    size: i32,
    runs: [i32; 7],
}

impl RunHistory {
    fn new(size: usize) -> Self {
        Self {
            size: size as i32,
            runs: [0; 7],
        }
    }

    /// Record a finished run. The first push absorbs the light border
    /// outside the symbol edge.
    fn push(&mut self, mut run_len: i32) {
        if self.runs[0] == 0 {
            run_len += self.size;
        }
        for i in (0..self.runs.len() - 1).rev() {
            self.runs[i + 1] = self.runs[i];
        }
        self.runs[0] = run_len;
    }

    /// Count finder-like occurrences ending at the current position,
    /// anchored by a wide light run on either side
    fn count_patterns(&self) -> i32 {
        let r = &self.runs;
        let n = r[1];
        debug_assert!(n <= self.size * 3);
        let core = n > 0 && r[2] == n && r[3] == n * 3 && r[4] == n && r[5] == n;
        i32::from(core && r[0] >= n * 4 && r[6] >= n)
            + i32::from(core && r[6] >= n * 4 && r[0] >= n)
    }

    /// Flush the final run, append the light border past the edge, and
    /// count once more
    fn terminate(mut self, run_color: bool, mut run_len: i32) -> i32 {
        if run_color {
            self.push(run_len);
            run_len = 0;
        }
        self.push(run_len + self.size);
        self.count_patterns()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_light_matrix() {
        // Size 21, every module light. Rule 1: each of 42 lines holds one
        // run of 21, scoring 3 + 16. Rule 2: 400 blocks at 3 each.
        // Rule 3: no dark runs. Rule 4: 0% dark is 9 steps out at 10 each.
        let matrix = BitMatrix::new(21);
        assert_eq!(penalty_score(&matrix), 42 * 19 + 400 * 3 + 90);
    }

    #[test]
    fn test_finder_like_row_scores_rule3() {
        // A lone 1:1:3:1:1 sequence with open light on both sides counts
        // twice (left- and right-anchored), adding 80 over the rest of the
        // score shifts.
        let mut matrix = BitMatrix::new(21);
        for &x in &[0usize, 2, 3, 4, 6] {
            matrix.set(x, 10, true);
        }
        // Relative to the all-light matrix: the changed row loses 7 from
        // rule 1, five columns lose 3 each, fourteen 2x2 blocks break up,
        // and rule 3 adds 80.
        assert_eq!(
            penalty_score(&matrix),
            (42 * 19 + 400 * 3 + 90) - 7 - 15 - 42 + 80
        );
    }

    #[test]
    fn test_run_history_pattern_detection() {
        let mut history = RunHistory::new(21);
        // Runs as seen scanning a line that starts with 4 light modules,
        // then dark 1, light 1, dark 3, light 1, dark 1, light to the end.
        for run in [4, 1, 1, 3, 1, 1] {
            history.push(run);
        }
        // Pattern incomplete until the trailing light run arrives
        assert_eq!(history.count_patterns(), 0);
        assert_eq!(history.terminate(false, 14), 2);
    }

    #[test]
    fn test_checkerboard_scores_zero() {
        // Odd-sized checkerboard: no runs of 5, no uniform 2x2, no
        // finder-like sequences, and 13/25 dark is within the first 5%
        // band of rule 4.
        let mut matrix = BitMatrix::new(5);
        for y in 0..5 {
            for x in 0..5 {
                matrix.set(x, y, (x + y) % 2 == 0);
            }
        }
        assert_eq!(penalty_score(&matrix), 0);
    }
}
