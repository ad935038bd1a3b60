/// Minimum average similarity for a candidate to count as a match
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

/// Calculate the gestalt similarity ratio between two texts (0.0 - 1.0)
///
/// Both inputs are lower-cased and stripped of surrounding whitespace before
/// comparison; no further normalization is applied. The ratio is
/// 2*M / (len(a) + len(b)) over characters, where M is the total length of
/// all matching blocks: the longest contiguous common block is located
/// first, then the search repeats on the left and right remainders
/// (Ratcliff/Obershelp pattern matching). Ranking and threshold behavior
/// depend on this exact scoring curve, so it is not interchangeable with
/// edit distance or token overlap.
///
/// # Arguments
/// * `a` - First text
/// * `b` - Second text
///
/// # Returns
/// Similarity in [0, 1]. Two empty strings compare as identical (1.0);
/// an empty string against a non-empty one scores 0.0.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.trim().to_lowercase().chars().collect();
    let b: Vec<char> = b.trim().to_lowercase().chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = matching_block_total(&a, &b);
    2.0 * matched as f64 / total as f64
}

/// Total length of all matching blocks between `a` and `b`
///
/// Finds the longest contiguous common block, then recurses on the
/// unmatched left and right remainders on both sides.
fn matching_block_total(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_block_total(&a[..a_start], &b[..b_start])
        + matching_block_total(&a[a_start + len..], &b[b_start + len..])
}

/// Find the longest contiguous block common to `a` and `b`
///
/// Returns (start in a, start in b, length). Among equally long blocks the
/// one starting earliest in `a` wins, then earliest in `b`, which keeps the
/// block decomposition deterministic.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);

    // lengths[j] = length of the common suffix ending at a[i-1] / b[j-1]
    let mut prev = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        let mut curr = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let run = prev[j] + 1;
                curr[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            }
        }
        prev = curr;
    }

    best
}
