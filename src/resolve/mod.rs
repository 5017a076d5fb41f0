//! Armed/scanning resolvers for the three recognized report shapes.
//!
//! Every resolver runs the same two-state line scanner: dormant until the
//! block marker appears, then scanning each line for a target field until
//! the marker appears a second time. A second marker occurrence bounds the
//! scan to the first block; stacked reports after it are ignored, matching
//! the behavior operators rely on for single-exception dumps.
//!
//! A matching line is sliced from the field's byte offset and tokenized by
//! whitespace; addresses and module paths sit at fixed token offsets in the
//! dump format.

pub mod backtrace;
pub mod kernel;
pub mod user;

/// The link-register field as it appears in `traceback N -- lr = 0x...`
/// lines, shared by all three report shapes.
pub(crate) const LR_FIELD: &str = "lr =";

/// Collect the tail of every line containing `field` within the first
/// `marker`-bounded block, sliced from the field's byte offset.
pub(crate) fn armed_matches<'a>(content: &'a str, marker: &str, field: &str) -> Vec<&'a str> {
    let mut armed = false;
    let mut matches = Vec::new();

    for line in content.lines() {
        if line.contains(marker) {
            if armed {
                break;
            }
            armed = true;
        }
        if armed {
            if let Some(at) = line.find(field) {
                matches.push(&line[at..]);
            }
        }
    }

    matches
}

/// Whitespace token at `index` of a sliced line tail.
pub(crate) fn token_at(tail: &str, index: usize) -> Option<&str> {
    tail.split_whitespace().nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KERNEL: &str = "excFrom: kernel";

    #[test]
    fn test_lines_before_marker_are_ignored() {
        let content = "lr = 0xdead\nexcFrom: kernel\ntraceback 0 -- lr = 0x1000\n";
        let matches = armed_matches(content, KERNEL, LR_FIELD);
        assert_eq!(matches, vec!["lr = 0x1000"]);
    }

    #[test]
    fn test_second_marker_bounds_the_scan() {
        let content = "excFrom: kernel\nlr = 0x1000\nexcFrom: kernel\nlr = 0x2000\n";
        let matches = armed_matches(content, KERNEL, LR_FIELD);
        assert_eq!(matches, vec!["lr = 0x1000"]);
    }

    #[test]
    fn test_tail_starts_at_field() {
        let content = "excFrom: kernel\ntraceback 3 -- lr = 0x1234    fp = 0x5678\n";
        let matches = armed_matches(content, KERNEL, LR_FIELD);
        assert_eq!(matches, vec!["lr = 0x1234    fp = 0x5678"]);
    }

    #[test]
    fn test_no_marker_no_matches() {
        assert!(armed_matches("lr = 0x1000\n", KERNEL, LR_FIELD).is_empty());
    }

    #[test]
    fn test_token_at_fixed_offsets() {
        let tail = "lr = 0x1234    fp = 0x5678 lr in /bin/init --> 0x9abc";
        assert_eq!(token_at(tail, 2), Some("0x1234"));
        assert_eq!(token_at(tail, 8), Some("/bin/init"));
        assert_eq!(token_at(tail, 10), Some("0x9abc"));
        assert_eq!(token_at(tail, 11), None);
    }
}
