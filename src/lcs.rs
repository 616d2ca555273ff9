/// Longest common contiguous substring of two texts.
///
/// Classic dynamic programming over Unicode scalar values with the full
/// (n+1)×(m+1) table materialized, so both time and space are O(n·m). The
/// table holds the length of the common run ending at each position pair;
/// the maximum is replaced only on a strictly greater length, so among
/// equally long substrings the one ending earliest in `text1` (and among
/// those, earliest in `text2`) wins.
///
/// Returns a slice of `text1`, empty when the texts share no character.
pub fn longest_common_substring<'a>(text1: &'a str, text2: &str) -> &'a str {
    if text1.is_empty() || text2.is_empty() {
        return "";
    }

    // Char-aligned byte offsets into text1, so the winning run can be
    // sliced back out without landing inside a UTF-8 sequence.
    let mut offsets = Vec::new();
    let mut chars1 = Vec::new();
    for (offset, ch) in text1.char_indices() {
        offsets.push(offset);
        chars1.push(ch);
    }
    let chars2: Vec<char> = text2.chars().collect();

    let n = chars1.len();
    let m = chars2.len();
    let stride = m + 1;
    let mut table = vec![0u32; (n + 1) * stride];

    let mut best_len = 0u32;
    // Char index into text1, one past the end of the best run.
    let mut best_end = 0usize;

    for i in 1..=n {
        for j in 1..=m {
            if chars1[i - 1] == chars2[j - 1] {
                let run = table[(i - 1) * stride + (j - 1)] + 1;
                table[i * stride + j] = run;
                if run > best_len {
                    best_len = run;
                    best_end = i;
                }
            }
        }
    }

    if best_len == 0 {
        return "";
    }

    let start = offsets[best_end - best_len as usize];
    let end = offsets.get(best_end).copied().unwrap_or(text1.len());
    &text1[start..end]
}
