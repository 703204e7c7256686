/// Splits one line into tokens on a single delimiter character.
///
/// No quoting or escaping: every occurrence of the delimiter separates two
/// tokens, so `"a,,b"` yields three tokens with an empty one in the middle.
/// An empty line yields zero tokens, which keeps an empty header row distinct
/// from a header with one unnamed column.
pub(crate) fn tokenize(line: &str, delimiter: char) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(delimiter).map(str::to_string).collect()
}
