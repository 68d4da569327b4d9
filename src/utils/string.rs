/// Split into lines while keeping each line's terminator.
///
/// Keeping the terminators lets callers distinguish `"foo"` from `"foo\n"`,
/// which matters when output is compared byte-for-byte.
pub fn split_keeping_terminator(input: &str) -> Vec<&str> {
    input.split_inclusive('\n').collect()
}
