use ::diff::Result::{Both, Left, Right};
use crate::utils::string;

/// Render a line-level diff between expected and actual output.
///
/// Lines unique to the expected output are tagged `-`, lines unique to the
/// actual output `+`, shared lines get a two-space margin. Both inputs are
/// split with line terminators preserved so a missing trailing newline
/// shows up as a differing line rather than disappearing.
pub fn render_line_diff(expected: &str, actual: &str) -> String {
    let expected_lines = string::split_keeping_terminator(expected);
    let actual_lines = string::split_keeping_terminator(actual);

    let mut output = String::new();
    for change in ::diff::slice(&expected_lines, &actual_lines) {
        match change {
            Left(line) => push_tagged_line(&mut output, '-', line),
            Both(line, _) => push_tagged_line(&mut output, ' ', line),
            Right(line) => push_tagged_line(&mut output, '+', line),
        }
    }

    output
}

fn push_tagged_line(output: &mut String, tag: char, line: &str) {
    output.push(tag);
    output.push(' ');
    output.push_str(line);

    if !line.ends_with('\n') {
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_equal_inputs_are_all_shared() {
        let rendered = render_line_diff("a\nb\n", "a\nb\n");

        let expected = indoc! {"
            \x20 a
            \x20 b
        "};

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_single_differing_line() {
        let rendered = render_line_diff("right\n", "wrong\n");

        let expected = indoc! {"
            - right
            + wrong
        "};

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_shared_lines_around_a_difference() {
        let rendered = render_line_diff("a\nright\nc\n", "a\nwrong\nc\n");

        let expected = indoc! {"
            \x20 a
            - right
            + wrong
            \x20 c
        "};

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_missing_trailing_newline_differs() {
        let rendered = render_line_diff("hi\n", "hi");

        let expected = indoc! {"
            - hi
            + hi
        "};

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_line_only_in_actual_output() {
        let rendered = render_line_diff("a\n", "a\nb\n");

        let expected = indoc! {"
            \x20 a
            + b
        "};

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_empty_actual_output() {
        let rendered = render_line_diff("a\n", "");

        assert_eq!(rendered, "- a\n");
    }
}
