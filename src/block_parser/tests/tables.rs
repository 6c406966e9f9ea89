use super::helpers::assert_html;

#[test]
fn test_table_with_headers() {
    assert_html(
        "| Head2 | 2Head |\n| ----- | ----- |\n| text  | text2 |\n",
        "<table><tr><th>Head2</th><th>2Head</th></tr>\
         <tr><td>text</td><td>text2</td></tr></table>",
    );
}

#[test]
fn test_table_without_headers() {
    assert_html(
        "| a | b |\n| c | d |\n",
        "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>",
    );
}

#[test]
fn test_single_line_table_renders_as_header_row() {
    assert_html(
        "| a | b |\n",
        "<table><tr><th>a</th><th>b</th></tr></table>",
    );
}

#[test]
fn test_table_stops_at_non_pipe_line() {
    assert_html(
        "| a | b |\n| c | d |\n# after\n",
        "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>\
         <h1>after</h1>",
    );
}

#[test]
fn test_table_cells_are_formatted() {
    assert_html(
        "| **a** | ``b`` |\n| - | - |\n",
        "<table><tr><th><b>a</b></th>\
         <th><span class=\"inline-code\">b</span></th></tr></table>",
    );
}
