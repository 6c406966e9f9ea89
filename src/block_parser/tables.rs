use crate::html::HtmlDoc;
use crate::inline_parser::format_text;

/// Pipe-delimited table. The first line becomes a header row when the line
/// below it is a dashes-only separator.
pub(crate) fn try_parse_table(lines: &[&str], mut i: usize, doc: &mut HtmlDoc) -> Option<usize> {
    doc.open("table");

    if is_header_separator(lines.get(i + 1).copied().unwrap_or("")) {
        doc.open("tr");
        for cell in row_cells(lines[i]) {
            doc.open("th");
            doc.raw(&format_text(cell));
            doc.close();
        }
        doc.close();
        i += 2;
    }

    while i < lines.len() {
        if !lines[i].trim_start().starts_with('|') {
            break;
        }
        doc.open("tr");
        for cell in row_cells(lines[i]) {
            doc.open("td");
            doc.raw(&format_text(cell));
            doc.close();
        }
        doc.close();
        i += 1;
    }

    doc.close();
    Some(i)
}

/// Every cell token between the outer pipes must consist of dashes only.
/// Vacuously true for a missing second line, so a single-line table renders
/// as a header row.
fn is_header_separator(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return true;
    }
    tokens[1..tokens.len() - 1]
        .iter()
        .step_by(2)
        .all(|cell| cell.bytes().all(|b| b == b'-'))
}

/// Segments a row on `|`, dropping the empty leads the outer pipes produce.
fn row_cells(line: &str) -> Vec<&str> {
    let cells: Vec<&str> = line.split('|').collect();
    cells[1..cells.len() - 1].to_vec()
}
