//! Pipe-table layout
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

/// A Markdown pipe table with padded, left-aligned columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; newlines inside cells are flattened to spaces
    pub fn push_row<S: AsRef<str>>(&mut self, row: impl IntoIterator<Item = S>) {
        let row = row
            .into_iter()
            .map(|cell| cell.as_ref().replace("\r\n", " ").replace(['\n', '\r'], " "))
            .collect();
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Order rows with `compare`; equal rows keep their insertion order
    pub fn sort_rows_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Vec<String>, &Vec<String>) -> std::cmp::Ordering,
    {
        self.rows.sort_by(compare);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(i) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    /// Render the header, the dash separator and every row, one line each
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        Self::write_line(&mut out, &self.headers, &widths);

        out.push('|');
        for width in &widths {
            out.push_str(&"-".repeat(width + 2));
            out.push('|');
        }
        out.push('\n');

        for row in &self.rows {
            Self::write_line(&mut out, row, &widths);
        }

        out
    }

    fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
        out.push('|');
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let padding = width - cell.chars().count();
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(padding));
            out.push_str(" |");
        }
        out.push('\n');
    }
}
