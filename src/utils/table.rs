//! Grid table rendering for the view and value reports.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, H>(headers: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Short rows are padded with empty cells, extra cells are dropped.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|row| row[col].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    // 整欄皆為數字時靠右對齊
    fn numeric_columns(&self) -> Vec<bool> {
        (0..self.headers.len())
            .map(|col| {
                !self.rows.is_empty()
                    && self
                        .rows
                        .iter()
                        .all(|row| row[col].trim().parse::<f64>().is_ok())
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let numeric = self.numeric_columns();

        let separator = |fill: char| -> String {
            let mut line = String::from("+");
            for width in &widths {
                line.extend(std::iter::repeat(fill).take(width + 2));
                line.push('+');
            }
            line
        };

        let format_row = |cells: &[String], align_numeric: bool| -> String {
            let mut line = String::from("|");
            for (col, cell) in cells.iter().enumerate() {
                let pad = widths[col] - cell.width();
                if align_numeric && numeric[col] {
                    line.push_str(&format!(" {}{} |", " ".repeat(pad), cell));
                } else {
                    line.push_str(&format!(" {}{} |", cell, " ".repeat(pad)));
                }
            }
            line
        };

        let mut lines = vec![
            separator('-'),
            format_row(&self.headers, false),
            separator('='),
        ];
        for row in &self.rows {
            lines.push(format_row(row, true));
            lines.push(separator('-'));
        }
        if self.rows.is_empty() {
            lines.pop();
            lines.push(separator('-'));
        }

        lines.join("\n")
    }
}
