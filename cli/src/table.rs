// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A plain-text table of rows of `T`, one column per [`Column`].
pub struct Table<'a, T, C: Column<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
    header: bool,
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
            header: true,
        }
    }

    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    fn cells(&self) -> Vec<Vec<Cow<'a, str>>> {
        self.data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect()
    }

    fn widths(&self, cells: &[Vec<Cow<'a, str>>]) -> Vec<usize> {
        let mut widths: Vec<usize> = match self.header {
            true => self.columns.iter().map(|c| c.name().width()).collect(),
            false => vec![0; self.columns.len()],
        };
        for row in cells {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
    }
}

impl<T, C: Column<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        let widths = self.widths(&cells);
        let last = self.columns.len().saturating_sub(1);

        if self.header {
            for (i, col) in self.columns.iter().enumerate() {
                let name = pad(&col.name(), widths[i], col.padding_direction(), i == last);
                write!(f, "{}", name.bold())?;
                write_end(f, i == last, self.separator)?;
            }
        }

        for (row, data) in cells.iter().zip(self.data) {
            for (i, (cell, col)) in row.iter().zip(self.columns).enumerate() {
                let cell = pad(cell, widths[i], col.padding_direction(), i == last);
                match col.get_color(data) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }
                write_end(f, i == last, self.separator)?;
            }
        }
        Ok(())
    }
}

pub trait Column<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    // `format!` pads by char count, which is wrong for wide characters
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left if last => cell.to_string(), // no trailing spaces
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

fn write_end(f: &mut fmt::Formatter<'_>, last: bool, separator: &str) -> fmt::Result {
    match last {
        true => writeln!(f),
        false => write!(f, "{separator}"),
    }
}
