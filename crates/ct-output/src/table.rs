//! Boxed status tables.
//!
//! ```text
//! +----+-------+
//! | Id | Name  |
//! +----+-------+
//! | 0  | Paola |
//! +----+-------+
//! ```

use ct_core::Route;
use ct_sim::SimSnapshot;

use crate::row::{actor_rows, bus_rows};

pub const ACTOR_HEADERS: [&str; 7] =
    ["Id", "Name", "Hometown", "Position", "Travel time", "Ticket", "Mark"];

pub const BUS_HEADERS: [&str; 6] = [
    "Id",
    "Last recorded position",
    "Is at a bus stop",
    "Passengers",
    "Tricksters",
    "Inspectors",
];

/// A grid of centered cells with ASCII borders.
#[derive(Debug, Clone)]
pub struct Grid {
    headers: Vec<String>,
    rows:    Vec<Vec<String>>,
}

impl Grid {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows:    Vec::new(),
        }
    }

    /// Append a row.  Missing cells render empty; extra cells are ignored.
    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule: String = widths.iter().fold(String::from("+"), |mut acc, w| {
            acc.push_str(&"-".repeat(w + 2));
            acc.push('+');
            acc
        });

        let line = |cells: &[String]| -> String {
            widths.iter().enumerate().fold(String::from("|"), |mut acc, (col, &w)| {
                let cell = cells.get(col).map(String::as_str).unwrap_or("");
                acc.push(' ');
                acc.push_str(&center(cell, w));
                acc.push_str(" |");
                acc
            })
        };

        let mut out = vec![rule.clone(), line(self.headers.as_slice()), rule.clone()];
        out.extend(self.rows.iter().map(|row| line(row.as_slice())));
        if !self.rows.is_empty() {
            out.push(rule);
        }
        out.join("\n")
    }
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

fn title_bool(b: bool) -> String {
    let text = if b { "True" } else { "False" };
    text.to_owned()
}

/// The "SITUATION AT TIME t" block: an actors table then a buses table.
pub fn render_status(snapshot: &SimSnapshot, route: &Route) -> String {
    let mut actors = Grid::new(ACTOR_HEADERS);
    for row in actor_rows(snapshot, route) {
        actors.push_row(vec![
            row.id.to_string(),
            row.name.to_owned(),
            row.hometown,
            row.position,
            row.travel_time.to_string(),
            title_bool(row.has_ticket),
            row.mark.to_string(),
        ]);
    }

    let mut buses = Grid::new(BUS_HEADERS);
    for row in bus_rows(snapshot, route) {
        buses.push_row(vec![
            row.id.to_string(),
            row.last_stop,
            title_bool(row.at_stop),
            row.passengers.to_string(),
            row.tricksters.to_string(),
            row.inspectors.to_string(),
        ]);
    }

    format!(
        "\nSITUATION AT TIME {}\nActors:\n{}\nBuses:\n{}",
        snapshot.time,
        actors.render(),
        buses.render()
    )
}
