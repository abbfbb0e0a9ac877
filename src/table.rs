//! Plain-text table rendering for `--list`.

use crossterm::style::{style, Color, Stylize};

use crate::task::Task;
use crate::timestamp;

const HEADERS: [&str; 6] = ["#", "Task", "Done", "Created_at", "Completed_at", "Updated_at"];
const HEADER_COLORS: [Color; 6] = [
    Color::DarkGrey,
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Green,
    Color::Green,
];
const DONE_COLUMN: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct TableOptions<'a> {
    pub timestamp_format: &'a str,
    pub color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

struct Cell {
    text: String,
    color: Option<Color>,
    align: Align,
}

impl Cell {
    fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            align: Align::Center,
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            align: Align::Center,
        }
    }

    fn left(mut self) -> Self {
        self.align = Align::Left;
        self
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }

    fn render(&self, width: usize, color: bool) -> String {
        let padded = pad(&self.text, width, self.align);
        match self.color {
            Some(c) if color => style(padded).with(c).to_string(),
            _ => padded,
        }
    }
}

/// Render tasks with a header, a rule, one row per task and a pending footer.
///
/// The `#` column shows the 1-based index accepted by complete/delete/update.
pub fn render(tasks: &[Task], options: TableOptions<'_>) -> String {
    let header: Vec<Cell> = HEADERS
        .iter()
        .zip(HEADER_COLORS)
        .map(|(title, color)| Cell::new(*title, color))
        .collect();

    let rows: Vec<Vec<Cell>> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| task_row(i + 1, task, options.timestamp_format))
        .collect();

    let pending = tasks.iter().filter(|task| !task.done).count();
    let footer: Vec<Cell> = (0..HEADERS.len())
        .map(|column| {
            if column == DONE_COLUMN {
                Cell::plain(format!("pending {pending} tasks"))
            } else {
                Cell::plain("")
            }
        })
        .collect();

    let mut widths = vec![0usize; HEADERS.len()];
    for row in std::iter::once(&header)
        .chain(rows.iter())
        .chain(std::iter::once(&footer))
    {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(render_row(&header, &widths, options.color));
    lines.push(rule(&widths));
    for row in &rows {
        lines.push(render_row(row, &widths, options.color));
    }
    lines.push(rule(&widths));
    lines.push(render_row(&footer, &widths, options.color));

    lines.join("\n")
}

fn task_row(index: usize, task: &Task, format: &str) -> Vec<Cell> {
    let done = if task.done {
        Cell::new("Yes", Color::Green)
    } else {
        Cell::new("No", Color::Blue)
    };
    vec![
        Cell::new(index.to_string(), Color::DarkGrey),
        Cell::new(task.description.clone(), Color::Red).left(),
        done,
        Cell::new(timestamp::display(Some(&task.created_at), format), Color::Green),
        Cell::new(timestamp::display(task.completed_at.as_ref(), format), Color::Green),
        Cell::new(timestamp::display(task.updated_at.as_ref(), format), Color::Green),
    ]
}

fn render_row(cells: &[Cell], widths: &[usize], color: bool) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| cell.render(*width, color))
        .collect();
    format!(" {}", rendered.join(" | "))
}

fn rule(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+")
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(text.chars().count());
    match align {
        Align::Left => format!("{text}{}", " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}
