//! Spreadsheet cell values and rows.
//!
//! A decoded sheet is a grid of loosely typed cells: text, numbers (times
//! often arrive as day fractions), or nothing at all. `Cell` makes those
//! cases explicit so every consumer has to say what it does with each.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Number of columns the schedule layout gives meaning to.
pub const SCHEDULE_COLUMNS: usize = 5;

/// A single decoded spreadsheet cell.
///
/// # Examples
///
/// ```
/// use transport_schedule::domain::Cell;
///
/// let cells: Vec<Cell> = serde_json::from_str(r#"["R1", 0.75, null, "  "]"#).unwrap();
/// assert_eq!(cells[0], Cell::Text("R1".into()));
/// assert_eq!(cells[1], Cell::Number(0.75));
/// assert!(cells[2].is_empty());
/// assert!(cells[3].is_empty()); // whitespace-only text counts as empty
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Create a text cell.
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// True for `Empty` and for text that is blank after trimming.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// The cell rendered as trimmed text.
    ///
    /// Numbers use their shortest display form (`1.0` renders as `"1"`).
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

struct CellVisitor;

impl<'de> Visitor<'de> for CellVisitor {
    type Value = Cell;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a spreadsheet cell: null, a string, a number or a boolean")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Cell, E> {
        Ok(Cell::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<Cell, E> {
        Ok(Cell::Empty)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Cell, D::Error> {
        deserializer.deserialize_any(CellVisitor)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Cell, E> {
        Ok(Cell::Text(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Cell, E> {
        Ok(Cell::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Cell, E> {
        Ok(Cell::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Cell, E> {
        Ok(Cell::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Cell, E> {
        Ok(Cell::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Cell, E> {
        Ok(Cell::Text(v))
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Cell, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CellVisitor)
    }
}

impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Cell::Empty => serializer.serialize_unit(),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

/// One row of the source sheet.
///
/// Column 0 holds a route code or a marker, column 1 the outbound time,
/// column 2 the route name, column 3 its details and column 4 the return
/// time. Positions past the end of the row read as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RawRow(Vec<Cell>);

impl RawRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// The cell at `index`, or `Empty` if the row is shorter.
    pub fn cell(&self, index: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.0.get(index).unwrap_or(EMPTY)
    }

    /// Trimmed text of the cell at `index`.
    pub fn text(&self, index: usize) -> String {
        self.cell(index).to_text()
    }

    /// True if none of the schedule columns carries a value.
    pub fn is_blank(&self) -> bool {
        (0..SCHEDULE_COLUMNS).all(|i| self.cell(i).is_empty())
    }
}

struct RawRowVisitor;

impl<'de> Visitor<'de> for RawRowVisitor {
    type Value = RawRow;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a row of spreadsheet cells")
    }

    // Decoders emit `null` for rows with nothing in them.
    fn visit_unit<E: de::Error>(self) -> Result<RawRow, E> {
        Ok(RawRow::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<RawRow, E> {
        Ok(RawRow::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawRow, D::Error> {
        deserializer.deserialize_any(RawRowVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawRow, A::Error> {
        let mut cells = Vec::with_capacity(seq.size_hint().unwrap_or(SCHEDULE_COLUMNS));
        while let Some(cell) = seq.next_element::<Cell>()? {
            cells.push(cell);
        }
        Ok(RawRow(cells))
    }
}

impl<'de> Deserialize<'de> for RawRow {
    fn deserialize<D>(deserializer: D) -> Result<RawRow, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawRowVisitor)
    }
}

/// Build a row from cell literals.
///
/// ```
/// use transport_schedule::row;
/// use transport_schedule::domain::Cell;
///
/// let r = row!["R1", "08:00", "Main", "", 0.75];
/// assert_eq!(r.cell(4), &Cell::Number(0.75));
/// assert!(row![].is_blank());
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::domain::RawRow::default()
    };
    ($($cell:expr),+ $(,)?) => {
        $crate::domain::RawRow::new(vec![$($crate::domain::Cell::from($cell)),+])
    };
}
