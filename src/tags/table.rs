//! Tables: `<table>`, `<tr>`, `<th>`, `<td>` and a builder for tabular data.

use std::fmt::Display;

use compact_str::CompactString;

use crate::attr::AttributeMap;
use crate::class::ClassList;
use crate::error::MarkupResult;
use crate::node::{Child, ChildType, Element};

// =============================================================================
// Tags
// =============================================================================

/// Empty `<table>`, accepting only `<tr>` children.
pub fn table() -> Element {
    Element::restricted("table", [ChildType::tag("tr")])
}

/// Empty `<tr>`, accepting only `<th>` and `<td>` children.
pub fn table_row() -> Element {
    Element::restricted("tr", [ChildType::tag("th"), ChildType::tag("td")])
}

/// `<th>` holding the given children.
pub fn table_header<I, C>(children: I) -> MarkupResult<Element>
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    Element::container("th").with_children(children)
}

/// `<td>` holding the given children.
pub fn table_data<I, C>(children: I) -> MarkupResult<Element>
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    Element::container("td").with_children(children)
}

// =============================================================================
// TableBuilder
// =============================================================================

/// Builds a `<table>` from column names and rows of cell values.
///
/// The first row of the output is a header row of `<th>` cells, left out
/// when there are no columns; every data
/// row is a `<tr>` of `<td>` cells. With `alternating_rows` (default on),
/// data rows get `odd`/`even` classes counted from 1. With
/// `columns_as_classes` (default on), each `<td>` gets its column name as a
/// class.
///
/// # Example
///
/// ```
/// use balisage::tags::TableBuilder;
///
/// let table = TableBuilder::new(["A", "B"])
///     .row([1, 2])
///     .columns_as_classes(false)
///     .build()
///     .unwrap();
/// assert_eq!(
///     table.serialize(),
///     "<table><tr><th>A</th><th>B</th></tr><tr class='odd'><td>1</td><td>2</td></tr></table>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
    columns: Vec<CompactString>,
    rows: Vec<Vec<String>>,
    alternating_rows: bool,
    columns_as_classes: bool,
    attributes: AttributeMap,
    table_classes: ClassList,
    header_classes: ClassList,
    body_classes: ClassList,
}

impl TableBuilder {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            alternating_rows: true,
            columns_as_classes: true,
            attributes: AttributeMap::new(),
            table_classes: ClassList::new(),
            header_classes: ClassList::new(),
            body_classes: ClassList::new(),
        }
    }

    /// Append a data row.
    pub fn row<I, T>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.rows.push(cells.into_iter().map(|cell| cell.to_string()).collect());
        self
    }

    /// Append several data rows.
    pub fn rows<R, I, T>(self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: Display,
    {
        rows.into_iter().fold(self, |builder, cells| builder.row(cells))
    }

    pub fn alternating_rows(mut self, enabled: bool) -> Self {
        self.alternating_rows = enabled;
        self
    }

    pub fn columns_as_classes(mut self, enabled: bool) -> Self {
        self.columns_as_classes = enabled;
        self
    }

    /// Attributes of the `<table>` element. A class list given through
    /// [`table_classes`](Self::table_classes) replaces their `class` entry.
    pub fn attributes(mut self, attributes: AttributeMap) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn table_classes(mut self, classes: impl Into<ClassList>) -> Self {
        self.table_classes = classes.into();
        self
    }

    pub fn header_classes(mut self, classes: impl Into<ClassList>) -> Self {
        self.header_classes = classes.into();
        self
    }

    /// Classes for every data row, placed before `odd`/`even`.
    pub fn body_classes(mut self, classes: impl Into<ClassList>) -> Self {
        self.body_classes = classes.into();
        self
    }

    pub fn build(self) -> MarkupResult<Element> {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);

        if !self.columns.is_empty() {
            let header_cells = self
                .columns
                .iter()
                .map(|name| table_header([name.to_string()]))
                .collect::<MarkupResult<Vec<_>>>()?;
            rows.push(
                table_row()
                    .with_classes(self.header_classes.clone())
                    .with_children(header_cells)?,
            );
        }

        for (index, cells) in self.rows.iter().enumerate() {
            let mut classes = self.body_classes.clone();
            if self.alternating_rows {
                classes.add([if (index + 1) % 2 == 1 { "odd" } else { "even" }]);
            }
            let data = cells
                .iter()
                .enumerate()
                .map(|(column, cell)| self.data_cell(column, cell))
                .collect::<MarkupResult<Vec<_>>>()?;
            rows.push(table_row().with_classes(classes).with_children(data)?);
        }

        let mut elem = table().with_attrs(self.attributes);
        if !self.table_classes.is_empty() {
            elem = elem.with_classes(self.table_classes);
        }
        elem.with_children(rows)
    }

    fn data_cell(&self, column: usize, cell: &str) -> MarkupResult<Element> {
        let mut td = table_data([cell])?;
        if self.columns_as_classes
            && let Some(name) = self.columns.get(column)
        {
            td.classes_mut().add([name.as_str()]);
        }
        Ok(td)
    }
}
