use std::fmt::{Debug, Display};

/// The named, whitespace separated columns of a data row.
pub struct Schema {
    pub fields: &'static [&'static str],
}

/// A row of a Gaussian orientation table.
pub static GEOMETRY: Schema = Schema { fields: &["center",
                                                 "atomic_number",
                                                 "atomic_type",
                                                 "x",
                                                 "y",
                                                 "z"] };

impl Schema {
    /// Number of fields in a row.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Position of the field called `name`.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| *f == name)
    }
}

/// A row split into the fields of its schema.
pub struct Record<'s> {
    schema: &'s Schema,
    values: Vec<String>,
}

impl<'s> Record<'s> {
    /// The value of the field called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.schema.index(name).map(|i| self.values[i].as_str())
    }

    /// All values in schema order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// A row that cannot be parsed or rendered.
#[derive(PartialEq)]
pub enum RowError {
    /// The row splits into the wrong number of fields.
    Arity { expected: usize, found: usize },
    /// A column names a field the schema does not have.
    NoField(String),
    /// A translated code is not in the table.
    UnknownElement(String),
}

impl Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity { expected, found } => write!(
                f,
                "expected {} fields but found {}",
                expected, found
            ),
            Self::NoField(name) => write!(f, "there is no field \"{}\"", name),
            Self::UnknownElement(code) => {
                write!(f, "atomic number \"{}\" has no element symbol", code)
            }
        }
    }
}

impl Debug for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// Splits `line` on whitespace into a record of `schema`.
pub fn parse_row<'s>(line: &str,
                     schema: &'s Schema)
                     -> Result<Record<'s>, RowError> {
    let values = line.split_whitespace()
                     .map(String::from)
                     .collect::<Vec<String>>();
    if values.len() != schema.arity() {
        return Err(RowError::Arity { expected: schema.arity(),
                                     found: values.len() });
    }
    Ok(Record { schema, values })
}

/// Table used to translate a field before it is written.
pub type Translation = fn(&str) -> Option<&'static str>;

/// One output column.
pub struct Column {
    /// The schema field to write.
    pub field: &'static str,
    /// Minimum width, right aligned, `None` writes the value as is.
    pub width: Option<usize>,
    /// Optional lookup applied to the value.
    pub translation: Option<Translation>,
}

/// Columns of an xyz row: element symbol then the cartesian coordinates.
pub const XYZ_COLUMNS: [Column; 4] =
    [Column { field: "atomic_number",
              width: None,
              translation: Some(crate::elements::symbol) },
     Column { field: "x",
              width: Some(10),
              translation: None },
     Column { field: "y",
              width: Some(10),
              translation: None },
     Column { field: "z",
              width: Some(10),
              translation: None }];

/// Writes the `columns` of `record` separated by tabs, without a newline.
pub fn render(record: &Record, columns: &[Column]) -> Result<String, RowError> {
    let mut cells = Vec::with_capacity(columns.len());
    for column in columns {
        let value =
            record.get(column.field)
                  .ok_or_else(|| RowError::NoField(column.field.to_string()))?;
        let value = match column.translation {
            Some(table) => table(value).ok_or_else(|| {
                                           RowError::UnknownElement(value.to_string())
                                       })?,
            None => value,
        };
        cells.push(match column.width {
                       Some(width) => format!("{:>width$}", value, width = width),
                       None => value.to_string(),
                   });
    }
    Ok(cells.join("\t"))
}

/// Formats records as an xyz file: the record count, a blank comment line,
/// then one row per record.
pub fn xyz_lines(records: &[Record]) -> Result<Vec<String>, RowError> {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(format!("{}\n", records.len()));
    lines.push(String::from("\n"));
    for record in records {
        lines.push(format!("{}\n", render(record, &XYZ_COLUMNS)?));
    }
    Ok(lines)
}
