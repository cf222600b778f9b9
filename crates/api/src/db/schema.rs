//! Tables and columns the API reads. The live database is checked against
//! these once at startup; queries never discover the layout at runtime.
//! `migrations/` holds the matching DDL.

pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const MEASUREMENT: TableSchema = TableSchema {
    name: "measurement",
    columns: &["id", "station", "date", "prcp", "tobs"],
};

pub const STATION: TableSchema = TableSchema {
    name: "station",
    columns: &["id", "station", "name", "latitude", "longitude", "elevation"],
};

pub const TABLES: &[TableSchema] = &[MEASUREMENT, STATION];

impl TableSchema {
    /// Required columns absent from `present` (case-insensitive, like sqlite identifiers)
    pub fn missing_columns(&self, present: &[String]) -> Vec<&'static str> {
        self.columns
            .iter()
            .copied()
            .filter(|required| !present.iter().any(|p| p.eq_ignore_ascii_case(required)))
            .collect()
    }
}
