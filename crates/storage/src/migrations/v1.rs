//! Migration v1: universities table

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS universities (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    slug TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL,
    address TEXT NOT NULL,
    contacts TEXT NOT NULL DEFAULT '[]',
    avg_gre REAL,
    avg_lang REAL,
    fees REAL
);
";
