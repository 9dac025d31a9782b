pub const SCHEMA: &str = r#"
-- opportunity table
CREATE TABLE IF NOT EXISTS opportunity (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    opportunity_type TEXT NOT NULL,
    field TEXT NOT NULL,
    institution TEXT,
    description TEXT,
    link TEXT NOT NULL,
    paid INTEGER NOT NULL DEFAULT 0,
    location TEXT,
    start_term TEXT,
    deadline TEXT,
    active INTEGER NOT NULL DEFAULT 1,
    archived INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_opportunity_type ON opportunity(lower(opportunity_type));
CREATE INDEX IF NOT EXISTS idx_opportunity_created_at ON opportunity(created_at DESC);
"#;
