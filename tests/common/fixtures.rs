//! Tab-indented YAML fixtures, written the way they appear inline in tests.
//!
//! Every fixture uses real tab characters for indentation, so none of them is
//! valid YAML until it has been through `format_yaml`.

use serde::Deserialize;
use std::collections::HashMap;

/// A tools file with one source and one tool.
pub const TOOLS_FILE: &str = "sources:\n\
\tmy-pg-source:\n\
\t\tkind: postgres\n\
\t\thost: 127.0.0.1\n\
\t\tport: 5432\n\
\t\tdatabase: toolbox_db\n\
tools:\n\
\tsearch-hotels:\n\
\t\tkind: postgres-sql\n\
\t\tsource: my-pg-source\n\
\t\tdescription: Search hotels by name.\n\
\t\tstatement: SELECT * FROM hotels WHERE name ILIKE $1;\n";

/// Two sources, exercising sibling keys at the same tab depth.
pub const MULTI_SOURCE_FILE: &str = "sources:\n\
\tprimary:\n\
\t\tkind: postgres\n\
\t\thost: 10.0.0.1\n\
\t\tport: 5432\n\
\t\tdatabase: main\n\
\treplica:\n\
\t\tkind: postgres\n\
\t\thost: 10.0.0.2\n\
\t\tport: 5433\n\
\t\tdatabase: main\n";

/// A tool whose parameters are a sequence of maps.
pub const PARAMETERS_FILE: &str = "tools:\n\
\tget-flight:\n\
\t\tkind: postgres-sql\n\
\t\tsource: my-pg-source\n\
\t\tdescription: Look up a flight.\n\
\t\tstatement: SELECT * FROM flights WHERE id = $1;\n\
\t\tparameters:\n\
\t\t\t- name: id\n\
\t\t\t  type: integer\n\
\t\t\t  description: Flight id.\n";

/// Every fixture, for parameterised tests.
pub const ALL_FIXTURES: &[&str] = &[TOOLS_FILE, MULTI_SOURCE_FILE, PARAMETERS_FILE];

// ---------------------------------------------------------------------------
// Decoded shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolsFile {
    #[serde(default)]
    pub sources: HashMap<String, SourceConfig>,
    #[serde(default)]
    pub tools: HashMap<String, ToolConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceConfig {
    pub kind: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolConfig {
    pub kind: String,
    pub source: String,
    pub description: String,
    pub statement: String,
    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParameterConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Decode normalized YAML bytes through the `config` YAML source.
pub fn parse_tools_file(yaml: &[u8]) -> ToolsFile {
    let text = std::str::from_utf8(yaml).expect("normalized fixture must be UTF-8");
    config::Config::builder()
        .add_source(config::File::from_str(text, config::FileFormat::Yaml))
        .build()
        .expect("normalized fixture must be valid YAML")
        .try_deserialize()
        .expect("normalized fixture must match ToolsFile")
}
