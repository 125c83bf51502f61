//! Fixture loading from YAML files
//!
//! Entries are written one per line in a compact form:
//!
//! ```text
//! ns               namespace list of the case
//! open 0 root      element start in namespace 0
//! attr 1 lang      attribute name
//! emitted          end of start tag
//! close 0 root     element end
//! comment          comment (body follows)
//! text some words  text value (rest of line, may be empty)
//! int 5 / float 2.5 / bool true
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use nsxml_core::{Entry, Namespace, NamespaceId, Value};

/// Namespace slot in a fixture (`~` for an absent slot)
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureNamespace {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
}

/// A single test case from a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub desc: String,
    #[serde(default)]
    pub namespaces: Vec<Option<FixtureNamespace>>,
    pub entries: Vec<String>,
    /// Expected output including the trailing newline
    #[serde(default)]
    pub xml: Option<String>,
    /// Expected error kind (`Structural`, `Sequencing`, `Configuration`)
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub escape: bool,
}

impl TestCase {
    /// Namespace list for the `ns` entry.
    pub fn namespace_list(&self) -> Arc<[Option<Namespace>]> {
        self.namespaces
            .iter()
            .enumerate()
            .map(|(id, slot)| {
                slot.as_ref().map(|ns| Namespace {
                    id: NamespaceId::new(id),
                    uri: ns.uri.clone(),
                    default_prefix: ns.prefix.clone(),
                })
            })
            .collect()
    }

    /// Decode the compact entry lines.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries
            .iter()
            .map(|line| self.parse_entry(line))
            .collect()
    }

    fn parse_entry(&self, line: &str) -> Entry {
        let (op, rest) = match line.split_once(' ') {
            Some((op, rest)) => (op, rest),
            None => (line, ""),
        };

        match op {
            "ns" => Entry::Namespaces(self.namespace_list()),
            "open" => {
                let (ns, name) = self.parse_member(line, rest);
                Entry::open(ns, name)
            }
            "close" => {
                let (ns, name) = self.parse_member(line, rest);
                Entry::close(ns, name)
            }
            "attr" => {
                let (ns, name) = self.parse_member(line, rest);
                Entry::attribute(ns, name)
            }
            "emitted" => Entry::Emitted,
            "comment" => Entry::Comment,
            "text" => Entry::value(rest),
            "int" => Entry::Value(Value::Integer(rest.parse().expect("int value"))),
            "float" => Entry::Value(Value::Float(rest.parse().expect("float value"))),
            "bool" => Entry::Value(Value::Bool(rest.parse().expect("bool value"))),
            other => panic!("{}: unknown entry op {:?}", self.id, other),
        }
    }

    /// `<id> <name>` after a member op.
    fn parse_member<'a>(&self, line: &str, rest: &'a str) -> (NamespaceId, &'a str) {
        let (id, name) = rest
            .split_once(' ')
            .unwrap_or_else(|| panic!("{}: bad member in {:?}", self.id, line));
        let id: usize = id
            .parse()
            .unwrap_or_else(|_| panic!("{}: bad namespace id in {:?}", self.id, line));
        (NamespaceId::new(id), name)
    }
}

/// Load all test cases from a YAML fixture file
pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load fixtures from the standard fixtures directory
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}
