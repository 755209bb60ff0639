//! JSON input documents.
//!
//! ```json
//! { "domain": [1, 2, 3, 4, 6, 12], "condition": "divides" }
//! { "domain": ["a", "b"], "relation": [["a", "b"]] }
//! ```

use ordermap::OrderSet;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{RelationError, Result};
use crate::graph::RelationGraph;
use crate::pairs::generate_relations;

/// Built-in integer relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Divides,
    LessOrEqual,
    LessThan,
    Equal,
}

impl Condition {
    pub fn holds(self, x: i64, y: i64) -> bool {
        match self {
            // 0 divides only 0
            Condition::Divides => y.checked_rem(x).map_or(y == 0, |r| r == 0),
            Condition::LessOrEqual => x <= y,
            Condition::LessThan => x < y,
            Condition::Equal => x == y,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationInput {
    pub domain: Vec<Value>,
    #[serde(default)]
    pub relation: Option<Vec<(Value, Value)>>,
    #[serde(default)]
    pub condition: Option<Condition>,
    /// Flip every generated pair.
    #[serde(default)]
    pub inverse: bool,
}

fn scalar(v: &Value) -> Result<String> {
    match v {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(RelationError::invalid(format!(
            "elements must be strings, numbers or booleans, got {other}"
        ))),
    }
}

fn integer(k: &str) -> Result<i64> {
    k.parse()
        .map_err(|_| RelationError::invalid(format!("condition needs integer elements, got {k:?}")))
}

impl RelationInput {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the relation graph, refusing domains above `max_elements`.
    pub fn into_graph(self, max_elements: usize) -> Result<RelationGraph<String>> {
        let domain: OrderSet<String> = self.domain.iter().map(scalar).collect::<Result<_>>()?;
        if domain.len() > max_elements {
            return Err(RelationError::DomainTooLarge { size: domain.len(), limit: max_elements });
        }
        let keys: Vec<String> = domain.into_iter().collect();

        let pairs: Vec<(String, String)> = match (self.relation, self.condition) {
            (Some(_), Some(_)) => {
                return Err(RelationError::invalid("give either a relation or a condition, not both"))
            }
            (Some(relation), None) => relation
                .iter()
                .map(|(x, y)| Ok((scalar(x)?, scalar(y)?)))
                .collect::<Result<_>>()?,
            (None, Some(condition)) => {
                let ints: Vec<i64> = keys.iter().map(|k| integer(k)).collect::<Result<_>>()?;
                let by_value: Vec<(i64, &String)> = ints.into_iter().zip(keys.iter()).collect();
                generate_relations(&by_value, |x, y| condition.holds(x.0, y.0), self.inverse)
                    .map(|(x, y)| (x.1.clone(), y.1.clone()))
                    .collect()
            }
            (None, None) => Vec::new(),
        };
        debug!(elements = keys.len(), pairs = pairs.len(), "parsed relation input");

        let mut graph = RelationGraph::new();
        for k in keys {
            let label = k.clone();
            graph.add_node(k, Some(label));
        }
        for (x, y) in pairs {
            graph.add_edge(&x, &y, Default::default())?;
        }
        Ok(graph)
    }
}
