//! Runtime environment kind selected by `NODE_ENV`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{NODE_ENV_DEVELOPMENT, NODE_ENV_PRODUCTION, NODE_ENV_TEST, NODE_ENVS};

/// The kind of environment the application runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeEnv {
    #[default]
    Development,
    Test,
    Production,
}

impl NodeEnv {
    /// All accepted string values, in declaration order.
    pub const VALUES: [&'static str; 3] = NODE_ENVS;

    pub fn as_str(self) -> &'static str {
        match self {
            NodeEnv::Development => NODE_ENV_DEVELOPMENT,
            NodeEnv::Test => NODE_ENV_TEST,
            NodeEnv::Production => NODE_ENV_PRODUCTION,
        }
    }
}

impl fmt::Display for NodeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NODE_ENV_DEVELOPMENT => Ok(NodeEnv::Development),
            NODE_ENV_TEST => Ok(NodeEnv::Test),
            NODE_ENV_PRODUCTION => Ok(NodeEnv::Production),
            _ => Err(format!("must be one of: {}", NODE_ENVS.join(", "))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_display() {
        for value in NodeEnv::VALUES {
            let parsed: NodeEnv = value.parse().unwrap();
            assert_eq!(parsed.to_string(), value);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Production".parse::<NodeEnv>().is_err());
        assert!("staging".parse::<NodeEnv>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&NodeEnv::Test).unwrap(), r#""test""#);
        let parsed: NodeEnv = serde_json::from_str(r#""production""#).unwrap();
        assert_eq!(parsed, NodeEnv::Production);
    }
}
