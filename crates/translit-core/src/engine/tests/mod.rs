mod passes;

use crate::rules::{default_toml, RuleSet};

pub(super) fn default_rules() -> RuleSet {
    RuleSet::from_toml(default_toml()).unwrap()
}
