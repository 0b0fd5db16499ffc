// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::GuardConfig;

/// Get the default configuration.
pub fn default_config() -> GuardConfig {
    GuardConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# commit-guard configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

[rules]
# Maximum subject length in characters
sub_limit = 50
# Maximum description line length in characters
desc_limit = 72

# Switch individual rules on or off. Unlisted rules keep their defaults.
[rules.enabled]
subject-present = true
subject-length = true
description-present = true
description-line-length = true
subject-body-separator = true
body-trailer-separator = true
signoff-present = false
author-name-present = false
author-email-present = false
subject-imperative-mood = false

[github]
api_url = "https://api.github.com"
token_env = "GITHUB_TOKEN"
timeout_secs = 30
per_page = 100

[output]
format = "text"
color = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.rules.sub_limit, 50);
        assert!(config.output.color);
    }

    #[test]
    fn test_example_config_parseable() {
        let example = example_config();
        let config: GuardConfig = toml::from_str(example).expect("Example config should parse");
        assert_eq!(config.rules.desc_limit, 72);
    }

    #[test]
    fn test_example_config_matches_rule_defaults() {
        let config: GuardConfig = toml::from_str(example_config()).unwrap();
        let rules = RuleSet::standard();
        assert_eq!(config.rules.enabled.len(), rules.len());
        for rule in rules.iter() {
            assert_eq!(
                config.rules.enabled.get(rule.name()).copied(),
                Some(rule.enabled_by_default()),
                "{}",
                rule.name()
            );
        }
        assert!(rules.check_config(&config.rules).is_ok());
    }
}
