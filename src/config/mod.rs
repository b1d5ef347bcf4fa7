mod loader;
mod model;
mod validation;

pub use loader::{
    FileSystem, RealFileSystem, load_rule_set, load_rule_set_with, load_site_config,
    load_site_config_with,
};
pub use model::{
    HeaderKind, HeaderRule, RULES_FILE_NAME, RuleSet, SITE_FILE_NAME, SiteConfig, SpellcheckConfig,
};
pub use validation::validate_rule_set;
