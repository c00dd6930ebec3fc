//! ドメイン型（Newtype、enum、ルール）

pub mod command;
pub mod help;
pub mod info_plist;
pub mod launch_script;
pub mod list_item;
pub mod prism;
pub mod prism_config;
pub mod prism_id;
pub mod query;
pub mod settings;

pub use list_item::{ListItem, ListOutput};
pub use prism::{validate_name, BundleLayout, Prism, PrismDraft, PrismLayout, PrismPaths};
pub use prism_config::PrismConfig;
pub use prism_id::{IdScheme, PrismId};
pub use query::{BrowseFilter, ListQuery, StartTarget};
pub use settings::{PrismContext, PrismSettings, SettingsFile};
