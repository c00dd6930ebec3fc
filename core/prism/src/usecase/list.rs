//! list コマンドのユースケース
//!
//! クエリの先頭記号で作成候補・ヘルプ・一覧を切り替え、ホストに返す項目を作る。

use std::sync::Arc;

use common::error::Error;

use crate::domain::query::start_argument;
use crate::domain::{help, BrowseFilter, ListItem, ListOutput, ListQuery};
use crate::ports::outbound::{FuzzyFilter, ListedPrism, PrismRepository};

pub const EMPTY_TITLE: &str = "No prisms found";
pub const EMPTY_HINT: &str = "Type +name to create a new prism, or ? for help";

pub struct ListUseCase {
    repo: Arc<dyn PrismRepository>,
    fuzzy: Arc<dyn FuzzyFilter>,
}

impl ListUseCase {
    pub fn new(repo: Arc<dyn PrismRepository>, fuzzy: Arc<dyn FuzzyFilter>) -> Self {
        Self { repo, fuzzy }
    }

    pub fn run(&self, raw_query: &str) -> Result<ListOutput, Error> {
        let mut items = match ListQuery::parse(raw_query) {
            ListQuery::Create {
                raw,
                name,
                description,
            } => vec![create_item(&raw, name.as_deref(), description)],
            ListQuery::Help => help::bullet_lines(help::TEXT)
                .into_iter()
                .map(ListItem::info)
                .collect(),
            ListQuery::Browse(filter) => return self.browse(filter),
        };
        if items.is_empty() {
            items.push(ListItem::info(EMPTY_TITLE));
        }
        Ok(ListOutput { items })
    }

    fn browse(&self, filter: BrowseFilter) -> Result<ListOutput, Error> {
        let mut listed = self.repo.list()?;
        let total = listed.len();
        listed.sort_by_cached_key(|l| title_of(l).to_lowercase());

        let items: Vec<ListItem> = match filter {
            BrowseFilter::All => listed.iter().map(prism_item).collect(),
            BrowseFilter::Fuzzy(query) => {
                let titles: Vec<&str> = listed.iter().map(title_of).collect();
                self.fuzzy
                    .filter(&query, &titles)
                    .into_iter()
                    .filter_map(|i| listed.get(i))
                    .map(prism_item)
                    .collect()
            }
            BrowseFilter::Exact { title, argument } => listed
                .iter()
                .filter_map(|l| match l {
                    ListedPrism::Ok(p) if p.name == title => Some(
                        ListItem::action(p.name.clone(), start_argument(p.id.as_str(), &argument))
                            .with_subtitle(p.description.clone()),
                    ),
                    _ => None,
                })
                .collect(),
        };

        if !items.is_empty() {
            return Ok(ListOutput { items });
        }
        let mut items = vec![ListItem::info(EMPTY_TITLE)];
        if total == 0 {
            items.push(ListItem::info(EMPTY_HINT));
        }
        Ok(ListOutput { items })
    }
}

fn create_item(raw: &str, name: Option<&str>, description: Option<String>) -> ListItem {
    match name {
        Some(name) => ListItem::action(format!("Create a new prism \"{}\"...", name), raw)
            .with_subtitle(description),
        None => ListItem::action("Create a new prism...", "+"),
    }
}

fn title_of(listed: &ListedPrism) -> &str {
    match listed {
        ListedPrism::Ok(p) => &p.name,
        ListedPrism::Broken { id, .. } => id.as_str(),
    }
}

fn prism_item(listed: &ListedPrism) -> ListItem {
    match listed {
        ListedPrism::Ok(p) => {
            ListItem::action(p.name.clone(), p.id.as_str()).with_subtitle(p.description.clone())
        }
        ListedPrism::Broken { id, error } => ListItem {
            title: id.to_string(),
            subtitle: Some(format!("Broken prism: {}", error)),
            arg: Some(id.to_string()),
            valid: false,
        },
    }
}
