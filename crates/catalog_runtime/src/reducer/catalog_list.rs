//! Paginated, searchable catalog listing (games, software, movies).

use catalog_contract::{
    CatalogItem, CatalogPage, CatalogQuery, CategoryFilter, CategoryListing, ContentType,
};

use crate::presentation::partition_categories;

#[derive(Debug, Clone, PartialEq)]
/// Screen state for one paginated listing.
pub struct CatalogListState {
    /// Listing shown by this screen.
    pub content_type: ContentType,
    /// Current free-text search.
    pub search_text: String,
    /// Current category restriction.
    pub category: CategoryFilter,
    /// One-based current page.
    pub page: u32,
    /// Page count reported by the last successful fetch.
    pub total_pages: u32,
    /// Entries on the current page.
    pub items: Vec<CatalogItem>,
    /// Whether a page fetch is in flight.
    pub loading: bool,
    /// Category options offered in the filter control.
    pub category_options: Vec<String>,
    /// Id of the most recently issued page fetch; older responses are ignored.
    pub latest_request_id: u64,
    mounted: bool,
}

impl CatalogListState {
    /// Creates the pre-mount state for `content_type` (first page, no filters, loading).
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            search_text: String::new(),
            category: CategoryFilter::All,
            page: 1,
            total_pages: 1,
            items: Vec::new(),
            loading: true,
            category_options: Vec::new(),
            latest_request_id: 0,
            mounted: false,
        }
    }

    /// Seeds the category options for listings that do not fetch them (movies).
    pub fn with_category_options(mut self, options: Vec<String>) -> Self {
        self.category_options = options;
        self
    }

    /// Returns the query matching the current filters and page.
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            content_type: self.content_type,
            search_text: self.search_text.clone(),
            category: self.category.clone(),
            page: self.page,
        }
    }

    /// Page count used for clamping; the server reports `0` for an empty result.
    pub fn effective_total_pages(&self) -> u32 {
        self.total_pages.max(1)
    }

    /// Returns the pagination controls for the current state.
    pub fn pagination(&self) -> PaginationView {
        let total_pages = self.effective_total_pages();
        PaginationView {
            visible: !self.loading && self.total_pages > 1,
            page: self.page,
            total_pages,
            previous_disabled: self.page <= 1,
            next_disabled: self.page >= total_pages,
        }
    }

    fn issue_fetch(&mut self) -> CatalogListEffect {
        self.latest_request_id += 1;
        self.loading = true;
        CatalogListEffect::FetchPage {
            request_id: self.latest_request_id,
            query: self.query(),
        }
    }

    fn go_to(&mut self, page: u32) -> Vec<CatalogListEffect> {
        let page = page.clamp(1, self.effective_total_pages());
        if page == self.page {
            return Vec::new();
        }
        self.page = page;
        vec![self.issue_fetch()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pagination controls derived from [`CatalogListState`].
pub struct PaginationView {
    /// Hidden while loading or when there is at most one page.
    pub visible: bool,
    /// Current page.
    pub page: u32,
    /// Page count, at least 1.
    pub total_pages: u32,
    /// "Previous" is disabled on the first page.
    pub previous_disabled: bool,
    /// "Next" is disabled on the last page.
    pub next_disabled: bool,
}

impl PaginationView {
    /// `Page {page} of {total}`
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_catalog_list`].
pub enum CatalogListAction {
    /// Screen mounted; issues the initial fetches once.
    Mount,
    /// Search input changed.
    SetSearchText(String),
    /// Category select changed.
    SetCategory(CategoryFilter),
    /// "Previous" clicked.
    PreviousPage,
    /// "Next" clicked.
    NextPage,
    /// Jump to a page; clamped to the known page range.
    GoToPage(u32),
    /// A page fetch completed.
    PageLoaded {
        /// Id of the fetch that produced `page`.
        request_id: u64,
        /// Decoded page.
        page: CatalogPage,
    },
    /// A page fetch failed.
    PageFailed {
        /// Id of the failed fetch.
        request_id: u64,
    },
    /// The category listing arrived.
    CategoriesLoaded(CategoryListing),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_catalog_list`].
pub enum CatalogListEffect {
    /// Fetch one page for `query`.
    FetchPage {
        /// Id echoed back in the completion action.
        request_id: u64,
        /// Filters and page to fetch.
        query: CatalogQuery,
    },
    /// Fetch the server category listing.
    FetchCategories,
}

/// Applies `action` to `state` and returns the fetches it requires.
pub fn reduce_catalog_list(
    state: &mut CatalogListState,
    action: CatalogListAction,
) -> Vec<CatalogListEffect> {
    match action {
        CatalogListAction::Mount => {
            if state.mounted {
                return Vec::new();
            }
            state.mounted = true;
            let mut effects = vec![state.issue_fetch()];
            if state.content_type != ContentType::Movies {
                effects.push(CatalogListEffect::FetchCategories);
            }
            effects
        }
        CatalogListAction::SetSearchText(search_text) => {
            if search_text == state.search_text {
                return Vec::new();
            }
            state.search_text = search_text;
            state.page = 1;
            vec![state.issue_fetch()]
        }
        CatalogListAction::SetCategory(category) => {
            if category == state.category {
                return Vec::new();
            }
            state.category = category;
            state.page = 1;
            vec![state.issue_fetch()]
        }
        CatalogListAction::PreviousPage => state.go_to(state.page.saturating_sub(1)),
        CatalogListAction::NextPage => state.go_to(state.page.saturating_add(1)),
        CatalogListAction::GoToPage(page) => state.go_to(page),
        CatalogListAction::PageLoaded { request_id, page } => {
            if request_id == state.latest_request_id {
                state.items = page.items;
                state.total_pages = page.pages;
                state.loading = false;
            }
            Vec::new()
        }
        CatalogListAction::PageFailed { request_id } => {
            if request_id == state.latest_request_id {
                state.items.clear();
                state.loading = false;
            }
            Vec::new()
        }
        CatalogListAction::CategoriesLoaded(listing) => {
            let partition = partition_categories(&listing.software);
            state.category_options = match state.content_type {
                ContentType::Games => partition.games,
                ContentType::Software => partition.software,
                ContentType::Movies => return Vec::new(),
            };
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mounted(content_type: ContentType) -> CatalogListState {
        let mut state = CatalogListState::new(content_type);
        reduce_catalog_list(&mut state, CatalogListAction::Mount);
        state
    }

    fn loaded(state: &mut CatalogListState, pages: u32, items: Vec<CatalogItem>) {
        let request_id = state.latest_request_id;
        reduce_catalog_list(
            state,
            CatalogListAction::PageLoaded {
                request_id,
                page: CatalogPage { items, pages },
            },
        );
    }

    fn fetched_query(effects: &[CatalogListEffect]) -> Option<&CatalogQuery> {
        effects.iter().find_map(|effect| match effect {
            CatalogListEffect::FetchPage { query, .. } => Some(query),
            CatalogListEffect::FetchCategories => None,
        })
    }

    fn item(id: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: Some(id.to_string()),
            title: None,
            category: "Racing Game".to_string(),
            platforms: Vec::new(),
            rating: None,
            download_count: None,
            size: None,
            description: None,
        }
    }

    #[test]
    fn mount_fetches_first_page_and_categories_once() {
        let mut state = CatalogListState::new(ContentType::Games);
        let effects = reduce_catalog_list(&mut state, CatalogListAction::Mount);

        assert_eq!(
            effects,
            vec![
                CatalogListEffect::FetchPage {
                    request_id: 1,
                    query: CatalogQuery::first_page(ContentType::Games),
                },
                CatalogListEffect::FetchCategories,
            ]
        );
        assert!(state.loading);
        assert!(reduce_catalog_list(&mut state, CatalogListAction::Mount).is_empty());
    }

    #[test]
    fn movies_mount_skips_category_fetch() {
        let mut state = CatalogListState::new(ContentType::Movies)
            .with_category_options(vec!["NETFLIX".to_string()]);
        let effects = reduce_catalog_list(&mut state, CatalogListAction::Mount);

        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], CatalogListEffect::FetchPage { .. }));
        assert_eq!(state.category_options, vec!["NETFLIX".to_string()]);
    }

    #[test]
    fn filter_changes_reset_page_before_fetching() {
        let mut state = mounted(ContentType::Software);
        loaded(&mut state, 5, vec![item("a")]);
        reduce_catalog_list(&mut state, CatalogListAction::GoToPage(3));
        loaded(&mut state, 5, vec![item("b")]);
        assert_eq!(state.page, 3);

        let effects =
            reduce_catalog_list(&mut state, CatalogListAction::SetSearchText("edit".to_string()));
        let query = fetched_query(&effects).expect("search fetch");
        assert_eq!(query.page, 1);
        assert_eq!(query.search_text, "edit");

        reduce_catalog_list(&mut state, CatalogListAction::NextPage);
        let effects = reduce_catalog_list(
            &mut state,
            CatalogListAction::SetCategory(CategoryFilter::Exact("Office Tools".to_string())),
        );
        let query = fetched_query(&effects).expect("category fetch");
        assert_eq!(query.page, 1);
        assert_eq!(query.category.as_query_value(), "Office Tools");
    }

    #[test]
    fn unchanged_setter_issues_no_fetch() {
        let mut state = mounted(ContentType::Games);
        let issued = state.latest_request_id;

        assert!(
            reduce_catalog_list(&mut state, CatalogListAction::SetSearchText(String::new()))
                .is_empty()
        );
        assert!(
            reduce_catalog_list(&mut state, CatalogListAction::SetCategory(CategoryFilter::All))
                .is_empty()
        );
        assert!(reduce_catalog_list(&mut state, CatalogListAction::PreviousPage).is_empty());
        assert_eq!(state.latest_request_id, issued);
    }

    #[test]
    fn stale_responses_are_ignored() {
        let mut state = mounted(ContentType::Games);
        let first = state.latest_request_id;
        reduce_catalog_list(&mut state, CatalogListAction::SetSearchText("race".to_string()));

        reduce_catalog_list(
            &mut state,
            CatalogListAction::PageLoaded {
                request_id: first,
                page: CatalogPage {
                    items: vec![item("stale")],
                    pages: 9,
                },
            },
        );
        assert!(state.items.is_empty());
        assert!(state.loading);

        loaded(&mut state, 2, vec![item("fresh")]);
        assert_eq!(state.items[0].id, "fresh");
        assert_eq!(state.total_pages, 2);
        assert!(!state.loading);
    }

    #[test]
    fn failure_clears_items_and_stops_loading() {
        let mut state = mounted(ContentType::Games);
        loaded(&mut state, 3, vec![item("a")]);
        reduce_catalog_list(&mut state, CatalogListAction::NextPage);

        let request_id = state.latest_request_id;
        reduce_catalog_list(&mut state, CatalogListAction::PageFailed { request_id });

        assert!(state.items.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn pagination_flags_follow_page_position() {
        let mut state = mounted(ContentType::Games);
        loaded(&mut state, 3, vec![item("a")]);

        let view = state.pagination();
        assert!(view.visible);
        assert!(view.previous_disabled);
        assert!(!view.next_disabled);
        assert_eq!(view.label(), "Page 1 of 3");

        reduce_catalog_list(&mut state, CatalogListAction::GoToPage(99));
        assert_eq!(state.page, 3);
        loaded(&mut state, 3, vec![item("c")]);
        let view = state.pagination();
        assert!(!view.previous_disabled);
        assert!(view.next_disabled);
        assert!(reduce_catalog_list(&mut state, CatalogListAction::NextPage).is_empty());

        reduce_catalog_list(&mut state, CatalogListAction::PreviousPage);
        assert!(!state.pagination().visible);
    }

    #[test]
    fn pagination_flags_hold_for_every_page_of_every_size() {
        for total_pages in 1..=6 {
            for page in 1..=total_pages {
                let mut state = mounted(ContentType::Software);
                loaded(&mut state, total_pages, vec![item("a")]);
                reduce_catalog_list(&mut state, CatalogListAction::GoToPage(page));
                loaded(&mut state, total_pages, vec![item("b")]);

                let view = state.pagination();
                assert_eq!(view.page, page, "page {page} of {total_pages}");
                assert_eq!(view.visible, total_pages > 1, "page {page} of {total_pages}");
                assert_eq!(view.previous_disabled, page == 1, "page {page} of {total_pages}");
                assert_eq!(view.next_disabled, page == total_pages, "page {page} of {total_pages}");
            }
        }
    }

    #[test]
    fn every_fetch_after_a_filter_change_starts_at_page_one() {
        let actions = vec![
            CatalogListAction::NextPage,
            CatalogListAction::NextPage,
            CatalogListAction::SetSearchText("race".to_string()),
            CatalogListAction::GoToPage(4),
            CatalogListAction::SetCategory(CategoryFilter::Exact("Racing Game".to_string())),
            CatalogListAction::NextPage,
            CatalogListAction::SetSearchText("race".to_string()),
            CatalogListAction::GoToPage(6),
            CatalogListAction::SetSearchText(String::new()),
            CatalogListAction::PreviousPage,
            CatalogListAction::SetCategory(CategoryFilter::All),
            CatalogListAction::GoToPage(2),
            CatalogListAction::SetCategory(CategoryFilter::All),
            CatalogListAction::SetSearchText("x".to_string()),
        ];

        let mut state = CatalogListState::new(ContentType::Games);
        let effects = reduce_catalog_list(&mut state, CatalogListAction::Mount);
        let mut previous = fetched_query(&effects).expect("mount fetch").clone();
        loaded(&mut state, 6, vec![item("a")]);
        let mut filter_changes = 0;

        for action in actions {
            let effects = reduce_catalog_list(&mut state, action);
            let Some(query) = fetched_query(&effects).cloned() else {
                continue;
            };
            if query.search_text != previous.search_text || query.category != previous.category {
                filter_changes += 1;
                assert_eq!(query.page, 1, "fetch after filter change: {query:?}");
            }
            assert_eq!(query.page, state.page);
            previous = query;
            loaded(&mut state, 6, vec![item("b")]);
        }

        assert_eq!(filter_changes, 5);
    }

    #[test]
    fn single_or_empty_result_hides_pagination() {
        let mut state = mounted(ContentType::Games);
        loaded(&mut state, 1, Vec::new());
        assert!(state.items.is_empty());
        assert!(!state.pagination().visible);

        loaded(&mut state, 0, Vec::new());
        let view = state.pagination();
        assert!(!view.visible);
        assert_eq!(view.total_pages, 1);
        assert!(reduce_catalog_list(&mut state, CatalogListAction::NextPage).is_empty());
    }

    #[test]
    fn category_options_follow_listing_kind() {
        let listing = CategoryListing {
            software: ["Action Games", "Office Tools", "Racing Game"]
                .map(str::to_string)
                .to_vec(),
            movies: vec!["IGNORED".to_string()],
        };

        let mut games = mounted(ContentType::Games);
        reduce_catalog_list(&mut games, CatalogListAction::CategoriesLoaded(listing.clone()));
        assert_eq!(
            games.category_options,
            vec!["Action Games".to_string(), "Racing Game".to_string()]
        );

        let mut software = mounted(ContentType::Software);
        reduce_catalog_list(&mut software, CatalogListAction::CategoriesLoaded(listing.clone()));
        assert_eq!(software.category_options, vec!["Office Tools".to_string()]);

        let mut movies = CatalogListState::new(ContentType::Movies)
            .with_category_options(vec!["NETFLIX".to_string()]);
        reduce_catalog_list(&mut movies, CatalogListAction::CategoriesLoaded(listing));
        assert_eq!(movies.category_options, vec!["NETFLIX".to_string()]);
    }
}
