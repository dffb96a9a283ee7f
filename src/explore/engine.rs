//! In-memory listing engine for the explore page.
//!
//! All state lives in an explicit [`ExploreSession`] rather than ambient
//! globals; filtering and sorting are pure functions over it. The working set
//! is built once from the dashboard's explore rows and every interaction
//! recomputes, in order: text filter, role filter, favorites-only filter,
//! sort, pagination.

use crate::domain::ExploreRow;
use crate::explore::favorites::{Favorite, FavoritesStore};
use std::collections::HashMap;
use std::io;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One browsable profile: a user aggregated from their explore rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub teach_skills: Vec<String>,
    pub learn_skills: Vec<String>,
    /// Lowercased `name + teach + learn` blob the text filter matches against.
    search_text: String,
}

impl Candidate {
    pub fn new(id: &str, name: &str, teach: Vec<String>, learn: Vec<String>) -> Self {
        let search_text = format!("{} {} {}", name, teach.join(" "), learn.join(" "))
            .to_lowercase();
        Self {
            id: id.to_string(),
            name: name.to_string(),
            teach_skills: teach,
            learn_skills: learn,
            search_text,
        }
    }

    /// Groups explore rows by user id (first-seen order), splitting skill
    /// names into teach/learn lists. Rows without a role label carry no
    /// usable signal and are tolerated by skipping them.
    pub fn group_rows(rows: &[ExploreRow]) -> Vec<Candidate> {
        struct Grouped {
            name: String,
            teach: Vec<String>,
            learn: Vec<String>,
        }

        let mut order: Vec<i32> = Vec::new();
        let mut grouped: HashMap<i32, Grouped> = HashMap::new();
        for row in rows {
            let entry = grouped.entry(row.user_id).or_insert_with(|| {
                order.push(row.user_id);
                Grouped {
                    name: row.user_name.clone(),
                    teach: Vec::new(),
                    learn: Vec::new(),
                }
            });
            match row.skill_type.as_deref() {
                Some("Teach") => entry.teach.push(row.skill_name.clone()),
                Some("Learn") => entry.learn.push(row.skill_name.clone()),
                _ => {}
            }
        }

        order
            .into_iter()
            .map(|id| {
                let g = grouped.remove(&id).expect("grouped entry exists");
                Candidate::new(&id.to_string(), &g.name, g.teach, g.learn)
            })
            .collect()
    }

    pub fn fav_snapshot(&self) -> Favorite {
        Favorite {
            id: self.id.clone(),
            name: self.name.clone(),
            teach_skills: self.teach_skills.clone(),
            learn_skills: self.learn_skills.clone(),
        }
    }
}

/// Role filter modes of the explore page dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    Any,
    Teach,
    Learn,
    Both,
}

impl RoleFilter {
    fn matches(&self, c: &Candidate) -> bool {
        match self {
            RoleFilter::Any => true,
            RoleFilter::Teach => !c.teach_skills.is_empty(),
            RoleFilter::Learn => !c.learn_skills.is_empty(),
            RoleFilter::Both => !c.teach_skills.is_empty() && !c.learn_skills.is_empty(),
        }
    }
}

/// Sort orders of the explore page dropdown. Ties keep the prior order
/// (stable sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    TeachCount,
    LearnCount,
}

/// One rendered page of results plus pagination controls state.
#[derive(Debug)]
pub struct PageView<'a> {
    pub items: Vec<&'a Candidate>,
    /// 1-based current page.
    pub page: usize,
    pub total_pages: usize,
    /// Total filtered results across all pages.
    pub total: usize,
    /// 1-based showing range (`0..=0` when there are no results).
    pub start: usize,
    pub end: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Explicit session state for one viewer's explore page.
pub struct ExploreSession {
    candidates: Vec<Candidate>,
    favorites: FavoritesStore,
    query: String,
    role_filter: RoleFilter,
    favorites_only: bool,
    sort: SortKey,
    /// Indices into `candidates`, in display order.
    filtered: Vec<usize>,
    /// 1-based, clamped to the filtered set.
    page: usize,
    page_size: usize,
}

impl ExploreSession {
    pub fn new(rows: &[ExploreRow], favorites: FavoritesStore) -> Self {
        Self::with_page_size(rows, favorites, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(
        rows: &[ExploreRow],
        favorites: FavoritesStore,
        page_size: usize,
    ) -> Self {
        let mut session = Self {
            candidates: Candidate::group_rows(rows),
            favorites,
            query: String::new(),
            role_filter: RoleFilter::Any,
            favorites_only: false,
            sort: SortKey::NameAsc,
            filtered: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
        };
        session.recompute(true);
        session
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Free-text search over name + skills. Resets to page 1.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        self.recompute(true);
    }

    /// Resets to page 1.
    pub fn set_role_filter(&mut self, filter: RoleFilter) {
        self.role_filter = filter;
        self.recompute(true);
    }

    /// Resets to page 1.
    pub fn set_favorites_only(&mut self, enabled: bool) {
        self.favorites_only = enabled;
        self.recompute(true);
    }

    /// A pure sort change preserves the current page.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.recompute(false);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
        self.clamp_page();
    }

    pub fn next_page(&mut self) {
        self.page += 1;
        self.clamp_page();
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Toggles the bookmark for `id`, persisting immediately. Preserves the
    /// current page (clamped if the favorites-only view shrank). Unknown ids
    /// are ignored. Returns whether the profile is bookmarked afterwards.
    pub fn toggle_favorite(&mut self, id: &str) -> io::Result<bool> {
        let Some(candidate) = self.candidates.iter().find(|c| c.id == id) else {
            return Ok(false);
        };
        let now_saved = self.favorites.toggle(candidate.fav_snapshot())?;
        self.recompute(false);
        Ok(now_saved)
    }

    /// Recomputes the filtered + sorted working set. `reset_page` applies the
    /// reset-to-1 rule for filter/search changes; sort changes and favorite
    /// toggles keep the page (clamped to the last page).
    fn recompute(&mut self, reset_page: bool) {
        self.filtered = apply_filters(
            &self.candidates,
            &self.query,
            self.role_filter,
            self.favorites_only,
            &self.favorites,
        );
        sort_candidates(&self.candidates, &mut self.filtered, self.sort);

        if reset_page {
            self.page = 1;
        } else {
            self.clamp_page();
        }
    }

    fn clamp_page(&mut self) {
        let total_pages = total_pages(self.filtered.len(), self.page_size);
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    /// The current page of results plus everything the pagination and
    /// results-meta widgets need.
    pub fn current_page(&self) -> PageView<'_> {
        let total = self.filtered.len();
        let total_pages = total_pages(total, self.page_size);
        let start_idx = (self.page - 1) * self.page_size;
        let items: Vec<&Candidate> = self
            .filtered
            .iter()
            .skip(start_idx)
            .take(self.page_size)
            .map(|&i| &self.candidates[i])
            .collect();

        let (start, end) = if total == 0 {
            (0, 0)
        } else {
            (start_idx + 1, (start_idx + items.len()).min(total))
        };

        PageView {
            items,
            page: self.page,
            total_pages,
            total,
            start,
            end,
            has_prev: self.page > 1,
            has_next: self.page < total_pages,
        }
    }
}

fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Text + role + favorites filters, applied in that order. Returns indices
/// into `candidates` in their original order.
fn apply_filters(
    candidates: &[Candidate],
    query: &str,
    role: RoleFilter,
    favorites_only: bool,
    favorites: &FavoritesStore,
) -> Vec<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| query.is_empty() || c.search_text.contains(query))
        .filter(|(_, c)| role.matches(c))
        .filter(|(_, c)| !favorites_only || favorites.contains(&c.id))
        .map(|(i, _)| i)
        .collect()
}

/// Stable sort of the filtered index list; ties keep the prior order.
fn sort_candidates(candidates: &[Candidate], filtered: &mut [usize], sort: SortKey) {
    match sort {
        SortKey::NameAsc => filtered.sort_by(|&a, &b| {
            candidates[a]
                .name
                .to_lowercase()
                .cmp(&candidates[b].name.to_lowercase())
        }),
        SortKey::NameDesc => filtered.sort_by(|&a, &b| {
            candidates[b]
                .name
                .to_lowercase()
                .cmp(&candidates[a].name.to_lowercase())
        }),
        SortKey::TeachCount => filtered.sort_by(|&a, &b| {
            candidates[b]
                .teach_skills
                .len()
                .cmp(&candidates[a].teach_skills.len())
        }),
        SortKey::LearnCount => filtered.sort_by(|&a, &b| {
            candidates[b]
                .learn_skills
                .len()
                .cmp(&candidates[a].learn_skills.len())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn row(user_id: i32, name: &str, skill: &str, skill_type: Option<&str>) -> ExploreRow {
        ExploreRow {
            user_id,
            user_name: name.to_string(),
            skill_name: skill.to_string(),
            skill_type: skill_type.map(|s| s.to_string()),
        }
    }

    fn fresh_store(tag: &str) -> (FavoritesStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "skill-exchange-engine-{}-{}",
            tag,
            std::process::id()
        ));
        std::fs::remove_dir_all(&dir).ok();
        (FavoritesStore::open(&dir, "viewer"), dir)
    }

    /// A(teaches X, Y; learns nothing), B(teaches nothing; learns X).
    fn two_user_rows() -> Vec<ExploreRow> {
        vec![
            row(1, "Alice", "X", Some("Teach")),
            row(1, "Alice", "Y", Some("Teach")),
            row(2, "Bob", "X", Some("Learn")),
        ]
    }

    #[test]
    fn groups_rows_by_user_id() {
        let candidates = Candidate::group_rows(&two_user_rows());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Alice");
        assert_eq!(candidates[0].teach_skills, vec!["X", "Y"]);
        assert!(candidates[0].learn_skills.is_empty());
        assert_eq!(candidates[1].learn_skills, vec!["X"]);
    }

    #[test]
    fn rows_without_role_label_are_tolerated() {
        let rows = vec![row(1, "Alice", "X", Some("Teach")), row(1, "Alice", "Z", None)];
        let candidates = Candidate::group_rows(&rows);
        assert_eq!(candidates[0].teach_skills, vec!["X"]);
        assert!(candidates[0].learn_skills.is_empty());
    }

    #[test]
    fn search_matches_name_and_skills() {
        let (store, dir) = fresh_store("search");
        let mut session = ExploreSession::new(&two_user_rows(), store);

        session.set_query("X");
        let names: Vec<&str> = session
            .current_page()
            .items
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        session.set_query("bob");
        assert_eq!(session.current_page().total, 1);

        // Empty query matches all again.
        session.set_query("  ");
        assert_eq!(session.current_page().total, 2);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn role_filter_modes() {
        let (store, dir) = fresh_store("role");
        let mut session = ExploreSession::new(&two_user_rows(), store);

        session.set_role_filter(RoleFilter::Learn);
        let page = session.current_page();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Bob");

        session.set_role_filter(RoleFilter::Teach);
        assert_eq!(session.current_page().items[0].name, "Alice");

        session.set_role_filter(RoleFilter::Both);
        assert_eq!(session.current_page().total, 0);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn sorts_by_learn_count_descending() {
        let rows = vec![
            row(1, "Alice", "X", Some("Learn")),
            row(2, "Bob", "X", Some("Learn")),
            row(2, "Bob", "Y", Some("Learn")),
            row(3, "Carol", "X", Some("Teach")),
        ];
        let (store, dir) = fresh_store("sort");
        let mut session = ExploreSession::new(&rows, store);

        session.set_sort(SortKey::LearnCount);
        let names: Vec<&str> = session
            .current_page()
            .items
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bob", "Alice", "Carol"]);

        session.set_sort(SortKey::NameDesc);
        let names: Vec<&str> = session
            .current_page()
            .items
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Carol", "Bob", "Alice"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn pagination_last_page_holds_remainder_and_next_is_disabled() {
        // 13 filtered results, page size 6 -> pages of 6, 6, 1.
        let rows: Vec<ExploreRow> = (1..=13)
            .map(|i| row(i, &format!("User{:02}", i), "X", Some("Teach")))
            .collect();
        let (store, dir) = fresh_store("pages");
        let mut session = ExploreSession::new(&rows, store);

        let page = session.current_page();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 6);
        assert!(!page.has_prev);
        assert!(page.has_next);

        session.go_to_page(3);
        let page = session.current_page();
        assert_eq!(page.items.len(), 1);
        assert_eq!((page.start, page.end), (13, 13));
        assert!(page.has_prev);
        assert!(!page.has_next);

        // Walking past the end stays clamped on the last page.
        session.next_page();
        assert_eq!(session.current_page().page, 3);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn page_resets_on_filter_change_but_not_on_sort_change() {
        let rows: Vec<ExploreRow> = (1..=13)
            .map(|i| row(i, &format!("User{:02}", i), "X", Some("Teach")))
            .collect();
        let (store, dir) = fresh_store("reset");
        let mut session = ExploreSession::new(&rows, store);

        session.go_to_page(2);
        session.set_sort(SortKey::NameDesc);
        assert_eq!(session.current_page().page, 2);

        session.set_query("User");
        assert_eq!(session.current_page().page, 1);

        session.go_to_page(2);
        session.set_role_filter(RoleFilter::Teach);
        assert_eq!(session.current_page().page, 1);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn favorites_only_filters_and_toggle_preserves_page() {
        let (store, dir) = fresh_store("favs");
        let mut session = ExploreSession::new(&two_user_rows(), store);

        assert!(session.toggle_favorite("2").unwrap());
        session.set_favorites_only(true);
        let page = session.current_page();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Bob");

        // Toggling off while the favorites view is active shrinks the set.
        assert!(!session.toggle_favorite("2").unwrap());
        assert_eq!(session.current_page().total, 0);

        // Unknown ids are a no-op.
        assert!(!session.toggle_favorite("999").unwrap());

        std::fs::remove_dir_all(&dir).ok();
    }
}
