//! Client-side directory state machine.
//!
//! [`Directory`] owns the fetched user collection plus the active search
//! term and page. Everything the UI shows (the filtered view, the visible
//! page, the page count) is derived on read from those fields, so a search
//! typed before the initial load completes simply starts matching once the
//! collection is replaced.

use crate::types::User;

/// Number of users shown per page.
pub const PAGE_SIZE: usize = 5;

/// Owned state for the user directory view.
///
/// Mutated only through [`load`](Directory::load),
/// [`search`](Directory::search), [`paginate`](Directory::paginate), and
/// [`add_user`](Directory::add_user).
#[derive(Debug, Clone)]
pub struct Directory {
    all_users: Vec<User>,
    search_term: String,
    current_page: usize,
    /// Leading entries of `all_users` that stay visible regardless of the
    /// active search term. Grows on `add_user`, cleared by `search` and
    /// `load`.
    filter_exempt: usize,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    /// Empty directory on page 1 with no search term.
    pub fn new() -> Self {
        Self {
            all_users: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            filter_exempt: 0,
        }
    }

    /// Replace the collection with a freshly fetched one.
    ///
    /// The search term and current page are left untouched.
    pub fn load(&mut self, users: Vec<User>) {
        self.all_users = users;
        self.filter_exempt = 0;
    }

    /// Set the active search term.
    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.filter_exempt = 0;
    }

    /// Jump to a 1-indexed page.
    ///
    /// Out-of-range pages are not an error; they show an empty slice.
    pub fn paginate(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Prepend a newly created user.
    ///
    /// The record sits at the top of the filtered view even when it does
    /// not match the active search term; the exemption ends at the next
    /// search.
    pub fn add_user(&mut self, user: User) {
        self.all_users.insert(0, user);
        self.filter_exempt += 1;
    }

    /// Full collection in fetch order, newest additions first.
    pub fn all_users(&self) -> &[User] {
        &self.all_users
    }

    /// The active search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The current 1-indexed page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Case-insensitive substring filter of the collection by the active
    /// term, preserving fetch order. An empty term matches everything.
    pub fn filtered_users(&self) -> Vec<&User> {
        let needle = self.search_term.to_lowercase();
        self.all_users
            .iter()
            .enumerate()
            .filter(|(index, user)| {
                *index < self.filter_exempt
                    || needle.is_empty()
                    || user.name.to_lowercase().contains(&needle)
            })
            .map(|(_, user)| user)
            .collect()
    }

    /// The slice of the filtered view shown on the current page.
    pub fn visible_page(&self) -> Vec<&User> {
        if self.current_page == 0 {
            return Vec::new();
        }
        let start = (self.current_page - 1) * PAGE_SIZE;
        self.filtered_users()
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect()
    }

    /// Number of page controls to offer, zero when nothing matches.
    pub fn page_count(&self) -> usize {
        self.filtered_users().len().div_ceil(PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_users() -> Vec<User> {
        vec![
            User::new(1, "Leanne Graham", "a@a.com"),
            User::new(2, "Ervin Howell", "b@b.com"),
            User::new(3, "Clementine Bauch", "c@c.com"),
        ]
    }

    fn users_named(count: usize) -> Vec<User> {
        (1..=count)
            .map(|n| User::new(n as i64, format!("User {n}"), format!("u{n}@example.com")))
            .collect()
    }

    #[test]
    fn starts_empty_on_page_one() {
        let directory = Directory::new();
        assert!(directory.all_users().is_empty());
        assert!(directory.filtered_users().is_empty());
        assert_eq!(directory.current_page(), 1);
        assert_eq!(directory.page_count(), 0);
    }

    #[test]
    fn search_matches_case_insensitive_substring() {
        let mut directory = Directory::new();
        directory.load(sample_users());

        directory.search("ervin");
        let filtered = directory.filtered_users();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ervin Howell");
    }

    #[test]
    fn empty_search_restores_full_view() {
        let mut directory = Directory::new();
        directory.load(sample_users());

        directory.search("ervin");
        directory.search("");

        let filtered = directory.filtered_users();
        assert_eq!(filtered.len(), 3);
        assert_eq!(
            filtered.iter().map(|u| u.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn search_preserves_relative_order() {
        let mut directory = Directory::new();
        directory.load(vec![
            User::new(1, "Anna", "a@x.com"),
            User::new(2, "Brent", "b@x.com"),
            User::new(3, "Joanna", "c@x.com"),
        ]);

        directory.search("an");
        let ids: Vec<i64> = directory.filtered_users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn twelve_matches_make_three_pages() {
        let mut directory = Directory::new();
        directory.load(users_named(12));

        assert_eq!(directory.page_count(), 3);

        directory.paginate(2);
        let ids: Vec<i64> = directory.visible_page().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10]);

        directory.paginate(3);
        assert_eq!(directory.visible_page().len(), 2);
    }

    #[test]
    fn out_of_range_page_shows_empty_slice() {
        let mut directory = Directory::new();
        directory.load(sample_users());

        directory.paginate(7);
        assert!(directory.visible_page().is_empty());

        directory.paginate(0);
        assert!(directory.visible_page().is_empty());
    }

    #[test]
    fn page_survives_narrowing_search() {
        // The page is deliberately not reset when a search shrinks the
        // result set below it; the view just goes empty.
        let mut directory = Directory::new();
        directory.load(users_named(12));
        directory.paginate(3);

        directory.search("User 1");
        assert!(directory.page_count() < 3);
        assert_eq!(directory.current_page(), 3);
        assert!(directory.visible_page().is_empty());
    }

    #[test]
    fn added_user_is_prepended_to_both_views() {
        let mut directory = Directory::new();
        directory.load(sample_users());

        directory.add_user(User::new(11, "Ana", "ana@x.com"));

        assert_eq!(directory.all_users().len(), 4);
        assert_eq!(directory.all_users()[0].name, "Ana");
        let filtered = directory.filtered_users();
        assert_eq!(filtered.len(), 4);
        assert_eq!(filtered[0].name, "Ana");
    }

    #[test]
    fn added_user_bypasses_active_search() {
        let mut directory = Directory::new();
        directory.load(sample_users());
        directory.search("ervin");
        let before = directory.filtered_users().len();

        directory.add_user(User::new(11, "Ana", "ana@x.com"));

        let filtered = directory.filtered_users();
        assert_eq!(filtered.len(), before + 1);
        assert_eq!(filtered[0].name, "Ana");
    }

    #[test]
    fn next_search_drops_non_matching_addition() {
        let mut directory = Directory::new();
        directory.load(sample_users());
        directory.search("ervin");
        directory.add_user(User::new(11, "Ana", "ana@x.com"));

        // Re-running the same search recomputes the view from scratch.
        directory.search("ervin");
        let filtered = directory.filtered_users();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ervin Howell");
    }

    #[test]
    fn load_replaces_collection_under_pending_search() {
        // A term typed before the fetch resolves starts matching as soon
        // as the collection lands.
        let mut directory = Directory::new();
        directory.search("ervin");
        assert!(directory.filtered_users().is_empty());

        directory.load(sample_users());
        assert_eq!(directory.filtered_users().len(), 1);
    }
}
