use std::rc::Rc;

use yew::prelude::*;

use crate::article::Article;

/// Loading flag plus the articles from the most recent successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub loading: bool,
    pub articles: Rc<Vec<Article>>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            loading: true,
            articles: Rc::new(Vec::new()),
        }
    }
}

pub enum FeedAction {
    Loaded(Vec<Article>),
    Failed,
}

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FeedAction::Loaded(articles) => Rc::new(Self {
                loading: false,
                articles: Rc::new(articles),
            }),
            // Silent fail: whatever was shown stays.
            FeedAction::Failed => Rc::new(Self {
                loading: false,
                articles: Rc::clone(&self.articles),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(n: u32) -> Article {
        Article {
            image: format!("https://img/{n}.jpg"),
            title: format!("Round {n}"),
            summary: format!("Summary {n}"),
            url: format!("https://news/{n}"),
        }
    }

    #[test]
    fn starts_loading_with_no_articles() {
        let state = FeedState::default();
        assert!(state.loading);
        assert!(state.articles.is_empty());
    }

    #[test]
    fn load_replaces_articles_wholesale() {
        let state = Rc::new(FeedState::default())
            .reduce(FeedAction::Loaded(vec![article(1), article(2)]));
        assert!(!state.loading);
        assert_eq!(*state.articles, vec![article(1), article(2)]);

        let state = state.reduce(FeedAction::Loaded(vec![article(3)]));
        assert_eq!(*state.articles, vec![article(3)]);
    }

    #[test]
    fn failure_on_first_load_leaves_empty_non_loading_state() {
        let state = Rc::new(FeedState::default()).reduce(FeedAction::Failed);
        assert!(!state.loading);
        assert!(state.articles.is_empty());
    }

    #[test]
    fn failure_after_success_keeps_previous_articles() {
        let state = Rc::new(FeedState::default())
            .reduce(FeedAction::Loaded(vec![article(1)]))
            .reduce(FeedAction::Failed);
        assert!(!state.loading);
        assert_eq!(*state.articles, vec![article(1)]);
    }

    #[test]
    fn last_response_wins() {
        let state = Rc::new(FeedState::default())
            .reduce(FeedAction::Loaded(vec![article(2), article(3)]))
            .reduce(FeedAction::Loaded(vec![article(1)]));
        assert_eq!(*state.articles, vec![article(1)]);
    }
}
