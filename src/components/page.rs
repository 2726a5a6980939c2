use std::future::Future;

use gloo::console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::view::NewsView;
use crate::api::{fetch_articles, FetchError};
use crate::article::Article;
use crate::auth::{read_persisted_token, sidebar_visible};
use crate::config::PageConfig;
use crate::feed::{FeedAction, FeedState};
use crate::location::use_location_search;

#[derive(Properties, PartialEq, Default)]
pub struct ChessNewsProps {
    #[prop_or_default]
    pub config: PageConfig,
}

/// One pass of the page effect for `search`.
///
/// The sidebar flag is set before returning; the returned future awaits
/// `fetch` and dispatches the outcome. Resolves to the article count, or the
/// error that was swallowed into `FeedAction::Failed`.
pub(crate) fn refresh<P, S, F, D>(
    search: &str,
    persisted: P,
    set_sidebar: S,
    fetch: F,
    dispatch: D,
) -> impl Future<Output = Result<usize, FetchError>>
where
    P: FnOnce() -> Option<String>,
    S: FnOnce(bool),
    F: Future<Output = Result<Vec<Article>, FetchError>>,
    D: Fn(FeedAction),
{
    set_sidebar(sidebar_visible(search, persisted));

    async move {
        match fetch.await {
            Ok(articles) => {
                let count = articles.len();
                dispatch(FeedAction::Loaded(articles));
                Ok(count)
            }
            Err(e) => {
                dispatch(FeedAction::Failed);
                Err(e)
            }
        }
    }
}

#[function_component(ChessNews)]
pub fn chess_news(props: &ChessNewsProps) -> Html {
    let feed = use_reducer(FeedState::default);
    let show_sidebar = use_state_eq(|| false);
    let search = use_location_search();

    // Runs on mount and whenever the query string changes.
    // No cancellation: a late response simply overwrites an earlier one.
    {
        let dispatcher = feed.dispatcher();
        let show_sidebar = show_sidebar.clone();
        let endpoint = props.config.endpoint.clone();
        use_effect_with(search, move |search| {
            if let Some(search) = search {
                let fetch = async move { fetch_articles(&endpoint).await };
                let load = refresh(
                    search,
                    read_persisted_token,
                    move |visible| show_sidebar.set(visible),
                    fetch,
                    move |action| dispatcher.dispatch(action),
                );

                spawn_local(async move {
                    match load.await {
                        Ok(count) => log!(format!("Loaded {count} articles")),
                        Err(e) => error!(format!("Error fetching articles: {e}")),
                    }
                });
            }
            || ()
        });
    }

    html! {
      <NewsView
        title={props.config.title.clone()}
        show_chessbase={props.config.show_chessbase}
        show_sidebar={*show_sidebar}
        loading={feed.loading}
        articles={feed.articles.clone()}
      />
    }
}
