use std::rc::Rc;

use yew::prelude::*;

use super::grid::ArticleGrid;
use super::header::Header;
use super::sidebar::Sidebar;
use super::spinner::Spinner;
use crate::article::Article;

#[derive(Properties, PartialEq)]
pub struct NewsViewProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub show_chessbase: bool,
    #[prop_or_default]
    pub show_sidebar: bool,
    pub loading: bool,
    pub articles: Rc<Vec<Article>>,
}

/// Stateless page layout; `ChessNews` owns the state and feeds it in.
#[function_component(NewsView)]
pub fn news_view(props: &NewsViewProps) -> Html {
    let content = if props.loading {
        html! { <Spinner /> }
    } else {
        html! { <ArticleGrid articles={Rc::clone(&props.articles)} /> }
    };

    html! {
      <div class="page">
        if props.show_sidebar {
          <Sidebar />
        }
        <div class={classes!("column", (!props.show_sidebar).then_some("full-width"))}>
          <div class="backdrop">
            <div class="backdrop-gradient"></div>
            <div class="orb orb-green"></div>
            <div class="orb orb-blue"></div>
          </div>

          <Header title={props.title.clone()} show_chessbase={props.show_chessbase} />

          <main class="content">
            { content }
          </main>
        </div>
      </div>
    }
}
