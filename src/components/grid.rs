use std::rc::Rc;

use yew::prelude::*;

use super::card::ArticleCard;
use crate::article::Article;

#[derive(Properties, PartialEq)]
pub struct ArticleGridProps {
    pub articles: Rc<Vec<Article>>,
}

/// 1/2/3 columns by viewport width (see `.news-grid` in styles.css).
#[function_component(ArticleGrid)]
pub fn article_grid(props: &ArticleGridProps) -> Html {
    html! {
      <div class="news-grid">
        { for props.articles.iter().enumerate().map(|(i, article)| html! {
            <ArticleCard key={i} index={i} article={article.clone()} />
        }) }
      </div>
    }
}
