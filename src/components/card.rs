use yew::prelude::*;

use crate::article::Article;

/// Per-card entrance delay.
const STAGGER_MS: usize = 100;

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub article: Article,
    pub index: usize,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let delay = format!("animation-delay: {}ms;", props.index * STAGGER_MS);

    html! {
      <article class="news-card" style={delay}>
        <div class="thumb">
          <img src={article.image.clone()} alt={article.title.clone()} />
          <div class="thumb-fade"></div>
        </div>
        <div class="body">
          <div>
            <h2 class="title">{ article.title.clone() }</h2>
            <p class="summary">{ article.summary.clone() }</p>
          </div>
          <a class="read-more" href={article.url.clone()} target="_blank" rel="noopener noreferrer">
            { "Read Full Article" }
            <span class="ext-icon" aria-hidden="true">{ "↗" }</span>
          </a>
        </div>
      </article>
    }
}
