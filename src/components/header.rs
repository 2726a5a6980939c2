use yew::prelude::*;

const CHESSBASE_URL: &str = "https://en.chessbase.com/";

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub show_chessbase: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
      <header class="page-header">
        <h1>{ props.title.clone() }</h1>
        if props.show_chessbase {
          <a class="source-link" href={CHESSBASE_URL} target="_blank" rel="noopener noreferrer">
            { "via ChessBase" }
          </a>
        }
      </header>
    }
}
