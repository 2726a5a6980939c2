use yew::prelude::*;

// Placeholder rail; the signed-in app owns the real navigation.
const NAV: &[(&str, &str)] = &[
    ("Dashboard", "/dashboard"),
    ("Play", "/play"),
    ("Puzzles", "/puzzles"),
    ("Chess News", "/chess-news"),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
      <aside class="sidebar">
        <nav>
          { for NAV.iter().map(|(label, href)| html! {
              <a class="nav-item" href={*href}>{ *label }</a>
          }) }
        </nav>
      </aside>
    }
}
