use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
      <div class="spinner-wrap">
        <div class="spinner" role="status" aria-label="Loading articles"></div>
      </div>
    }
}
