use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// `location.search`, tracked across back/forward navigation.
///
/// `None` until mounted, so effects keyed on it only fire once the real
/// query string is known.
#[hook]
pub fn use_location_search() -> Option<String> {
    let search = use_state_eq(|| None::<String>);

    {
        let search = search.clone();
        use_effect_with((), move |_| {
            search.set(Some(current_search()));

            let listener = window().map(|w| {
                let search = search.clone();
                EventListener::new(&w, "popstate", move |_| {
                    search.set(Some(current_search()));
                })
            });

            move || drop(listener)
        });
    }

    (*search).clone()
}
