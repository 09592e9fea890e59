use crate::app_lib::build_info;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer
            class="pointer-events-none absolute bottom-4 w-full text-center text-xs text-gray-800"
            data-build=build_info::short_commit_hash()
        >
            <p>{format!("\u{a9} {year} MNKY")}</p>
        </footer>
    }
}
