use leptos::prelude::*;
use leptos_router::components::A;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<section class="page-card">
			<h1>"Graph representation tools"</h1>
			<p class="subtitle">
				"Enter a graph as a left- or right-incidence list and view its adjacency and incidence matrices."
			</p>
			<A href="/converter">"Open the converter"</A>
		</section>
	}
}
