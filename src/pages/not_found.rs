use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="page-card">
			<h1>"404"</h1>
			<p class="subtitle">"This page does not exist."</p>
			<A href="/">"Back to the homepage"</A>
		</section>
	}
}
