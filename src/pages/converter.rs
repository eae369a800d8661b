use leptos::prelude::*;

use crate::components::inc_list::{IncList, IncListInput, Side};
use crate::components::matrix::{self, MatrixKind, MatrixTable};

fn tab_class(active: bool) -> &'static str {
	if active { "tab tab-active" } else { "tab" }
}

/// Converter page: the incidence-list editor on top, the derived matrices
/// below in a tab strip. Everything recomputes from the mapping on every
/// edit; the graph and both matrices are memos over the editor state.
#[component]
pub fn Converter() -> impl IntoView {
	let fields = RwSignal::new(IncList::sample());
	let (side, set_side) = signal(Side::Left);
	let (active, set_active) = signal(MatrixKind::Adjacency);

	let graph = Memo::new(move |_| fields.get().to_graph(side.get()));
	let adjacency = Memo::new(move |_| matrix::adjacency(&graph.get()));
	let incidence = Memo::new(move |_| matrix::incidence(&graph.get()));

	view! {
		<section class="page-card">
			<h2>"Incidence list to adjacency and incidence matrices"</h2>
			<div class="side-picker">
				<label>
					<input
						type="radio"
						name="side"
						prop:checked=move || side.get() == Side::Left
						on:change=move |_| set_side.set(Side::Left)
					/>
					"Left incidents"
				</label>
				<label>
					<input
						type="radio"
						name="side"
						prop:checked=move || side.get() == Side::Right
						on:change=move |_| set_side.set(Side::Right)
					/>
					"Right incidents"
				</label>
			</div>
			<IncListInput fields=fields side=side />
			<div class="card">
				<div class="tab-strip">
					<button
						class=move || tab_class(active.get() == MatrixKind::Adjacency)
						on:click=move |_| set_active.set(MatrixKind::Adjacency)
					>
						"Adjacency matrix"
					</button>
					<button
						class=move || tab_class(active.get() == MatrixKind::Incidence)
						on:click=move |_| set_active.set(MatrixKind::Incidence)
					>
						"Incidence matrix"
					</button>
				</div>
				{move || match active.get() {
					MatrixKind::Adjacency => {
						view! { <MatrixTable matrix=adjacency kind=MatrixKind::Adjacency /> }
							.into_any()
					}
					MatrixKind::Incidence => {
						view! { <MatrixTable matrix=incidence kind=MatrixKind::Incidence /> }
							.into_any()
					}
				}}
			</div>
		</section>
	}
}
