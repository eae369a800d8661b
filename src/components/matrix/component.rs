use leptos::prelude::*;

/// Which matrix a table shows; fixes column labels and cell tooltips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixKind {
	Adjacency,
	Incidence,
}

impl MatrixKind {
	/// Column header prefix: vertices for adjacency, edges for incidence.
	fn column_prefix(self) -> &'static str {
		match self {
			MatrixKind::Adjacency => "V",
			MatrixKind::Incidence => "E",
		}
	}

	fn cell_title(self, row: usize, column: usize, value: i8) -> String {
		match (self, value) {
			(MatrixKind::Adjacency, 1) => format!("Arc: V{} to V{}", row + 1, column + 1),
			(MatrixKind::Incidence, -1) => format!("Tail of e{}", column + 1),
			(MatrixKind::Incidence, 1) => format!("Head of e{}", column + 1),
			_ => String::new(),
		}
	}
}

fn cell_class(value: i8) -> &'static str {
	match value {
		1 => "tag tag-head",
		-1 => "tag tag-tail",
		_ => "tag tag-zero",
	}
}

/// One derived matrix as a labeled table. Rows are always vertices; columns
/// are vertices or edges depending on `kind`.
#[component]
pub fn MatrixTable(#[prop(into)] matrix: Signal<Vec<Vec<i8>>>, kind: MatrixKind) -> impl IntoView {
	view! {
		<table class="matrix-table">
			<thead>
				<tr>
					<th></th>
					{move || {
						let columns = matrix.get().first().map(Vec::len).unwrap_or(0);
						(0..columns)
							.map(|column| {
								view! { <th>{format!("{}{}", kind.column_prefix(), column + 1)}</th> }
							})
							.collect_view()
					}}
				</tr>
			</thead>
			<tbody>
				{move || {
					matrix.get()
						.into_iter()
						.enumerate()
						.map(|(row, cells)| {
							view! {
								<tr>
									<th>{format!("V{}", row + 1)}</th>
									{cells
										.into_iter()
										.enumerate()
										.map(|(column, value)| {
											view! {
												<td>
													<span
														class=cell_class(value)
														title=kind.cell_title(row, column, value)
													>
														{value.to_string()}
													</span>
												</td>
											}
										})
										.collect_view()}
								</tr>
							}
						})
						.collect_view()
				}}
			</tbody>
		</table>
	}
}
