use leptos::prelude::*;

use super::state::IncList;
use super::types::VertexId;

/// One editable field of the incidence list, rendered as
/// `<id>: { <entries> }` with a selector per entry, an add-entry button and
/// a remove-field button that stays disabled for the last remaining field.
#[component]
pub fn FieldRow(
	field: VertexId,
	values: Vec<VertexId>,
	keys: Vec<VertexId>,
	fields: RwSignal<IncList>,
) -> impl IntoView {
	let last_field = keys.len() <= 1;

	let on_remove_field = move |_| {
		let confirmed = web_sys::window()
			.and_then(|w| w.confirm_with_message(&format!("Remove vertex {field}?")).ok())
			.unwrap_or(false);
		if confirmed {
			fields.update(|list| list.remove_field(field));
		}
	};

	let entries = values
		.into_iter()
		.enumerate()
		.map(|(index, value)| {
			let options = keys.clone();
			view! {
				<span class="entry">
					<select on:change=move |ev| {
						if let Ok(value) = event_target_value(&ev).parse::<VertexId>() {
							fields.update(|list| list.change_entry(field, index, value));
						}
					}>
						{options
							.into_iter()
							.map(|key| {
								view! {
									<option value=key.to_string() selected={key == value}>
										{key.to_string()}
									</option>
								}
							})
							.collect_view()}
					</select>
					<button
						class="btn btn-danger btn-small"
						on:click=move |_| fields.update(|list| list.remove_entry(field, index))
					>
						"-"
					</button>
				</span>
			}
		})
		.collect_view();

	view! {
		<div class="field-row">
			<span class="field-label">{format!("{field}: {{")}</span>
			{entries}
			<button
				class="btn btn-add btn-small"
				on:click=move |_| fields.update(|list| list.add_entry(field))
			>
				"+"
			</button>
			<span class="field-label">"}"</span>
			<button class="btn btn-danger btn-small" disabled=last_field on:click=on_remove_field>
				"x"
			</button>
		</div>
	}
}
