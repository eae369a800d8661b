use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{FileReader, HtmlInputElement};

use super::field::FieldRow;
use super::io;
use super::state::IncList;
use super::types::Side;

#[derive(Clone)]
struct Status {
	ok: bool,
	text: &'static str,
}

impl Status {
	fn ok(text: &'static str) -> Self {
		Self { ok: true, text }
	}

	fn err(text: &'static str) -> Self {
		Self { ok: false, text }
	}
}

/// Download `content` as `filename` through a synthetic anchor click.
fn download_json(content: &str, filename: &str) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("no document"))?;
	let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

	let parts = js_sys::Array::of1(&JsValue::from_str(content));
	let options = web_sys::BlobPropertyBag::new();
	options.set_type("application/json");
	let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let url = web_sys::Url::create_object_url_with_blob(&blob)?;

	let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&url);
	anchor.set_download(filename);
	body.append_child(&anchor)?;
	anchor.click();
	body.remove_child(&anchor)?;
	web_sys::Url::revoke_object_url(&url)?;
	Ok(())
}

/// Today's date as `YYYY-MM-DD`, from the browser clock.
fn iso_date() -> String {
	let iso = String::from(js_sys::Date::new_0().to_iso_string());
	iso.get(..10).unwrap_or(&iso).to_string()
}

/// Incidence-list editor card: one row per field, add-field, clear and JSON
/// save/load controls, plus a live preview of the normalized edge list.
#[component]
pub fn IncListInput(
	/// The mapping being edited, owned by the page.
	fields: RwSignal<IncList>,
	/// Whether the stored lists are read as left or right incidents.
	#[prop(into)] side: Signal<Side>,
) -> impl IntoView {
	let (status, set_status) = signal(None::<Status>);

	let on_clear = move |_| {
		let prompt = format!("Clear the set of {} incidents?", side.get_untracked().label());
		let confirmed = web_sys::window()
			.and_then(|w| w.confirm_with_message(&prompt).ok())
			.unwrap_or(false);
		if confirmed {
			fields.update(|list| list.clear());
			set_status.set(None);
		}
	};

	let on_save = move |_| match io::encode(&fields.get_untracked()) {
		Ok(json) => match download_json(&json, &io::export_filename(&iso_date())) {
			Ok(()) => {
				info!("Incidence list exported");
				set_status.set(Some(Status::ok("Incidence list saved to file")));
			}
			Err(err) => {
				error!("Export failed: {err:?}");
				set_status.set(Some(Status::err("Could not save the file")));
			}
		},
		Err(err) => {
			error!("Export failed: {err}");
			set_status.set(Some(Status::err("Could not save the file")));
		}
	};

	let on_file_selected = move |ev: web_sys::Event| {
		let input = event_target::<HtmlInputElement>(&ev);
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			return;
		};
		input.set_value("");

		let Ok(reader) = FileReader::new() else {
			set_status.set(Some(Status::err("Could not read the file")));
			return;
		};
		let loaded = reader.clone();
		let onload = Closure::<dyn FnMut()>::new(move || {
			let content = loaded
				.result()
				.ok()
				.and_then(|value| value.as_string())
				.unwrap_or_default();
			match io::decode(&content) {
				Ok(list) => {
					fields.set(list);
					set_status.set(Some(Status::ok("Incidence list loaded from file")));
				}
				// keep the current mapping on any import failure
				Err(err) => {
					error!("Import failed: {err}");
					set_status
						.set(Some(Status::err("The file does not contain a valid incidence list")));
				}
			}
		});
		reader.set_onload(Some(onload.as_ref().unchecked_ref()));
		if reader.read_as_text(&file).is_err() {
			set_status.set(Some(Status::err("Could not read the file")));
		}
		onload.forget();
	};

	// pretty-printed edge objects, outer array brackets cut off
	let preview = move || {
		let edges = fields.get().to_graph(side.get()).edges;
		let json = serde_json::to_string_pretty(&edges).unwrap_or_default();
		json.strip_prefix('[')
			.and_then(|rest| rest.strip_suffix(']'))
			.unwrap_or("")
			.trim_matches('\n')
			.to_string()
	};

	view! {
		<div class="card">
			<div class="card-header">
				<h3>{move || format!("Enter the set of {} incidents", side.get().label())}</h3>
				<div class="card-actions">
					<button class="btn btn-danger" on:click=on_clear>
						"Clear"
					</button>
					<button class="btn" on:click=on_save>
						"Save"
					</button>
					<label class="btn">
						"Load"
						<input
							type="file"
							accept=".json"
							class="file-input"
							on:change=on_file_selected
						/>
					</label>
				</div>
			</div>
			{move || {
				status.get()
					.map(|s| {
						view! {
							<p class={if s.ok { "status status-ok" } else { "status status-err" }}>
								{s.text}
							</p>
						}
					})
			}}
			<div class="editor-split">
				<div class="editor-fields">
					{move || {
						let list = fields.get();
						let keys = list.keys();
						list.fields()
							.iter()
							.map(|(field, values)| {
								view! {
									<FieldRow
										field=*field
										values=values.clone()
										keys=keys.clone()
										fields=fields
									/>
								}
							})
							.collect_view()
					}}
					<button
						class="btn btn-add btn-wide"
						on:click=move |_| fields.update(|list| list.add_field())
					>
						"Add field"
					</button>
				</div>
				<pre class="edge-preview">{preview}</pre>
			</div>
		</div>
	}
}
