//! Export of the share card as a PNG.
//!
//! Rasterization is delegated to the `html2canvas` script loaded by
//! `index.html`; this module only hands it the card element and turns the
//! resulting canvas into a download.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement, HtmlElement};
use wrapped_stats::{most_active_label, DerivedStats, GitHubData};

use crate::graph::ContributionGraph;

const CARD_BACKGROUND: &str = "#0d1117";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = html2canvas, catch)]
    fn html2canvas(element: &HtmlElement, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Render `element` to a PNG data URL.
pub async fn capture_png(element: &HtmlElement) -> Result<String, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("backgroundColor"),
        &JsValue::from_str(CARD_BACKGROUND),
    )?;
    js_sys::Reflect::set(&options, &JsValue::from_str("scale"), &JsValue::from_f64(2.0))?;

    let canvas: HtmlCanvasElement = JsFuture::from(html2canvas(element, &options)?)
        .await?
        .dyn_into()?;
    canvas.to_data_url_with_type("image/png")
}

/// Save a data URL through a temporary `<a download>` element.
pub fn download(data_url: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(data_url);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}

pub fn share_filename(username: &str) -> String {
    format!("{}-github-wrapped.png", username)
}

/// Off-screen layout that gets captured: a dense grid and the two stats.
#[component]
pub fn ShareCard(data: GitHubData, stats: DerivedStats, card_ref: NodeRef<Div>) -> impl IntoView {
    let most_active = most_active_label(&stats.most_active_day);

    view! {
        <div class="share-stage" aria-hidden="true">
            <div class="share-card" node_ref=card_ref>
                <p class="share-title">{format!("{}'s github wrapped", data.username)}</p>
                <p class="share-total">
                    {format!("{} contributions this year", data.total)}
                </p>
                <ContributionGraph
                    contributions=data.contributions
                    grid_class="share-grid"
                    show_months=false
                />
                <div class="share-stats">
                    <div class="stat">
                        <span class="stat-label">"most active day"</span>
                        <span class="stat-value">{most_active}</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">"longest streak"</span>
                        <span class="stat-value">
                            {format!("{} days", stats.longest_streak)}
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}
