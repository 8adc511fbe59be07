//! WebAssembly bindings for the docsift search widget.
//!
//! One class, `DocsiftWidget`, wraps [`SearchWidget`] for a browser host:
//!
//! ```js
//! const widget = new DocsiftWidget(blob, (path) => router.push(path), { debounceMs: 300 });
//! input.oninput = (e) => { widget.setQuery(e.target.value); schedule(widget.deadline()); };
//! // in the scheduled callback:
//! if (widget.poll()) render(widget.view());
//! window.onkeydown = (e) => { if (widget.handleKey(e.key)) render(widget.view()); };
//! ```
//!
//! Time comes from `performance.now()`, which is monotonic; `Date.now()` is
//! only a fallback for hosts without it. The widget never sets timers itself;
//! `deadline()` says when the host should call `poll()` next.

use std::sync::Arc;
use std::time::Duration;

use js_sys::{Date, Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::history::{History, HistoryStore, SharedHistory};
use crate::render::to_html;
use crate::types::MatchItem;
use crate::widget::{Key, SearchWidget, WidgetView};

/// Item as the popup template consumes it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsItem {
    #[serde(rename = "type")]
    kind: &'static str,
    path: String,
    header: Option<String>,
    /// Excerpt with `<strong>` highlights, escaped
    html: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsGroup {
    title: String,
    score: u32,
    contents: Vec<JsItem>,
}

/// Everything needed to draw the popup body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsView {
    /// "history" | "emptyHistory" | "results" | "emptyResults"
    state: &'static str,
    label: Option<String>,
    history: Vec<JsItem>,
    groups: Vec<JsGroup>,
    active_group: usize,
    active_item: usize,
    empty: bool,
}

fn now() -> Duration {
    clock(performance_now().unwrap_or_else(Date::now))
}

fn performance_now() -> Option<f64> {
    let performance = Reflect::get(&js_sys::global(), &JsValue::from_str("performance")).ok()?;
    let now: Function = Reflect::get(&performance, &JsValue::from_str("now"))
        .ok()?
        .dyn_into()
        .ok()?;
    now.call0(&performance).ok()?.as_f64()
}

/// Milliseconds from a JS clock as a `Duration`. Garbage reads as zero.
fn clock(millis: f64) -> Duration {
    if millis.is_finite() && millis > 0.0 {
        Duration::from_secs_f64(millis / 1000.0)
    } else {
        Duration::ZERO
    }
}

#[wasm_bindgen]
pub struct DocsiftWidget {
    widget: SearchWidget<SharedHistory>,
    history: SharedHistory,
    navigate: Function,
}

#[wasm_bindgen]
impl DocsiftWidget {
    /// Decode `blob` and build a widget. `navigate` is called with the target
    /// path whenever a result is confirmed.
    #[wasm_bindgen(constructor)]
    pub fn new(blob: &str, navigate: Function, options: Option<JsValue>) -> Result<DocsiftWidget, JsValue> {
        let config: SearchConfig = match options {
            Some(options) if !options.is_undefined() && !options.is_null() => {
                from_value::<SearchConfig>(options)
                    .map_err(|e| e.to_string())?
                    .layered()
            }
            _ => SearchConfig::default(),
        };
        let catalog = Catalog::from_blob(blob).map_err(|e| e.to_string())?;
        let history = SharedHistory::new();
        Ok(DocsiftWidget {
            widget: SearchWidget::new(Arc::new(catalog), history.clone(), config),
            history,
            navigate,
        })
    }

    #[wasm_bindgen(js_name = "setQuery")]
    pub fn set_query(&mut self, query: &str) {
        self.widget.set_query(query, now());
    }

    #[wasm_bindgen(js_name = "setLocale")]
    pub fn set_locale(&mut self, locale: &str) {
        self.widget.set_locale(locale, now());
    }

    #[wasm_bindgen(js_name = "setRoute")]
    pub fn set_route(&mut self, path: &str) {
        self.widget.set_route(path, now());
    }

    /// True when a new result set was published.
    #[wasm_bindgen]
    pub fn poll(&mut self) -> bool {
        self.widget.poll(now())
    }

    /// Milliseconds until the next `poll` is due, if anything is pending.
    #[wasm_bindgen]
    pub fn deadline(&self) -> Option<f64> {
        let deadline = self.widget.deadline()?;
        Some(deadline.saturating_sub(now()).as_secs_f64() * 1000.0)
    }

    /// Feed a `KeyboardEvent.key`. True when the key did something.
    #[wasm_bindgen(js_name = "handleKey")]
    pub fn handle_key(&mut self, key: &str) -> bool {
        let Some(key) = Key::from_dom(key) else {
            return false;
        };
        let mut sink = self.sink();
        self.widget.handle_key(key, &mut sink)
    }

    #[wasm_bindgen]
    pub fn select(&mut self, group: usize, item: usize) -> bool {
        let mut sink = self.sink();
        self.widget.select(group, item, &mut sink)
    }

    #[wasm_bindgen(js_name = "selectHistory")]
    pub fn select_history(&mut self, index: usize) -> bool {
        let mut sink = self.sink();
        self.widget.select_history(index, &mut sink)
    }

    #[wasm_bindgen(js_name = "removeHistory")]
    pub fn remove_history(&mut self, index: usize) {
        self.widget.remove_history(index);
    }

    #[wasm_bindgen]
    pub fn dismiss(&mut self) {
        self.widget.dismiss();
    }

    #[wasm_bindgen(js_name = "isEmpty")]
    pub fn is_empty(&self) -> bool {
        self.widget.is_empty()
    }

    /// The popup body; see `JsView` for the shape.
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        let (active_group, active_item) = self.widget.cursor();
        let mut view = JsView {
            state: "emptyHistory",
            label: None,
            history: Vec::new(),
            groups: Vec::new(),
            active_group,
            active_item,
            empty: self.widget.is_empty(),
        };
        match self.widget.view() {
            WidgetView::History(entries) => {
                view.state = "history";
                view.label = Some(self.widget.strings().history.clone());
                view.history = entries.iter().map(|item| self.js_item(item)).collect();
            }
            WidgetView::EmptyHistory(label) => view.label = Some(label.to_string()),
            WidgetView::Results(groups) => {
                view.state = "results";
                view.groups = groups
                    .iter()
                    .map(|group| JsGroup {
                        title: group.display_title().to_string(),
                        score: group.score(),
                        contents: group.contents.iter().map(|item| self.js_item(item)).collect(),
                    })
                    .collect();
            }
            WidgetView::EmptyResults(label) => {
                view.state = "emptyResults";
                view.label = Some(label.to_string());
            }
        }
        to_value(&view).map_err(|e| e.to_string().into())
    }

    /// UI strings for the active locale.
    #[wasm_bindgen]
    pub fn strings(&self) -> Result<JsValue, JsValue> {
        to_value(self.widget.strings()).map_err(|e| e.to_string().into())
    }

    /// History entries for the host to persist.
    #[wasm_bindgen(js_name = "historySnapshot")]
    pub fn history_snapshot(&self) -> Result<JsValue, JsValue> {
        to_value(&self.history.snapshot()).map_err(|e| e.to_string().into())
    }

    /// Replace history with a persisted snapshot.
    #[wasm_bindgen(js_name = "restoreHistory")]
    pub fn restore_history(&mut self, snapshot: JsValue) -> Result<(), JsValue> {
        let entries: Vec<MatchItem> = from_value(snapshot).map_err(|e| e.to_string())?;
        let restored = HistoryStore::restore(entries);
        // Refill in place so every clone of the shared store sees it.
        while !self.history.is_empty() {
            self.history.remove(0);
        }
        for item in restored.entries().iter().rev() {
            self.history.add(item.clone());
        }
        Ok(())
    }
}

impl DocsiftWidget {
    fn sink(&self) -> impl FnMut(&str) {
        let navigate = self.navigate.clone();
        move |path: &str| {
            if let Err(e) = navigate.call1(&JsValue::NULL, &JsValue::from_str(path)) {
                tracing::warn!(?e, "navigate callback threw");
            }
        }
    }

    fn js_item(&self, item: &MatchItem) -> JsItem {
        JsItem {
            kind: item.kind.as_str(),
            path: item.path.clone(),
            header: item.header.clone(),
            html: to_html(&self.widget.render_item(item)),
        }
    }
}
