use leptos::html::Div;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use wrapped_stats::{derive_stats, most_active_label, GitHubData};

use crate::api::fetch_data;
use crate::graph::{ContributionGraph, Legend};
use crate::share::{self, ShareCard};

#[derive(Debug, Clone)]
enum LoadState {
    Loading,
    Loaded(GitHubData),
    Failed(String),
}

#[component]
pub fn Results() -> impl IntoView {
    let query = use_query_map();
    let username = Memo::new(move |_| query.read().get("username"));
    let (state, set_state) = signal(LoadState::Loading);

    let redirect = use_navigate();
    Effect::new(move |_| {
        let Some(name) = username.get() else {
            redirect("/", Default::default());
            return;
        };

        set_state.set(LoadState::Loading);
        spawn_local(async move {
            let result = fetch_data(&name).await;

            // The page may have moved on to another user, or been left
            if !still_showing(username, &name) {
                return;
            }

            let _ = set_state.try_set(match result {
                Ok(data) => LoadState::Loaded(data),
                Err(message) => LoadState::Failed(message),
            });
        });
    });

    move || match state.get() {
        LoadState::Loading => view! {
            <div class="container">
                <div class="terminal">
                    <p class="loading-text">
                        {format!("loading data for {}...", username.get().unwrap_or_default())}
                    </p>
                </div>
            </div>
        }
        .into_any(),
        LoadState::Failed(message) => view! {
            <div class="container">
                <div class="terminal">
                    <p class="error-text">{format!("error: {}", message)}</p>
                    <a class="submit-btn" href="/">
                        "back"
                    </a>
                </div>
            </div>
        }
        .into_any(),
        LoadState::Loaded(data) => view! { <Wrapped data=data /> }.into_any(),
    }
}

/// Whether a response for `requested` still belongs on the page. A disposed
/// query (the user navigated away) never matches.
fn still_showing(username: Memo<Option<String>>, requested: &str) -> bool {
    is_current(username.try_get_untracked().flatten().as_deref(), requested)
}

fn is_current(current: Option<&str>, requested: &str) -> bool {
    current == Some(requested)
}

/// The rendered calendar, stats panel and share flow for one user.
#[component]
fn Wrapped(data: GitHubData) -> impl IntoView {
    let stats = derive_stats(&data.contributions);
    let card_ref = NodeRef::<Div>::new();
    let (preview, set_preview) = signal(None::<String>);
    let filename = share::share_filename(&data.username);

    let on_share = move |_| {
        let Some(card) = card_ref.get() else {
            return;
        };
        spawn_local(async move {
            match share::capture_png(&card).await {
                Ok(url) => set_preview.set(Some(url)),
                Err(err) => error!("failed to capture share image: {:?}", err),
            }
        });
    };

    let most_active = most_active_label(&stats.most_active_day);
    let longest_streak = stats.longest_streak;

    view! {
        <div class="container">
            <div class="results-terminal">
                <div class="results-header">
                    <h1 class="results-title">{format!("{}'s github wrapped", data.username)}</h1>
                    <p class="total-contributions">
                        {format!("{} contributions in the last year", data.total)}
                    </p>
                </div>

                <ContributionGraph contributions=data.contributions.clone() />
                <Legend />

                <div class="stats">
                    <div class="stat">
                        <span class="stat-label">"most active day"</span>
                        <span class="stat-value">
                            {most_active}
                        </span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">"longest streak"</span>
                        <span class="stat-value">{format!("{} days", longest_streak)}</span>
                    </div>
                </div>

                <div class="actions">
                    <button class="submit-btn" on:click=on_share>
                        "share"
                    </button>
                    <a class="submit-btn back-btn" href="/">
                        "back to home"
                    </a>
                </div>
            </div>

            <ShareCard data=data stats=stats card_ref=card_ref />

            {move || {
                preview
                    .get()
                    .map(|url| {
                        let filename = filename.clone();
                        let download_url = url.clone();
                        view! {
                            <div class="preview-overlay" on:click=move |_| set_preview.set(None)>
                                <div class="preview-modal" on:click=|ev| ev.stop_propagation()>
                                    <img class="preview-image" src=url alt="github wrapped share card" />
                                    <div class="preview-actions">
                                        <button
                                            class="submit-btn"
                                            on:click=move |_| {
                                                if let Err(err) = share::download(&download_url, &filename) {
                                                    error!("failed to download share image: {:?}", err);
                                                }
                                            }
                                        >
                                            "download"
                                        </button>
                                        <button class="submit-btn" on:click=move |_| set_preview.set(None)>
                                            "close"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
