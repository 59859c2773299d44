use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::time::Duration;

const TITLE: &str = "github wrapped";
const TYPING_INTERVAL: Duration = Duration::from_millis(100);

#[component]
pub fn Home() -> impl IntoView {
    let (displayed, set_displayed) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let navigate = use_navigate();

    // Type the title one character per tick, then stop the interval
    let interval = StoredValue::new(None::<IntervalHandle>);
    let handle = set_interval_with_handle(
        move || {
            let shown = displayed.with_untracked(|text| text.len());
            if shown < TITLE.len() {
                set_displayed.set(TITLE[..=shown].to_string());
            } else if let Some(handle) = interval.get_value() {
                handle.clear();
            }
        },
        TYPING_INTERVAL,
    )
    .ok();
    interval.set_value(handle);
    on_cleanup(move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = username.get_untracked();
        if !name.trim().is_empty() {
            navigate(
                &format!("/results?username={}", urlencoding::encode(&name)),
                Default::default(),
            );
        }
    };

    view! {
        <div class="container">
            <div class="terminal">
                <div class="title-wrapper">
                    <h1 class="title">
                        {move || displayed.get()}
                        <span class="cursor">"_"</span>
                    </h1>
                </div>

                <form class="input-section" on:submit=on_submit>
                    <div class="input-wrapper">
                        <span class="prompt">">"</span>
                        <input
                            type="text"
                            class="github-input"
                            placeholder="enter github username"
                            autofocus=true
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="submit-btn">
                        "execute"
                    </button>
                </form>

                <div class="coffee-section">
                    <p>
                        "liked it? i would appreciate if you "
                        <a
                            href="https://buymeacoffee.com"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="coffee-link"
                        >
                            "buy me a coffee"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
