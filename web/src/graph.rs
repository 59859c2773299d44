use leptos::prelude::*;
use wrapped_stats::{cell_title, level_class, month_labels, week_columns, ContributionDay, LEVELS};

/// Heat grid: one column per week, one cell per day, colored by the
/// provider's level.
#[component]
pub fn ContributionGraph(
    contributions: Vec<ContributionDay>,
    #[prop(default = "contribution-graph")] grid_class: &'static str,
    #[prop(default = true)] show_months: bool,
) -> impl IntoView {
    let columns = week_columns(&contributions);

    let months = if show_months {
        month_labels(&columns)
            .into_iter()
            .map(|(index, label)| {
                view! {
                    <span class="month-label" style=format!("grid-column: {}", index + 1)>
                        {label}
                    </span>
                }
            })
            .collect::<Vec<_>>()
    } else {
        Vec::new()
    };

    let month_row_style = format!("grid-template-columns: repeat({}, 1fr)", columns.len());

    let weeks = columns
        .into_iter()
        .map(|column| {
            view! {
                <div class="week">
                    {column
                        .into_iter()
                        .map(|cell| match cell {
                            Some(day) => {
                                view! {
                                    <div
                                        class=format!("contribution-box {}", level_class(day.level))
                                        title=cell_title(day)
                                    ></div>
                                }
                                    .into_any()
                            }
                            None => view! { <div class="contribution-box empty"></div> }.into_any(),
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=grid_class>
            <div class="month-labels" style=month_row_style>
                {months}
            </div>
            <div class="weeks">{weeks}</div>
        </div>
    }
}

/// Five boxes from least to most active.
#[component]
pub fn Legend() -> impl IntoView {
    view! {
        <div class="legend">
            <span class="legend-label">"less"</span>
            {LEVELS
                .iter()
                .map(|&level| {
                    view! { <div class=format!("contribution-box {}", level_class(level))></div> }
                })
                .collect::<Vec<_>>()}
            <span class="legend-label">"more"</span>
        </div>
    }
}
