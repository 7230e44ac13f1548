use leptos::prelude::*;

use crate::models::Stat;

#[component]
pub fn StatsBlock(stats: &'static [Stat; 3]) -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container stats-grid">
                {stats
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <span class="stat-value">{stat.value}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
