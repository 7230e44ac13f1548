//! Dashboard page, the target of the primary call to action

use leptos::prelude::*;

use crate::models::{SessionStatus, features};
use crate::state::use_session;

/// Greeting line for the current session
pub fn greeting_for(status: &SessionStatus) -> String {
    if status.is_loading {
        return "Chargement…".to_string();
    }
    format!("Bonjour, {}", status.display_name().unwrap_or("invité"))
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let status = use_session().status();
    let greeting = move || status.with(greeting_for);

    view! {
        <div class="dashboard-page container">
            <h1>"Tableau de bord"</h1>
            <p class="dashboard-greeting">{greeting}</p>
            <ul class="dashboard-links">
                {features()
                    .iter()
                    .map(|entry| {
                        view! {
                            <li>
                                <a href=entry.path>{entry.name}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
