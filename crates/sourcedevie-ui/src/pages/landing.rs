//! Landing page: hero, feature grid and statistics behind the session gate

use leptos::prelude::*;

use crate::components::{FeatureGrid, Hero, LoadingPlaceholder, StatsBlock};
use crate::models::{LandingContent, LandingModel};
use crate::state::use_session;

/// Landing page component
///
/// Renders only the placeholder while the session is loading. The model is
/// memoized, so session changes that keep the same gate state do not
/// re-render the page.
#[component]
pub fn Landing() -> impl IntoView {
    let status = use_session().status();
    let model = Memo::new(move |_| status.with(LandingModel::for_status));

    move || match model.get() {
        LandingModel::Loading => view! { <LoadingPlaceholder /> }.into_any(),
        LandingModel::Ready(content) => view! { <LandingSections content=content /> }.into_any(),
    }
}

#[component]
fn LandingSections(content: LandingContent) -> impl IntoView {
    view! {
        <div class="landing-page">
            <Hero hero=content.hero />
            <FeatureGrid features=content.features />
            <StatsBlock stats=content.stats />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_component_exists() {
        let _component = Landing;
        let _sections = LandingSections;
    }
}
