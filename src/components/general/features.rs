use crate::components::use_translator;
use leptos::prelude::*;

const FEATURES: [(&str, &str); 3] = [("⚡", "fast"), ("🔍", "smart"), ("🛡️", "reliable")];

#[component]
pub fn Features() -> impl IntoView {
    let t = use_translator();

    view! {
        <div class="features">
            {FEATURES
                .into_iter()
                .map(|(icon, feature)| {
                    let title = format!("features.{}.title", feature);
                    let description = format!("features.{}.description", feature);
                    view! {
                        <div class="feature">
                            <div class="feature-icon">{icon}</div>
                            <h3>{move || t.t(&title)}</h3>
                            <p>{move || t.t(&description)}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="credits">
            <p>{move || t.t("credits")}</p>
        </div>
    }
}
