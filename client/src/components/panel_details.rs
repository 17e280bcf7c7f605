//! Metadata column of the panel modal.

#[cfg(test)]
#[path = "panel_details_test.rs"]
mod panel_details_test;

use gallery::viewer::ModalView;
use leptos::prelude::*;

/// CSS class for the details section; `show` expands it on mobile.
#[must_use]
pub fn details_class(expanded: bool) -> &'static str {
    if expanded { "modal-details-section show" } else { "modal-details-section" }
}

/// Read one text field of the projected view, or `""` while closed.
fn text(view: Memo<Option<ModalView>>, get: fn(&ModalView) -> &'static str) -> impl Fn() -> &'static str + Copy {
    move || view.with(|v| v.as_ref().map_or("", get))
}

/// Title, company, period, description, achievements, and skill tags of
/// the projected panel. Lists are rebuilt from the projection on every
/// change, so content is replaced rather than appended.
#[component]
pub fn PanelDetails(view: Memo<Option<ModalView>>) -> impl IntoView {
    let class = move || details_class(view.with(|v| v.as_ref().is_some_and(|v| v.details.expanded)));

    let achievements = move || {
        view.with(|v| v.as_ref().map(|v| v.achievements.clone()).unwrap_or_default())
            .into_iter()
            .map(|item| view! { <li>{item}</li> })
            .collect_view()
    };
    let skills = move || {
        view.with(|v| v.as_ref().map(|v| v.skills.clone()).unwrap_or_default())
            .into_iter()
            .map(|skill| view! { <span class="skill-tag-modal">{skill}</span> })
            .collect_view()
    };

    view! {
        <div class=class>
            <h2 id="panelTitle">{text(view, |v| v.title)}</h2>
            <div class="panel-meta">
                <span id="companyName">{text(view, |v| v.company)}</span>
                <span id="timePeriod">{text(view, |v| v.period)}</span>
            </div>
            <p id="panelDescription">{text(view, |v| v.description)}</p>
            <h3>"Key Achievements"</h3>
            <ul id="achievementsList">{achievements}</ul>
            <h3>"Skills"</h3>
            <div id="skillsTags" class="skills-tags">{skills}</div>
        </div>
    }
}
