//! Surveillance dashboard.
use crate::components::{NoAccess, ResourceCard};
use crate::hooks::{use_app_state, use_app_state_store, use_visible_resources};
use carewatch_core::constants::DEFAULT_FEEDS_PER_PAGE;
use carewatch_core::resource::{paginate, MonitoredResource, ResourceCatalog, ResourceStatus};
use carewatch_core::state::{ApplicationStatePatch, ConditionFilter, FiltersPatch, ViewMode};
use carewatch_core::types::ResourceId;
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub catalog: Rc<ResourceCatalog>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let store = use_app_state_store();
    let state = use_app_state();
    let resources = use_visible_resources(props.catalog.clone());
    let page_index = use_state(|| 0_usize);

    if resources.is_empty() {
        return html! { <NoAccess /> };
    }

    let condition = state.filters.selected_condition;
    let shown = resources
        .iter()
        .filter(|resource| condition.matches(resource.status()))
        .cloned()
        .collect::<Vec<MonitoredResource>>();

    // role and filter changes can shrink the listing
    let last_page = shown
        .len()
        .div_ceil(DEFAULT_FEEDS_PER_PAGE)
        .saturating_sub(1);

    let page = paginate(&shown, (*page_index).min(last_page), DEFAULT_FEEDS_PER_PAGE);

    let onopen = {
        let store = store.clone();
        Callback::from(move |id: ResourceId| {
            store.set_last_viewed_room(String::from(id));
        })
    };

    let toggle_theme = {
        let store = store.clone();
        let theme = state.theme;
        Callback::from(move |_: MouseEvent| {
            store.update_state(ApplicationStatePatch::new().theme(theme.toggled()));
        })
    };

    let select_condition = {
        let store = store.clone();
        let page_index = page_index.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            match ConditionFilter::from_tag(&value) {
                Some(condition) => {
                    page_index.set(0);
                    store.update_filters(FiltersPatch::new().selected_condition(condition));
                }
                None => tracing::warn!(?value, "unknown condition filter"),
            }
        })
    };

    let clear_filters = {
        let store = store.clone();
        let page_index = page_index.clone();
        Callback::from(move |_: MouseEvent| {
            page_index.set(0);
            store.update_filters(FiltersPatch::clear());
        })
    };

    let previous_page = {
        let page_index = page_index.clone();
        let current = page.index;
        Callback::from(move |_: MouseEvent| page_index.set(current.saturating_sub(1)))
    };

    let next_page = {
        let page_index = page_index.clone();
        let current = page.index;
        Callback::from(move |_: MouseEvent| page_index.set(current + 1))
    };

    let layout = match state.user_preferences.default_view {
        ViewMode::Grid => "feeds-grid",
        ViewMode::List => "feeds-list",
    };

    let zoom = format!("transform: scale({});", state.user_preferences.zoom_level);

    html! {
        <div class={"dashboard"}>
            <div class={"dashboard-header"}>
                <h2>{ "Surveillance Dashboard" }</h2>
                <button onclick={toggle_theme}>{ "Toggle theme" }</button>
                <ul class={"status-key"}>
                    { for ResourceStatus::BY_PRIORITY.iter().map(|status| html! {
                        <li>{ status.label() }</li>
                    }) }
                </ul>
            </div>
            <div class={"filters"}>
                <select onchange={select_condition}>
                    { for ConditionFilter::ALL.iter().map(|option| html! {
                        <option value={option.as_str()} selected={*option == condition}>
                            { option.label() }
                        </option>
                    }) }
                </select>
                <button onclick={clear_filters} disabled={state.filters.is_default()}>
                    { "Clear filters" }
                </button>
            </div>
            if shown.is_empty() {
                <p class={"no-match"}>{ "No rooms match the selected filters." }</p>
            } else {
                <div class={layout} style={zoom}>
                    { for page.items.iter().map(|resource| html! {
                        <ResourceCard
                            key={resource}
                            resource={resource.clone()}
                            onopen={onopen.clone()} />
                    }) }
                </div>
                <div class={"pagination"}>
                    <button onclick={previous_page} disabled={!page.has_previous()}>{ "Previous" }</button>
                    <span>{ format!("{} / {}", page.index + 1, page.total_pages) }</span>
                    <button onclick={next_page} disabled={!page.has_next()}>{ "Next" }</button>
                </div>
            }
            if let Some(room) = state.last_viewed_room.as_ref() {
                <p class={"last-viewed"}>{ format!("Last viewed: {room}") }</p>
            }
        </div>
    }
}
