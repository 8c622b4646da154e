//! Camera feed card.
use carewatch_core::resource::{MonitoredResource, ResourceStatus};
use carewatch_core::types::ResourceId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResourceCardProps {
    pub resource: MonitoredResource,

    /// Called when the card is opened.
    #[prop_or_default]
    pub onopen: Callback<ResourceId>,
}

#[function_component(ResourceCard)]
pub fn resource_card(props: &ResourceCardProps) -> Html {
    let resource = &props.resource;
    let onclick = {
        let onopen = props.onopen.clone();
        let id = resource.id().clone();
        Callback::from(move |_: MouseEvent| onopen.emit(id.clone()))
    };

    html! {
        <div class={"resource-card"} {onclick} title={resource.status().label()}>
            <div class={"feed"}>
                if let Some(source) = resource.live_feed() {
                    <video src={source.to_string()} autoplay=true muted=true />
                } else {
                    <div class={"feed-placeholder"}></div>
                }
                <span class={classes!("status", status_class(resource.status()))}></span>
            </div>
            <div class={"name"}>{ resource.display_name() }</div>
        </div>
    }
}

fn status_class(status: ResourceStatus) -> &'static str {
    match status {
        ResourceStatus::Stable => "status-stable",
        ResourceStatus::Check => "status-check",
        ResourceStatus::Urgent => "status-urgent",
        ResourceStatus::Alerted => "status-alerted",
    }
}
