//! Empty state for viewers who can not see any resource.
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoAccessProps {
    #[prop_or(AttrValue::from("No rooms are available for your role."))]
    pub message: AttrValue,
}

#[function_component(NoAccess)]
pub fn no_access(props: &NoAccessProps) -> Html {
    html! {
        <div class={"no-access"}>
            <h2>{ "No access" }</h2>
            <p>{ props.message.clone() }</p>
        </div>
    }
}
