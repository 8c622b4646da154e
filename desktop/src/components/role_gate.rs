//! Role guard.
//! Renders children only once a role has been selected.
use super::{NoAccess, RoleSelect};
use crate::hooks::use_user_role;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoleGateProps {
    /// Children to render if a role is set.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RoleGate)]
pub fn role_gate(props: &RoleGateProps) -> Html {
    let role = use_user_role();
    if !role.is_set() {
        return html! {
            <>
                <NoAccess message={"Select your role to see your rooms."} />
                <RoleSelect />
            </>
        };
    }

    html! {
        <>
            <header class={"role-banner"}>
                <span>{ role.display_name() }</span>
                <RoleSelect />
            </header>
            { for props.children.iter() }
        </>
    }
}
