//! Onboarding role selection.
use crate::hooks::{use_role_context, use_user_role};
use carewatch_core::UserRole;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[function_component(RoleSelect)]
pub fn role_select() -> Html {
    let context = use_role_context();
    let role = use_user_role();
    let error = use_state(|| None::<String>);

    let onchange = {
        let error = error.clone();

        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            match context.set_role_str(&value) {
                Ok(()) => error.set(None),
                Err(err) => {
                    tracing::debug!(?err, "role rejected");
                    error.set(Some(format!("Please choose a valid role ({err}).")));
                }
            }
        })
    };

    html! {
        <div class={"role-select"}>
            <label for={"role"}>{ "I am a" }</label>
            <select id={"role"} {onchange}>
                <option value={""} selected={!role.is_set()} disabled=true>
                    { "Select a role" }
                </option>
                { for UserRole::SELECTABLE.iter().map(|option| html! {
                    <option value={option.as_str()} selected={*option == role}>
                        { option.display_name() }
                    </option>
                }) }
            </select>
            if let Some(error) = error.as_ref() {
                <p class={"error"}>{ error.clone() }</p>
            }
        </div>
    }
}
