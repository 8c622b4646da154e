//! User role hooks.
use crate::app::UserRoleHandle;
use carewatch_core::UserRole;
use yew::prelude::*;

/// Gets the role context to change the role.
#[hook]
pub fn use_role_context() -> UserRoleHandle {
    use_context::<UserRoleHandle>().expect("`UserRoleHandle` context not found")
}

/// Gets the current role.
#[hook]
pub fn use_user_role() -> UserRole {
    let context = use_role_context();
    let role = use_state(|| context.role());

    {
        let role = role.clone();
        use_effect_with(context, move |context| {
            role.set(context.role());

            let subscription = context.subscribe(move |next| role.set(*next));
            move || drop(subscription)
        });
    }

    *role
}
