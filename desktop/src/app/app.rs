//! Main application.
use super::{AppStateHandle, UserRoleHandle};
use crate::components::RoleGate;
use crate::constants::{CATALOG_JSON, DARK_THEME_CLASS};
use crate::hooks::use_app_state;
use crate::pages::Dashboard;
use crate::storage::BrowserStorage;
use carewatch_core::resource::ResourceCatalog;
use carewatch_core::state::Theme;
use carewatch_core::{AppStateStore, RoleContext};
use yew::prelude::*;

// *********************
// *** App Component ***
// *********************

/// Root component.
/// Initializes the state store and role context from local storage
/// and provides them to the view tree.
#[function_component(App)]
pub fn app() -> Html {
    let app_state = use_state(|| AppStateHandle::new(AppStateStore::new(BrowserStorage::local())));
    let user_role = use_state(|| UserRoleHandle::new(RoleContext::new(BrowserStorage::local())));
    let catalog = use_memo((), |_| load_catalog());

    html! {
        <ContextProvider<AppStateHandle> context={(*app_state).clone()}>
        <ContextProvider<UserRoleHandle> context={(*user_role).clone()}>
            <Themed>
                <RoleGate>
                    <Dashboard {catalog} />
                </RoleGate>
            </Themed>
        </ContextProvider<UserRoleHandle>>
        </ContextProvider<AppStateHandle>>
    }
}

fn load_catalog() -> ResourceCatalog {
    match ResourceCatalog::from_json(CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(?err, "could not load resource catalog");
            ResourceCatalog::new()
        }
    }
}

#[derive(Properties, PartialEq)]
struct ThemedProps {
    #[prop_or_default]
    pub children: Children,
}

/// Applies the selected theme.
#[function_component(Themed)]
fn themed(props: &ThemedProps) -> Html {
    let state = use_app_state();
    let class = match state.theme {
        Theme::Light => None,
        Theme::Dark => Some(DARK_THEME_CLASS),
    };

    html! {
        <div id={"content"} class={classes!(class)}>
            { for props.children.iter() }
        </div>
    }
}
