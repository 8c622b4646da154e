//! User role context.
use crate::storage::BrowserStorage;
use carewatch_core::RoleContext;
use std::ops::Deref;
use std::rc::Rc;

/// Shared [`RoleContext`] provided to the view tree.
#[derive(Clone)]
pub struct UserRoleHandle(Rc<RoleContext<BrowserStorage>>);

impl UserRoleHandle {
    pub fn new(context: RoleContext<BrowserStorage>) -> Self {
        Self(Rc::new(context))
    }
}

impl Deref for UserRoleHandle {
    type Target = RoleContext<BrowserStorage>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for UserRoleHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
