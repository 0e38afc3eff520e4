//! Client-side route table and the access gate in front of each page.
//!
//! The gate only decides what to render from the cached session. It is a
//! navigation aid: the backend re-checks the token on every call.

use crate::model::user::Role;
use crate::store::session::Session;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const CATALOG: &str = "/catalogo";
pub const PRODUCT_PREFIX: &str = "/produto/";
pub const CART: &str = "/carrinho";
pub const ORDERS: &str = "/pedidos";
pub const FAVORITES: &str = "/favoritos";
pub const PROFILE: &str = "/perfil";
pub const ADMIN: &str = "/admin";
pub const ADMIN_PRODUCTS: &str = "/admin/produtos";
pub const ADMIN_ORDERS: &str = "/admin/pedidos";
pub const ADMIN_USERS: &str = "/admin/usuarios";
pub const ADMIN_PROMOS: &str = "/admin/promos";
pub const ADMIN_MESSAGES: &str = "/admin/mensagens";

pub fn product(id: &str) -> String {
    format!("{PRODUCT_PREFIX}{id}")
}

/// Who may open a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Member,
    Admin,
}

/// Result of running the gate for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Render,
    Redirect(&'static str),
}

pub fn access_for(path: &str) -> Access {
    if path == ADMIN || path.starts_with("/admin/") {
        Access::Admin
    } else if path == HOME || path == LOGIN {
        Access::Public
    } else {
        Access::Member
    }
}

/// No token sends the visitor to login; a non-admin on an admin page goes
/// to the catalog.
pub fn guard(access: Access, session: Option<&Session>) -> Gate {
    match (access, session) {
        (Access::Public, _) => Gate::Render,
        (_, None) => Gate::Redirect(LOGIN),
        (Access::Admin, Some(session)) if !session.is_admin() => Gate::Redirect(CATALOG),
        _ => Gate::Render,
    }
}

/// Where a fresh login lands.
pub fn landing_for(role: Role) -> &'static str {
    if role.is_admin() { ADMIN } else { CATALOG }
}

/// Pages that draw their own top bar instead of the shared navbar.
const NAVBARLESS: [&str; 6] = [LOGIN, CATALOG, ORDERS, FAVORITES, CART, PROFILE];

pub fn shows_navbar(path: &str) -> bool {
    !NAVBARLESS.contains(&path)
}

pub fn shows_sidebar(path: &str, logged_in: bool) -> bool {
    logged_in && !path.starts_with(PRODUCT_PREFIX) && path != LOGIN && path != HOME
}

pub fn shows_tab_bar(path: &str, logged_in: bool) -> bool {
    logged_in && path != LOGIN
}

/// Value of `key` in a `?a=1&b=2` query string. Values are compared
/// verbatim, the few flags the client reads are never percent-encoded.
pub fn query_param<'q>(query: &'q str, key: &str) -> Option<&'q str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::User;

    #[test]
    fn reads_query_flags() {
        assert_eq!(query_param("?trash=true", "trash"), Some("true"));
        assert_eq!(query_param("a=1&reason=inactive", "reason"), Some("inactive"));
        assert_eq!(query_param("?flag", "flag"), Some(""));
        assert_eq!(query_param("", "trash"), None);
    }

    fn session(role: Role) -> Session {
        Session {
            token: "t".into(),
            user: Some(User { role, ..User::default() }),
        }
    }

    #[test]
    fn admin_page_without_token_goes_to_login() {
        assert_eq!(guard(access_for(ADMIN_ORDERS), None), Gate::Redirect(LOGIN));
    }

    #[test]
    fn admin_page_for_partner_goes_to_catalog() {
        let partner = session(Role::Partner);
        assert_eq!(guard(access_for(ADMIN), Some(&partner)), Gate::Redirect(CATALOG));
        assert_eq!(guard(access_for(ADMIN_PROMOS), Some(&partner)), Gate::Redirect(CATALOG));
    }

    #[test]
    fn admin_page_with_missing_cached_user_goes_to_catalog() {
        let unknown = Session { token: "t".into(), user: None };
        assert_eq!(guard(Access::Admin, Some(&unknown)), Gate::Redirect(CATALOG));
        assert_eq!(guard(Access::Member, Some(&unknown)), Gate::Render);
    }

    #[test]
    fn member_and_public_pages() {
        assert_eq!(guard(access_for(CART), None), Gate::Redirect(LOGIN));
        assert_eq!(guard(access_for(&product("p1")), Some(&session(Role::Partner))), Gate::Render);
        assert_eq!(guard(access_for(HOME), None), Gate::Render);
        assert_eq!(guard(access_for(LOGIN), None), Gate::Render);
        assert_eq!(guard(access_for(ADMIN_USERS), Some(&session(Role::Admin))), Gate::Render);
    }

    #[test]
    fn chrome_visibility() {
        assert!(!shows_navbar(CATALOG));
        assert!(shows_navbar(ADMIN));
        assert!(shows_navbar(&product("x")));
        assert!(!shows_sidebar(HOME, true));
        assert!(!shows_sidebar(&product("x"), true));
        assert!(shows_sidebar(ADMIN, true));
        assert!(!shows_sidebar(ADMIN, false));
        assert!(!shows_tab_bar(LOGIN, true));
        assert!(shows_tab_bar(CART, true));
    }

    #[test]
    fn landing_by_role() {
        assert_eq!(landing_for(Role::Admin), ADMIN);
        assert_eq!(landing_for(Role::Partner), CATALOG);
    }
}
