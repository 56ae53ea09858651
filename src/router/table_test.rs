use leptos_router::{PossibleRouteMatch, StaticSegment};

use super::*;

fn standard() -> RouteTable {
    RouteTable::standard()
}

/// Whether the segment `app.rs` declares for `name` matches all of `path`.
fn router_matches(name: RouteName, path: &str) -> bool {
    StaticSegment(name.segment())
        .test(path)
        .is_some_and(|m| m.remaining().is_empty())
}

// =============================================================
// Standard table
// =============================================================

#[test]
fn standard_table_has_three_routes_in_order() {
    let table = standard();
    let paths: Vec<&str> = table.routes().iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/", "/login", "/crear-post"]);
}

#[test]
fn root_redirects_to_login_without_flags() {
    let table = standard();
    let root = table.find("/").unwrap();
    assert_eq!(root.target, RouteTarget::Redirect("/login".to_owned()));
    assert_eq!(root.meta, RouteMeta::default());
}

#[test]
fn login_requires_guest() {
    let table = standard();
    assert_eq!(table.meta_of(RouteName::Login), Some(RouteMeta::GUEST));
}

#[test]
fn create_post_requires_auth() {
    let table = standard();
    assert_eq!(table.meta_of(RouteName::CreatePost), Some(RouteMeta::AUTH));
}

#[test]
fn route_names_match_router_registration() {
    assert_eq!(RouteName::Login.as_str(), "Login");
    assert_eq!(RouteName::CreatePost.as_str(), "CrearPost");
}

#[test]
fn route_paths_come_from_navigation_constants() {
    assert_eq!(RouteName::Login.path(), LOGIN_PATH);
    assert_eq!(RouteName::CreatePost.path(), CREATE_POST_PATH);
    assert_eq!(RouteName::Login.segment(), "login");
    assert_eq!(RouteName::CreatePost.segment(), "crear-post");
}

#[test]
fn view_routes_are_mounted_at_their_name_path() {
    let table = standard();
    for name in [RouteName::Login, RouteName::CreatePost] {
        let route = table.find(name.path()).unwrap();
        assert_eq!(route.target, RouteTarget::View(name));
    }
}

#[test]
fn standard_table_validates() {
    assert_eq!(standard().validate(&NavConfig::default()), Ok(()));
}

// =============================================================
// Matching
// =============================================================

#[test]
fn find_ignores_query_fragment_and_trailing_slash() {
    let table = standard();
    for path in ["/login?next=/crear-post", "/login#top", "/login/"] {
        let route = table.find(path).unwrap();
        assert_eq!(route.target, RouteTarget::View(RouteName::Login), "{path}");
    }
}

#[test]
fn find_is_case_and_whitespace_sensitive() {
    let table = standard();
    for path in ["/LOGIN", "/Crear-Post", "/login ", " /login"] {
        assert!(table.find(path).is_none(), "{path:?}");
    }
}

#[test]
fn table_and_router_segments_agree() {
    let table = standard();
    let paths = ["/login", "/crear-post", "/LOGIN", "/Crear-Post", "/login ", "/nope", "/login/extra"];
    for name in [RouteName::Login, RouteName::CreatePost] {
        for path in paths {
            let in_table = table
                .find(path)
                .is_some_and(|r| r.target == RouteTarget::View(name));
            assert_eq!(in_table, router_matches(name, path), "{} {path:?}", name.as_str());
        }
    }
}

#[test]
fn empty_path_is_root() {
    let table = standard();
    assert_eq!(table.find("").unwrap().path, "/");
}

#[test]
fn unknown_path_has_no_match() {
    let table = standard();
    assert!(table.find("/admin").is_none());
    assert!(table.find("/login/extra").is_none());
}

#[test]
fn normalize_path_keeps_root() {
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("/?x=1"), "/");
    assert_eq!(normalize_path("crear-post/"), "/crear-post");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_rejects_login_requiring_auth() {
    let config = NavConfig::default();
    let table = RouteTable::new(vec![
        RouteDef::redirect("/", "/login"),
        RouteDef::view("/login", RouteName::Login, RouteMeta::AUTH),
        RouteDef::view("/crear-post", RouteName::CreatePost, RouteMeta::AUTH),
    ]);
    assert!(matches!(
        table.validate(&config),
        Err(NavError::LoopRisk { ref path, .. }) if path == "/login"
    ));
}

#[test]
fn validate_rejects_home_requiring_guest() {
    let config = NavConfig::default();
    let table = RouteTable::new(vec![
        RouteDef::view("/login", RouteName::Login, RouteMeta::GUEST),
        RouteDef::view("/crear-post", RouteName::CreatePost, RouteMeta::GUEST),
    ]);
    assert!(matches!(table.validate(&config), Err(NavError::LoopRisk { .. })));
}

#[test]
fn validate_rejects_view_with_both_flags() {
    let both = RouteMeta { requires_auth: true, requires_guest: true };
    let table = RouteTable::new(vec![
        RouteDef::view("/login", RouteName::Login, RouteMeta::GUEST),
        RouteDef::view("/crear-post", RouteName::CreatePost, both),
    ]);
    assert!(matches!(
        table.validate(&NavConfig::default()),
        Err(NavError::InvalidRoute { .. })
    ));
}

#[test]
fn validate_rejects_view_without_flags() {
    let table = RouteTable::new(vec![
        RouteDef::view("/login", RouteName::Login, RouteMeta::default()),
        RouteDef::view("/crear-post", RouteName::CreatePost, RouteMeta::AUTH),
    ]);
    assert!(matches!(
        table.validate(&NavConfig::default()),
        Err(NavError::InvalidRoute { .. })
    ));
}

#[test]
fn validate_rejects_flagged_redirect() {
    let mut root = RouteDef::redirect("/", "/login");
    root.meta = RouteMeta::AUTH;
    let table = RouteTable::new(vec![
        root,
        RouteDef::view("/login", RouteName::Login, RouteMeta::GUEST),
        RouteDef::view("/crear-post", RouteName::CreatePost, RouteMeta::AUTH),
    ]);
    assert!(matches!(
        table.validate(&NavConfig::default()),
        Err(NavError::InvalidRoute { .. })
    ));
}

#[test]
fn validate_rejects_dangling_redirect() {
    let table = RouteTable::new(vec![
        RouteDef::redirect("/", "/welcome"),
        RouteDef::view("/login", RouteName::Login, RouteMeta::GUEST),
        RouteDef::view("/crear-post", RouteName::CreatePost, RouteMeta::AUTH),
    ]);
    assert_eq!(
        table.validate(&NavConfig::default()),
        Err(NavError::UnknownTarget("/welcome".to_owned()))
    );
}

#[test]
fn validate_rejects_missing_landing_path() {
    let table = RouteTable::new(vec![RouteDef::view("/login", RouteName::Login, RouteMeta::GUEST)]);
    assert_eq!(
        table.validate(&NavConfig::default()),
        Err(NavError::UnknownTarget("/crear-post".to_owned()))
    );
}
