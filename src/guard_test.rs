use super::*;

fn request(target: &str) -> RouteRequest {
    RouteRequest {
        target_path: target.to_owned(),
        origin_path: "/".to_owned(),
    }
}

#[test]
fn login_path_allowed_without_token() {
    let public = PublicRoutes::default();
    assert_eq!(evaluate(&public, &request("/login"), None), Decision::Allow);
}

#[test]
fn login_path_allowed_with_token() {
    let public = PublicRoutes::default();
    assert_eq!(
        evaluate(&public, &request("/login"), Some("abc123")),
        Decision::Allow
    );
}

#[test]
fn protected_path_redirects_without_token() {
    let public = PublicRoutes::default();
    assert_eq!(
        evaluate(&public, &request("/dashboard"), None),
        Decision::Redirect("/login".to_owned())
    );
}

#[test]
fn protected_path_allowed_with_token() {
    let public = PublicRoutes::default();
    assert_eq!(
        evaluate(&public, &request("/dashboard"), Some("abc123")),
        Decision::Allow
    );
}

#[test]
fn empty_token_counts_as_absent() {
    let public = PublicRoutes::default();
    assert_eq!(
        evaluate(&public, &request("/settings/profile"), Some("")),
        Decision::Redirect("/login".to_owned())
    );
}

#[test]
fn uninitialized_store_fails_closed() {
    // An unreadable store surfaces as `None`, which must behave exactly
    // like an absent token — never like a present one.
    let public = PublicRoutes::default();
    let absent = evaluate(&public, &request("/dashboard"), None);
    assert_eq!(absent, Decision::Redirect("/login".to_owned()));
}

#[test]
fn evaluation_is_idempotent() {
    let public = PublicRoutes::default();
    let req = request("/dashboard");
    let first = evaluate(&public, &req, Some("abc123"));
    let second = evaluate(&public, &req, Some("abc123"));
    assert_eq!(first, second);

    let first = evaluate(&public, &req, None);
    let second = evaluate(&public, &req, None);
    assert_eq!(first, second);
}

#[test]
fn token_contents_are_not_inspected() {
    // Expired, malformed, or garbage tokens all pass this layer; rejection
    // belongs to the API client.
    let public = PublicRoutes::default();
    assert_eq!(
        evaluate(&public, &request("/dashboard"), Some("not-a-jwt ~ %%")),
        Decision::Allow
    );
}

#[test]
fn extra_public_paths_are_exempt() {
    let public = PublicRoutes::new(["/register", "/forgot-password"]);
    assert_eq!(evaluate(&public, &request("/register"), None), Decision::Allow);
    assert_eq!(
        evaluate(&public, &request("/forgot-password"), None),
        Decision::Allow
    );
    // Unlisted paths stay protected.
    assert_eq!(
        evaluate(&public, &request("/dashboard"), None),
        Decision::Redirect("/login".to_owned())
    );
}

#[test]
fn login_path_is_always_a_member() {
    let public = PublicRoutes::new(["/register"]);
    assert!(public.contains("/login"));

    // Listing it again does not duplicate the entry.
    let public = PublicRoutes::new(["/login"]);
    assert!(public.contains("/login"));
}
