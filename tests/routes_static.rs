use route_template_rs::{params, route};

#[test]
fn route_when_static_template_called_without_params_then_returns_template() {
    for template in ["/", "/users", "/posts/create", "/api/v1"] {
        let node = route(template);

        assert!(!node.is_parametric());
        assert_eq!(node.path().expect("static route should render"), template);
        assert_eq!(node.raw(), template);
    }
}

#[test]
fn route_when_root_called_without_params_then_returns_slash() {
    assert_eq!(route("/").path().expect("root should render"), "/");
}

#[test]
fn route_when_static_template_given_params_then_ignores_them() {
    let node = route("/posts/create");
    let rendered = node
        .render(&params! { "id" => 1 })
        .expect("static route should tolerate params");

    assert_eq!(rendered, "/posts/create");
}

#[test]
fn route_when_static_template_called_with_none_then_returns_template() {
    let node = route("/about");
    assert_eq!(node.call(None).expect("static call should succeed"), "/about");
}

#[test]
fn route_when_static_template_declared_then_has_no_param_names() {
    assert!(route("/users").param_names().is_empty());
}
