use integration_tests::{batch_from_toml, solve_to_json};
use rootlab_engine::{Method, Request};
use serde_json::{Value, json};

#[test]
fn newton_report_fields() {
    let value = solve_to_json(&Request::newton("x^2 - 4", 3.0)).unwrap();

    for key in [
        "method",
        "root",
        "function_value",
        "iterations",
        "converged",
        "execution_time",
        "total_iterations",
        "derivative_expression",
        "initial_point",
        "convergence_type",
        "final_relative_error",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["method"], "Newton-Raphson");
    assert_eq!(value["root"], json!(2.0));
    assert_eq!(value["converged"], Value::Bool(true));
    assert_eq!(value["derivative_expression"], "2*x");

    let first = &value["iterations"][0];
    assert_eq!(first["iteration"], json!(1));
    assert_eq!(first["xi"], json!(3.0));
    assert_eq!(first["xi_plus_1"], json!(2.166_666_67));
    assert_eq!(first["relative_error_percent"], json!(38.461_538_46));
}

#[test]
fn false_position_marks_first_errors_not_applicable() {
    let value = solve_to_json(&Request::false_position("x^2 - 4", 0.0, 3.0)).unwrap();

    assert_eq!(value["method"], "False Position (Regula Falsi)");
    assert_eq!(value["initial_bracket"], json!([0.0, 3.0]));
    assert!(value.get("derivative_expression").is_none());

    let first = &value["iterations"][0];
    assert_eq!(first["absolute_error"], "N/A");
    assert_eq!(first["relative_error"], "N/A");

    let second = &value["iterations"][1];
    assert!(second["absolute_error"].is_number());
    assert!(second["relative_error"].is_number());
}

#[test]
fn zero_estimate_has_no_relative_error() {
    // Newton on f(x) = x lands exactly on 0 in one step.
    let value = solve_to_json(&Request::newton("x", 5.0).with_max_iterations(1)).unwrap();

    assert_eq!(value["converged"], Value::Bool(false));
    assert_eq!(value["convergence_type"], "did not converge");
    assert_eq!(value["iterations"][0]["relative_error_percent"], "N/A");
    assert_eq!(value["final_relative_error"], "N/A");
}

#[test]
fn reports_never_contain_null() {
    fn assert_no_null(value: &Value, path: &str) {
        match value {
            Value::Null => panic!("null at {path}"),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    assert_no_null(item, &format!("{path}[{i}]"));
                }
            }
            Value::Object(map) => {
                for (key, item) in map {
                    assert_no_null(item, &format!("{path}.{key}"));
                }
            }
            _ => {}
        }
    }

    for request in [
        Request::newton("x", 5.0).with_max_iterations(3),
        Request::newton("x^2", 1.0).with_max_iterations(5),
        Request::false_position("x^10 - 1", 0.0, 1.3),
    ] {
        let value = solve_to_json(&request).unwrap();
        assert_no_null(&value, "$");
    }
}

#[test]
fn requests_load_from_toml() {
    let batch = batch_from_toml(
        r#"
        [[request]]
        method = "newton"
        expression = "x^3 - 2*x - 5"
        x0 = 2

        [[request]]
        method = "false_position"
        expression = "x^3 - 2*x - 5"
        a = 2.0
        b = 3.0
        tolerance = 1e-9
        max_iterations = 40
        "#,
    )
    .unwrap();

    assert_eq!(batch.request.len(), 2);
    assert_eq!(batch.request[0].method, Method::Newton);
    assert_eq!(batch.request[1].method, Method::FalsePosition);
    assert_eq!(batch.request[1].max_iterations, 40);

    let roots: Vec<f64> = batch
        .request
        .iter()
        .map(|request| solve_to_json(request).unwrap()["root"].as_f64().unwrap())
        .collect();
    for root in roots {
        assert!((root - 2.094_551_48).abs() < 1e-7, "{root}");
    }
}

#[test]
fn requests_load_from_json() {
    let request: Request = serde_json::from_value(json!({
        "method": "false-position",
        "expression": "cos(x) - x",
        "a": 0,
        "b": 1,
    }))
    .unwrap();

    let value = solve_to_json(&request).unwrap();
    assert_eq!(value["converged"], Value::Bool(true));
    assert_eq!(value["total_iterations"], json!(value["iterations"].as_array().unwrap().len()));
}
