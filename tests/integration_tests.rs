//! Integration tests for end-to-end runs.
//!
//! These tests verify that the complete pipeline works correctly from source
//! text through scanning, parsing and evaluation, both in-process through
//! `Driver` and through the compiled binary.

use std::{fs, io::Cursor, process::Command};

use tinyscript::{driver::Driver, evaluator::environment::Variable};

type TestDriver = Driver<Cursor<Vec<u8>>, Vec<u8>>;

fn driver_with_input(input: &str) -> TestDriver {
    let _ = env_logger::builder().is_test(true).try_init();
    Driver::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output_of(driver: &TestDriver) -> String {
    String::from_utf8(driver.get_evaluator().get_output().clone()).unwrap()
}

fn demo(name: &str) -> String {
    fs::read_to_string(format!("{}/demos/{}", env!("CARGO_MANIFEST_DIR"), name)).unwrap()
}

#[test]
fn test_run_echoes_and_evaluates() {
    let mut driver = driver_with_input("");
    let result = driver.run("int x = 2 + 3 * 4; print x; endl;".to_string(), None);

    assert!(result.is_ok());
    assert_eq!(
        output_of(&driver),
        "int x = 2.0 + 3.0 * 4.0\nx print\n14.0endl\n\n"
    );
}

#[test]
fn test_run_keeps_state_between_statements() {
    let mut driver = driver_with_input("");
    driver
        .run(
            "int i = 0; while (i < 3) { i = i + 1; }; int a[2]; a[1] = i;".to_string(),
            Some("state.lang".to_string()),
        )
        .unwrap();

    let environment = driver.get_evaluator().get_environment();
    assert_eq!(environment.get_variable("i"), Some(&Variable::Scalar(3.0)));
    assert_eq!(
        environment.get_variable("a"),
        Some(&Variable::Array(vec![0.0, 3.0]))
    );
}

#[test]
fn test_run_stops_at_evaluation_error() {
    let mut driver = driver_with_input("");
    let error = driver
        .run("print 1; x = 5; print 2;".to_string(), Some("broken.lang".to_string()))
        .unwrap_err();

    assert_eq!(error.get_error_name(), "UnknownVariable");

    let output = output_of(&driver);
    assert!(output.starts_with("1.0 print\n1.0x = 5.0\n"));
    assert!(output.contains("Error: UnknownVariable"));
    assert!(output.contains("-> broken.lang"));
    assert!(output.ends_with("AST: x = 5.0\n"));
    assert!(!output.contains("2.0 print"));
}

#[test]
fn test_run_stops_at_syntax_error() {
    let mut driver = driver_with_input("");
    let error = driver
        .run("print 1;\nif (1 { print 2; }".to_string(), None)
        .unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");

    let output = output_of(&driver);
    assert!(output.starts_with("1.0 print\n1.0Error: UnexpectedTokenDetailed"));
    assert!(output.contains("2 | if (1 { print 2; }\n"));
    assert!(!output.contains("AST:"));
}

#[test]
fn test_run_runs_statements_before_later_lexer_error() {
    let mut driver = driver_with_input("");
    let error = driver.run("print 7;\nprint @;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(output_of(&driver).starts_with("7.0 print\n7.0Error: UnrecognisedToken"));
}

#[test]
fn test_run_division_by_zero_report() {
    let mut driver = driver_with_input("");
    let error = driver
        .run("print 1 / 0;".to_string(), Some("div.lang".to_string()))
        .unwrap_err();

    assert_eq!(error.get_error_name(), "DivisionByZero");
    assert_eq!(
        output_of(&driver),
        "1.0 / 0.0 print\nError: DivisionByZero\n-> div.lang\n  |\n1 | print 1 / 0;\n  | ----------^\nAST: 1.0 / 0.0 print\n"
    );
}

#[test]
fn test_run_reports_oversized_array() {
    let mut driver = driver_with_input("");
    let error = driver
        .run("print 1; int a[10000000000000000000]; print 2;".to_string(), None)
        .unwrap_err();

    assert_eq!(error.get_error_name(), "ArrayTooLarge");

    let output = output_of(&driver);
    assert!(output.contains("Error: ArrayTooLarge"));
    assert!(output.ends_with("AST: a[10000000000000000000] array\n"));
    assert!(!output.contains("2.0 print"));
}

#[test]
fn test_run_rejects_long_operator_chain() {
    let mut driver = driver_with_input("");
    let source = format!("print 1; x = 1{}; print 2;", " + 1".repeat(9_999));
    let error = driver.run(source, None).unwrap_err();

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(output_of(&driver).starts_with("1.0 print\n1.0Error: NestingTooDeep"));
}

#[test]
fn test_run_reads_input() {
    let mut driver = driver_with_input("6\n");
    driver
        .run("int n = 0; read n; print n * 2;".to_string(), None)
        .unwrap();

    assert!(output_of(&driver).ends_with("n * 2.0 print\n12.0"));
}

#[test]
fn test_demo_squares() {
    let mut driver = driver_with_input("");
    driver
        .run(demo("squares.lang"), Some("squares.lang".to_string()))
        .unwrap();

    assert_eq!(
        output_of(&driver),
        "int i = 1.0\ni <= 5.0 { i * i print ; endl ; i = i + 1.0 } while\n1.0\n4.0\n9.0\n16.0\n25.0\n"
    );
}

#[test]
fn test_demo_arrays() {
    let mut driver = driver_with_input("");
    driver
        .run(demo("arrays.lang"), Some("arrays.lang".to_string()))
        .unwrap();

    let output = output_of(&driver);
    assert!(output.contains("sum: sum print\n88.0endl\n"));
    assert_eq!(
        driver.get_evaluator().get_environment().get_variable("sum"),
        Some(&Variable::Scalar(88.0))
    );
}

#[test]
fn test_demo_echo() {
    let mut driver = driver_with_input("3\n8\n");
    driver
        .run(demo("echo.lang"), Some("echo.lang".to_string()))
        .unwrap();

    assert_eq!(
        output_of(&driver),
        "int a = 0.0\nint b = 0.0\na input\nb input\nint max = a\nb > a max = b if\nmax print\n8.0endl\n\n"
    );
}

#[test]
fn test_demo_out_of_bounds() {
    let mut driver = driver_with_input("");
    let error = driver
        .run(demo("out_of_bounds.lang"), Some("out_of_bounds.lang".to_string()))
        .unwrap_err();

    assert_eq!(error.get_error_name(), "IndexOutOfBounds");

    let output = output_of(&driver);
    assert!(output.contains("Index 3 is outside of `values`, which has length 3"));
    assert!(output.contains("4 | print values[3];\n"));
    assert!(output.ends_with("AST: values[3] print\n"));
    assert!(!output.contains("99.0"));
}

#[test]
fn test_binary_runs_script() {
    let output = Command::new(env!("CARGO_BIN_EXE_tinyscript"))
        .arg(format!("{}/demos/squares.lang", env!("CARGO_MANIFEST_DIR")))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).ends_with("1.0\n4.0\n9.0\n16.0\n25.0\n"));
}

#[test]
fn test_binary_reports_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_tinyscript"))
        .arg(format!("{}/demos/out_of_bounds.lang", env!("CARGO_MANIFEST_DIR")))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Error: IndexOutOfBounds"));
}

#[test]
fn test_binary_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_tinyscript"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: tinyscript <filename>"));
}

#[test]
fn test_binary_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_tinyscript"))
        .arg("does/not/exist.lang")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
