use crate::server::{data::template::TemplateRepository, error::template::TemplateError};

/// Writes `contents` to a file unique to this test and returns its path.
fn write_templates(test_name: &str, contents: &str) -> String {
    let path = std::env::temp_dir().join(format!(
        "command-relay-{}-{}.json",
        test_name,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

/// Tests loading templates in file order.
///
/// Expected: Ok with both templates
#[tokio::test]
async fn loads_all_templates() -> Result<(), TemplateError> {
    let path = write_templates(
        "loads_all",
        r#"[{"name":"greet","command":"say hello %steamName%"},{"name":"kick","command":"kick %target%"}]"#,
    );

    let templates = TemplateRepository::new(&path).get_all().await?;

    let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["greet", "kick"]);
    assert_eq!(templates[0].command, "say hello %steamName%");

    Ok(())
}

/// Tests finding templates by name, including duplicates and unknown names.
///
/// Expected: first match for a repeated name, None for an unknown one
#[tokio::test]
async fn finds_first_template_by_name() -> Result<(), TemplateError> {
    let path = write_templates(
        "find_by_name",
        r#"[{"name":"greet","command":"first"},{"name":"greet","command":"second"}]"#,
    );
    let repo = TemplateRepository::new(&path);

    let found = repo.find_by_name("greet").await?;

    assert_eq!(found.map(|t| t.command), Some("first".to_string()));
    assert!(repo.find_by_name("Greet").await?.is_none());

    Ok(())
}

/// Tests reading a file that does not exist.
///
/// Expected: Err(TemplateError::Read)
#[tokio::test]
async fn missing_file_is_read_error() {
    let path = std::env::temp_dir().join("command-relay-does-not-exist.json");

    let result = TemplateRepository::new(&path.to_string_lossy())
        .get_all()
        .await;

    assert!(matches!(result, Err(TemplateError::Read { .. })));
}

/// Tests reading a file that is not a template list.
///
/// Expected: Err(TemplateError::Parse)
#[tokio::test]
async fn malformed_file_is_parse_error() {
    let path = write_templates("malformed", r#"{"name":"greet"}"#);

    let result = TemplateRepository::new(&path).get_all().await;

    assert!(matches!(result, Err(TemplateError::Parse { .. })));
}
