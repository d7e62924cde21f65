//! End-to-end pipeline tests through the library API: parse a template
//! directory, answer its questions with scripted input, and execute the
//! generation instructions.

use std::fs;

use gantry::generator::generate;
use gantry::session::run_tree;
use gantry::template::{parser::parse_template_dir, DESCRIPTION_FILE};
use gantry::tree::QuestionTreeBuilder;
use gantry::ui::{Output, ScriptedInput};
use tempfile::TempDir;

#[test]
fn full_pipeline_from_description_to_files() {
    let tpl = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    fs::write(
        tpl.path().join(DESCRIPTION_FILE),
        r#"
model: Shop
questions:
  - plain:
      name: entity
      caption: Entity name
  - options:
      name: database
      caption: Database
      option: [MySQL, PostgreSQL]
operations:
  - transform:
      src: entity.tpl
      dst: src/entity.txt
  - copy:
      src: notes.md
      dst: docs/notes.md
"#,
    )
    .unwrap();
    fs::write(
        tpl.path().join("entity.tpl"),
        "entity=${entity}\ndatabase=${database}\n",
    )
    .unwrap();
    fs::write(tpl.path().join("notes.md"), "# notes with ${no_transform}\n").unwrap();

    let template = parse_template_dir(tpl.path()).unwrap();

    let mut builder = QuestionTreeBuilder::default();
    for descriptor in &template.questions {
        builder = builder.push(descriptor.to_question().unwrap());
    }
    let tree = builder.build().unwrap();

    // Reject once ("zero" is not a valid pick), then answer properly.
    let mut input = ScriptedInput::new(["Customer", "zero", "2"]);
    let answers = run_tree(&tree, &mut input, &Output::default()).unwrap();

    let written = generate(&template, &answers, out.path()).unwrap();
    assert_eq!(written.len(), 2);

    let transformed = fs::read_to_string(out.path().join("src/entity.txt")).unwrap();
    assert_eq!(transformed, "entity=Customer\ndatabase=2\n");

    // Copied files keep placeholder-looking text untouched.
    let copied = fs::read_to_string(out.path().join("docs/notes.md")).unwrap();
    assert_eq!(copied, "# notes with ${no_transform}\n");
}

#[test]
fn transform_output_is_source_text_with_answers_substituted() {
    let tpl = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    fs::write(
        tpl.path().join(DESCRIPTION_FILE),
        r#"
model: App
questions:
  - plain:
      name: app_name
      caption: Application name
operations:
  - transform:
      src: config.tpl
      dst: config.yml
"#,
    )
    .unwrap();
    let source = "name: ${app_name}\nported: false\nlist:\n  - ${app_name}\n";
    fs::write(tpl.path().join("config.tpl"), source).unwrap();

    let template = parse_template_dir(tpl.path()).unwrap();
    let tree = QuestionTreeBuilder::default()
        .push(template.questions[0].to_question().unwrap())
        .build()
        .unwrap();

    let mut input = ScriptedInput::new(["billing"]);
    let answers = run_tree(&tree, &mut input, &Output::default()).unwrap();
    generate(&template, &answers, out.path()).unwrap();

    let rendered = fs::read_to_string(out.path().join("config.yml")).unwrap();
    assert_eq!(rendered, source.replace("${app_name}", "billing"));
}

#[test]
fn generation_failure_leaves_earlier_outputs_in_place() {
    let tpl = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    fs::write(
        tpl.path().join(DESCRIPTION_FILE),
        r#"
model: App
operations:
  - copy:
      src: exists.txt
      dst: exists.txt
  - copy:
      src: missing.txt
      dst: missing.txt
"#,
    )
    .unwrap();
    fs::write(tpl.path().join("exists.txt"), "ok").unwrap();

    let template = parse_template_dir(tpl.path()).unwrap();
    let result = generate(&template, &Default::default(), out.path());

    assert!(result.is_err());
    // First instruction ran; no rollback is attempted.
    assert!(out.path().join("exists.txt").exists());
    assert!(!out.path().join("missing.txt").exists());
}
