//! The `generate` command: collect answers, then run the template's
//! instructions.

use std::path::Path;

use anyhow::anyhow;
use tracing::debug;

use crate::answers::Answers;
use crate::cli::args::GenerateArgs;
use crate::error::Result;
use crate::generator;
use crate::session::{answer_question, run_tree_into, Outcome};
use crate::template::{load_template, DirLocator, Template};
use crate::tree::{QuestionTree, QuestionTreeBuilder};
use crate::ui::{InputSource, Output, StdinInput};

pub fn run(args: &GenerateArgs, project_root: &Path, output: &Output) -> Result<()> {
    let locator = DirLocator::discover(project_root);
    let template = load_template(&locator, &args.template)?;
    let mut input = StdinInput;
    run_with_input(args, &template, &mut input, output)
}

/// Command body with the input source injected, for testability.
pub fn run_with_input(
    args: &GenerateArgs,
    template: &Template,
    input: &mut dyn InputSource,
    output: &Output,
) -> Result<()> {
    output.header(&format!(
        "Generating {} from template '{}'",
        template.model, args.template
    ));

    let mut answers = Answers::new();
    if !template.questions.is_empty() {
        let tree = build_tree(template)?;
        seed_answers(&tree, &args.answers, &mut answers)?;
        run_tree_into(&tree, input, output, &mut answers)?;
    }

    let dest_root = args
        .dest
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let written = generator::generate(template, &answers, &dest_root)?;

    for file in &written {
        let verb = if file.transformed { "transform" } else { "copy" };
        output.detail(&format!("{verb} -> {}", file.dst.display()));
    }
    output.success(&format!(
        "Generated {} file(s) into {}",
        written.len(),
        dest_root.display()
    ));
    Ok(())
}

/// Convert the template's question descriptors into a question tree.
fn build_tree(template: &Template) -> Result<QuestionTree> {
    let mut builder = QuestionTreeBuilder::default();
    for descriptor in &template.questions {
        builder = builder.push(descriptor.to_question()?);
    }
    builder.build()
}

/// Commit `--answer NAME=VALUE` pairs through the normal read/validate path.
///
/// A malformed pair, an unknown name, or a rejected value is a command
/// failure: there is no prompt to retry against.
fn seed_answers(tree: &QuestionTree, pairs: &[String], answers: &mut Answers) -> Result<()> {
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid --answer '{pair}' (expected NAME=VALUE)"))?;
        let question = tree
            .iter()
            .find(|q| q.name() == name)
            .ok_or_else(|| anyhow!("Unknown question '{name}' in --answer"))?;
        match answer_question(question, value, answers) {
            Outcome::Committed(answer) => {
                debug!(question = name, "seeded answer");
                answers.commit(name, answer)?;
            }
            Outcome::Rejected(message) => {
                return Err(anyhow!("Invalid --answer for '{name}': {message}").into());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GantryError;
    use crate::template::{Instruction, TemplateQuestion};
    use crate::ui::ScriptedInput;
    use std::fs;
    use tempfile::TempDir;

    fn sample_template(root: &Path) -> Template {
        Template {
            root: root.to_path_buf(),
            model: "Shop".into(),
            questions: vec![
                TemplateQuestion::Plain {
                    name: "entity".into(),
                    caption: "Entity name".into(),
                },
                TemplateQuestion::Options {
                    name: "database".into(),
                    caption: "Database".into(),
                    options: vec!["MySQL".into(), "PostgreSQL".into()],
                },
            ],
            instructions: vec![Instruction {
                src: "entity.tpl".into(),
                dst: "entity.txt".into(),
                transform: true,
            }],
        }
    }

    #[test]
    fn generate_runs_questions_then_instructions() {
        let tpl = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(tpl.path().join("entity.tpl"), "${entity} on ${database}").unwrap();

        let template = sample_template(tpl.path());
        let args = GenerateArgs {
            template: "shop".into(),
            dest: Some(out.path().to_path_buf()),
            answers: vec![],
        };
        let mut input = ScriptedInput::new(["Customer", "2"]);

        run_with_input(&args, &template, &mut input, &Output::default()).unwrap();
        let rendered = fs::read_to_string(out.path().join("entity.txt")).unwrap();
        assert_eq!(rendered, "Customer on 2");
    }

    #[test]
    fn seeded_answers_skip_their_prompts() {
        let tpl = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(tpl.path().join("entity.tpl"), "${entity}/${database}").unwrap();

        let template = sample_template(tpl.path());
        let args = GenerateArgs {
            template: "shop".into(),
            dest: Some(out.path().to_path_buf()),
            answers: vec!["database=1".into()],
        };
        // Only the entity prompt is left to answer.
        let mut input = ScriptedInput::new(["Order"]);

        run_with_input(&args, &template, &mut input, &Output::default()).unwrap();
        let rendered = fs::read_to_string(out.path().join("entity.txt")).unwrap();
        assert_eq!(rendered, "Order/1");
    }

    #[test]
    fn rejected_seed_is_a_command_failure() {
        let tpl = TempDir::new().unwrap();
        let template = sample_template(tpl.path());
        let args = GenerateArgs {
            template: "shop".into(),
            dest: None,
            answers: vec!["database=9".into()],
        };
        let mut input = ScriptedInput::new(Vec::<String>::new());

        let result = run_with_input(&args, &template, &mut input, &Output::default());
        assert!(matches!(result, Err(GantryError::Other(_))));
    }

    #[test]
    fn malformed_seed_is_a_command_failure() {
        let tpl = TempDir::new().unwrap();
        let template = sample_template(tpl.path());
        let args = GenerateArgs {
            template: "shop".into(),
            dest: None,
            answers: vec!["no-equals-sign".into()],
        };
        let mut input = ScriptedInput::new(Vec::<String>::new());
        assert!(run_with_input(&args, &template, &mut input, &Output::default()).is_err());
    }

    #[test]
    fn template_without_questions_generates_directly() {
        let tpl = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(tpl.path().join("static.txt"), "as-is").unwrap();

        let template = Template {
            root: tpl.path().to_path_buf(),
            model: "Static".into(),
            questions: vec![],
            instructions: vec![Instruction {
                src: "static.txt".into(),
                dst: "static.txt".into(),
                transform: false,
            }],
        };
        let args = GenerateArgs {
            template: "static".into(),
            dest: Some(out.path().to_path_buf()),
            answers: vec![],
        };
        let mut input = ScriptedInput::new(Vec::<String>::new());

        run_with_input(&args, &template, &mut input, &Output::default()).unwrap();
        assert_eq!(
            fs::read_to_string(out.path().join("static.txt")).unwrap(),
            "as-is"
        );
    }
}
