//! The action pipeline.
//!
//! Executes a generator's actions in declared order against the answer set.
//! Conditional actions whose predicate does not hold are skipped silently.
//! The pipeline halts at the first failing action; files emitted by earlier
//! actions are kept (no rollback), which makes a re-run after fixing the
//! cause safe since every write replaces existing content.

use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::application::error::ApplicationError;
use crate::application::ports::{Filesystem, TemplateRenderer};
use crate::domain::{ActionSpec, AnswerSet, EmittedFile, GeneratorSpec, RenderContext};
use crate::error::PlinthResult;

/// Run every action of `generator` and return the emitted files in emission
/// order.
///
/// With `dry_run` set, paths and content are computed but nothing touches the
/// filesystem.
#[instrument(skip_all, fields(generator = %generator.name, dry_run))]
pub fn run(
    generator: &GeneratorSpec,
    answers: &AnswerSet,
    renderer: &dyn TemplateRenderer,
    filesystem: &dyn Filesystem,
    output_root: &Path,
    dry_run: bool,
) -> PlinthResult<Vec<EmittedFile>> {
    let base_context = RenderContext::from_answers(answers);
    let mut emitted = Vec::new();

    for (index, action) in generator.actions.iter().enumerate() {
        let (add, context) = match action {
            ActionSpec::StaticAdd(add) => (add, base_context.clone()),
            ActionSpec::ConditionalAdd {
                action: add,
                predicate,
                derive,
            } => {
                if !predicate.holds(answers) {
                    debug!(index, path = %add.target_path, "Skipping conditional action");
                    continue;
                }
                let mut context = base_context.clone();
                if let Some(derive) = derive {
                    for (key, value) in derive.derive(answers) {
                        context.insert(key, value);
                    }
                }
                (add, context)
            }
        };

        let relative = context.render(&add.target_path);
        let path = output_root.join(&relative);

        let fail = |reason: String| ApplicationError::ActionFailed {
            generator: generator.name.clone(),
            index,
            path: relative.clone(),
            reason,
        };

        let content = renderer
            .render(&add.template_id, &context)
            .map_err(|e| fail(e.to_string()))?;

        if !dry_run {
            if let Some(parent) = path.parent() {
                filesystem
                    .create_dir_all(parent)
                    .map_err(|e| fail(e.to_string()))?;
            }
            filesystem
                .write_file(&path, &content)
                .map_err(|e| fail(e.to_string()))?;
        }

        trace!(index, path = %path.display(), bytes = content.len(), "Emitted file");
        emitted.push(EmittedFile { path, content });
    }

    debug!(files = emitted.len(), "Pipeline complete");
    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ActionSpec, AnswerValue, DeriveData, GeneratorSpec, Predicate, TemplateId,
    };
    use crate::error::PlinthError;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Renderer backed by a fixed template table.
    struct TableRenderer {
        templates: HashMap<&'static str, &'static str>,
    }

    impl TableRenderer {
        fn new(templates: &[(&'static str, &'static str)]) -> Self {
            Self {
                templates: templates.iter().copied().collect(),
            }
        }
    }

    impl TemplateRenderer for TableRenderer {
        fn render(&self, template: &TemplateId, context: &RenderContext) -> PlinthResult<String> {
            let source = self.templates.get(template.0).ok_or_else(|| {
                ApplicationError::RenderingFailed {
                    template: template.0.to_string(),
                    reason: "unknown template".into(),
                }
            })?;
            Ok(context.render(source))
        }
    }

    /// Filesystem recording writes in memory.
    #[derive(Default)]
    struct RecordingFs {
        writes: Mutex<Vec<(PathBuf, String)>>,
    }

    impl Filesystem for RecordingFs {
        fn create_dir_all(&self, _path: &Path) -> PlinthResult<()> {
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> PlinthResult<()> {
            self.writes
                .lock()
                .unwrap()
                .push((path.to_path_buf(), content.to_string()));
            Ok(())
        }

        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    fn entity_like() -> GeneratorSpec {
        GeneratorSpec::builder()
            .name("entity")
            .description("test")
            .action(ActionSpec::add(
                "src/domain/entities/{{NAME_PASCAL}}.ts",
                TemplateId("entity"),
            ))
            .action(ActionSpec::conditional(
                "src/application/dto/{{NAME_PASCAL}}DTO.ts",
                TemplateId("dto"),
                Predicate::flag_is_true("with_dto"),
            ))
            .build()
            .unwrap()
    }

    fn answers(name: &str, with_dto: bool) -> AnswerSet {
        AnswerSet::new()
            .with("name", AnswerValue::Text(name.into()))
            .with("with_dto", AnswerValue::Flag(with_dto))
    }

    const TEMPLATES: &[(&str, &str)] = &[
        ("entity", "export class {{NAME_PASCAL}} {}"),
        ("dto", "export interface {{NAME_PASCAL}}DTO {}"),
        ("port", "export interface {{NAME_PASCAL}}Port {\n{{METHODS}}\n}"),
    ];

    #[test]
    fn static_action_emits_rendered_file() {
        let renderer = TableRenderer::new(TEMPLATES);
        let fs = RecordingFs::default();

        let emitted = run(
            &entity_like(),
            &answers("user profile", false),
            &renderer,
            &fs,
            Path::new("out"),
            false,
        )
        .unwrap();

        assert_eq!(emitted.len(), 1);
        assert_eq!(
            emitted[0].path,
            PathBuf::from("out/src/domain/entities/UserProfile.ts")
        );
        assert_eq!(emitted[0].content, "export class UserProfile {}");
        assert_eq!(fs.writes.lock().unwrap().len(), 1);
    }

    #[test]
    fn conditional_action_runs_when_flag_is_true() {
        let renderer = TableRenderer::new(TEMPLATES);
        let fs = RecordingFs::default();

        let emitted = run(
            &entity_like(),
            &answers("task", true),
            &renderer,
            &fs,
            Path::new("out"),
            false,
        )
        .unwrap();

        assert_eq!(emitted.len(), 2);
        assert_eq!(
            emitted[1].path,
            PathBuf::from("out/src/application/dto/TaskDTO.ts")
        );
    }

    #[test]
    fn false_predicate_skips_without_error() {
        let renderer = TableRenderer::new(TEMPLATES);
        let fs = RecordingFs::default();

        let emitted = run(
            &entity_like(),
            &answers("task", false),
            &renderer,
            &fs,
            Path::new("out"),
            false,
        )
        .unwrap();

        assert_eq!(emitted.len(), 1);
    }

    #[test]
    fn derived_data_reaches_the_template() {
        let generator = GeneratorSpec::builder()
            .name("adapter")
            .description("test")
            .action(ActionSpec::conditional_with(
                "src/ports/{{NAME_PASCAL}}Port.ts",
                TemplateId("port"),
                Predicate::Always,
                DeriveData::method_signatures("methods"),
            ))
            .build()
            .unwrap();

        let answers = AnswerSet::new()
            .with("name", AnswerValue::Text("user".into()))
            .with(
                "methods",
                AnswerValue::Text("save(u: User): Promise<void>".into()),
            );

        let renderer = TableRenderer::new(TEMPLATES);
        let fs = RecordingFs::default();
        let emitted = run(&generator, &answers, &renderer, &fs, Path::new("."), false).unwrap();

        assert_eq!(
            emitted[0].content,
            "export interface UserPort {\n  save(u: User): Promise<void>\n}"
        );
    }

    #[test]
    fn dry_run_computes_output_without_writing() {
        let renderer = TableRenderer::new(TEMPLATES);
        let fs = RecordingFs::default();

        let emitted = run(
            &entity_like(),
            &answers("task", true),
            &renderer,
            &fs,
            Path::new("out"),
            true,
        )
        .unwrap();

        assert_eq!(emitted.len(), 2);
        assert!(fs.writes.lock().unwrap().is_empty());
    }

    #[test]
    fn pipeline_halts_at_first_failure_and_keeps_earlier_files() {
        let generator = GeneratorSpec::builder()
            .name("broken")
            .description("test")
            .action(ActionSpec::add("ok/{{NAME_PASCAL}}.ts", TemplateId("entity")))
            .action(ActionSpec::add("bad.ts", TemplateId("no-such-template")))
            .action(ActionSpec::add("never/{{NAME_PASCAL}}.ts", TemplateId("entity")))
            .build()
            .unwrap();

        let renderer = TableRenderer::new(TEMPLATES);
        let fs = RecordingFs::default();
        let err = run(
            &generator,
            &answers("task", false),
            &renderer,
            &fs,
            Path::new("out"),
            false,
        )
        .unwrap_err();

        match err {
            PlinthError::Application(ApplicationError::ActionFailed { index, path, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(path, "bad.ts");
            }
            other => panic!("unexpected error: {other}"),
        }

        // The first action's file was written before the halt.
        let writes = fs.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, PathBuf::from("out/ok/Task.ts"));
    }
}
